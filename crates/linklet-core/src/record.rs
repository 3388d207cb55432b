use jiff::Timestamp;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

/// Usage metrics attached to a [`UrlRecord`].
///
/// The retrieval count is an atomic so concurrent lookups of the same
/// record never lose increments. The store never touches this value;
/// bumping it is the manager's exclusive responsibility.
#[derive(Debug, Default)]
pub struct UrlMetrics {
    retrieval_count: AtomicU64,
}

impl UrlMetrics {
    /// Returns the number of successful retrievals observed so far.
    pub fn retrieval_count(&self) -> u64 {
        self.retrieval_count.load(Ordering::SeqCst)
    }

    /// Counts one retrieval and returns the post-increment count.
    pub fn record_retrieval(&self) -> u64 {
        self.retrieval_count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// The persisted association of a short identifier to a target URL.
///
/// The identifier and target are immutable after construction; records are
/// shared as `Arc<UrlRecord>` between the store and its callers, with the
/// mutable metrics isolated behind [`UrlMetrics`].
#[derive(Debug)]
pub struct UrlRecord {
    identifier: String,
    target_url: String,
    created_at: Timestamp,
    metrics: UrlMetrics,
}

impl UrlRecord {
    /// Creates a fresh record with a zeroed retrieval count.
    ///
    /// Validation of the identifier and target url happens in the manager
    /// before a record is built; the record itself is just data.
    pub fn new(identifier: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            target_url: target_url.into(),
            created_at: Timestamp::now(),
            metrics: UrlMetrics::default(),
        }
    }

    /// The short identifier addressing this record.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The long url this record points to.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// When this record was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn metrics(&self) -> &UrlMetrics {
        &self.metrics
    }
}

/// Identity is the identifier: two records with the same identifier are
/// the same logical entity.
impl PartialEq for UrlRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for UrlRecord {}

impl Display for UrlRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Identifier: {}, TargetUrl: {}, RetrievalCount: {}",
            self.identifier,
            self.target_url,
            self.metrics.retrieval_count()
        )
    }
}
