use crate::error::StoreError;
use crate::record::UrlRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// A concurrent, exact-match mapping from identifier to URL record.
///
/// Stores know nothing about URL semantics or identifier generation
/// policy; they only guarantee per-identifier atomicity. Absence is
/// reported through return values, never as an error.
#[async_trait]
pub trait UrlStore: Send + Sync + 'static {
    /// Inserts the record iff no record with the same identifier exists.
    ///
    /// Returns `false` without mutating the store when the identifier is
    /// already present. Atomic with respect to concurrent `add`, `get`,
    /// and `remove` calls on the same identifier.
    async fn add(&self, record: Arc<UrlRecord>) -> Result<bool, StoreError>;

    /// Retrieves a shared handle to the stored record, or `None` on miss.
    ///
    /// Callers may bump the record's atomic metrics through the handle;
    /// a miss has no side effects.
    async fn get(&self, id: &str) -> Result<Option<Arc<UrlRecord>>, StoreError>;

    /// Removes the record if present; reports whether a deletion occurred.
    ///
    /// Idempotent: a second call for the same identifier returns `false`.
    async fn remove(&self, id: &str) -> Result<bool, StoreError>;
}
