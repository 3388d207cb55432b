use crate::error::Result;
use crate::record::UrlRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// The capability surface a short-URL manager exposes to front ends.
///
/// Exactly four operations; every one is total and returns an expected
/// outcome rather than hanging or panicking. Expected failures carry a
/// [`ResultCode`](crate::ResultCode) via
/// [`ManagerError::result_code`](crate::ManagerError::result_code).
#[async_trait]
pub trait UrlManager: Send + Sync + 'static {
    /// Creates a new short url for `target_url`.
    ///
    /// When `desired_id` is supplied, exactly that identifier is attempted
    /// once. Otherwise the manager allocates a randomized identifier,
    /// retrying on collision up to its configured attempt budget.
    async fn create(&self, target_url: &str, desired_id: Option<&str>) -> Result<Arc<UrlRecord>>;

    /// Looks up a short url and counts the retrieval.
    ///
    /// On a hit the returned record reflects the post-increment count.
    async fn get(&self, id: &str) -> Result<Arc<UrlRecord>>;

    /// Re-targets an existing short url.
    ///
    /// Not supported by this version; fails identically on every call
    /// with [`ManagerError::Unsupported`](crate::ManagerError::Unsupported).
    async fn update(&self, id: &str, target_url: &str) -> Result<Arc<UrlRecord>>;

    /// Deletes a short url. Removing a missing identifier is `NotFound`.
    async fn delete(&self, id: &str) -> Result<()>;
}
