use crate::config::{ConfigError, ManagerConfig};
use crate::generator::Generator;
use async_trait::async_trait;
use linklet_core::error::Result;
use linklet_core::{ManagerError, UrlManager, UrlRecord, UrlStore};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// A concrete implementation of the `UrlManager` contract.
///
/// The manager owns all business semantics: target-url validation,
/// identifier validation, and the randomized-allocation policy. The store
/// only guarantees per-identifier atomicity; the manager turns a losing
/// add into `AlreadyInUse` or a retry, depending on how the identifier
/// was chosen. Stateless across calls apart from its held store, generator,
/// and configuration.
#[derive(Debug, Clone)]
pub struct ShortUrlManager<S, G> {
    store: Arc<S>,
    generator: G,
    config: ManagerConfig,
}

impl<S: UrlStore, G: Generator> ShortUrlManager<S, G> {
    /// Creates a new manager, validating the configuration up front.
    ///
    /// Invalid configuration is a construction-time fault: the manager
    /// never starts with a bad length range or a zero attempt budget.
    pub fn new(store: S, generator: G, config: ManagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: Arc::new(store),
            generator,
            config,
        })
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Validates that the target is a syntactically valid absolute URI.
    fn validate_target_url(&self, target_url: &str) -> Result<()> {
        if target_url.is_empty() {
            return Err(ManagerError::InvalidTargetUrl(
                "target url must not be empty".to_string(),
            ));
        }

        // `Url::parse` rejects relative references outright, which is
        // exactly the absolute-URI requirement here.
        Url::parse(target_url)
            .map_err(|e| ManagerError::InvalidTargetUrl(format!("{target_url}: {e}")))?;

        Ok(())
    }

    /// Attempts a single add with the caller's hand-picked identifier.
    async fn create_with_desired_id(
        &self,
        target_url: &str,
        desired_id: &str,
    ) -> Result<Arc<UrlRecord>> {
        let length = desired_id.chars().count();
        if length < self.config.min_id_length || length > self.config.max_id_length {
            return Err(ManagerError::InvalidUrlIdentifier(format!(
                "identifier length {} is outside [{}, {}]",
                length, self.config.min_id_length, self.config.max_id_length
            )));
        }

        let record = Arc::new(UrlRecord::new(desired_id, target_url));

        if self.store.add(Arc::clone(&record)).await? {
            return Ok(record);
        }

        Err(ManagerError::AlreadyInUse(desired_id.to_string()))
    }

    /// Attempts randomized allocation up to the configured attempt budget.
    ///
    /// Each try picks a fresh length uniformly from the configured range
    /// and a fresh identifier of exactly that length. The store's atomic
    /// add is the uniqueness check; a collision just burns one attempt.
    async fn create_randomized(&self, target_url: &str) -> Result<Arc<UrlRecord>> {
        for attempt in 0..self.config.max_creation_attempts {
            let length =
                rand::rng().random_range(self.config.min_id_length..=self.config.max_id_length);
            let id = self.generator.generate(length);
            let record = Arc::new(UrlRecord::new(id, target_url));

            if self.store.add(Arc::clone(&record)).await? {
                return Ok(record);
            }

            debug!(
                attempt,
                identifier = record.identifier(),
                "identifier collision, retrying with a fresh identifier"
            );
        }

        Err(ManagerError::MaxAttemptsExhausted {
            attempts: self.config.max_creation_attempts,
        })
    }
}

#[async_trait]
impl<S: UrlStore, G: Generator> UrlManager for ShortUrlManager<S, G> {
    async fn create(&self, target_url: &str, desired_id: Option<&str>) -> Result<Arc<UrlRecord>> {
        self.validate_target_url(target_url)?;

        match desired_id {
            // The caller has a specific identifier in mind; try only that one.
            Some(desired_id) if !desired_id.is_empty() => {
                self.create_with_desired_id(target_url, desired_id).await
            }
            _ => self.create_randomized(target_url).await,
        }
    }

    async fn get(&self, id: &str) -> Result<Arc<UrlRecord>> {
        match self.store.get(id).await? {
            Some(record) => {
                // Counting retrievals is the manager's job; the store never
                // touches the metrics.
                record.metrics().record_retrieval();
                Ok(record)
            }
            None => Err(ManagerError::NotFound(id.to_string())),
        }
    }

    async fn update(&self, _id: &str, _target_url: &str) -> Result<Arc<UrlRecord>> {
        // Deliberate placeholder, reserved for a future version. Fails
        // identically on every call rather than doing partial work.
        Err(ManagerError::Unsupported("update"))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        if self.store.remove(id).await? {
            return Ok(());
        }

        Err(ManagerError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::RandomGenerator;
    use crate::store::memory::MemoryUrlStore;
    use linklet_core::ResultCode;

    fn config(min: usize, max: usize, attempts: u32) -> ManagerConfig {
        ManagerConfig::builder()
            .min_id_length(min)
            .max_id_length(max)
            .max_creation_attempts(attempts)
            .build()
    }

    fn test_manager() -> ShortUrlManager<MemoryUrlStore, RandomGenerator> {
        ShortUrlManager::new(MemoryUrlStore::new(), RandomGenerator::new(), config(3, 16, 10))
            .unwrap()
    }

    /// Generator that always produces the same identifier, used to force
    /// collisions regardless of the attempt budget.
    struct FixedGenerator;

    impl Generator for FixedGenerator {
        fn generate(&self, length: usize) -> String {
            "x".repeat(length)
        }
    }

    #[tokio::test]
    async fn randomized_create_produces_identifiers_within_bounds() {
        let manager = test_manager();

        for _ in 0..50 {
            let record = manager.create("https://example.com", None).await.unwrap();
            let length = record.identifier().len();
            assert!((3..=16).contains(&length), "length {} out of range", length);
        }
    }

    #[tokio::test]
    async fn create_with_desired_id_succeeds() {
        let manager = test_manager();

        let record = manager
            .create("https://example.com", Some("potato"))
            .await
            .unwrap();

        assert_eq!(record.identifier(), "potato");
        assert_eq!(record.target_url(), "https://example.com");
        assert_eq!(record.metrics().retrieval_count(), 0);
    }

    #[tokio::test]
    async fn create_with_duplicate_desired_id_reports_already_in_use() {
        let manager = test_manager();

        manager
            .create("https://example.com", Some("potato"))
            .await
            .unwrap();

        let err = manager
            .create("https://other.example.com", Some("potato"))
            .await
            .unwrap_err();
        assert_eq!(err, ManagerError::AlreadyInUse("potato".to_string()));
        assert_eq!(err.result_code(), Some(ResultCode::AlreadyInUse));

        // The original mapping survives the losing create.
        let record = manager.get("potato").await.unwrap();
        assert_eq!(record.target_url(), "https://example.com");
    }

    #[tokio::test]
    async fn create_with_out_of_range_desired_id_is_rejected() {
        let manager = test_manager();

        for desired in ["ab", &"a".repeat(17)] {
            let err = manager
                .create("https://example.com", Some(desired))
                .await
                .unwrap_err();
            assert!(matches!(err, ManagerError::InvalidUrlIdentifier(_)));

            // Rejection must not have touched the store.
            let err = manager.get(desired).await.unwrap_err();
            assert!(matches!(err, ManagerError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn create_with_malformed_target_url_is_rejected() {
        let manager = test_manager();

        for target in ["", "this is not a valid url", "/relative/path"] {
            let err = manager.create(target, Some("potato")).await.unwrap_err();
            assert!(matches!(err, ManagerError::InvalidTargetUrl(_)));
            assert_eq!(err.result_code(), Some(ResultCode::InvalidTargetUrl));
        }

        // None of the rejected creates reached the store.
        let err = manager.get("potato").await.unwrap_err();
        assert!(matches!(err, ManagerError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_counts_each_retrieval() {
        let manager = test_manager();

        manager
            .create("https://example.com", Some("potato"))
            .await
            .unwrap();

        let record = manager.get("potato").await.unwrap();
        assert_eq!(record.metrics().retrieval_count(), 1);

        let record = manager.get("potato").await.unwrap();
        assert_eq!(record.metrics().retrieval_count(), 2);
    }

    #[tokio::test]
    async fn get_nonexistent_reports_not_found() {
        let manager = test_manager();

        let err = manager.get("rhyno").await.unwrap_err();
        assert_eq!(err, ManagerError::NotFound("rhyno".to_string()));
        assert_eq!(err.result_code(), Some(ResultCode::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let manager = test_manager();

        manager
            .create("https://example.com", Some("potato"))
            .await
            .unwrap();

        manager.delete("potato").await.unwrap();

        let err = manager.get("potato").await.unwrap_err();
        assert!(matches!(err, ManagerError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_not_found_the_second_time() {
        let manager = test_manager();

        manager
            .create("https://example.com", Some("potato"))
            .await
            .unwrap();

        manager.delete("potato").await.unwrap();
        let err = manager.delete("potato").await.unwrap_err();
        assert!(matches!(err, ManagerError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_is_always_unsupported() {
        let manager = test_manager();

        manager
            .create("https://example.com", Some("potato"))
            .await
            .unwrap();

        for _ in 0..3 {
            let err = manager
                .update("potato", "https://other.example.com")
                .await
                .unwrap_err();
            assert_eq!(err, ManagerError::Unsupported("update"));
            assert_eq!(err.result_code(), None);
        }

        // The record is untouched by the failed updates.
        let record = manager.get("potato").await.unwrap();
        assert_eq!(record.target_url(), "https://example.com");
    }

    #[tokio::test]
    async fn randomized_create_exhausts_its_attempt_budget_on_collisions() {
        // Fixed generator + a single possible length means every randomized
        // attempt collides once "xxxx" is taken.
        let manager =
            ShortUrlManager::new(MemoryUrlStore::new(), FixedGenerator, config(4, 4, 5)).unwrap();

        let first = manager.create("https://example.com", None).await.unwrap();
        assert_eq!(first.identifier(), "xxxx");

        let err = manager
            .create("https://other.example.com", None)
            .await
            .unwrap_err();
        assert_eq!(err, ManagerError::MaxAttemptsExhausted { attempts: 5 });
        assert_eq!(
            err.result_code(),
            Some(ResultCode::UnableToCreateAfterMaxAttempts)
        );

        // Exhaustion persisted nothing; the first record is still intact.
        let record = manager.get("xxxx").await.unwrap();
        assert_eq!(record.target_url(), "https://example.com");
    }

    #[tokio::test]
    async fn randomized_create_retries_past_collisions() {
        let manager = test_manager();

        // Pre-claim a handful of identifiers, then keep creating; the
        // randomized path must keep succeeding by retrying fresh ids.
        for i in 0..20 {
            manager
                .create("https://example.com", Some(&format!("taken{:02}", i)))
                .await
                .unwrap();
        }

        for _ in 0..20 {
            manager.create("https://example.com", None).await.unwrap();
        }
    }

    #[tokio::test]
    async fn construction_rejects_each_invalid_field_distinctly() {
        let store = MemoryUrlStore::new;
        let cases = [
            (config(3, 0, 10), ConfigError::InvalidMaxIdLength),
            (config(0, 16, 10), ConfigError::InvalidMinIdLength),
            (config(8, 4, 10), ConfigError::MinExceedsMax { min: 8, max: 4 }),
            (config(3, 16, 0), ConfigError::InvalidMaxAttempts),
        ];

        for (bad, expected) in cases {
            let err = ShortUrlManager::new(store(), RandomGenerator::new(), bad).unwrap_err();
            assert_eq!(err, expected);
        }
    }

    #[tokio::test]
    async fn concurrent_creates_of_one_desired_id_have_one_winner() {
        let manager = Arc::new(test_manager());
        let mut handles = vec![];

        for i in 0..32u64 {
            let manager = Arc::clone(&manager);
            handles.push(tokio::spawn(async move {
                manager
                    .create(&format!("https://example{}.com", i), Some("contested"))
                    .await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(record) => {
                    assert_eq!(record.identifier(), "contested");
                    successes += 1;
                }
                Err(ManagerError::AlreadyInUse(_)) => conflicts += 1,
                Err(other) => panic!("unexpected outcome: {other}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 31);
    }

    #[tokio::test]
    async fn concurrent_gets_lose_no_increments() {
        let manager = Arc::new(test_manager());

        let record = manager
            .create("https://example.com", Some("potato"))
            .await
            .unwrap();

        let mut handles = vec![];
        for _ in 0..64 {
            let manager = Arc::clone(&manager);
            handles.push(tokio::spawn(
                async move { manager.get("potato").await.unwrap() },
            ));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(record.metrics().retrieval_count(), 64);
    }
}
