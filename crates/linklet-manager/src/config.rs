use serde::Deserialize;
use thiserror::Error;
use typed_builder::TypedBuilder;

/// Errors raised when a [`ManagerConfig`] fails validation.
///
/// Construction-time faults only: each variant identifies the field that
/// is invalid, and an invalid configuration never silently defaults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("maximum identifier length must be a positive integer")]
    InvalidMaxIdLength,
    #[error("minimum identifier length must be a positive integer")]
    InvalidMinIdLength,
    #[error("minimum identifier length {min} must not exceed maximum {max}")]
    MinExceedsMax { min: usize, max: usize },
    #[error("maximum creation attempts must be a positive integer")]
    InvalidMaxAttempts,
}

/// Configures a [`ShortUrlManager`](crate::ShortUrlManager) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder, Deserialize)]
pub struct ManagerConfig {
    /// The minimum valid length for a short url identifier.
    #[builder]
    pub min_id_length: usize,
    /// The maximum valid length for a short url identifier.
    #[builder]
    pub max_id_length: usize,
    /// The attempt budget for creating a short url with a randomized
    /// identifier.
    #[builder]
    pub max_creation_attempts: u32,
}

impl ManagerConfig {
    /// Validates the configured values, identifying the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_id_length == 0 {
            return Err(ConfigError::InvalidMaxIdLength);
        }

        if self.min_id_length == 0 {
            return Err(ConfigError::InvalidMinIdLength);
        }

        if self.min_id_length > self.max_id_length {
            return Err(ConfigError::MinExceedsMax {
                min: self.min_id_length,
                max: self.max_id_length,
            });
        }

        if self.max_creation_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts);
        }

        Ok(())
    }
}
