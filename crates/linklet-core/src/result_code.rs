use crate::error::ManagerError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The closed set of outcomes a front end renders for manager operations.
///
/// A successful operation is `Success`; each expected failure maps onto
/// exactly one of the remaining codes via [`ManagerError::result_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    /// The operation was successful.
    Success,
    /// The target url supplied is invalid.
    InvalidTargetUrl,
    /// The manually-picked short url identifier is invalid.
    InvalidUrlIdentifier,
    /// The desired short url identifier is already in use.
    AlreadyInUse,
    /// The short url could not be found in the storage layer.
    NotFound,
    /// Creation with a randomized identifier failed after the maximum
    /// amount of tries.
    UnableToCreateAfterMaxAttempts,
}

impl Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResultCode::Success => "Success",
            ResultCode::InvalidTargetUrl => "InvalidTargetUrl",
            ResultCode::InvalidUrlIdentifier => "InvalidUrlIdentifier",
            ResultCode::AlreadyInUse => "AlreadyInUse",
            ResultCode::NotFound => "NotFound",
            ResultCode::UnableToCreateAfterMaxAttempts => "UnableToCreateAfterMaxAttempts",
        };
        f.write_str(name)
    }
}

impl ManagerError {
    /// Maps an expected operation outcome onto its [`ResultCode`].
    ///
    /// Returns `None` for the signals outside the closed code set:
    /// [`ManagerError::Unsupported`] and [`ManagerError::Internal`].
    pub fn result_code(&self) -> Option<ResultCode> {
        match self {
            ManagerError::InvalidTargetUrl(_) => Some(ResultCode::InvalidTargetUrl),
            ManagerError::InvalidUrlIdentifier(_) => Some(ResultCode::InvalidUrlIdentifier),
            ManagerError::AlreadyInUse(_) => Some(ResultCode::AlreadyInUse),
            ManagerError::NotFound(_) => Some(ResultCode::NotFound),
            ManagerError::MaxAttemptsExhausted { .. } => {
                Some(ResultCode::UnableToCreateAfterMaxAttempts)
            }
            ManagerError::Unsupported(_) | ManagerError::Internal(_) => None,
        }
    }
}
