use thiserror::Error;

pub type Result<T, E = ManagerError> = std::result::Result<T, E>;

/// Errors reported by a URL store implementation.
///
/// Absence of a record is never an error; stores report it through their
/// return values. The only failure a store can surface is a broken
/// exclusive section, which callers must treat as a defect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store lock is poisoned")]
    Poisoned,
}

/// Outcomes of manager operations other than success.
///
/// Expected conditions (bad input, not-found, collision, exhaustion) map
/// onto the closed [`ResultCode`](crate::ResultCode) set. `Unsupported` and
/// `Internal` are deliberately outside that set: the former is a fixed
/// not-implemented signal, the latter an internal-consistency defect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManagerError {
    #[error("invalid target url: {0}")]
    InvalidTargetUrl(String),
    #[error("invalid url identifier: {0}")]
    InvalidUrlIdentifier(String),
    #[error("identifier already in use: {0}")]
    AlreadyInUse(String),
    #[error("no short url found for identifier: {0}")]
    NotFound(String),
    #[error("unable to create a short url after {attempts} attempts")]
    MaxAttemptsExhausted { attempts: u32 },
    #[error("operation is not supported by this manager: {0}")]
    Unsupported(&'static str),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ManagerError {
    fn from(value: StoreError) -> Self {
        Self::Internal(value.to_string())
    }
}
