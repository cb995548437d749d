//! Classification of errors into retryable and permanent failures.

use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient store failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition & connection errors are transient
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, constraint, conversion & not-found errors won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Session store may be briefly unreachable
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::CompanyError(_) => ErrorRetryStrategy::Fail,
            Self::ParseError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
