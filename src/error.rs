//! Error types for the code reference.

use std::convert::Infallible;

use thiserror::Error;

/// The only failure a caller of the library can observe.
///
/// Lookups never fail: an unrecognized code resolves to a default record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpiCodeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Lets conversions that cannot fail (such as a `TransactionType` into itself)
/// feed APIs that accept fallible conversions.
impl From<Infallible> for UpiCodeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
