use thiserror::Error;

/// Token identifier error.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum IdError {
    /// The identifier is not an integer, a range, or a decimal.
    #[error("cannot parse as token identifier: {value:?}")]
    InvalidIdentifier { value: String },
}
