use thiserror::Error;

/// CoNLL-U decoding errors.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A comment line is not an attribute-value pair.
    #[error("invalid metadata line: {line:?}")]
    MalformedMetadataLine { line: String },

    /// A token line does not consist of ten fields.
    #[error("invalid token line, expected 10 fields, found {fields}: {line:?}")]
    MalformedTokenLine { line: String, fields: usize },

    /// An element of the features field is not a name-value pair.
    #[error("cannot parse feature: {pair:?}")]
    MalformedFeaturePair { pair: String },

    /// An element of the enhanced dependencies field is not a
    /// head-relation pair.
    #[error("cannot parse enhanced dependency: {pair:?}")]
    MalformedDependencyPair { pair: String },
}
