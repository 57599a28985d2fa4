//! Decoders for the compound FEATS and DEPS fields.

use udsentence::token::{Dependency, Feature, Features, EMPTY_TOKEN};

use crate::error::DecodeError;

/// Separator of the elements of a compound field.
pub const ARRAY_DELIMITER: char = '|';

/// Separator of the name and value of a feature.
pub const FEATURE_DELIMITER: char = '=';

/// Separator of the head and relation of an enhanced dependency.
pub const DEPENDENCY_DELIMITER: char = ':';

/// Split a compound field into its elements.
///
/// The `_` placeholder results in no elements. Elements are not trimmed.
pub fn split_array(value: &str) -> Vec<&str> {
    if value == EMPTY_TOKEN {
        Vec::new()
    } else {
        value.split(ARRAY_DELIMITER).collect()
    }
}

/// Decode a `Name=Value` feature.
///
/// The name and value are trimmed. The pair is split at the first `=`,
/// so the value may contain further `=` characters.
pub fn decode_feature(pair: &str) -> Result<Feature, DecodeError> {
    let (name, value) = pair
        .split_once(FEATURE_DELIMITER)
        .ok_or_else(|| DecodeError::MalformedFeaturePair {
            pair: pair.to_owned(),
        })?;

    Ok(Feature::new(name.trim(), value.trim()))
}

/// Decode a FEATS field.
pub fn decode_features(value: &str) -> Result<Features, DecodeError> {
    split_array(value).into_iter().map(decode_feature).collect()
}

/// Decode a `Head:Relation` enhanced dependency.
///
/// The pair is split at the first `:`, relation subtypes such as
/// `nmod:poss` are preserved in the relation.
pub fn decode_dependency(pair: &str) -> Result<Dependency, DecodeError> {
    let (head, relation) = pair.split_once(DEPENDENCY_DELIMITER).ok_or_else(|| {
        DecodeError::MalformedDependencyPair {
            pair: pair.to_owned(),
        }
    })?;

    Ok(Dependency::new(head, relation))
}

/// Decode a DEPS field.
pub fn decode_dependencies(value: &str) -> Result<Vec<Dependency>, DecodeError> {
    split_array(value).into_iter().map(decode_dependency).collect()
}
