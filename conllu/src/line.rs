//! Decoders for single CoNLL-U lines.

use itertools::Itertools;
use udsentence::token::{Token, TokenBuilder};

use crate::error::DecodeError;
use crate::fields::{decode_dependencies, decode_features};

/// Marker of comment lines.
pub const METADATA_PREFIX: char = '#';

/// Separator of the attribute and value in a comment line.
pub const METADATA_DELIMITER: char = '=';

/// Separator of the fields of a token line.
pub const FIELD_DELIMITER: char = '\t';

/// Decode a token line.
///
/// The line must consist of exactly ten tab-separated fields. Fields
/// are stored verbatim, except for FEATS and DEPS, which are decomposed.
pub fn decode_token_line(line: &str) -> Result<Token, DecodeError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    match *fields.as_slice() {
        [id, form, lemma, upos, xpos, feats, head, deprel, deps, misc] => {
            Ok(TokenBuilder::new(id, form)
                .lemma(lemma)
                .upos(upos)
                .xpos(xpos)
                .features(decode_features(feats)?)
                .head(head)
                .deprel(deprel)
                .deps(decode_dependencies(deps)?)
                .misc(misc)
                .into())
        }
        _ => Err(DecodeError::MalformedTokenLine {
            line: line.to_owned(),
            fields: fields.len(),
        }),
    }
}

/// Decode a comment line into an attribute-value pair.
///
/// After removing the leading `#`, the line must contain exactly one `=`.
/// The attribute and value are trimmed.
pub fn decode_metadata_line(line: &str) -> Result<(String, String), DecodeError> {
    let malformed = || DecodeError::MalformedMetadataLine {
        line: line.to_owned(),
    };

    let (attr, val): (&str, &str) = line
        .strip_prefix(METADATA_PREFIX)
        .and_then(|comment| {
            comment
                .split(METADATA_DELIMITER)
                .map(str::trim)
                .collect_tuple()
        })
        .ok_or_else(malformed)?;

    Ok((attr.to_owned(), val.to_owned()))
}
