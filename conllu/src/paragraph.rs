//! Decoding of sentence blocks.

use std::collections::HashMap;

use udsentence::sentence::Sentence;

use crate::error::DecodeError;
use crate::line::{decode_metadata_line, decode_token_line, METADATA_PREFIX};

/// Decode the lines of one sentence block.
///
/// Lines starting with `#` are decoded as metadata, all other lines as
/// tokens. When an attribute occurs more than once, the last value is
/// retained. The first malformed line aborts decoding of the block.
pub fn decode_paragraph<S>(lines: &[S]) -> Result<Sentence, DecodeError>
where
    S: AsRef<str>,
{
    let mut tokens = Vec::with_capacity(lines.len());
    let mut metadata = HashMap::new();

    for line in lines {
        let line = line.as_ref();

        if line.starts_with(METADATA_PREFIX) {
            let (attr, val) = decode_metadata_line(line)?;
            metadata.insert(attr, val);
        } else {
            tokens.push(decode_token_line(line)?);
        }
    }

    Ok(Sentence::new(tokens, metadata.into()))
}
