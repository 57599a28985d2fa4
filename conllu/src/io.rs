//! CoNLL-U stream decoder.

use std::io;
use std::mem;

use tracing::{debug, trace, warn};
use udsentence::sentence::Sentence;

use crate::error::DecodeError;
use crate::paragraph::decode_paragraph;

/// Treatment of a sentence block that is not followed by a blank line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrailingParagraph {
    /// Decode the block as the last sentence.
    Flush,

    /// Drop the block.
    ///
    /// Older versions of the decoder only decoded blocks that were
    /// terminated by a blank line. This mode reproduces their output.
    Discard,
}

impl Default for TrailingParagraph {
    fn default() -> Self {
        TrailingParagraph::Flush
    }
}

/// A decoder for CoNLL-U streams.
///
/// Sentence blocks are separated by one or more blank lines. Reading
/// stops at the end of the stream or on the first read error, the
/// latter is logged but not treated as a decoding error.
pub struct Reader<R> {
    read: R,
    trailing: TrailingParagraph,
}

impl<R: io::BufRead> Reader<R> {
    /// Construct a new reader from an object that implements the
    /// `io::BufRead` trait.
    pub fn new(read: R) -> Reader<R> {
        Reader {
            read,
            trailing: TrailingParagraph::default(),
        }
    }

    /// Set the treatment of a final block without a trailing blank line.
    pub fn trailing_paragraph(mut self, trailing: TrailingParagraph) -> Reader<R> {
        self.trailing = trailing;
        self
    }

    /// Decode all sentences in the stream.
    ///
    /// Returns the sentences in stream order. If a block could not be
    /// decoded, the sentences that precede it are returned together with
    /// the error, and the remainder of the stream is not read.
    pub fn decode(mut self) -> (Vec<Sentence>, Option<DecodeError>) {
        let mut sentences = Vec::new();
        let mut paragraph = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();

            match self.read.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => (),
                Err(err) => {
                    warn!(error = %err, "stopped reading CoNLL-U stream");
                    break;
                }
            }

            let content = strip_line_terminator(&line);
            if !content.is_empty() {
                paragraph.push(content.to_owned());
                continue;
            }

            if paragraph.is_empty() {
                continue;
            }

            if let Err(err) = push_paragraph(&mut sentences, mem::take(&mut paragraph)) {
                return (sentences, Some(err));
            }
        }

        if !paragraph.is_empty() {
            match self.trailing {
                TrailingParagraph::Flush => {
                    if let Err(err) = push_paragraph(&mut sentences, paragraph) {
                        return (sentences, Some(err));
                    }
                }
                TrailingParagraph::Discard => {
                    warn!(
                        lines = paragraph.len(),
                        "discarding sentence block without trailing blank line"
                    );
                }
            }
        }

        debug!(sentences = sentences.len(), "decoded CoNLL-U stream");

        (sentences, None)
    }
}

/// Decode all sentences in a stream.
///
/// This is a shorthand for `Reader::new(read).decode()`.
pub fn decode_stream<R: io::BufRead>(read: R) -> (Vec<Sentence>, Option<DecodeError>) {
    Reader::new(read).decode()
}

fn push_paragraph(
    sentences: &mut Vec<Sentence>,
    paragraph: Vec<String>,
) -> Result<(), DecodeError> {
    trace!(lines = paragraph.len(), "decoding sentence block");

    match decode_paragraph(&paragraph) {
        Ok(sentence) => {
            sentences.push(sentence);
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, sentences = sentences.len(), "aborted decoding CoNLL-U stream");
            Err(err)
        }
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead, BufReader, Cursor, Read};

    use udsentence::sentence::Sentence;

    use super::{decode_stream, Reader, TrailingParagraph};
    use crate::error::DecodeError;
    use crate::tests::{read_file, read_sentences, TEST_SENTENCES};

    static BASIC: &str = "testdata/basic.conllu";

    static DOUBLE_NEWLINE: &str = "testdata/double-newline.conllu";

    static NO_TRAILING_NEWLINE: &str = "testdata/no-trailing-newline.conllu";

    static CRLF: &str = "testdata/crlf.conllu";

    static MALFORMED_TOKEN: &str = "testdata/malformed-token.conllu";

    fn string_reader(s: &str) -> Box<dyn BufRead> {
        Box::new(Cursor::new(s.as_bytes().to_owned()))
    }

    fn test_parsing(correct: &[Sentence], fragment: &str) {
        let sentences = read_sentences(fragment, TrailingParagraph::Flush);
        assert_eq!(correct, sentences.as_slice());
    }

    #[test]
    fn reader() {
        test_parsing(&*TEST_SENTENCES, BASIC);
    }

    #[test]
    fn reader_robust() {
        test_parsing(&*TEST_SENTENCES, DOUBLE_NEWLINE);
    }

    #[test]
    fn reader_crlf() {
        test_parsing(&*TEST_SENTENCES, CRLF);
    }

    #[test]
    fn reader_flushes_trailing_paragraph() {
        test_parsing(&*TEST_SENTENCES, NO_TRAILING_NEWLINE);
    }

    #[test]
    fn reader_discards_trailing_paragraph() {
        let sentences = read_sentences(NO_TRAILING_NEWLINE, TrailingParagraph::Discard);
        assert_eq!(&TEST_SENTENCES[..1], sentences.as_slice());
    }

    #[test]
    fn discard_keeps_terminated_paragraphs() {
        let sentences = read_sentences(BASIC, TrailingParagraph::Discard);
        assert_eq!(TEST_SENTENCES.as_slice(), sentences.as_slice());
    }

    #[test]
    fn reader_returns_sentences_before_error() {
        let data = read_file(MALFORMED_TOKEN);
        let (sentences, err) = decode_stream(string_reader(&data));

        assert_eq!(&TEST_SENTENCES[..1], sentences.as_slice());
        assert_eq!(
            err,
            Some(DecodeError::MalformedTokenLine {
                line: "1\tGilles\tGilles\tPROPN\tNE".to_string(),
                fields: 5,
            })
        );
    }

    #[test]
    fn reader_stops_at_first_error() {
        let data = "# a\n\n1\ta\n\n# sent_id = 3\n\n";
        let (sentences, err) = decode_stream(string_reader(data));

        assert!(sentences.is_empty());
        assert_eq!(
            err,
            Some(DecodeError::MalformedMetadataLine {
                line: "# a".to_string()
            })
        );
    }

    #[test]
    fn reader_reports_malformed_trailing_paragraph() {
        let (sentences, err) = decode_stream(string_reader("# sent_id = 1\n\n1\ta"));

        assert_eq!(sentences.len(), 1);
        assert_eq!(
            err,
            Some(DecodeError::MalformedTokenLine {
                line: "1\ta".to_string(),
                fields: 2,
            })
        );
    }

    #[test]
    fn reader_counts_paragraphs() {
        let paragraph = "# sent_id = 1\n1\ta\t_\t_\t_\t_\t0\troot\t_\t_\n";
        for n in 0..5 {
            let data = format!("{}\n", paragraph).repeat(n);
            let (sentences, err) = decode_stream(string_reader(&data));
            assert_eq!(err, None);
            assert_eq!(sentences.len(), n);
        }
    }

    #[test]
    fn discard_yields_one_sentence_less() {
        let data = "# sent_id = 1\n\n# sent_id = 2\n\n# sent_id = 3\n";

        let (sentences, err) = Reader::new(string_reader(data))
            .trailing_paragraph(TrailingParagraph::Discard)
            .decode();
        assert_eq!(err, None);
        assert_eq!(sentences.len(), 2);

        let (sentences, err) = decode_stream(string_reader(data));
        assert_eq!(err, None);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[2].metadata().get("sent_id"), Some("3"));
    }

    #[test]
    fn empty_streams() {
        for data in &["", "\n", "\n\n\n", "\r\n"] {
            let (sentences, err) = decode_stream(string_reader(data));
            assert!(sentences.is_empty());
            assert_eq!(err, None);
        }
    }

    #[test]
    fn whitespace_line_is_not_a_separator() {
        let data = "1\ta\t_\t_\t_\t_\t0\troot\t_\t_\n \n";
        let (sentences, err) = decode_stream(string_reader(data));

        assert!(sentences.is_empty());
        assert_eq!(
            err,
            Some(DecodeError::MalformedTokenLine {
                line: " ".to_string(),
                fields: 1,
            })
        );
    }

    #[test]
    fn read_error_ends_stream() {
        struct FailingRead;

        impl Read for FailingRead {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "device unavailable"))
            }
        }

        let read = Cursor::new(b"# sent_id = 1\n\n".to_vec()).chain(FailingRead);
        let (sentences, err) = decode_stream(BufReader::new(read));

        assert_eq!(sentences.len(), 1);
        assert_eq!(err, None);
    }

    #[test]
    fn invalid_utf8_ends_stream() {
        let read = Cursor::new(b"# sent_id = 1\n\n# text = \xff\n\n".to_vec());
        let (sentences, err) = decode_stream(read);

        assert_eq!(sentences.len(), 1);
        assert_eq!(err, None);
    }

    #[test]
    fn decoding_is_idempotent() {
        let data = read_file(BASIC);
        assert_eq!(
            decode_stream(string_reader(&data)),
            decode_stream(string_reader(&data))
        );
    }
}
