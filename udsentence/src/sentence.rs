//! Sentences.

use std::collections::HashMap;
use std::iter::FromIterator;
use std::ops::{Deref, Index};
use std::slice;

use crate::token::Token;

/// Sentence-level metadata.
///
/// Metadata are attribute-value pairs from the comment lines that precede
/// the tokens of a sentence. Attributes are unique.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    inner: HashMap<String, String>,
}

impl Metadata {
    /// Construct empty metadata.
    pub fn new() -> Self {
        Metadata {
            inner: HashMap::new(),
        }
    }

    /// Get the value of an attribute.
    pub fn get(&self, attr: &str) -> Option<&str> {
        self.inner.get(attr).map(String::as_str)
    }

    /// Unwrap the contained attribute-value map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.inner
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata::new()
    }
}

impl Deref for Metadata {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<HashMap<String, String>> for Metadata {
    fn from(metadata: HashMap<String, String>) -> Self {
        Metadata { inner: metadata }
    }
}

/// Later pairs with the same attribute replace earlier ones.
impl<S, T> FromIterator<(S, T)> for Metadata
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
    {
        let metadata = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Metadata { inner: metadata }
    }
}

/// A sentence.
///
/// A sentence consists of its tokens, in the order of the data, and
/// its metadata. The tokens include multiword tokens and empty nodes;
/// use `words` to iterate over the syntactic words only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sentence {
    tokens: Vec<Token>,
    metadata: Metadata,
}

impl Sentence {
    /// Construct a sentence from its tokens and metadata.
    pub fn new(tokens: Vec<Token>, metadata: Metadata) -> Self {
        Sentence { tokens, metadata }
    }

    /// Get the tokens of the sentence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get the metadata of the sentence.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Get an iterator over the tokens of the sentence.
    pub fn iter(&self) -> slice::Iter<Token> {
        self.tokens.iter()
    }

    /// Get an iterator over the words of the sentence.
    ///
    /// Multiword tokens and empty nodes are skipped.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|token| !token.is_multiword() && !token.is_empty_node())
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decompose the sentence into its tokens and metadata.
    pub fn into_parts(self) -> (Vec<Token>, Metadata) {
        (self.tokens, self.metadata)
    }
}

impl Index<usize> for Sentence {
    type Output = Token;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.tokens[idx]
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
