//! Tokens of a sentence.

use std::iter::FromIterator;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::IdError;

/// Placeholder for fields that are not available.
pub const EMPTY_TOKEN: &str = "_";

/// Separator of the first and last word of a multiword token identifier.
pub const RANGE_DELIMITER: char = '-';

/// Separator of the word and node index of an empty node identifier.
pub const EMPTY_NODE_DELIMITER: char = '.';

/// A builder for `Token`s.
///
/// The `Token` type stores a CoNLL-U token. Since tokens are immutable
/// once constructed and the format has ten fields, this builder provides
/// a fluent interface for creating `Token`s. Fields that are not set
/// are `_` (or empty in the case of features and enhanced dependencies).
pub struct TokenBuilder {
    token: Token,
}

impl TokenBuilder {
    /// Create a `Token` builder with all non-identifier, non-form fields
    /// set to the empty placeholder.
    pub fn new(id: impl Into<String>, form: impl Into<String>) -> TokenBuilder {
        TokenBuilder {
            token: Token::new(id, form),
        }
    }

    /// Set the lemma or stem of the word form.
    pub fn lemma(mut self, lemma: impl Into<String>) -> TokenBuilder {
        self.token.lemma = lemma.into();
        self
    }

    /// Set the universal part-of-speech tag.
    pub fn upos(mut self, upos: impl Into<String>) -> TokenBuilder {
        self.token.upos = upos.into();
        self
    }

    /// Set the language-specific part-of-speech tag.
    pub fn xpos(mut self, xpos: impl Into<String>) -> TokenBuilder {
        self.token.xpos = xpos.into();
        self
    }

    /// Set the morphological features of the token.
    pub fn features(mut self, features: Features) -> TokenBuilder {
        self.token.features = features;
        self
    }

    /// Set the head of the token.
    pub fn head(mut self, head: impl Into<String>) -> TokenBuilder {
        self.token.head = head.into();
        self
    }

    /// Set the dependency relation to the head.
    pub fn deprel(mut self, deprel: impl Into<String>) -> TokenBuilder {
        self.token.deprel = deprel.into();
        self
    }

    /// Set the enhanced dependencies.
    pub fn deps(mut self, deps: Vec<Dependency>) -> TokenBuilder {
        self.token.deps = deps;
        self
    }

    /// Set the miscellaneous annotation.
    pub fn misc(mut self, misc: impl Into<String>) -> TokenBuilder {
        self.token.misc = misc.into();
        self
    }
}

impl From<TokenBuilder> for Token {
    fn from(builder: TokenBuilder) -> Self {
        builder.token
    }
}

/// A CoNLL-U token.
///
/// All fields are stored as they occur in the data. In particular, the
/// `_` placeholder is not normalized: callers that need to know whether
/// a field is absent should compare against `EMPTY_TOKEN`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    id: String,
    form: String,
    lemma: String,
    upos: String,
    xpos: String,
    features: Features,
    head: String,
    deprel: String,
    deps: Vec<Dependency>,
    misc: String,
}

impl Token {
    /// Create a new token where all the non-identifier, non-form fields
    /// are empty.
    pub fn new(id: impl Into<String>, form: impl Into<String>) -> Token {
        Token {
            id: id.into(),
            form: form.into(),
            lemma: EMPTY_TOKEN.to_owned(),
            upos: EMPTY_TOKEN.to_owned(),
            xpos: EMPTY_TOKEN.to_owned(),
            features: Features::new(),
            head: EMPTY_TOKEN.to_owned(),
            deprel: EMPTY_TOKEN.to_owned(),
            deps: Vec::new(),
            misc: EMPTY_TOKEN.to_owned(),
        }
    }

    /// Get the token identifier.
    ///
    /// This is an integer for words, a range for multiword tokens, and a
    /// decimal number for empty nodes.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the word form or punctuation symbol.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Get the lemma or stem of the word form.
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Get the universal part-of-speech tag.
    pub fn upos(&self) -> &str {
        &self.upos
    }

    /// Get the language-specific part-of-speech tag.
    pub fn xpos(&self) -> &str {
        &self.xpos
    }

    /// Get the morphological features of the token.
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// Get the head of the token.
    ///
    /// This is the identifier of another token, or `0` for the root.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Get the dependency relation to the head.
    pub fn deprel(&self) -> &str {
        &self.deprel
    }

    /// Get the enhanced dependencies.
    pub fn deps(&self) -> &[Dependency] {
        &self.deps
    }

    /// Get the miscellaneous annotation.
    pub fn misc(&self) -> &str {
        &self.misc
    }

    /// Returns `true` if the token is a multiword token.
    pub fn is_multiword(&self) -> bool {
        self.id.contains(RANGE_DELIMITER)
    }

    /// Returns `true` if the token is an empty node.
    pub fn is_empty_node(&self) -> bool {
        self.id.contains(EMPTY_NODE_DELIMITER)
    }

    /// Parse the token identifier.
    pub fn parse_id(&self) -> Result<TokenId, IdError> {
        self.id.parse()
    }
}

/// Parsed token identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenId {
    /// Word.
    Single(usize),

    /// Multiword token spanning the words `start..=end`.
    Range(usize, usize),

    /// Empty node, inserted after the given word.
    Empty(usize, usize),
}

impl FromStr for TokenId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |n: &str| {
            n.parse::<usize>().map_err(|_| IdError::InvalidIdentifier {
                value: s.to_owned(),
            })
        };

        if let Some((start, end)) = s.split_once(RANGE_DELIMITER) {
            Ok(TokenId::Range(parse(start)?, parse(end)?))
        } else if let Some((word, index)) = s.split_once(EMPTY_NODE_DELIMITER) {
            Ok(TokenId::Empty(parse(word)?, parse(index)?))
        } else {
            Ok(TokenId::Single(parse(s)?))
        }
    }
}

/// A morphological feature.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Feature {
    name: String,
    value: String,
}

impl Feature {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Feature {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the feature value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Token features.
///
/// In CoNLL-U, these are the morphological features of the
/// token. The features are kept in the order in which they were given.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Features {
    inner: Vec<Feature>,
}

impl Features {
    /// Construct an empty set of features.
    pub fn new() -> Self {
        Features { inner: Vec::new() }
    }

    /// Get the value of the first feature with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|feature| feature.name == name)
            .map(Feature::value)
    }

    /// Unwrap the contained features.
    pub fn into_inner(self) -> Vec<Feature> {
        self.inner
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::new()
    }
}

impl Deref for Features {
    type Target = [Feature];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<Vec<Feature>> for Features {
    fn from(features: Vec<Feature>) -> Self {
        Features { inner: features }
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        Features {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<S, T> FromIterator<(S, T)> for Features
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
    {
        iter.into_iter()
            .map(|(name, value)| Feature::new(name, value))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Features {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// An edge of the enhanced dependency graph.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dependency {
    head: String,
    relation: String,
}

impl Dependency {
    pub fn new(head: impl Into<String>, relation: impl Into<String>) -> Self {
        Dependency {
            head: head.into(),
            relation: relation.into(),
        }
    }

    /// Get the identifier of the head.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Get the dependency relation.
    pub fn relation(&self) -> &str {
        &self.relation
    }
}
