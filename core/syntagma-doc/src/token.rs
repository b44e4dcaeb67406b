use std::fmt;

use syntagma_protocol::{ChunkRole, SentenceKey, TokenId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::features::Features;

/// Feature key under which chunking records the role of each token.
pub const TYPE_FEATURE: &str = "type";

/// Resolution state of a token's head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Head {
    /// Raw head id read from the record, not yet checked against the sentence.
    Unresolved(i64),
    /// Sentence root.
    Root,
    /// Another token of the same sentence.
    Resolved(TokenId),
}

impl Head {
    pub fn is_root(self) -> bool {
        matches!(self, Head::Root)
    }

    pub fn is_resolved(self) -> bool {
        !matches!(self, Head::Unresolved(_))
    }

    pub fn token(self) -> Option<TokenId> {
        match self {
            Head::Resolved(id) => Some(id),
            _ => None,
        }
    }

    /// The head as it appears in an input record: `0` for the root.
    pub fn raw(self) -> i64 {
        match self {
            Head::Unresolved(raw) => raw,
            Head::Root => 0,
            Head::Resolved(id) => i64::from(id.get()),
        }
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Head::Root => f.write_str("root"),
            other => write!(f, "{}", other.raw()),
        }
    }
}

/// A word with its annotations and its dependency link.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub id: TokenId,
    pub word: String,
    pub lemma: String,
    pub pos: String,
    pub feats: Features,
    pub head: Head,
    pub dep: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    owner: Option<SentenceKey>,
}

impl Token {
    pub fn new(
        id: impl Into<TokenId>,
        word: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        feats: Features,
        head: i64,
        dep: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            feats,
            head: Head::Unresolved(head),
            dep: dep.into(),
            owner: None,
        }
    }

    /// The sentence this token was pushed into, if any.
    pub fn owner(&self) -> Option<SentenceKey> {
        self.owner
    }

    pub(crate) fn attach(&mut self, owner: SentenceKey) {
        self.owner = Some(owner);
    }

    pub fn is_root(&self) -> bool {
        self.head.is_root()
    }

    pub fn feature(&self, name: &str) -> Option<&[String]> {
        self.feats.get(name)
    }

    /// Role written by the last chunking run.
    pub fn role(&self) -> Option<ChunkRole> {
        self.feats.first(TYPE_FEATURE)?.parse().ok()
    }

    pub fn is_numeral(&self) -> bool {
        syntagma_lexicon::is_numeral(&self.word)
    }

    pub fn is_currency(&self) -> bool {
        syntagma_lexicon::is_currency(&self.word)
    }

    /// Positions between two tokens of the same sentence, `None` across sentences.
    pub fn distance(&self, other: &Token) -> Option<usize> {
        match (self.owner, other.owner) {
            (Some(a), Some(b)) if a == b => Some(self.id.get().abs_diff(other.id.get()) as usize),
            _ => None,
        }
    }
}

/// Tokens compare by owning sentence, id and word.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.id == other.id && self.word == other.word
    }
}

impl Eq for Token {}

/// One tab-separated row: id, word, lemma, pos, head, dep, feats.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.id, self.word, self.lemma, self.pos, self.head, self.dep, self.feats
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn head_rendering() {
        assert_eq!(Head::Root.to_string(), "root");
        assert_eq!(Head::Resolved(TokenId(3)).to_string(), "3");
        assert_eq!(Head::Unresolved(7).to_string(), "7");
        assert_eq!(Head::Root.raw(), 0);
    }

    #[test]
    fn row_rendering() {
        let mut sentence = testing::il_mange();
        sentence.resolve_heads().unwrap();
        let rows: Vec<String> = sentence.tokens().iter().map(ToString::to_string).collect();
        assert_eq!(rows[0], "1\tIl\til\tCL\t2\tsuj\t_");
        assert_eq!(rows[1], "2\tmange\tmange\tV\troot\troot\t_");
    }

    #[test]
    fn equality_uses_owner_id_and_word() {
        let a = testing::il_mange();
        let b = testing::il_mange();
        // Same content, different documents.
        assert_ne!(a.tokens()[0], b.tokens()[0]);
        assert_eq!(a.tokens()[0], a.tokens()[0].clone());

        let mut renamed = a.tokens()[0].clone();
        renamed.word = "Elle".into();
        assert_ne!(renamed, a.tokens()[0]);

        let mut relabelled = a.tokens()[0].clone();
        relabelled.dep = "obj".into();
        assert_eq!(relabelled, a.tokens()[0]);
    }

    #[test]
    fn distance_within_and_across_sentences() {
        let a = testing::il_mange();
        let b = testing::il_mange();
        let tokens = a.tokens();
        assert_eq!(tokens[0].distance(&tokens[0]), Some(0));
        assert_eq!(tokens[0].distance(&tokens[3]), Some(3));
        assert_eq!(tokens[3].distance(&tokens[1]), Some(2));
        assert_eq!(tokens[0].distance(&b.tokens()[1]), None);
    }

    #[test]
    fn lexical_classifiers() {
        let token = Token::new(TokenId(1), "vingt", "vingt", "ADJ", Features::new(), 2, "mod");
        assert!(token.is_numeral());
        assert!(!token.is_currency());
        let token = Token::new(TokenId(2), "euros", "euro", "NC", Features::new(), 0, "root");
        assert!(token.is_currency());
    }
}
