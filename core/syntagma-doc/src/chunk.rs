use std::fmt;

use syntagma_protocol::{ChunkRole, SentenceId, TokenId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sentence::Sentence;

/// Tokens of one sentence sharing a phrase role, in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    sentence: SentenceId,
    role: ChunkRole,
    tokens: Vec<TokenId>,
}

impl Chunk {
    pub fn new(sentence: SentenceId, role: ChunkRole, tokens: impl IntoIterator<Item = TokenId>) -> Self {
        let mut tokens: Vec<TokenId> = tokens.into_iter().collect();
        tokens.sort_unstable();
        tokens.dedup();
        Self {
            sentence,
            role,
            tokens,
        }
    }

    pub fn sentence(&self) -> SentenceId {
        self.sentence
    }

    pub fn role(&self) -> ChunkRole {
        self.role
    }

    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }

    pub fn first(&self) -> Option<TokenId> {
        self.tokens.first().copied()
    }

    pub fn contains(&self, token: TokenId) -> bool {
        self.tokens.binary_search(&token).is_ok()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn words<'a>(&'a self, sentence: &'a Sentence) -> impl Iterator<Item = &'a str> + 'a {
        self.tokens
            .iter()
            .filter_map(move |&id| sentence.token(id))
            .map(|token| token.word.as_str())
    }

    /// `une pomme /OBJ`
    pub fn display<'a>(&'a self, sentence: &'a Sentence) -> ChunkDisplay<'a> {
        ChunkDisplay { chunk: self, sentence }
    }
}

pub struct ChunkDisplay<'a> {
    chunk: &'a Chunk,
    sentence: &'a Sentence,
}

impl fmt::Display for ChunkDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self.chunk.words(self.sentence).collect();
        write!(f, "{} /{}", words.join(" "), self.chunk.role)
    }
}
