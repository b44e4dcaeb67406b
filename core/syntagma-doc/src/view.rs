use std::ops::Deref;

use syntagma_protocol::Result;

use crate::sentence::{Group, Sentence};
use crate::token::Token;

/// A token together with the sentence it lives in.
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'a> {
    sentence: &'a Sentence,
    token: &'a Token,
}

impl<'a> TokenRef<'a> {
    pub(crate) fn new(sentence: &'a Sentence, token: &'a Token) -> Self {
        Self { sentence, token }
    }

    pub fn sentence(&self) -> &'a Sentence {
        self.sentence
    }

    pub fn token(&self) -> &'a Token {
        self.token
    }

    pub fn next(&self) -> Option<TokenRef<'a>> {
        self.sentence
            .next(self.token)
            .map(|token| TokenRef::new(self.sentence, token))
    }

    pub fn previous(&self) -> Option<TokenRef<'a>> {
        self.sentence
            .previous(self.token)
            .map(|token| TokenRef::new(self.sentence, token))
    }

    /// The governing token; `None` for roots and unresolved heads.
    pub fn head(&self) -> Option<TokenRef<'a>> {
        self.token.head.token().and_then(|id| self.sentence.get(id))
    }

    pub fn dependants(&self) -> Result<Vec<TokenRef<'a>>> {
        Ok(self
            .sentence
            .dependants(self.token)?
            .iter()
            .filter_map(|&id| self.sentence.get(id))
            .collect())
    }

    pub fn group(&self) -> Result<Group<'a>> {
        self.sentence.subtree_group(self.token)
    }
}

impl Deref for TokenRef<'_> {
    type Target = Token;

    fn deref(&self) -> &Token {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use syntagma_protocol::TokenId;

    #[test]
    fn navigation() {
        let mut sentence = testing::il_mange();
        sentence.resolve_heads().unwrap();

        let une = sentence.get(TokenId(3)).unwrap();
        assert_eq!(une.word, "une");
        assert_eq!(une.head().map(|h| h.word.clone()), Some("pomme".to_string()));
        assert_eq!(une.previous().unwrap().word, "mange");
        assert_eq!(une.next().unwrap().next().map(|t| t.id), None);

        let mange = une.previous().unwrap();
        assert!(mange.head().is_none());
        let words: Vec<&str> = mange.dependants().unwrap().iter().map(|t| t.token().word.as_str()).collect();
        assert_eq!(words, vec!["Il", "pomme"]);
        assert_eq!(mange.group().unwrap().members.len(), 4);
    }
}
