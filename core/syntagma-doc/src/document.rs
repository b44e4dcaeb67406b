use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use syntagma_protocol::{
    DocumentId, GlobalTokenId, Result, SentenceId, SentenceKey, SyntagmaError, TokenId,
};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::sentence::Sentence;
use crate::token::Token;

static NEXT_DOCUMENT: AtomicU32 = AtomicU32::new(0);

// Naive: capitalised start, question mark at the very end.
static QUESTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^[A-Z].*\?$").expect("valid question pattern"));

/// Ordered sentences plus the raw text rebuilt from them, one sentence per line.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
    id: DocumentId,
    sentences: Vec<Sentence>,
    raw: String,
}

impl Document {
    pub fn new() -> Self {
        Self {
            id: DocumentId(NEXT_DOCUMENT.fetch_add(1, Ordering::Relaxed)),
            sentences: Vec::new(),
            raw: String::new(),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// An empty sentence numbered for the next attachment slot.
    pub fn new_sentence(&self) -> Sentence {
        Sentence::new(SentenceKey::new(self.id, SentenceId(self.sentences.len() as u32)))
    }

    /// Resolves the sentence and appends it. Its id must be the next position
    /// of this document; sentences are never renumbered.
    pub fn attach(&mut self, mut sentence: Sentence) -> Result<SentenceId> {
        let key = sentence.key();
        let position = self.sentences.len();
        if key.document != self.id || key.sentence.index() != position {
            return Err(SyntagmaError::ForeignSentence {
                expected: self.id,
                found: key.document,
                sentence: key.sentence,
                position,
            });
        }
        if sentence.is_empty() {
            return Err(SyntagmaError::EmptySentence { sentence: key.sentence });
        }

        sentence.resolve_heads()?;
        self.raw.push_str(&sentence.text());
        self.raw.push('\n');
        debug!("attached sentence {} ({} tokens)", key.sentence, sentence.len());

        self.sentences.push(sentence);
        Ok(key.sentence)
    }

    /// Re-applies head resolution to every sentence; already resolved ones are untouched.
    pub fn resolve_all(&mut self) -> Result<()> {
        self.sentences.iter_mut().try_for_each(Sentence::resolve_heads)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut [Sentence] {
        &mut self.sentences
    }

    pub fn sentence(&self, id: SentenceId) -> Option<&Sentence> {
        self.sentences.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn token(&self, sentence: SentenceId, token: TokenId) -> Option<&Token> {
        self.sentence(sentence)?.token(token)
    }

    /// Document-wide address of a token owned by this document.
    pub fn global_id(&self, token: &Token) -> Option<GlobalTokenId> {
        let owner = token.owner().filter(|owner| owner.document == self.id)?;
        Some(GlobalTokenId {
            sentence: owner.sentence,
            token: token.id,
        })
    }

    pub fn token_by_global_id(&self, id: GlobalTokenId) -> Option<&Token> {
        self.token(id.sentence, id.token)
    }

    pub fn is_question(&self) -> bool {
        QUESTION.is_match(self.raw.trim_end())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sentence) in self.sentences.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", sentence)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Features;

    fn push(sentence: &mut Sentence, rows: &[(&str, &str, i64, &str)]) {
        for (i, (word, pos, head, dep)) in rows.iter().enumerate() {
            sentence.push_token(Token::new(
                TokenId(i as u32 + 1),
                *word,
                *word,
                *pos,
                Features::new(),
                *head,
                *dep,
            ));
        }
    }

    fn two_sentences() -> Document {
        let mut doc = Document::new();
        let mut first = doc.new_sentence();
        push(&mut first, &[("Il", "CL", 2, "suj"), ("dort", "V", 0, "root")]);
        doc.attach(first).unwrap();
        let mut second = doc.new_sentence();
        push(&mut second, &[("Pourquoi", "ADVWH", 2, "mod"), ("?", "PONCT", 0, "root")]);
        doc.attach(second).unwrap();
        doc
    }

    #[test]
    fn attach_numbers_and_accumulates_text() {
        let doc = two_sentences();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences()[1].id(), SentenceId(1));
        assert_eq!(doc.raw(), "Il dort\nPourquoi ?\n");
        assert!(doc.sentences().iter().all(Sentence::is_resolved));
    }

    #[test]
    fn attach_rejects_stale_sentences() {
        let mut doc = Document::new();
        let mut first = doc.new_sentence();
        let stale = doc.new_sentence();
        push(&mut first, &[("Dors", "VIMP", 0, "root")]);
        doc.attach(first).unwrap();
        assert!(matches!(doc.attach(stale), Err(SyntagmaError::ForeignSentence { position: 1, .. })));

        let other = Document::new();
        assert!(matches!(
            doc.attach(other.new_sentence()),
            Err(SyntagmaError::ForeignSentence { .. })
        ));
    }

    #[test]
    fn attach_rejects_empty_sentences() {
        let mut doc = Document::new();
        let empty = doc.new_sentence();
        assert_eq!(doc.attach(empty), Err(SyntagmaError::EmptySentence { sentence: SentenceId(0) }));
        assert!(doc.is_empty());
        assert_eq!(doc.raw(), "");

        let mut sentence = doc.new_sentence();
        push(&mut sentence, &[("Dors", "VIMP", 0, "root")]);
        assert_eq!(doc.attach(sentence), Ok(SentenceId(0)));
        assert_eq!(doc.raw(), "Dors\n");
    }

    #[test]
    fn global_ids_round_trip() {
        let doc = two_sentences();
        let token = doc.token(SentenceId(1), TokenId(1)).unwrap();
        let global = doc.global_id(token).unwrap();
        assert_eq!(global.to_string(), "1:1");
        assert_eq!(doc.token_by_global_id(global), Some(token));
        assert_eq!(two_sentences().global_id(token), None);
    }

    #[test]
    fn sentence_equality_is_by_document_and_id() {
        let doc = two_sentences();
        let other = two_sentences();
        assert_eq!(doc.sentences()[0], doc.sentences()[0].clone());
        assert_ne!(doc.sentences()[0], doc.sentences()[1]);
        assert_ne!(doc.sentences()[0], other.sentences()[0]);
    }

    #[test]
    fn question_detection() {
        assert!(two_sentences().is_question());

        let mut doc = Document::new();
        let mut sentence = doc.new_sentence();
        push(&mut sentence, &[("il", "CL", 2, "suj"), ("dort", "V", 0, "root"), ("?", "PONCT", 2, "ponct")]);
        doc.attach(sentence).unwrap();
        assert!(!doc.is_question());
        assert!(!Document::new().is_question());
    }

    #[test]
    fn display_concatenates_sentences() {
        let doc = two_sentences();
        let rendered = doc.to_string();
        assert_eq!(rendered.matches("ID\tWORD").count(), 2);
        assert_eq!(doc.iter().count(), (&doc).into_iter().count());
    }
}
