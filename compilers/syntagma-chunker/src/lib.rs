//! Splits a resolved sentence into role-labelled chunks.
//!
//! Each root starts a chunk: a verb root gathers itself and its auxiliary
//! chain into a `VRB` chunk, any other root takes its whole subtree as an
//! `OBJ` chunk. Every remaining token governed by a verb chunk then heads a
//! chunk made of its subtree, labelled through the role table.

pub mod config;

use std::collections::{BTreeSet, VecDeque};

use log::{debug, trace};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use syntagma_doc::{Chunk, Document, Sentence, Token};
use syntagma_protocol::{ChunkRole, Result, SyntagmaError, TokenId};

pub use config::ChunkerConfig;

static FRENCH: Lazy<Chunker> = Lazy::new(Chunker::default);

#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChunkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Rebuilds the sentence's chunk list from scratch and tags every token
    /// with its chunk role. Returns the number of chunks.
    pub fn chunk(&self, sentence: &mut Sentence) -> Result<usize> {
        sentence.reset_chunks();
        let chunks = self.build(sentence)?;
        let count = chunks.len();

        for chunk in &chunks {
            trace!("sentence {}: {}", sentence.id(), chunk.display(sentence));
        }
        debug!("sentence {}: {} chunks", sentence.id(), count);

        sentence.set_chunks(chunks);
        Ok(count)
    }

    /// Chunks every sentence of the document, sentences in parallel.
    pub fn chunk_document(&self, document: &mut Document) -> Result<usize> {
        document
            .sentences_mut()
            .par_iter_mut()
            .map(|sentence| self.chunk(sentence))
            .try_reduce(|| 0, |a, b| Ok(a + b))
    }

    /// Computes the chunks without touching the sentence.
    pub fn build(&self, sentence: &Sentence) -> Result<Vec<Chunk>> {
        let id = sentence.id();
        sentence.tree()?;

        let roots: Vec<&Token> = sentence.roots().collect();
        if roots.is_empty() {
            return Err(SyntagmaError::NoRoot { sentence: id });
        }

        // Roots and auxiliaries are never classified on their own.
        let mut consumed: BTreeSet<TokenId> = roots.iter().map(|root| root.id).collect();
        let mut chunks = Vec::new();

        // 1. One chunk per root
        for root in &roots {
            if self.config.verb_tags.contains(&root.pos) {
                chunks.push(self.verb_chunk(sentence, root, &mut consumed)?);
            } else {
                let group = sentence.subtree_group(root)?;
                chunks.push(Chunk::new(id, ChunkRole::Object, group.members));
            }
        }

        // 2. Subtrees governed by a verb chunk
        let verb_tokens: BTreeSet<TokenId> = chunks
            .iter()
            .filter(|chunk| chunk.role() == ChunkRole::Verb)
            .flat_map(|chunk| chunk.tokens().iter().copied())
            .collect();

        for token in sentence.tokens() {
            if consumed.contains(&token.id) {
                continue;
            }
            let Some(head) = token.head.token() else {
                continue;
            };
            if !verb_tokens.contains(&head) {
                continue;
            }

            let role = self.config.roles.lookup(&token.dep).ok_or_else(|| {
                SyntagmaError::UnknownDependencyLabel {
                    sentence: id,
                    token: token.id,
                    label: token.dep.clone(),
                }
            })?;
            let group = sentence.subtree_group(token)?;
            chunks.push(Chunk::new(id, role, group.members));
        }

        // 3. Order by first token
        chunks.sort_by_key(Chunk::first);

        check_coverage(sentence, &chunks)?;
        Ok(chunks)
    }

    /// The root plus every token reached from it through auxiliary labels.
    fn verb_chunk(&self, sentence: &Sentence, root: &Token, consumed: &mut BTreeSet<TokenId>) -> Result<Chunk> {
        let tree = sentence.tree()?;
        let mut members = vec![root.id];
        let mut queue: VecDeque<TokenId> = tree.dependants(root.id).iter().copied().collect();

        while let Some(current) = queue.pop_front() {
            let Some(token) = sentence.token(current) else {
                continue;
            };
            if self.config.auxiliaries.contains(&token.dep) {
                members.push(current);
                consumed.insert(current);
                queue.extend(tree.dependants(current).iter().copied());
            }
        }

        Ok(Chunk::new(sentence.id(), ChunkRole::Verb, members))
    }
}

/// Every token of the sentence must belong to exactly one chunk.
///
/// For a forest this always holds: walking up from any token, the first
/// ancestor whose head sits in a verb chunk (or the root itself) heads the
/// chunk containing it. A hole means the tree and the tokens disagree.
fn check_coverage(sentence: &Sentence, chunks: &[Chunk]) -> Result<()> {
    let mut assigned = BTreeSet::new();
    for chunk in chunks {
        for &token in chunk.tokens() {
            let fresh = assigned.insert(token);
            debug_assert!(fresh, "token {} appears in two chunks", token);
        }
    }

    match sentence.tokens().iter().find(|token| !assigned.contains(&token.id)) {
        Some(token) => Err(SyntagmaError::UnclassifiedToken {
            sentence: sentence.id(),
            token: token.id,
        }),
        None => Ok(()),
    }
}

/// `sentence.chunk()` with the French tables.
pub trait ChunkSentence {
    fn chunk(&mut self) -> Result<&[Chunk]>;
}

impl ChunkSentence for Sentence {
    fn chunk(&mut self) -> Result<&[Chunk]> {
        FRENCH.chunk(self)?;
        Ok(self.chunks())
    }
}
