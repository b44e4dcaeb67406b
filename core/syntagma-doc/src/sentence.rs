use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use syntagma_protocol::{ChunkRole, Result, SentenceId, SentenceKey, SyntagmaError, TokenId};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::chunk::Chunk;
use crate::token::{Head, Token, TYPE_FEATURE};
use crate::tree::DependencyTree;
use crate::view::TokenRef;

/// A token's subtree together with the token's own dependency label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: &'a str,
    pub members: BTreeSet<TokenId>,
}

/// Ordered tokens of one sentence, its dependency tree once heads are
/// resolved, and the chunks of the last chunking run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Sentence {
    key: SentenceKey,
    tokens: Vec<Token>,
    #[cfg_attr(feature = "serde", serde(skip))]
    tree: Option<DependencyTree>,
    chunks: Vec<Chunk>,
    /// Input `type` values overwritten by the current chunks.
    #[cfg_attr(feature = "serde", serde(skip))]
    displaced: BTreeMap<TokenId, Vec<String>>,
}

impl Sentence {
    /// Sentences are handed out by [`crate::Document::new_sentence`].
    pub(crate) fn new(key: SentenceKey) -> Self {
        Self {
            key,
            tokens: Vec::new(),
            tree: None,
            chunks: Vec::new(),
            displaced: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> SentenceId {
        self.key.sentence
    }

    pub fn key(&self) -> SentenceKey {
        self.key
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index()).filter(|token| token.id == id)
    }

    pub fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id.index()).filter(|token| token.id == id)
    }

    /// Borrowed view of a token that can navigate its sentence.
    pub fn get(&self, id: TokenId) -> Option<TokenRef<'_>> {
        self.token(id).map(|token| TokenRef::new(self, token))
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenRef<'_>> {
        self.tokens.iter().map(move |token| TokenRef::new(self, token))
    }

    /// Appends a token in textual order. Any previously built tree is dropped.
    pub fn push_token(&mut self, mut token: Token) -> TokenId {
        token.attach(self.key);
        let id = token.id;
        self.tokens.push(token);
        self.tree = None;
        id
    }

    /// Turns raw head ids into [`Head::Root`] / [`Head::Resolved`] and builds
    /// the dependency tree. Calling it again is a no-op.
    pub fn resolve_heads(&mut self) -> Result<()> {
        let sentence = self.key.sentence;
        let len = self.tokens.len();

        for token in &mut self.tokens {
            if let Head::Unresolved(raw) = token.head {
                token.head = match raw {
                    0 => Head::Root,
                    k if k > 0 && k <= len as i64 => Head::Resolved(TokenId(k as u32)),
                    k => {
                        return Err(SyntagmaError::DanglingHeadReference {
                            sentence,
                            token: token.id,
                            head: k,
                            len,
                        })
                    }
                };
            }
        }

        if self.tree.is_none() {
            self.tree = Some(DependencyTree::build(sentence, &self.tokens)?);
        }
        Ok(())
    }

    pub fn is_resolved(&self) -> bool {
        self.tree.is_some()
    }

    pub fn tree(&self) -> Result<&DependencyTree> {
        self.tree
            .as_ref()
            .ok_or(SyntagmaError::TreeNotBuilt { sentence: self.key.sentence })
    }

    pub fn roots(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_root())
    }

    /// Ids of the tokens whose head is `token`.
    pub fn dependants(&self, token: &Token) -> Result<&[TokenId]> {
        Ok(self.tree()?.dependants(token.id))
    }

    pub fn subtree_group<'a>(&self, token: &'a Token) -> Result<Group<'a>> {
        Ok(Group {
            label: &token.dep,
            members: self.tree()?.subtree(token.id)?,
        })
    }

    pub fn next(&self, token: &Token) -> Option<&Token> {
        self.tokens.get(token.id.index() + 1)
    }

    pub fn previous(&self, token: &Token) -> Option<&Token> {
        token
            .id
            .index()
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn select_by_pos<'a>(&'a self, pos: &'a str) -> impl Iterator<Item = &'a Token> + 'a {
        self.tokens.iter().filter(move |token| token.pos == pos)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn chunks_by_role(&self, role: ChunkRole) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(move |chunk| chunk.role() == role)
    }

    /// Roles of the chunks in order, e.g. `[SUJ, VRB, OBJ]`.
    pub fn structure(&self) -> Vec<ChunkRole> {
        self.chunks.iter().map(Chunk::role).collect()
    }

    /// Drops the chunks. Tokens they tagged get back the `type` value read
    /// from the input, or lose the feature if there was none.
    pub fn reset_chunks(&mut self) {
        let tagged: Vec<TokenId> = self.chunks.drain(..).flat_map(|chunk| chunk.tokens().to_vec()).collect();
        for id in tagged {
            let input = self.displaced.remove(&id);
            if let Some(token) = self.token_mut(id) {
                match input {
                    Some(values) => {
                        token.feats.insert(TYPE_FEATURE, values);
                    }
                    None => {
                        token.feats.remove(TYPE_FEATURE);
                    }
                }
            }
        }
    }

    /// Replaces the chunk list and records each chunk's role on its tokens.
    pub fn set_chunks(&mut self, chunks: Vec<Chunk>) {
        self.reset_chunks();
        for chunk in &chunks {
            for &id in chunk.tokens() {
                let Some(token) = self.tokens.get_mut(id.index()).filter(|token| token.id == id) else {
                    continue;
                };
                if let Some(input) = token.feats.insert(TYPE_FEATURE, vec![chunk.role().tag().to_string()]) {
                    self.displaced.insert(id, input);
                }
            }
        }
        self.chunks = chunks;
    }

    /// The sentence as 8-field input records, heads back to integers.
    pub fn to_conll(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t_\t{}\t{}\t{}\n",
                token.id,
                token.word,
                token.lemma,
                token.pos,
                token.feats,
                token.head.raw(),
                token.dep
            ));
        }
        out
    }
}

/// Sentences compare by owning document and id.
impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Sentence {}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID\tWORD\tLEMMA\tPOS\tHEAD\tDEP\tFEATS")?;
        for token in &self.tokens {
            write!(f, "\n{}", token)?;
        }
        Ok(())
    }
}
