//! In-memory document model built from a dependency-parser record stream.
//!
//! A [`Document`] owns its [`Sentence`]s, a sentence owns its [`Token`]s,
//! its [`DependencyTree`] and its [`Chunk`]s. Back references (token to
//! sentence, chunk to sentence) are plain ids; navigation that needs the
//! owning sentence goes through the borrowed [`TokenRef`] view.

pub mod chunk;
pub mod document;
pub mod features;
pub mod sentence;
pub mod token;
pub mod tree;
pub mod view;

pub use chunk::{Chunk, ChunkDisplay};
pub use document::Document;
pub use features::Features;
pub use sentence::{Group, Sentence};
pub use token::{Head, Token, TYPE_FEATURE};
pub use tree::DependencyTree;
pub use view::TokenRef;

pub use syntagma_protocol::{
    ChunkRole, DocumentId, GlobalTokenId, Result, SentenceId, SentenceKey, SyntagmaError, TokenId,
};
