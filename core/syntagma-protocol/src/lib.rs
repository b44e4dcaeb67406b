pub mod error;
pub mod ids;
pub mod roles;
pub mod tables;

// Re-export core types for convenience
pub use error::{Result, SyntagmaError};
pub use ids::{DocumentId, GlobalTokenId, SentenceId, SentenceKey, TokenId};
pub use roles::ChunkRole;
pub use tables::{RoleTable, TagSet};
