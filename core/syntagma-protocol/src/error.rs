use thiserror::Error;

use crate::ids::{DocumentId, SentenceId, TokenId};

pub type Result<T, E = SyntagmaError> = core::result::Result<T, E>;

/// Structural and parsing failures. All of them are deterministic: callers
/// get them immediately and nothing is retried or skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntagmaError {
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("sentence {sentence}: token {token} has head {head}, outside [0, {len}]")]
    DanglingHeadReference {
        sentence: SentenceId,
        token: TokenId,
        head: i64,
        len: usize,
    },

    #[error("sentence {sentence}: dependency cycle through token {token}")]
    CyclicDependency { sentence: SentenceId, token: TokenId },

    #[error("sentence {sentence}: dependency tree is not built, resolve heads first")]
    TreeNotBuilt { sentence: SentenceId },

    #[error("sentence {sentence}: no root token")]
    NoRoot { sentence: SentenceId },

    #[error("sentence {sentence}: has no tokens")]
    EmptySentence { sentence: SentenceId },

    #[error("sentence {sentence}: token {token} has unknown dependency label '{label}'")]
    UnknownDependencyLabel {
        sentence: SentenceId,
        token: TokenId,
        label: String,
    },

    #[error("sentence {sentence}: token {token} was not assigned to any chunk")]
    UnclassifiedToken { sentence: SentenceId, token: TokenId },

    #[error("sentence {sentence} of document {found} cannot be attached to document {expected} at position {position}")]
    ForeignSentence {
        expected: DocumentId,
        found: DocumentId,
        sentence: SentenceId,
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_location() {
        let err = SyntagmaError::MalformedRecord {
            line: 7,
            reason: "expected 8 tab-separated fields, found 3".into(),
        };
        assert_eq!(err.to_string(), "line 7: malformed record: expected 8 tab-separated fields, found 3");

        let err = SyntagmaError::DanglingHeadReference {
            sentence: SentenceId(0),
            token: TokenId(2),
            head: 9,
            len: 4,
        };
        assert_eq!(err.to_string(), "sentence 0: token 2 has head 9, outside [0, 4]");
    }
}
