use crate::{CharType, IndexType};

/// Errors raised while validating input, before any construction work starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SuffixTreeError {
    #[error("text contains the terminator character at position {position}")]
    TerminatorInText { position: IndexType },

    #[error("character {ch} at position {position} is outside the alphabet of size {alphabet_size}")]
    CharOutOfAlphabet {
        position: IndexType,
        ch: CharType,
        alphabet_size: CharType,
    },

    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("terminator {terminator} lies inside the alphabet of size {alphabet_size}")]
    TerminatorInAlphabet {
        terminator: CharType,
        alphabet_size: CharType,
    },

    #[error("text of length {len} is too long to index")]
    TextTooLong { len: usize },
}

pub type Result<T> = std::result::Result<T, SuffixTreeError>;
