//! The indexed text: the caller's characters followed by one terminator.

use std::sync::Arc;

use crate::config::TreeConfig;
use crate::error::{Result, SuffixTreeError};
use crate::{CharType, IndexType, INVALID};

/// Shared, immutable character buffer. Node edges are index ranges into it,
/// so cloning a `Text` never copies characters.
#[derive(Debug, Clone)]
pub(crate) struct Text {
    data: Arc<[CharType]>,
}

impl Text {
    /// Validates `s` against `config` and appends the terminator.
    pub(crate) fn new(mut s: Vec<CharType>, config: &TreeConfig) -> Result<Self> {
        validate_config(config)?;
        validate_string(&s, config)?;

        s.push(config.terminator);
        Ok(Self { data: s.into() })
    }

    /// Length including the terminator.
    pub(crate) fn len(&self) -> IndexType {
        self.data.len()
    }

    pub(crate) fn char_at(&self, index: IndexType) -> CharType {
        self.data[index]
    }

    pub(crate) fn slice(&self, start: IndexType, end: IndexType) -> &[CharType] {
        &self.data[start..end]
    }

    /// The caller's text, without the terminator.
    pub(crate) fn body(&self) -> &[CharType] {
        &self.data[..self.data.len() - 1]
    }

    pub(crate) fn terminator(&self) -> CharType {
        self.data[self.data.len() - 1]
    }
}

fn validate_config(config: &TreeConfig) -> Result<()> {
    match config.alphabet_size {
        Some(0) => Err(SuffixTreeError::EmptyAlphabet),
        Some(alphabet_size) if config.terminator < alphabet_size => {
            Err(SuffixTreeError::TerminatorInAlphabet {
                terminator: config.terminator,
                alphabet_size,
            })
        }
        _ => Ok(()),
    }
}

fn validate_string(s: &[CharType], config: &TreeConfig) -> Result<()> {
    // One slot for the terminator, and `INVALID` stays reserved.
    if s.len() >= INVALID - 1 {
        return Err(SuffixTreeError::TextTooLong { len: s.len() });
    }
    if let Some(position) = s.iter().position(|&ch| ch == config.terminator) {
        return Err(SuffixTreeError::TerminatorInText { position });
    }
    if let Some(alphabet_size) = config.alphabet_size {
        if let Some(position) = s.iter().position(|&ch| ch >= alphabet_size) {
            return Err(SuffixTreeError::CharOutOfAlphabet {
                position,
                ch: s[position],
                alphabet_size,
            });
        }
    }
    Ok(())
}
