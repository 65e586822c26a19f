use crate::CharType;

/// Configuration for building a suffix tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Unique character appended to the text (default: `CharType::MAX`).
    /// It must not occur in the text.
    pub terminator: CharType,
    /// When set to `k`, every character must lie in `0..k`.
    pub alphabet_size: Option<CharType>,
    /// Fold ASCII letters to lowercase for byte and `&str` input and queries.
    pub case_insensitive: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            terminator: CharType::MAX,
            alphabet_size: None,
            case_insensitive: false,
        }
    }
}

impl TreeConfig {
    #[must_use]
    pub fn with_terminator(mut self, terminator: CharType) -> Self {
        self.terminator = terminator;
        self
    }

    #[must_use]
    pub fn with_alphabet_size(mut self, alphabet_size: CharType) -> Self {
        self.alphabet_size = Some(alphabet_size);
        self
    }

    #[must_use]
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Widens a byte to a character, folding case if configured.
    pub(crate) fn map_byte(&self, b: u8) -> CharType {
        if self.case_insensitive {
            CharType::from(b.to_ascii_lowercase())
        } else {
            CharType::from(b)
        }
    }

    pub(crate) fn map_bytes(&self, bytes: &[u8]) -> Vec<CharType> {
        bytes.iter().map(|&b| self.map_byte(b)).collect()
    }
}
