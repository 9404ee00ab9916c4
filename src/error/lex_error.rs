#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning a line into tokens.
pub enum LexError {
    /// A character no token pattern recognizes.
    ///
    /// This is the one lexical failure that does not abort scanning: the
    /// lexer reports it and resumes with the next character.
    InvalidCharacter {
        /// The character encountered.
        character: char,
    },
    /// The first character of a two-character operator whose second
    /// character is missing or wrong.
    InvalidSequence {
        /// The offending character together with what followed it.
        sequence: String,
    },
    /// A run of letters that does not name a known keyword.
    UnknownKeyword {
        /// The identifier encountered.
        keyword: String,
    },
}

/// The fallback error `logos` produces for input no token pattern matches.
/// The lexer replaces the placeholder character with the actual slice.
impl Default for LexError {
    fn default() -> Self {
        Self::InvalidCharacter { character: '\u{0}' }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character } => write!(f, "Invalid character: {character}"),

            Self::InvalidSequence { sequence } => write!(f, "Invalid token sequence: {sequence}"),

            Self::UnknownKeyword { keyword } => write!(f, "Invalid keyword: {keyword}"),
        }
    }
}

impl std::error::Error for LexError {}
