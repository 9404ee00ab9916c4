use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Token, TokenCategory, TokenStream},
    reporting::Reporter,
};

/// Scans one line of source text into a token stream.
///
/// A lexer is bound to a single source string and used once. Whitespace is
/// exactly the space and carriage-return characters: newlines, tabs and form
/// feeds are not skipped and instead take the reported invalid-character
/// path, as do all other unrecognized characters.
pub struct Lexer<'source> {
    source: &'source str,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over the given source line.
    #[must_use]
    pub const fn new(source: &'source str) -> Self {
        Self { source }
    }

    /// Converts the source string to a stream of tokens.
    ///
    /// The returned stream always ends in exactly one end-of-stream sentinel.
    /// Unrecognized characters are pushed onto `reporter` as diagnostics and
    /// scanning continues; a broken operator sequence or an unknown keyword
    /// aborts the scan with a hard error.
    ///
    /// # Errors
    /// - `LexError::InvalidSequence` for a lone `&`, `|`, or `=`.
    /// - `LexError::UnknownKeyword` for letter runs other than `true`/`false`.
    ///
    /// # Example
    /// ```
    /// use numera::{interpreter::lexer::Lexer, reporting::Reporter};
    ///
    /// let mut reporter = Reporter::new();
    /// let tokens = Lexer::new("1 + 2").scan_all_tokens(&mut reporter).unwrap();
    ///
    /// assert_eq!(tokens.len(), 4); // 1, +, 2, sentinel
    /// assert!(reporter.is_empty());
    /// ```
    pub fn scan_all_tokens(self, reporter: &mut Reporter) -> Result<TokenStream, LexError> {
        let mut tokens = Vec::new();
        let mut lexer = TokenCategory::lexer(self.source);

        while let Some(scanned) = lexer.next() {
            match scanned {
                Ok(category) => tokens.push(Token::new(category, lexer.slice())),

                Err(LexError::InvalidCharacter { .. }) => {
                    let slice = lexer.slice();
                    let character = slice.chars().next().unwrap_or_default();

                    if matches!(character, '&' | '|' | '=') {
                        // The start of a two-character operator whose second
                        // character is missing or wrong.
                        let mut sequence = character.to_string();
                        if let Some(next) =
                            slice.chars().nth(1).or_else(|| lexer.remainder().chars().next())
                        {
                            sequence.push(next);
                        }
                        return Err(LexError::InvalidSequence { sequence });
                    }

                    // Reported, not fatal: scanning resumes with the next
                    // character.
                    reporter.report(LexError::InvalidCharacter { character }.to_string());
                },

                Err(error) => return Err(error),
            }
        }

        tokens.push(Token::end_of_stream());
        Ok(tokens)
    }
}
