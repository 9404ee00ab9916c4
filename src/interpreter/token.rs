use logos::Logos;

use crate::error::LexError;

/// The lexical category of a token.
///
/// This enum is the closed set of everything the scanner can recognize, and
/// doubles as the `logos` token definition. Longest-match resolution handles
/// the multi-character operators: `<=>` wins over `<=`, which wins over `<`,
/// and `!=` wins over `!`. A lone `&`, `|`, or `=` has no pattern of its own;
/// the lexer turns the resulting match failure into a hard sequence error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \r]+")]
pub enum TokenCategory {
    // Arithmetic operators
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Factorial,

    // Logical operators
    /// `&&`
    #[token("&&")]
    Conjunction,
    /// `||`
    #[token("||")]
    Disjunction,
    /// `~`
    #[token("~")]
    LogicalNegation,
    /// `=>`
    #[token("=>")]
    Implication,
    /// `<=>`
    #[token("<=>")]
    BiCondition,

    // Comparison operators
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<`
    #[token("<")]
    LessThan,
    /// `<=`
    #[token("<=")]
    LessOrEqual,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `>=`
    #[token(">=")]
    GreaterOrEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,

    // Brackets
    /// `(`
    #[token("(")]
    LeftParenthesis,
    /// `)`
    #[token(")")]
    RightParenthesis,

    // Literals
    /// Numeric literal tokens, such as `42`, `3.14` or `1.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// Boolean literal tokens: a run of letters resolved against the keyword
    /// table. Anything other than `true` or `false` is an unknown keyword.
    #[regex(r"[a-zA-Z]+", resolve_keyword)]
    Boolean,

    /// The sentinel terminating every token stream. Never matched from
    /// source text; the lexer appends it after the input is exhausted.
    EndOfFile,
}

impl TokenCategory {
    /// Returns `true` for the literal categories, `Number` and `Boolean`.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Number | Self::Boolean)
    }

    /// Returns `true` for the arithmetic operator categories.
    #[must_use]
    pub const fn is_arithmetic_operator(self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Asterisk
                 | Self::Slash
                 | Self::Caret
                 | Self::Factorial)
    }

    /// Returns `true` for the logical operator categories.
    #[must_use]
    pub const fn is_logical_operator(self) -> bool {
        matches!(self,
                 Self::Conjunction
                 | Self::Disjunction
                 | Self::LogicalNegation
                 | Self::Implication
                 | Self::BiCondition)
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Factorial => "!",
            Self::Conjunction => "&&",
            Self::Disjunction => "||",
            Self::LogicalNegation => "~",
            Self::Implication => "=>",
            Self::BiCondition => "<=>",
            Self::EqualEqual => "==",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::BangEqual => "!=",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::EndOfFile => "EOF",
        };
        write!(f, "{text}")
    }
}

/// The literal payload a token may carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// A numeric literal value.
    Number(f64),
    /// A boolean literal value.
    Boolean(bool),
}

/// A minimal meaningful unit of source text.
///
/// A token records its category, the exact text it was scanned from, and the
/// literal value for number and boolean tokens. Tokens are immutable once
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The lexical category.
    pub category: TokenCategory,
    /// The source text this token was scanned from.
    pub lexeme: String,
    /// The literal value, populated for `Number` and `Boolean` tokens only.
    pub literal: Option<Literal>,
}

/// An ordered sequence of tokens, terminated by exactly one `EndOfFile`
/// sentinel and therefore never empty.
pub type TokenStream = Vec<Token>;

impl Token {
    /// Builds a token from its category and the source slice it matched.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::token::{Literal, Token, TokenCategory};
    ///
    /// let token = Token::new(TokenCategory::Number, "2.5");
    /// assert_eq!(token.literal, Some(Literal::Number(2.5)));
    /// ```
    #[must_use]
    pub fn new(category: TokenCategory, lexeme: &str) -> Self {
        let literal = match category {
            TokenCategory::Number => lexeme.parse().ok().map(Literal::Number),
            TokenCategory::Boolean => keyword_literal(lexeme).map(Literal::Boolean),
            _ => None,
        };

        Self { category,
               lexeme: lexeme.to_string(),
               literal }
    }

    /// Builds a synthesized number token. The parser uses this for the
    /// empty-input zero and for rewriting unary minus.
    #[must_use]
    pub fn number(lexeme: &str, value: f64) -> Self {
        Self { category: TokenCategory::Number,
               lexeme:   lexeme.to_string(),
               literal:  Some(Literal::Number(value)), }
    }

    /// Builds the sentinel token that terminates every stream.
    #[must_use]
    pub fn end_of_stream() -> Self {
        Self { category: TokenCategory::EndOfFile,
               lexeme:   "EOF".to_string(),
               literal:  None, }
    }
}

/// The fixed keyword table. The only identifiers the language knows are the
/// two boolean literals.
fn keyword_literal(lexeme: &str) -> Option<bool> {
    match lexeme {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Resolves a scanned run of letters against the keyword table, rejecting
/// everything that is not a boolean literal.
fn resolve_keyword(lex: &mut logos::Lexer<TokenCategory>) -> Result<(), LexError> {
    if keyword_literal(lex.slice()).is_some() {
        Ok(())
    } else {
        Err(LexError::UnknownKeyword { keyword: lex.slice().to_string(), })
    }
}
