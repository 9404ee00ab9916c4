/// Evaluation errors.
///
/// Contains all error types that can be raised while walking an expression
/// tree: operand type mismatches, factorial domain violations, overflow, and
/// internal invariant breaks.
pub mod eval_error;
/// Lexical errors.
///
/// Defines all error types the scanner can produce: unrecognized characters,
/// broken two-character operator sequences, and unknown keywords.
pub mod lex_error;
/// Parse errors.
///
/// Defines all error types detected while building the expression tree:
/// unexpected tokens, premature end of input, and unbalanced parentheses.
pub mod parse_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug)]
/// Any failure the pipeline can produce, tagged by the stage that raised it.
///
/// Callers that do not care about the stage can display it directly; callers
/// that do can match on the variant.
pub enum InterpretError {
    /// The lexer rejected the input text.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// The evaluator rejected the expression tree.
    Eval(EvalError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}

impl From<LexError> for InterpretError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for InterpretError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for InterpretError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
