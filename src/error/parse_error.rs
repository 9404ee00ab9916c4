#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token that cannot start a factor.
    UnexpectedToken {
        /// The source text of the token encountered.
        found: String,
    },
    /// Reached the end of the stream where a factor was expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source text of the token found instead.
        found: String,
    },
    /// A bare terminal that is not a literal appeared where an operand of a
    /// multiplication or division chain is required.
    InvalidOperand {
        /// The source text of the offending token.
        found: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found } => write!(f, "Unexpected token: {found}."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen { found } => {
                write!(f, "Expected closing parenthesis ')' but found {found}.")
            },

            Self::InvalidOperand { found } => {
                write!(f, "Expected a literal operand but found {found}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
