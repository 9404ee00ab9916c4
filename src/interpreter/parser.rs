use std::iter::Peekable;

use crate::{
    ast::ParseNode,
    error::ParseError,
    interpreter::token::{Token, TokenCategory, TokenStream},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream into the root of an expression tree.
///
/// The cursor moves over the stream once, left to right, with single-token
/// lookahead and no backtracking. Tokens left over after a complete
/// expression are not consumed.
///
/// A stream holding nothing but the sentinel degenerates to the literal zero
/// instead of failing, so an empty line evaluates to `0`.
///
/// # Errors
/// Returns a `ParseError` when a factor is malformed, the stream ends where
/// a factor is expected, or a parenthesis is left unclosed.
///
/// # Example
/// ```
/// use numera::{
///     interpreter::{lexer::Lexer, parser::parse},
///     reporting::Reporter,
/// };
///
/// let tokens = Lexer::new("1 + 2").scan_all_tokens(&mut Reporter::new()).unwrap();
/// assert!(parse(&tokens).is_ok());
/// ```
pub fn parse(tokens: &TokenStream) -> ParseResult<ParseNode> {
    let mut cursor = tokens.iter().peekable();

    if let Some(token) = cursor.peek()
       && token.category == TokenCategory::EndOfFile
    {
        return Ok(ParseNode::Terminal { value: Token::number("0", 0.0), });
    }

    parse_expression(&mut cursor)
}

/// Parses the lowest-precedence tier.
///
/// Grammar: `expression := term (("+" | "-" | "&&" | "||") term)*`
///
/// Each separator folds the tree built so far and the next term into a new
/// binary node, so chains associate to the left.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && is_expression_separator(token.category)
        {
            let operator = token.category;
            tokens.next();

            let right = parse_term(tokens)?;

            left = ParseNode::Binary { operator,
                                       left: Box::new(left),
                                       right: Box::new(right), };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses the multiplication tier.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
///
/// Every factor in the chain, the first included, must not be a bare
/// non-literal terminal.
fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;
    ensure_literal_operand(&left)?;

    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.category,
                       TokenCategory::Asterisk | TokenCategory::Slash)
        {
            let operator = token.category;
            tokens.next();

            let right = parse_factor(tokens)?;
            ensure_literal_operand(&right)?;

            left = ParseNode::Binary { operator,
                                       left: Box::new(left),
                                       right: Box::new(right), };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses the tightest-binding tier.
///
/// Grammar:
/// ```text
///     factor := NUMBER | BOOLEAN
///             | "(" expression ")"
///             | "-" factor
///             | "~" factor
/// ```
/// with an optional postfix `!` applied to whatever was just parsed,
/// parenthesized sub-expressions and negations included.
///
/// Unary minus does not get a node of its own: `-x` is rewritten into
/// `(-1) * x`, keeping the evaluator's binary arithmetic path uniform.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    let factor = match token.category {
        TokenCategory::Number | TokenCategory::Boolean => {
            ParseNode::Terminal { value: token.clone(), }
        },

        TokenCategory::LeftParenthesis => {
            let inner = parse_expression(tokens)?;
            match tokens.next() {
                Some(closing) if closing.category == TokenCategory::RightParenthesis => inner,
                Some(other) => {
                    return Err(ParseError::ExpectedClosingParen { found: other.lexeme.clone(), });
                },
                None => return Err(ParseError::UnexpectedEndOfInput),
            }
        },

        TokenCategory::Minus => {
            let operand = parse_factor(tokens)?;
            ParseNode::Binary { operator: TokenCategory::Asterisk,
                                left: Box::new(ParseNode::Terminal { value:
                                                                         Token::number("-1", -1.0), }),
                                right: Box::new(operand), }
        },

        TokenCategory::LogicalNegation => {
            let operand = parse_factor(tokens)?;
            ParseNode::Unary { operator: TokenCategory::LogicalNegation,
                               operand:  Box::new(operand), }
        },

        TokenCategory::EndOfFile => return Err(ParseError::UnexpectedEndOfInput),

        _ => return Err(ParseError::UnexpectedToken { found: token.lexeme.clone(), }),
    };

    // The factorial binds to the factor just parsed, so `5!`, `(1+2)!` and
    // `~true!` all work the same way.
    if let Some(next) = tokens.peek()
       && next.category == TokenCategory::Factorial
    {
        tokens.next();
        return Ok(ParseNode::Unary { operator: TokenCategory::Factorial,
                                     operand:  Box::new(factor), });
    }

    Ok(factor)
}

/// Rejects a bare terminal whose token is not a literal category.
///
/// The factor grammar already refuses such tokens, so this guard is a second
/// line of defense on the multiplication chain.
fn ensure_literal_operand(node: &ParseNode) -> ParseResult<()> {
    if let ParseNode::Terminal { value } = node
       && !value.category.is_literal()
    {
        return Err(ParseError::InvalidOperand { found: value.lexeme.clone(), });
    }

    Ok(())
}

/// The separators valid at the expression tier.
const fn is_expression_separator(category: TokenCategory) -> bool {
    matches!(category,
             TokenCategory::Plus
             | TokenCategory::Minus
             | TokenCategory::Conjunction
             | TokenCategory::Disjunction)
}
