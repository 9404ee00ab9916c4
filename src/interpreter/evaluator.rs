use crate::{
    ast::ParseNode,
    error::EvalError,
    interpreter::{
        token::{Literal, Token, TokenCategory},
        value::Value,
    },
    math,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces an expression tree to a single tagged value.
///
/// Evaluation is a pure recursion over the tree: operands are computed left
/// to right, nothing is mutated, and the first failure is returned as-is.
///
/// # Errors
/// Returns an `EvalError` when an operand has the wrong type for its
/// operator, a factorial is applied to a negative number or overflows, or an
/// operator without an evaluation rule reaches a node.
///
/// # Example
/// ```
/// use numera::{
///     interpreter::{evaluator::evaluate, lexer::Lexer, parser::parse, value::Value},
///     reporting::Reporter,
/// };
///
/// let tokens = Lexer::new("(2+3)*4").scan_all_tokens(&mut Reporter::new()).unwrap();
/// let tree = parse(&tokens).unwrap();
///
/// assert_eq!(evaluate(&tree).unwrap(), Value::Number(20.0));
/// ```
pub fn evaluate(tree: &ParseNode) -> EvalResult<Value> {
    match tree {
        ParseNode::Terminal { value } => evaluate_terminal(value),
        ParseNode::Unary { operator, operand } => evaluate_unary(*operator, operand),
        ParseNode::Binary { operator, left, right } => evaluate_binary(*operator, left, right),
    }
}

/// Reads the literal payload off a terminal token and wraps it in the
/// matching value variant. A terminal without a payload means the parser let
/// a non-literal token through, which is an internal failure.
fn evaluate_terminal(token: &Token) -> EvalResult<Value> {
    match token.literal {
        Some(Literal::Number(number)) => Ok(Value::Number(number)),
        Some(Literal::Boolean(boolean)) => Ok(Value::Bool(boolean)),
        None => Err(EvalError::InvalidLiteral { lexeme: token.lexeme.clone(), }),
    }
}

/// Dispatches a binary node by the operator's set membership: arithmetic
/// operators need two numbers, logical operators need two booleans.
fn evaluate_binary(operator: TokenCategory,
                   left: &ParseNode,
                   right: &ParseNode)
                   -> EvalResult<Value> {
    if operator.is_arithmetic_operator() {
        compute_binary_arithmetic(operator, left, right)
    } else if operator.is_logical_operator() {
        compute_binary_logical(operator, left, right)
    } else {
        Err(EvalError::UnsupportedOperator { operator })
    }
}

/// Applies `+`, `-`, `*` or `/` to two numeric operands with IEEE double
/// semantics. Division by zero is not trapped: it produces an infinity or
/// NaN like any other floating-point division.
fn compute_binary_arithmetic(operator: TokenCategory,
                             left: &ParseNode,
                             right: &ParseNode)
                             -> EvalResult<Value> {
    let left = evaluate(left)?.as_number()?;
    let right = evaluate(right)?.as_number()?;

    match operator {
        TokenCategory::Plus => Ok(Value::Number(left + right)),
        TokenCategory::Minus => Ok(Value::Number(left - right)),
        TokenCategory::Asterisk => Ok(Value::Number(left * right)),
        TokenCategory::Slash => Ok(Value::Number(left / right)),
        _ => Err(EvalError::UnsupportedOperator { operator }),
    }
}

/// Applies conjunction or disjunction to two boolean operands.
fn compute_binary_logical(operator: TokenCategory,
                          left: &ParseNode,
                          right: &ParseNode)
                          -> EvalResult<Value> {
    let left = evaluate(left)?.as_bool()?;
    let right = evaluate(right)?.as_bool()?;

    match operator {
        TokenCategory::Conjunction => Ok(Value::Bool(left && right)),
        TokenCategory::Disjunction => Ok(Value::Bool(left || right)),
        _ => Err(EvalError::UnsupportedOperator { operator }),
    }
}

/// Evaluates a unary node.
///
/// The factorial requires a numeric operand: negative values fail before
/// truncation, the truncated integer goes through the iterative factorial,
/// and overflow surfaces as an error instead of wrapping. Logical negation
/// requires a boolean operand and returns its complement.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
fn evaluate_unary(operator: TokenCategory, operand: &ParseNode) -> EvalResult<Value> {
    match operator {
        TokenCategory::Factorial => {
            let number = evaluate(operand)?.as_number()?;

            if number < 0.0 {
                return Err(EvalError::NegativeFactorial { operand: number });
            }

            let product = math::factorial(number.trunc() as u64).ok_or(EvalError::Overflow)?;
            Ok(Value::Number(product as f64))
        },

        TokenCategory::LogicalNegation => {
            let boolean = evaluate(operand)?.as_bool()?;
            Ok(Value::Bool(!boolean))
        },

        _ => Err(EvalError::UnsupportedOperator { operator }),
    }
}
