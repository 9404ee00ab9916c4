/// The evaluator module reduces expression trees to results.
///
/// The evaluator walks the tree produced by the parser, applying arithmetic
/// operators to numbers and logical operators to booleans, and produces a
/// single tagged value. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates terminal, unary and binary nodes recursively.
/// - Dispatches binary operators by category-set membership.
/// - Reports type mismatches and factorial domain errors.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads one raw line and produces an ordered, sentinel-terminated
/// stream of tokens. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into categorized tokens.
/// - Handles numeric and boolean literals and multi-character operators.
/// - Reports unrecognized characters without aborting the scan, and raises
///   hard errors for broken operator sequences and unknown keywords.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser consumes the token stream under a fixed precedence grammar and
/// produces a single tree root for the evaluator to walk.
///
/// # Responsibilities
/// - Folds binary operators left-associatively per precedence tier.
/// - Rewrites unary minus into multiplication by negative one.
/// - Validates factors, parenthesization and postfix factorials.
pub mod parser;
/// The token module defines the lexical vocabulary.
///
/// This module declares the closed set of token categories, the concrete
/// token record with its lexeme and optional literal payload, and the
/// sentinel-terminated stream type shared by the lexer and parser.
///
/// # Responsibilities
/// - Defines `TokenCategory`, `Token`, `Literal` and `TokenStream`.
/// - Provides the derived literal/arithmetic/logical category sets.
pub mod token;
/// The value module defines the runtime result type.
///
/// A computation produces either a number or a boolean; this module declares
/// that tagged result and its checked accessors.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two variants.
/// - Implements conversion, inspection and display helpers.
pub mod value;
