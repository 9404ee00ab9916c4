use numera::{
    ast::ParseNode,
    error::InterpretError,
    evaluate_line,
    interpreter::{
        lexer::Lexer,
        parser,
        token::{Token, TokenCategory},
        value::Value,
    },
    reporting::Reporter,
};

fn eval(source: &str) -> Result<Value, InterpretError> {
    evaluate_line(source, &mut Reporter::new())
}

fn assert_number(source: &str, expected: f64) {
    assert_eq!(eval(source).unwrap(), Value::Number(expected), "wrong value for {source:?}");
}

fn assert_bool(source: &str, expected: bool) {
    assert_eq!(eval(source).unwrap(), Value::Bool(expected), "wrong value for {source:?}");
}

fn assert_failure(source: &str) {
    assert!(eval(source).is_err(),
            "{source:?} succeeded but was expected to fail");
}

fn scan(source: &str) -> Vec<Token> {
    Lexer::new(source).scan_all_tokens(&mut Reporter::new())
                      .unwrap()
}

#[test]
fn precedence_and_grouping() {
    assert_number("1+2*3", 7.0);
    assert_number("2*3+1", 7.0);
    assert_number("(2+3)*4", 20.0);
    assert_number("8-5", 3.0);
    assert_number("10/4", 2.5);
    assert_number("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn factorials() {
    assert_number("3!", 6.0);
    assert_number("0!", 1.0);
    assert_number("5!", 120.0);
    assert_number("(1+2)!", 6.0);
    assert_number("3!+1", 7.0);
}

#[test]
fn unary_minus_desugars_to_multiplication() {
    assert_number("-5", -5.0);
    assert_number("-(2+3)", -5.0);
    assert_number("2--3", 5.0);
    assert_number("-2*3", -6.0);

    let tree = parser::parse(&scan("-5")).unwrap();
    let ParseNode::Binary { operator, left, right } = tree else {
        panic!("expected a binary node");
    };
    assert_eq!(operator, TokenCategory::Asterisk);
    assert_eq!(*left, ParseNode::Terminal { value: Token::number("-1", -1.0) });
    assert!(matches!(*right, ParseNode::Terminal { .. }));
}

#[test]
fn logical_operators() {
    assert_bool("true&&false", false);
    assert_bool("true && true", true);
    assert_bool("false||true", true);
    assert_bool("~true", false);
    assert_bool("~false", true);
    assert_bool("~false&&true", true);
    assert_bool("true&&false||true", true);
}

#[test]
fn empty_input_is_zero() {
    assert_number("", 0.0);
    assert_number("   ", 0.0);
}

#[test]
fn division_by_zero_is_not_trapped() {
    assert_eq!(eval("1/0").unwrap(), Value::Number(f64::INFINITY));
    assert_eq!(eval("-1/0").unwrap(), Value::Number(f64::NEG_INFINITY));
}

#[test]
fn parse_failures() {
    assert_failure("(1+2");
    assert_failure("1+");
    assert_failure("*2");
    assert_failure("~");
    assert_failure("()");
}

#[test]
fn broken_operator_sequences_are_hard_errors() {
    assert_failure("1 & 2");
    assert_failure("1 | 2");
    assert_failure("1 = 2");
    assert_failure("&");
}

#[test]
fn unknown_keywords_are_hard_errors() {
    assert_failure("truth");
    assert_failure("maybe && true");
}

#[test]
fn invalid_characters_are_reported_not_fatal() {
    let mut reporter = Reporter::new();
    let value = evaluate_line("@", &mut reporter).unwrap();

    assert_eq!(value, Value::Number(0.0));
    assert_eq!(reporter.diagnostics().len(), 1);
}

#[test]
fn tab_is_not_whitespace_to_the_scanner() {
    let mut reporter = Reporter::new();
    let value = evaluate_line("1\t+ 2", &mut reporter).unwrap();

    // The tab is reported and skipped; the rest of the line still scans.
    assert_eq!(value, Value::Number(3.0));
    assert_eq!(reporter.diagnostics().len(), 1);
}

#[test]
fn operand_type_mismatches_fail_at_evaluation() {
    assert_failure("1&&2");
    assert_failure("true*false");
    assert_failure("true+1");
    assert_failure("~5");
    assert_failure("true!");
}

#[test]
fn factorial_domain() {
    assert_failure("(-5)!");
    assert_failure("21!");
    assert_number("20!", 2_432_902_008_176_640_000.0);
}

#[test]
fn trailing_tokens_are_left_unread() {
    assert_number("1 == 2", 1.0);
    assert_number("2^3", 2.0);
    assert_number("1 2", 1.0);
}

#[test]
fn streams_are_sentinel_terminated() {
    for source in ["", "1+2", "true && false", "   "] {
        let tokens = scan(source);

        assert!(!tokens.is_empty());
        assert_eq!(tokens.last().unwrap().category, TokenCategory::EndOfFile);

        let sentinels = tokens.iter()
                              .filter(|token| token.category == TokenCategory::EndOfFile)
                              .count();
        assert_eq!(sentinels, 1, "more than one sentinel for {source:?}");
    }
}

#[test]
fn relexing_a_lexeme_reproduces_its_category() {
    let source = "1.5 + 2 * (3)! <= 4 <=> true && false == ~7 != 8 => 9 >= 10 < 11 > 12";
    let tokens = scan(source);

    for token in tokens.iter().filter(|token| token.category != TokenCategory::EndOfFile) {
        let relexed = scan(&token.lexeme);
        assert_eq!(relexed[0].category, token.category,
                   "re-lexing {:?} changed its category",
                   token.lexeme);
    }
}
