use exparse::{
    ExpressionError,
    error::{RuntimeError, ValidationError},
    interpreter::{
        dispatcher::{ExpressionKind, classify},
        evaluator::{
            core::{evaluate_numeric, parse_number},
            identifier::{evaluate_identifier_mapped, map_identifiers},
            operator::{Operator, PRECEDENCE},
            scalar::apply,
        },
        lexer::{Token, tokenize},
        validator::{PIPELINE, Rule, check_parentheses, validate},
    },
    Number,
};

fn num(lexeme: &str) -> Token {
    Token::Number(lexeme.to_string())
}

#[test]
fn tokenizer_accumulates_numbers_and_splits_everything_else() {
    assert_eq!(tokenize("12.5*(3)"),
               vec![num("12.5"),
                    Token::Operator(Operator::Mul),
                    Token::LeftParen,
                    num("3"),
                    Token::RightParen]);
    assert_eq!(tokenize("1 2"), vec![num("1"), num("2")]);
    assert_eq!(tokenize("ab"), vec![Token::Identifier('a'), Token::Identifier('b')]);
    assert_eq!(tokenize("2a"), vec![num("2"), Token::Identifier('a')]);
    assert_eq!(tokenize("1.2.3"), vec![num("1.2.3")]);
}

#[test]
fn tokenizer_never_emits_whitespace_or_empty_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n ").is_empty());

    let tokens = tokenize("  7 +\t(x -  y)\n");
    assert_eq!(tokens.len(), 7);
    assert!(tokens.iter().all(|t| !t.to_string().trim().is_empty()));
}

#[test]
fn tokenizer_keeps_unknown_characters_as_symbols() {
    assert_eq!(tokenize("2%3"), vec![num("2"), Token::Symbol('%'), num("3")]);
    assert_eq!(tokenize("=="), vec![Token::Symbol('='), Token::Symbol('=')]);
}

#[test]
fn precedence_table_is_consistent() {
    for (op, rank) in PRECEDENCE {
        assert_eq!(op.precedence(), rank);
    }
    assert_eq!(Operator::Add.precedence(), 1);
    assert_eq!(Operator::Div.precedence(), 2);
}

#[test]
fn balanced_parentheses_pass() {
    for src in ["", "1", "()", "(())", "(()())", "((1) + (2 * (3)))"] {
        assert_eq!(check_parentheses(&tokenize(src)), Ok(()), "{src:?}");
    }
}

#[test]
fn excess_closing_parenthesis_fails() {
    for src in [")", "())", "(1))", "1) + (2"] {
        assert_eq!(check_parentheses(&tokenize(src)),
                   Err(ValidationError::InvalidParenthesis),
                   "{src:?}");
    }
}

#[test]
fn excess_opening_parenthesis_fails() {
    for src in ["(", "(()", "((1)", "(1 + (2)"] {
        assert_eq!(check_parentheses(&tokenize(src)),
                   Err(ValidationError::MissingParenthesis),
                   "{src:?}");
    }
}

#[test]
fn pipeline_runs_numeric_rule_first() {
    assert_eq!(PIPELINE, [Rule::Numeric, Rule::Identifier]);

    let err = validate(&tokenize("a")).unwrap_err();
    assert_eq!(err,
               ExpressionError::Validation { rule:  Rule::Identifier,
                                             error: ValidationError::OnlyOneVariable, });

    let err = validate(&tokenize("(a")).unwrap_err();
    assert_eq!(err,
               ExpressionError::Validation { rule:  Rule::Numeric,
                                             error: ValidationError::MissingParenthesis, });
}

#[test]
fn identifier_rule_ignores_edge_operators() {
    assert_eq!(Rule::Identifier.check(&tokenize("+ a")), Ok(()));
    assert_eq!(Rule::Identifier.check(&tokenize("a b")), Ok(()));
    assert_eq!(Rule::Numeric.check(&tokenize("a")), Ok(()));
}

#[test]
fn classification_follows_the_first_token() {
    assert_eq!(classify(&tokenize("42")), ExpressionKind::Numeric);
    assert_eq!(classify(&tokenize("2 + a")), ExpressionKind::Numeric);
    assert_eq!(classify(&tokenize("a")), ExpressionKind::PureIdentifier);
    assert_eq!(classify(&tokenize("xyz")), ExpressionKind::PureIdentifier);
    assert_eq!(classify(&tokenize("a * 2")), ExpressionKind::IdentifierMapped);
    assert_eq!(classify(&tokenize("2.5 + 1")), ExpressionKind::IdentifierMapped);
    assert_eq!(classify(&tokenize("- 1")), ExpressionKind::IdentifierMapped);
    assert_eq!(classify(&[]), ExpressionKind::IdentifierMapped);
}

#[test]
fn identifiers_map_case_insensitively() {
    assert_eq!(map_identifiers(&tokenize("a Z + 1")),
               vec![num("1"), num("26"), Token::Operator(Operator::Add), num("1")]);
    assert_eq!(evaluate_identifier_mapped(&tokenize("m - M")), Ok(Number::Integer(0)));
}

#[test]
fn numeric_fold_respects_precedence() {
    assert_eq!(evaluate_numeric(&tokenize("1 + 2 * 3 - 4 / 2")), Ok(Number::Integer(5)));
    assert_eq!(evaluate_numeric(&tokenize("(1 + 2) * (3 - 4) / 2")), Ok(Number::Real(-1.5)));
    assert_eq!(evaluate_numeric(&tokenize("8 - 2 - 2")), Ok(Number::Integer(4)));
}

#[test]
fn numeric_fold_reports_structural_faults() {
    assert_eq!(evaluate_numeric(&tokenize("1 +")),
               Err(RuntimeError::MissingOperand { operator: Operator::Add }));
    assert_eq!(evaluate_numeric(&tokenize("(1 + 2")), Err(RuntimeError::UnbalancedParenthesis));
    assert_eq!(evaluate_numeric(&tokenize("1 + 2)")), Err(RuntimeError::UnbalancedParenthesis));
    assert_eq!(evaluate_numeric(&[]), Err(RuntimeError::EmptyExpression));
    assert_eq!(evaluate_numeric(&tokenize("a")),
               Err(RuntimeError::UnsupportedToken { token: "a".to_string() }));
}

#[test]
fn number_lexemes_parse_and_narrow() {
    assert_eq!(parse_number("42"), Ok(Number::Integer(42)));
    assert_eq!(parse_number("4.0"), Ok(Number::Integer(4)));
    assert_eq!(parse_number("0.25"), Ok(Number::Real(0.25)));
    assert_eq!(parse_number(".5"), Ok(Number::Real(0.5)));
    assert_eq!(parse_number("."), Err(RuntimeError::MalformedNumber { lexeme: ".".to_string() }));
}

#[test]
fn integer_overflow_falls_back_to_reals() {
    let result = apply(Operator::Mul, Number::Integer(i64::MAX), Number::Integer(2)).unwrap();
    assert!(matches!(result, Number::Real(r) if r > 1e18));

    let result = apply(Operator::Div, Number::Integer(i64::MIN), Number::Integer(-1)).unwrap();
    assert!(matches!(result, Number::Real(r) if r > 9e18));
}

#[test]
fn non_finite_results_are_faults() {
    assert_eq!(apply(Operator::Mul, Number::Real(1e308), Number::Integer(10)),
               Err(RuntimeError::Overflow));
    assert_eq!(apply(Operator::Div, Number::Real(1.5), Number::Integer(0)),
               Err(RuntimeError::DivisionByZero));
}
