use std::fs;

use minilang::{
    ast::dump_program,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, tokenize},
        parser::statement::parse_program,
    },
    run_source,
};
use walkdir::WalkDir;

fn capture_output(src: &str) -> String {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    let program = parse_program(&tokens).unwrap_or_else(|e| panic!("Parsing failed: {e}"));

    let mut context = Context::with_output(Vec::new());
    if let Err(e) = context.run(&program) {
        panic!("Script failed: {e}");
    }

    String::from_utf8(context.into_output()).expect("program output is UTF-8")
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(capture_output(src), expected);
}

fn assert_failure(src: &str) {
    if run_source(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn token_kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

#[test]
fn demo_programs_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "mini"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let output = capture_output(&source);
        assert!(!output.is_empty(), "Demo {path:?} printed nothing");
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn digit_runs_become_one_number_token() {
    assert_eq!(token_kinds("0"), vec![Token::Number(0), Token::Eof]);
    assert_eq!(token_kinds("007"), vec![Token::Number(7), Token::Eof]);
    assert_eq!(token_kinds("123456"), vec![Token::Number(123_456), Token::Eof]);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_eq!(token_kinds("let x=1;print x;"),
               token_kinds("let  x\n\t=  1 ;\r\nprint   x ;"));
}

#[test]
fn tokens_carry_line_numbers() {
    let tokens = tokenize("let x = 1;\nprint(x);").unwrap();

    // 'let' through ';' on line 1, the print statement on line 2.
    assert_eq!(tokens[0], (Token::Let, 1));
    assert_eq!(tokens[4], (Token::Semicolon, 1));
    assert_eq!(tokens[5], (Token::Print, 2));
}

#[test]
fn end_marker_is_exactly_one_and_exactly_last() {
    let tokens = tokenize("let x = 1;").unwrap();

    let eof_count = tokens.iter().filter(|(t, _)| *t == Token::Eof).count();
    assert_eq!(eof_count, 1);
    assert_eq!(tokens.last().map(|(t, _)| t), Some(&Token::Eof));

    assert_eq!(token_kinds(""), vec![Token::Eof]);
}

#[test]
fn unknown_character_is_a_lexical_error() {
    let result = tokenize("let a = 5 $ 3;");
    assert!(matches!(result,
                     Err(ParseError::UnknownCharacter { character: '$',
                                                        line:      1, })));

    let result = tokenize("let a = 1;\nlet b = ^;");
    assert!(matches!(result, Err(ParseError::UnknownCharacter { line: 2, .. })));
}

#[test]
fn oversized_literal_is_a_lexical_error() {
    let result = tokenize("print(99999999999999999999);");
    assert!(matches!(result, Err(ParseError::LiteralTooLarge { line: 1 })));

    // The largest 64-bit value still lexes.
    assert_eq!(token_kinds("9223372036854775807"),
               vec![Token::Number(i64::MAX), Token::Eof]);
}

#[test]
fn assignment_and_print_round_trip() {
    let source = "let x = 5 + 3; let y = 1 + 1; print(x + y);";

    assert_eq!(token_kinds(source),
               vec![Token::Let,
                    Token::Ident("x".to_string()),
                    Token::Equals,
                    Token::Number(5),
                    Token::Plus,
                    Token::Number(3),
                    Token::Semicolon,
                    Token::Let,
                    Token::Ident("y".to_string()),
                    Token::Equals,
                    Token::Number(1),
                    Token::Plus,
                    Token::Number(1),
                    Token::Semicolon,
                    Token::Print,
                    Token::LParen,
                    Token::Ident("x".to_string()),
                    Token::Plus,
                    Token::Ident("y".to_string()),
                    Token::RParen,
                    Token::Semicolon,
                    Token::Eof]);

    let tokens = tokenize(source).unwrap();
    let program = parse_program(&tokens).unwrap();
    assert_eq!(dump_program(&program),
               "Assign(x)\n  BinaryOp(+)\n    Number(5)\n    Number(3)\n\
                Assign(y)\n  BinaryOp(+)\n    Number(1)\n    Number(1)\n\
                Print\n  BinaryOp(+)\n    Var(x)\n    Var(y)\n");

    assert_output(source, "10\n");
}

#[test]
fn operators_group_to_the_right() {
    // 5 - (3 - 2), not (5 - 3) - 2.
    assert_output("print(5 - 3 - 2);", "4\n");

    // No precedence either: 2 * (3 + 1), not (2 * 3) + 1.
    assert_output("print(2 * 3 + 1);", "8\n");

    // Parentheses restore the conventional grouping.
    assert_output("print((5 - 3) - 2);", "0\n");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("print(7 / 2);", "3\n");
    assert_output("let a = 0 - 7; print(a / 2);", "-3\n");
}

#[test]
fn addition_wraps_on_overflow() {
    assert_output("let big = 9223372036854775807; print(big + 1);",
                  "-9223372036854775808\n");
}

#[test]
fn reassignment_updates_in_place() {
    assert_output("let x = 1; let x = 2; print(x);", "2\n");
}

#[test]
fn bare_expression_statements_are_evaluated_and_discarded() {
    assert_output("5 + 3; print(1);", "1\n");

    // The trailing semicolon of a bare expression is optional.
    assert_output("print(1); 5 + 3", "1\n");

    // Evaluation still happens, so errors inside surface.
    assert_failure("4 / 0;");
}

#[test]
fn parenthesized_statement_consumes_only_its_parentheses() {
    assert_output("(2 + 3) print(7);", "7\n");

    // The statement form does not consume a following ';' and does not
    // continue into trailing operators.
    assert_failure("(2 + 3);");
    assert_failure("(2 + 3) * 4");
}

#[test]
fn syntax_errors_are_fatal() {
    let parse = |src: &str| parse_program(&tokenize(src).unwrap());

    assert!(matches!(parse("let = 5;"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("let x 5;"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("let x = 5"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("print(x"), Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse("print x + ;"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn undefined_variable_emits_no_output() {
    let tokens = tokenize("print(z);").unwrap();
    let program = parse_program(&tokens).unwrap();

    let mut context = Context::with_output(Vec::new());
    let result = context.run(&program);

    assert!(matches!(result, Err(RuntimeError::UnknownVariable { .. })));
    assert!(context.into_output().is_empty());
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    assert_failure("print(4 / 0);");
    assert_failure("let x = 0; print(4 / x);");
}

#[test]
fn store_overflow_keeps_prior_effects() {
    let mut source = String::new();
    for i in 0..128 {
        source.push_str(&format!("let v{i} = {i};\n"));
    }
    source.push_str("print(v0);\n");

    // 128 distinct variables fit exactly.
    assert_output(&source, "0\n");

    // The 129th distinct name overflows; output printed before the
    // overflow is unaffected.
    source.push_str("let extra = 1;\n");
    let tokens = tokenize(&source).unwrap();
    let program = parse_program(&tokens).unwrap();

    let mut context = Context::with_output(Vec::new());
    let result = context.run(&program);

    assert!(matches!(result, Err(RuntimeError::VariableStoreOverflow { .. })));
    assert_eq!(context.into_output(), b"0\n".to_vec());
}

#[test]
fn reassignment_does_not_count_against_capacity() {
    let mut source = String::new();
    for i in 0..128 {
        source.push_str(&format!("let v{i} = {i};\n"));
    }
    for i in 0..128 {
        source.push_str(&format!("let v{i} = {i} + 1;\n"));
    }
    source.push_str("print(v127);\n");

    assert_output(&source, "128\n");
}

#[test]
fn empty_source_runs_clean() {
    assert_output("", "");
}
