//! Parser edge cases and error tests.

use leona::{
    Instruction, MoveKind, ParseErrorKind, PenState, Program, TokenKind, parse, parse_str, tokenize,
};

fn parse_input(input: &str) -> Result<Program, leona::ParseError> {
    let tokens = tokenize(input).expect("tokenize");
    parse(&tokens)
}

// -----------------------------------------------------------
// Accepted programs.
// -----------------------------------------------------------

#[test]
fn parse_every_instruction() {
    let program = parse_input("UP DOWN FORW 1 BACK 2 LEFT 3 RIGHT 4 COLOR #123abc REP 5 \" \" .")
        .expect("parse");
    assert_eq!(
        program.instructions,
        vec![
            Instruction::Pen(PenState::Up),
            Instruction::Pen(PenState::Down),
            Instruction::Move {
                kind: MoveKind::Forward,
                amount: 1
            },
            Instruction::Move {
                kind: MoveKind::Backward,
                amount: 2
            },
            Instruction::Move {
                kind: MoveKind::TurnLeft,
                amount: 3
            },
            Instruction::Move {
                kind: MoveKind::TurnRight,
                amount: 4
            },
            Instruction::SetColor("#123abc".to_string()),
            Instruction::Repeat {
                count: 5,
                body: Vec::new()
            },
        ]
    );
}

#[test]
fn parse_multiline_program() {
    let program = parse_input(
        "% square\n\
         down\n\
         rep 4 \"\n\
         \tforw 10.\n\
         \tleft 90.\n\
         \".\n",
    )
    .expect("parse");
    assert_eq!(
        program,
        Program::new()
            .pen_down()
            .repeat(4, Program::new().forward(10).left(90))
    );
}

#[test]
fn parse_deeply_nested_repeats() {
    let depth = 10_000;
    let input = format!(
        "{}forw 1{}.",
        "rep 2 \" ".repeat(depth),
        " \"".repeat(depth)
    );
    let program = parse_input(&input).expect("parse");
    assert_eq!(program.executed_len(), u64::MAX);

    let mut body = &program.instructions;
    for _ in 0..depth {
        let Instruction::Repeat { count: 2, body: inner } = &body[0] else {
            panic!("expected repeat");
        };
        body = inner;
    }
    assert_eq!(
        body[0],
        Instruction::Move {
            kind: MoveKind::Forward,
            amount: 1
        }
    );
}

#[test]
fn parse_str_convenience() {
    let program = parse_str("down. forw 10.").expect("parse").expect("program");
    assert_eq!(program.instructions.len(), 2);
}

#[test]
fn parse_str_no_program() {
    assert_eq!(parse_str("% nothing\n").expect("parse"), None);
}

// -----------------------------------------------------------
// Parser errors.
// -----------------------------------------------------------

#[test]
fn parse_error_missing_final_period_reports_eof_line() {
    let err = parse_input("down\nforw 10\n\n% done\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingPeriod);
    assert_eq!(err.line(), 2);
}

#[test]
fn parse_error_instructions_after_empty_program() {
    let err = parse_input(". forw 10 .").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedEndOfInput {
            found: TokenKind::Forward
        }
    );
    assert_eq!(err.line(), 1);

    let err = parse_input(".\n\ndown\n.").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedEndOfInput {
            found: TokenKind::PenDown
        }
    );
    assert_eq!(err.line(), 3);
}

#[test]
fn parse_error_period_inside_block_does_not_terminate_program() {
    let err = parse_input("rep 2 \" forw 1. \"").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingPeriod);
}

#[test]
fn parse_error_lexical_error_token() {
    let err = parse_input("down.\nforw 10.\nleft 9x.\n").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedDecimal {
            found: Some(TokenKind::Error)
        }
    );
    assert_eq!(err.line(), 3);
}

#[test]
fn parse_error_missing_argument() {
    let err = parse_input("forw .").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedDecimal {
            found: Some(TokenKind::Period)
        }
    );
}

#[test]
fn parse_error_color_without_hex() {
    let err = parse_input("color 12.").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedHexColor {
            found: Some(TokenKind::Decimal(12))
        }
    );
}

#[test]
fn parse_error_stray_quote() {
    let err = parse_input("down \" .").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedInstruction {
            found: Some(TokenKind::Quote)
        }
    );
}

#[test]
fn parse_error_unclosed_nested_repeat() {
    let err = parse_input("rep 2 \" rep 3 \" forw 1 \"\n.").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedQuote { found: None });
    assert_eq!(err.line(), 2);
}

#[test]
fn parse_error_first_error_wins() {
    let err = parse_input("forw x\nback y\n.").unwrap_err();
    assert_eq!(err.line(), 1);
}

#[test]
fn parse_error_message() {
    let err = parse_str("down\nforw 5").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error on line 2: program must end with '.'"
    );
}
