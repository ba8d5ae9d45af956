//! Lexer, parser, formatter, and interpreter for Leona, a small
//! turtle-graphics language.
//!
//! A program moves a pen-carrying turtle around the plane; every
//! movement made with the pen down produces one line segment.
//!
//! # Quick start
//!
//! ## Run a program
//!
//! ```
//! let mut out = Vec::new();
//! let drawn = leona::run("down. forw 10.", &mut out).unwrap();
//! assert_eq!(drawn, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "#0000FF 0.0000 0.0000 10.0000 0.0000\n");
//! ```
//!
//! ## Parse, format and execute in stages
//!
//! ```
//! use leona::{execute, format, parse, tokenize};
//!
//! let tokens = tokenize("down rep 4 \" forw 1 left 90 \" .").unwrap();
//! let program = parse(&tokens).unwrap();
//! assert!(format(&program).starts_with("DOWN\nREP 4 \"\n"));
//! assert_eq!(execute(&program).len(), 4);
//! ```
//!
//! ## Build a program in code
//!
//! ```
//! use leona::{Program, execute};
//!
//! let square = Program::new()
//!     .pen_down()
//!     .color("#FF0000")
//!     .repeat(4, Program::new().forward(10).left(90));
//!
//! assert_eq!(execute(&square).len(), 4);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::io::Write;

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Instruction, MoveKind, PenState, Program};
pub use formatter::{format, format_tokens};
pub use interpreter::{DEFAULT_COLOR, Segment, Turtle, execute};
pub use lexer::tokenize;
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Span, Token, TokenKind};

/// Error returned by [`run`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program text does not match the grammar.
    #[error("{0}")]
    Syntax(#[from] ParseError),
    /// Writing a drawn segment failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Tokenize and parse program text in one step.
///
/// Returns `Ok(None)` when the text contains no tokens at all, i.e.
/// there is no program to run.
pub fn parse_str(input: &str) -> Result<Option<Program>, ParseError> {
    let Some(tokens) = tokenize(input) else {
        return Ok(None);
    };
    parse(&tokens).map(Some)
}

/// Parse and execute program text, writing one line per drawn
/// segment to `out` as it is produced.
///
/// The whole program is parsed before anything executes, so a syntax
/// error never leaves partial output behind. Returns the number of
/// segments written.
pub fn run<W: Write>(input: &str, out: &mut W) -> Result<usize, Error> {
    let Some(program) = parse_str(input)? else {
        return Ok(0);
    };
    log::debug!("executing {} instructions", program.executed_len());

    let mut drawn = 0;
    Turtle::new().run(&program.instructions, &mut |segment| {
        drawn += 1;
        writeln!(out, "{segment}")
    })?;
    Ok(drawn)
}
