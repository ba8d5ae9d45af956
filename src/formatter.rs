//! Pretty-printers that serialize programs and token streams back into
//! canonical Leona text.
//!
//! Keywords are written upper case, repeat bodies are tab-indented
//! between lines holding a single `"`, and every program ends with a
//! line containing only `.`.

use std::fmt::Write as _;

use crate::ast::{Instruction, Program};
use crate::token::{Token, TokenKind};

/// Format a `Program` into canonical Leona source.
///
/// Parsing the output yields an equal program, provided every count
/// and amount is positive (the lexer rejects zero literals).
#[must_use]
pub fn format(program: &Program) -> String {
    let mut out = String::new();
    // Bodies being written, innermost last; the depth is the indent.
    let mut open = vec![program.instructions.iter()];

    while let Some(instructions) = open.last_mut() {
        let Some(instruction) = instructions.next() else {
            open.pop();
            if let Some(indent) = open.len().checked_sub(1) {
                push_indent(&mut out, indent);
                out.push_str("\"\n");
            }
            continue;
        };

        push_indent(&mut out, open.len() - 1);
        match instruction {
            Instruction::Pen(state) => {
                let _ = writeln!(out, "{state}");
            }
            Instruction::Move { kind, amount } => {
                let _ = writeln!(out, "{kind} {amount}");
            }
            Instruction::SetColor(color) => {
                let _ = writeln!(out, "COLOR {color}");
            }
            Instruction::Repeat { count, body } => {
                let _ = writeln!(out, "REP {count} \"");
                open.push(body.iter());
            }
        }
    }

    out.push_str(".\n");
    out
}

fn push_indent(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat_n('\t', indent));
}

/// Render a token stream as canonical text.
///
/// Each token stays on its source line; tokens sharing a line are
/// separated by one space. Lexing the result reproduces the same
/// sequence of kinds and line numbers.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut line = 1;
    let mut line_start = true;

    for token in tokens {
        if token.kind == TokenKind::EndOfInput {
            break;
        }

        while line < token.line() {
            out.push('\n');
            line += 1;
            line_start = true;
        }

        if !line_start {
            out.push(' ');
        }
        let _ = write!(out, "{}", token.kind);
        line_start = false;
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out
}
