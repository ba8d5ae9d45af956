use std::fmt;

use crate::ast::{Instruction, MoveKind, PenState, Program};
use crate::token::{Span, Token, TokenKind};

/// Classifies a syntax error.
///
/// `found` is the offending token kind, or `None` when the token
/// stream ended first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected an instruction keyword.
    ExpectedInstruction { found: Option<TokenKind> },
    /// Expected a decimal after a movement, turn or `REP`.
    ExpectedDecimal { found: Option<TokenKind> },
    /// Expected a hex color after `COLOR`.
    ExpectedHexColor { found: Option<TokenKind> },
    /// Expected `"` opening or closing a repeat block.
    ExpectedQuote { found: Option<TokenKind> },
    /// Program does not end with `.`.
    MissingPeriod,
    /// Tokens follow a `.` that stands for the empty program.
    ExpectedEndOfInput { found: TokenKind },
}

fn write_found(f: &mut fmt::Formatter<'_>, found: Option<&TokenKind>) -> fmt::Result {
    match found {
        None => write!(f, ", got end of input"),
        Some(TokenKind::Error) => write!(f, ", got an invalid token"),
        Some(kind) => write!(f, ", got '{kind}'"),
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedInstruction { found } => {
                write!(f, "expected an instruction")?;
                write_found(f, found.as_ref())
            }
            Self::ExpectedDecimal { found } => {
                write!(f, "expected a positive decimal")?;
                write_found(f, found.as_ref())
            }
            Self::ExpectedHexColor { found } => {
                write!(f, "expected a hex color")?;
                write_found(f, found.as_ref())
            }
            Self::ExpectedQuote { found } => {
                write!(f, "expected '\"'")?;
                write_found(f, found.as_ref())
            }
            Self::MissingPeriod => {
                write!(f, "program must end with '.'")
            }
            Self::ExpectedEndOfInput { found } => {
                write!(f, "expected end of input after empty program")?;
                write_found(f, Some(found))
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error on line {}: {kind}", span.line)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    /// Line of the token that failed to match.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span.line
    }
}

/// Parse a token stream into a `Program`.
///
/// Every instruction may carry its own `.` terminator, and the
/// program as a whole must end with one. A `.` with no instruction
/// before it is the empty program and must be the only token.
///
/// Repeat blocks nest to any depth; open blocks are kept on an
/// explicit stack rather than the call stack.
///
/// # Errors
///
/// Returns `ParseError` at the first token that does not fit the
/// grammar, including any lexer error token.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}

/// Result of parsing one instruction head.
enum Parsed {
    Instruction(Instruction),
    /// `REP n "` was read; the body follows.
    OpenRepeat(u32),
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Program, ParseError> {
        // Sequence currently being filled.
        let mut body = Vec::new();
        // For each repeat block awaiting its closing quote: the block's
        // count and the enclosing sequence, innermost last.
        let mut open: Vec<(u32, Vec<Instruction>)> = Vec::new();
        // Whether the last top-level instruction carried a period.
        let mut terminated = false;

        loop {
            let closing = self.peek_kind() == Some(&TokenKind::Quote);
            let instruction = match open.pop() {
                Some((count, parent)) if closing => {
                    self.pos += 1;
                    Instruction::Repeat {
                        count,
                        body: std::mem::replace(&mut body, parent),
                    }
                }
                block => {
                    open.extend(block);
                    match self.peek_kind() {
                        None if open.is_empty() => break,
                        None => {
                            return Err(ParseError {
                                kind: ParseErrorKind::ExpectedQuote { found: None },
                                span: self.eof_span(),
                            });
                        }
                        Some(TokenKind::Period) if open.is_empty() && body.is_empty() => {
                            self.pos += 1;
                            self.expect_end()?;
                            terminated = true;
                            break;
                        }
                        Some(_) => match self.parse_instruction()? {
                            Parsed::Instruction(instruction) => instruction,
                            Parsed::OpenRepeat(count) => {
                                open.push((count, std::mem::take(&mut body)));
                                continue;
                            }
                        },
                    }
                }
            };

            let period = self.eat_period();
            if open.is_empty() {
                terminated = period;
            }
            body.push(instruction);
        }

        if !terminated {
            return Err(ParseError {
                kind: ParseErrorKind::MissingPeriod,
                span: self.eof_span(),
            });
        }

        log::debug!("parsed {} top-level instructions", body.len());
        Ok(Program { instructions: body })
    }

    /// Parse one instruction. `REP` stops after its opening quote; the
    /// caller collects the body.
    fn parse_instruction(&mut self) -> Result<Parsed, ParseError> {
        let Some(token) = self.next_token() else {
            return Err(ParseError {
                kind: ParseErrorKind::ExpectedInstruction { found: None },
                span: self.eof_span(),
            });
        };

        let move_kind = match token.kind {
            TokenKind::PenUp => return Ok(Parsed::Instruction(Instruction::Pen(PenState::Up))),
            TokenKind::PenDown => {
                return Ok(Parsed::Instruction(Instruction::Pen(PenState::Down)));
            }
            TokenKind::Color => {
                let color = self.expect_hex_color()?;
                return Ok(Parsed::Instruction(Instruction::SetColor(color)));
            }
            TokenKind::Repeat => {
                let count = self.expect_decimal()?;
                self.expect_quote()?;
                return Ok(Parsed::OpenRepeat(count));
            }
            TokenKind::Forward => MoveKind::Forward,
            TokenKind::Backward => MoveKind::Backward,
            TokenKind::TurnLeft => MoveKind::TurnLeft,
            TokenKind::TurnRight => MoveKind::TurnRight,
            _ => {
                return Err(ParseError {
                    kind: ParseErrorKind::ExpectedInstruction {
                        found: Some(token.kind.clone()),
                    },
                    span: token.span,
                });
            }
        };

        let amount = self.expect_decimal()?;
        Ok(Parsed::Instruction(Instruction::Move {
            kind: move_kind,
            amount,
        }))
    }

    /// Current token kind; `None` once the end-of-input token (or the
    /// end of the slice) is reached.
    fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.tokens
            .get(self.pos)
            .map(|token| &token.kind)
            .filter(|kind| **kind != TokenKind::EndOfInput)
    }

    fn next_token(&mut self) -> Option<&'a Token> {
        let token = self
            .tokens
            .get(self.pos)
            .filter(|token| token.kind != TokenKind::EndOfInput)?;
        self.pos += 1;
        Some(token)
    }

    fn eat_period(&mut self) -> bool {
        if self.peek_kind() == Some(&TokenKind::Period) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind != TokenKind::EndOfInput => Err(ParseError {
                kind: ParseErrorKind::ExpectedEndOfInput {
                    found: token.kind.clone(),
                },
                span: token.span,
            }),
            _ => Ok(()),
        }
    }

    fn expect_decimal(&mut self) -> Result<u32, ParseError> {
        match self.next_token() {
            Some(Token {
                kind: TokenKind::Decimal(value),
                ..
            }) => Ok(*value),
            other => Err(self.unexpected(other, |found| ParseErrorKind::ExpectedDecimal {
                found,
            })),
        }
    }

    fn expect_hex_color(&mut self) -> Result<String, ParseError> {
        match self.next_token() {
            Some(Token {
                kind: TokenKind::HexColor(color),
                ..
            }) => Ok(color.clone()),
            other => Err(self.unexpected(other, |found| ParseErrorKind::ExpectedHexColor {
                found,
            })),
        }
    }

    fn expect_quote(&mut self) -> Result<(), ParseError> {
        match self.next_token() {
            Some(Token {
                kind: TokenKind::Quote,
                ..
            }) => Ok(()),
            other => Err(self.unexpected(other, |found| ParseErrorKind::ExpectedQuote {
                found,
            })),
        }
    }

    fn unexpected(
        &self,
        token: Option<&Token>,
        kind: impl FnOnce(Option<TokenKind>) -> ParseErrorKind,
    ) -> ParseError {
        match token {
            Some(token) => ParseError {
                kind: kind(Some(token.kind.clone())),
                span: token.span,
            },
            None => ParseError {
                kind: kind(None),
                span: self.eof_span(),
            },
        }
    }

    fn eof_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span { line: 1, column: 1 }, |last| last.span)
    }
}
