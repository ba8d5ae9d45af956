use std::fmt;

/// Source location of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
///
/// Literal values live inside the `Decimal` and `HexColor` variants;
/// every other kind carries no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `FORW`
    Forward,
    /// `BACK`
    Backward,
    /// `LEFT`
    TurnLeft,
    /// `RIGHT`
    TurnRight,
    /// `DOWN`
    PenDown,
    /// `UP`
    PenUp,
    /// `COLOR`
    Color,
    /// `REP`
    Repeat,
    /// `.`
    Period,
    /// `"`
    Quote,
    /// Strictly positive integer literal.
    Decimal(u32),
    /// `#` followed by six hex digits, as written.
    HexColor(String),
    /// Character sequence that does not form a valid token.
    Error,
    /// Terminates every non-empty token stream.
    EndOfInput,
}

/// Canonical source text of the token. `Error` renders as `?`, which
/// lexes back to a single error token.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("FORW"),
            Self::Backward => f.write_str("BACK"),
            Self::TurnLeft => f.write_str("LEFT"),
            Self::TurnRight => f.write_str("RIGHT"),
            Self::PenDown => f.write_str("DOWN"),
            Self::PenUp => f.write_str("UP"),
            Self::Color => f.write_str("COLOR"),
            Self::Repeat => f.write_str("REP"),
            Self::Period => f.write_str("."),
            Self::Quote => f.write_str("\""),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::HexColor(color) => f.write_str(color),
            Self::Error => f.write_str("?"),
            Self::EndOfInput => Ok(()),
        }
    }
}

/// A single token with its kind and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span.line
    }
}
