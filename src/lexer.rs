use crate::token::{Span, Token, TokenKind};

/// Tokenize a Leona program into a sequence of tokens.
///
/// Malformed input never aborts lexing: each offending character
/// becomes a [`TokenKind::Error`] token and scanning continues. The
/// returned sequence always ends with a single
/// [`TokenKind::EndOfInput`].
///
/// Returns `None` when the input holds no tokens at all (empty or
/// comment-only), meaning there is no program to run.
#[must_use]
pub fn tokenize(input: &str) -> Option<Vec<Token>> {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut lexer = Lexer::new();

    for (index, line) in input.lines().enumerate() {
        lexer.scan_line(line, index + 1);
    }

    lexer.finish()
}

/// Keywords in match order. None is a prefix of another, so the first
/// hit is also the longest.
const KEYWORDS: [&str; 8] = ["forw", "back", "left", "right", "down", "up", "color", "rep"];

const HEX_DIGITS: usize = 6;

struct Lexer {
    tokens: Vec<Token>,
    chars: Vec<char>,
    pos: usize,
    line: usize,
    end: Span,
}

impl Lexer {
    const fn new() -> Self {
        Self {
            tokens: Vec::new(),
            chars: Vec::new(),
            pos: 0,
            line: 1,
            end: Span { line: 1, column: 1 },
        }
    }

    fn finish(mut self) -> Option<Vec<Token>> {
        if self.tokens.is_empty() {
            log::debug!("no tokens in input");
            return None;
        }

        self.tokens.push(Token {
            kind: TokenKind::EndOfInput,
            span: self.end,
        });
        log::debug!("lexed {} tokens", self.tokens.len());
        Some(self.tokens)
    }

    fn scan_line(&mut self, line: &str, number: usize) {
        self.chars = line.chars().collect();
        self.pos = 0;
        self.line = number;

        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                break;
            };

            let (kind, width) = match ch {
                // comment runs to end of line
                '%' => break,
                '.' => (TokenKind::Period, 1),
                '"' => (TokenKind::Quote, 1),
                '#' => self.read_hex_color(),
                c if c.is_ascii_digit() => self.read_decimal(),
                c if c.is_alphabetic() => self.read_keyword(),
                _ => (TokenKind::Error, 1),
            };

            let column = self.pos + 1;
            self.pos += width;
            self.tokens.push(Token {
                kind,
                span: Span {
                    line: self.line,
                    column,
                },
            });
            self.end = Span {
                line: self.line,
                column: self.pos + 1,
            };
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn read_hex_color(&self) -> (TokenKind, usize) {
        let digits: String = (1..=HEX_DIGITS)
            .map_while(|offset| self.peek_at(offset).filter(char::is_ascii_hexdigit))
            .collect();

        if digits.len() == HEX_DIGITS {
            (TokenKind::HexColor(format!("#{digits}")), HEX_DIGITS + 1)
        } else {
            (TokenKind::Error, 1)
        }
    }

    fn read_decimal(&self) -> (TokenKind, usize) {
        let len = self.chars[self.pos..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();

        let terminated = match self.peek_at(len) {
            None => true,
            Some(c) => c.is_whitespace() || c == '.' || c == '%',
        };
        if !terminated {
            return (TokenKind::Error, 1);
        }

        let digits: String = self.chars[self.pos..self.pos + len].iter().collect();
        match digits.parse::<u32>() {
            Ok(value) if value > 0 => (TokenKind::Decimal(value), len),
            _ => (TokenKind::Error, 1),
        }
    }

    fn read_keyword(&self) -> (TokenKind, usize) {
        let Some(word) = KEYWORDS.into_iter().find(|word| self.matches_ignore_case(word)) else {
            return (TokenKind::Error, 1);
        };

        let kind = keyword_kind(word);
        let len = word.len();

        // UP and DOWN may butt directly against the next token.
        if matches!(kind, TokenKind::PenUp | TokenKind::PenDown) {
            return (kind, len);
        }

        match self.peek_at(len) {
            None => (kind, len),
            Some(c) if c.is_whitespace() || c == '%' => (kind, len),
            Some(_) => (TokenKind::Error, 1),
        }
    }

    fn matches_ignore_case(&self, word: &str) -> bool {
        word.chars()
            .enumerate()
            .all(|(offset, expected)| {
                self.peek_at(offset)
                    .is_some_and(|c| c.eq_ignore_ascii_case(&expected))
            })
    }
}

fn keyword_kind(word: &str) -> TokenKind {
    match word {
        "forw" => TokenKind::Forward,
        "back" => TokenKind::Backward,
        "left" => TokenKind::TurnLeft,
        "right" => TokenKind::TurnRight,
        "down" => TokenKind::PenDown,
        "up" => TokenKind::PenUp,
        "color" => TokenKind::Color,
        _ => TokenKind::Repeat,
    }
}
