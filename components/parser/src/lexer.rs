//! Data literal lexer - tokenizes source text into tokens
//!
//! Lexing never fails. Characters that start no known token become
//! single-character punctuation tokens, and any problem with them is reported
//! later by the parser.

use std::fmt;

/// Kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer literal, e.g. `-12` or `1_000`
    Int,
    /// Atom literal, either `:name` or `name:`
    Atom,
    /// Boolean literal `true` or `false`
    Bool,
    /// Map arrow `=>`
    Arrow,
    /// Any other single character, e.g. `[`, `%`, `,`
    Punct(char),
    /// End of input
    EOF,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "INT"),
            TokenKind::Atom => write!(f, "ATOM"),
            TokenKind::Bool => write!(f, "BOOL"),
            TokenKind::Arrow => write!(f, "=>"),
            TokenKind::Punct(c) => write!(f, "{}", c),
            TokenKind::EOF => write!(f, "EOF"),
        }
    }
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Exact source text matched
    pub lexeme: String,
    /// Byte offset of the first matched character
    pub position: usize,
}

impl Token {
    fn eof(position: usize) -> Self {
        Self {
            kind: TokenKind::EOF,
            lexeme: "<EOF>".to_string(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}", self.kind, self.lexeme, self.position)
    }
}

/// Lexer for data literal source text
pub struct Lexer<'a> {
    source: &'a str,
    /// Current byte offset
    pub position: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            finished: false,
        }
    }

    /// Consume the lexer, producing every token up to and including EOF
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    /// Get the next token from the source
    ///
    /// Once the end of input is reached this keeps returning EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_insignificant();

        if self.is_at_end() {
            self.finished = true;
            return Token::eof(self.position);
        }

        let start = self.position;
        let (kind, len) = if let Some(len) = self.match_int() {
            (TokenKind::Int, len)
        } else if let Some(len) = self.match_atom() {
            (TokenKind::Atom, len)
        } else if let Some(len) = self.match_bool() {
            (TokenKind::Bool, len)
        } else if self.rest().starts_with("=>") {
            (TokenKind::Arrow, 2)
        } else {
            let ch = self.peek();
            (TokenKind::Punct(ch), ch.len_utf8())
        };

        self.position += len;
        Token {
            kind,
            lexeme: self.source[start..self.position].to_string(),
            position: start,
        }
    }

    /// Skip spaces, tabs, newlines and `#` line comments
    fn skip_insignificant(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' | '\n' => self.position += 1,
                '#' => {
                    self.position = match self.rest().find('\n') {
                        Some(i) => self.position + i,
                        None => self.source.len(),
                    };
                }
                _ => break,
            }
        }
    }

    /// `-?[0-9]+(_[0-9]+)*`
    fn match_int(&self) -> Option<usize> {
        let bytes = self.rest().as_bytes();
        let mut len = usize::from(bytes.first() == Some(&b'-'));

        let digits = count_digits(&bytes[len..]);
        if digits == 0 {
            return None;
        }
        len += digits;

        while bytes.get(len) == Some(&b'_') {
            let group = count_digits(&bytes[len + 1..]);
            if group == 0 {
                break;
            }
            len += 1 + group;
        }
        Some(len)
    }

    /// `:ident` anywhere, or `ident:` starting on a word boundary
    fn match_atom(&self) -> Option<usize> {
        let rest = self.rest();

        if let Some(name) = rest.strip_prefix(':') {
            return match identifier_len(name) {
                0 => None,
                len => Some(1 + len),
            };
        }

        if !self.at_word_start() {
            return None;
        }
        match identifier_len(rest) {
            0 => None,
            len if rest[len..].starts_with(':') => Some(len + 1),
            _ => None,
        }
    }

    /// `true` or `false` as a whole word
    fn match_bool(&self) -> Option<usize> {
        if !self.at_word_start() {
            return None;
        }
        let rest = self.rest();
        ["true", "false"].iter().find_map(|word| {
            let after = rest.strip_prefix(word)?;
            match after.chars().next() {
                Some(c) if is_word_char(c) => None,
                _ => Some(word.len()),
            }
        })
    }

    /// True when the previous character cannot continue a word
    fn at_word_start(&self) -> bool {
        self.source[..self.position]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c))
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Byte length of an identifier at the start of `s`, or 0 if there is none
fn identifier_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !is_word_char(c))
        .map_or(s.len(), |(i, _)| i)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
