//! Recursive descent parser for data literals
//!
//! Grammar:
//!
//! ```text
//! program   := literal* EOF
//! literal   := list | tuple | map | primitive
//! list      := '[' ( ']' | literal (',' literal)* ']' )
//! tuple     := '{' ( literal (',' literal)* )? '}'
//! map       := '%' '{' ( pair (',' pair)* ','? )? '}'
//! pair      := ( key | literal ) '=>'? literal
//! key       := ':' | ATOM
//! primitive := INT | ATOM | BOOL
//! ```

use crate::ast::Node;
use crate::error::*;
use crate::lexer::{Lexer, Token, TokenKind};
use core_types::SyntaxError;
use num_bigint::BigInt;

/// Deepest container nesting accepted before parsing stops with an error
pub const MAX_NESTING_DEPTH: usize = 256;

/// Data literal parser
///
/// The whole source is tokenized up front; parsing then walks the tokens with
/// a single lookahead cursor and stops at the first error.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    /// Index of the current token; never moves past EOF
    cursor: usize,
    /// Number of containers currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Lexer::new(source).tokenize(),
            cursor: 0,
            depth: 0,
        }
    }

    /// Parse every top-level literal in the source
    ///
    /// # Examples
    ///
    /// ```
    /// use parser::{Node, Parser};
    ///
    /// let nodes = Parser::new("[1, 2] :ok").parse().unwrap();
    /// assert_eq!(nodes, vec![
    ///     Node::List(vec![Node::int(1), Node::int(2)]),
    ///     Node::atom(":ok"),
    /// ]);
    /// ```
    pub fn parse(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();
        while !self.check(TokenKind::EOF) {
            nodes.push(self.parse_data_literal()?);
        }
        Ok(nodes)
    }

    fn parse_data_literal(&mut self) -> Result<Node, SyntaxError> {
        let kind = self.current().kind;
        if !matches!(kind, TokenKind::Punct('[' | '{' | '%')) {
            return self.parse_primitive();
        }

        if self.depth >= MAX_NESTING_DEPTH {
            let expected = format!("at most {} nested containers", MAX_NESTING_DEPTH);
            return Err(self.error(&expected));
        }
        self.depth += 1;
        let node = match kind {
            TokenKind::Punct('[') => self.parse_list(),
            TokenKind::Punct('{') => self.parse_tuple(),
            _ => self.parse_map(),
        };
        self.depth -= 1;
        node
    }

    fn parse_list(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::Punct('['))?;
        if self.check(TokenKind::Punct(']')) {
            self.advance();
            return Ok(Node::List(Vec::new()));
        }

        let items = self.parse_sequence()?;
        self.expect(TokenKind::Punct(']'))?;
        Ok(Node::List(items))
    }

    fn parse_tuple(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::Punct('{'))?;
        let items = if self.check(TokenKind::Punct('}')) {
            Vec::new()
        } else {
            self.parse_sequence()?
        };
        self.expect(TokenKind::Punct('}'))?;
        Ok(Node::Tuple(items))
    }

    /// One literal followed by any number of `, literal`
    fn parse_sequence(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut items = vec![self.parse_data_literal()?];
        while self.check(TokenKind::Punct(',')) {
            self.advance();
            items.push(self.parse_data_literal()?);
        }
        Ok(items)
    }

    fn parse_map(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::Punct('%'))?;
        self.expect(TokenKind::Punct('{'))?;

        let mut pairs = Vec::new();
        while !self.check(TokenKind::Punct('}')) {
            pairs.push(self.parse_key_value()?);
            if !self.check(TokenKind::Punct(',')) {
                break;
            }
            self.advance();
        }

        self.expect(TokenKind::Punct('}'))?;
        Ok(Node::Map(pairs))
    }

    fn parse_key_value(&mut self) -> Result<(Node, Node), SyntaxError> {
        let key = if self.check(TokenKind::Punct(':')) || self.check(TokenKind::Atom) {
            self.parse_key()?
        } else {
            self.parse_data_literal()?
        };

        if self.check(TokenKind::Arrow) {
            self.advance();
        }
        let value = self.parse_data_literal()?;
        Ok((key, value))
    }

    fn parse_key(&mut self) -> Result<Node, SyntaxError> {
        match self.current().kind {
            // A bare `:` names the key after the following token, which is
            // left in place and parsed again as the value.
            TokenKind::Punct(':') => {
                self.advance();
                Ok(Node::Atom(self.current().lexeme.clone()))
            }
            TokenKind::Atom => {
                let key = normalize_atom(&self.current().lexeme);
                self.advance();
                Ok(Node::Atom(key))
            }
            _ => Err(self.error("ATOM")),
        }
    }

    fn parse_primitive(&mut self) -> Result<Node, SyntaxError> {
        let token = self.current();
        let node = match token.kind {
            TokenKind::Int => {
                let digits = token.lexeme.replace('_', "");
                let value: BigInt = digits.parse().map_err(|_| self.error("INT"))?;
                Node::Int(value)
            }
            TokenKind::Atom => Node::Atom(token.lexeme.clone()),
            TokenKind::Bool => Node::Bool(token.lexeme == "true"),
            _ => return Err(self.error("primitive literal")),
        };
        self.advance();
        Ok(node)
    }

    // Helper methods

    fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if !self.check(kind) {
            return Err(self.error(&kind.to_string()));
        }
        self.advance();
        Ok(())
    }

    fn error(&self, expected: &str) -> SyntaxError {
        unexpected_token(expected, self.current(), self.source)
    }
}

/// Rewrite a `name:` atom as `:name`; `:name` is returned unchanged.
pub fn normalize_atom(lexeme: &str) -> String {
    match lexeme.strip_suffix(':') {
        Some(name) => format!(":{}", name),
        None => lexeme.to_string(),
    }
}
