// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser that turns one script line into a [`CommandNode`] tree.
//!
//! Grammar (all sequencing operators share one precedence, left-associative):
//!
//! ```text
//! sequence := pipeline (('&&' | '||' | ';' | '&') pipeline)*
//! pipeline := '!'? command ('|' command)*
//! command  := word (word | redirect)*
//! redirect := redirect-op word
//! ```

use super::ast::{CommandNode, Pipeline, Redirect, SeqOp, SimpleCommand};
use super::lexer::Lexer;
use super::parse_error::ParseError;
use super::token::{Token, TokenKind};

/// Parser options plus the token cursor.
pub struct Parser<'a> {
    input: &'a str,
    pipefail: bool,
    win32_escapes: bool,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pipefail: false, win32_escapes: false, tokens: Vec::new(), pos: 0 }
    }

    /// Mark every produced pipeline as pipefail.
    pub fn pipefail(mut self, enabled: bool) -> Self {
        self.pipefail = enabled;
        self
    }

    /// Keep backslashes literal while lexing.
    pub fn win32_escapes(mut self, enabled: bool) -> Self {
        self.win32_escapes = enabled;
        self
    }

    /// Parse input with default options.
    pub fn parse_str(input: &str) -> Result<CommandNode, ParseError> {
        Parser::new(input).parse()
    }

    pub fn parse(mut self) -> Result<CommandNode, ParseError> {
        self.tokens = Lexer::new(self.input).win32_escapes(self.win32_escapes).into_tokens()?;
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut node = CommandNode::Pipeline(self.parse_pipeline()?);
        while let Some(kind) = self.peek_kind() {
            let op = match kind {
                TokenKind::And => SeqOp::And,
                TokenKind::Or => SeqOp::Or,
                TokenKind::Semi => SeqOp::Semi,
                TokenKind::Ampersand => SeqOp::Background,
                _ => return Err(self.unexpected_token("sequencing operator")),
            };
            self.advance();
            if self.at_end() {
                return Err(ParseError::UnexpectedEof {
                    expected: format!("command after '{}'", op.as_str()),
                });
            }
            let right = CommandNode::Pipeline(self.parse_pipeline()?);
            node = CommandNode::Sequence { left: Box::new(node), op, right: Box::new(right) };
        }
        Ok(node)
    }

    fn parse_pipeline(&mut self) -> Result<Pipeline, ParseError> {
        let negate = matches!(self.peek_kind(), Some(TokenKind::Bang));
        if negate {
            self.advance();
        }

        let mut commands = vec![self.parse_command()?];
        while matches!(self.peek_kind(), Some(TokenKind::Pipe)) {
            self.advance();
            commands.push(self.parse_command()?);
        }
        Ok(Pipeline::new(commands).pipe_fail(self.pipefail).negate(negate))
    }

    fn parse_command(&mut self) -> Result<SimpleCommand, ParseError> {
        let program = match self.peek_kind() {
            Some(TokenKind::Word(word)) => word.clone(),
            _ => return Err(self.unexpected_token("command")),
        };
        self.advance();

        let mut cmd = SimpleCommand::new([program]);
        loop {
            match self.peek_kind() {
                Some(TokenKind::Word(word)) => {
                    cmd.args.push(word.clone());
                    self.advance();
                }
                // `!` past the start of a pipeline is an ordinary argument.
                Some(TokenKind::Bang) => {
                    cmd.args.push("!".to_string());
                    self.advance();
                }
                Some(TokenKind::Redirect { op, fd }) => {
                    let (op, fd) = (*op, *fd);
                    self.advance();
                    let target = match self.peek_kind() {
                        Some(TokenKind::Word(word)) => word.clone(),
                        _ => return Err(self.unexpected_token("redirection target")),
                    };
                    self.advance();
                    cmd.redirects.push(Redirect::new(op, fd, target));
                }
                _ => break,
            }
        }
        Ok(cmd)
    }

    #[inline]
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    #[inline]
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn unexpected_token(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(token) => ParseError::UnexpectedToken {
                found: token.kind.clone(),
                expected: expected.to_string(),
                span: token.span,
            },
            None => ParseError::UnexpectedEof { expected: expected.to_string() },
        }
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
