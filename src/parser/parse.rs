//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, token helper methods, and the public parse entry
//! point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: global declarations, structures, parameters, var types
//! - `statements`: statement grammar
//! - `expressions`: expression grammar
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # Error model
//!
//! Grammar rules return `Result<_, ParseError>` and unwind with `?` to
//! [`Parser::parse_source`], which reports the first error once through the
//! [`Log`] sink and yields `None`. There is no resynchronization: the first
//! syntax error aborts the translation unit.

use crate::log::Log;
use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, SourceCode, Token, TokenKind};
use thiserror::Error;

/// Parser error type
///
/// `Display` renders the single diagnostic line emitted for a failed parse:
/// `syntax error (<file>:<line>:<col>) : <message>`.
#[derive(Debug, Clone, Error)]
#[error("syntax error ({file}:{pos}) : {message}")]
pub struct ParseError {
    pub file: String,
    pub pos: SourcePos,
    pub message: String,
}

/// Recursive descent parser for the HLSL grammar
pub struct Parser<'a> {
    log: Option<&'a mut dyn Log>,
    source_name: String,
    tokens: Vec<Token>,
    position: usize,
    next_id: NodeId,
}

impl<'a> Parser<'a> {
    /// Create a parser. The optional logger receives at most one error line
    /// per [`parse_source`](Self::parse_source) call.
    pub fn new(log: Option<&'a mut dyn Log>) -> Self {
        Self {
            log,
            source_name: String::new(),
            tokens: Vec::new(),
            position: 0,
            next_id: 1,
        }
    }

    /// Parse a source buffer into a [`Program`].
    ///
    /// Returns `None` when scanning fails or on the first syntax error; the
    /// diagnostic goes to the logger and no partial tree is returned.
    pub fn parse_source(&mut self, source: &SourceCode) -> Option<Program> {
        self.source_name = source.name.clone();

        let tokens = match Lexer::new(source).tokenize() {
            Ok(tokens) => tokens,
            Err(err) => {
                // The scanner's own diagnostic; the parser adds nothing.
                if let Some(log) = self.log.as_deref_mut() {
                    log.error(&err.to_string());
                }
                return None;
            }
        };

        self.tokens = tokens;
        self.position = 0;
        self.next_id = 1;

        match self.parse_program() {
            Ok(program) => Some(program),
            Err(err) => {
                if let Some(log) = self.log.as_deref_mut() {
                    log.error(&err.to_string());
                }
                None
            }
        }
    }

    /// Parse the entire translation unit (global declarations until EOF).
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let pos = self.pos();
        let mut global_decls = Vec::new();

        while !self.is(TokenKind::EndOfStream) {
            global_decls.push(self.parse_global_decl()?);
        }

        Ok(Program { pos, global_decls })
    }

    // ===== Token helpers =====

    /// The current (lookahead) token.
    pub(crate) fn tkn(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn pos(&self) -> SourcePos {
        self.tkn().pos
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.tkn().kind
    }

    /// Non-consuming kind predicate.
    pub(crate) fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Non-consuming kind + spelling predicate.
    pub(crate) fn is_spell(&self, kind: TokenKind, spell: &str) -> bool {
        self.kind() == kind && self.tkn().spell == spell
    }

    /// Consume the current token unconditionally and return it.
    pub(crate) fn accept_it(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if token.kind != TokenKind::EndOfStream {
            self.position += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind, else fail.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.kind() != kind {
            return Err(self.error_unexpected());
        }
        Ok(self.accept_it())
    }

    /// Consume the current token if it has the given kind and spelling.
    pub(crate) fn accept_spell(
        &mut self,
        kind: TokenKind,
        spell: &str,
    ) -> Result<Token, ParseError> {
        if self.kind() != kind {
            return Err(self.error_unexpected());
        }
        if self.tkn().spell != spell {
            return Err(self.error(format!(
                "unexpected token spelling '{}' (expected '{}')",
                self.tkn().spell,
                spell
            )));
        }
        Ok(self.accept_it())
    }

    /// Accept a single `;`.
    pub(crate) fn semi(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Semicolon)?;
        Ok(())
    }

    // ===== Classification predicates =====

    pub(crate) fn is_data_type(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::ScalarType
                | TokenKind::VectorType
                | TokenKind::MatrixType
                | TokenKind::Texture
                | TokenKind::Sampler
        )
    }

    pub(crate) fn is_literal(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::BoolLiteral | TokenKind::IntLiteral | TokenKind::FloatLiteral
        )
    }

    pub(crate) fn is_primary_expr(&self) -> bool {
        self.is_literal()
            || self.is(TokenKind::Ident)
            || self.is(TokenKind::UnaryOp)
            || self.is_spell(TokenKind::BinaryOp, "-")
            || self.is(TokenKind::LParen)
    }

    // ===== Errors =====

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            file: self.source_name.clone(),
            pos: self.pos(),
            message: message.into(),
        }
    }

    pub(crate) fn error_unexpected(&self) -> ParseError {
        self.error(format!("unexpected token '{}'", self.tkn().spell))
    }

    pub(crate) fn error_unexpected_hint(&self, hint: &str) -> ParseError {
        self.error(format!(
            "unexpected token '{}' ({})",
            self.tkn().spell,
            hint
        ))
    }

    // ===== Node ids =====

    /// Allocate the next back-reference id (unique per parsed program).
    pub(crate) fn make_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Point every declarator at its enclosing declaration statement.
pub(crate) fn decorate_var_decls(var_decls: &mut [VarDecl], decl_stmnt_id: NodeId) {
    for var_decl in var_decls {
        var_decl.decl_stmnt_ref = decl_stmnt_id;
    }
}
