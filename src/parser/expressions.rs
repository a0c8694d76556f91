//! Expression parsing implementation
//!
//! A single entry point [`Parser::parse_expr`] builds every expression form:
//! primary, post-unary, binary, ternary, and comma list, in that order.
//!
//! Operator precedence is *not* applied here. A binary chain like
//! `a + b * c` parses into a right-leaning tree and is re-balanced by a
//! later pass using precedence tables; see [`BinaryExpr`]. The second
//! context-sensitive spot of the grammar also lives here: after `( expr )`
//! the parser decides between a cast and a plain bracket expression from the
//! shape of the inner expression and the next token.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

/// A parenthesized expression can act as the type of a cast only when it is
/// a type name or a bare variable access without an assignment part.
fn is_cast_type_expr(expr: &Expr) -> bool {
    match expr {
        Expr::TypeName(_) => true,
        Expr::VarAccess(access) => access.assign_expr.is_none(),
        _ => false,
    }
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// `allow_comma` enables the trailing `, expr` list form. `init_expr`
    /// seeds the parse with an already-built primary expression (used by the
    /// identifier-statement disambiguation).
    pub(crate) fn parse_expr(
        &mut self,
        allow_comma: bool,
        init_expr: Option<Expr>,
    ) -> Result<Expr, ParseError> {
        let mut ast = match init_expr {
            Some(expr) => expr,
            None => self.parse_primary_expr()?,
        };

        // Optional post-unary expression
        if self.is(TokenKind::UnaryOp) {
            let op = self.accept_it().spell;
            ast = Expr::PostUnary(PostUnaryExpr {
                pos: ast.pos(),
                expr: Box::new(ast),
                op,
            });
        }

        // Optional binary expression; the right-hand side recurses, which
        // produces the right-leaning chain downstream passes expect
        if self.is(TokenKind::BinaryOp) {
            let op = self.accept_it().spell;
            let rhs_expr = self.parse_expr(allow_comma, None)?;
            return Ok(Expr::Binary(BinaryExpr {
                pos: ast.pos(),
                lhs_expr: Box::new(ast),
                op,
                rhs_expr: Box::new(rhs_expr),
            }));
        }

        // Optional ternary expression
        if self.is(TokenKind::TernaryOp) {
            self.accept_it();
            let if_expr = self.parse_expr(false, None)?;
            self.accept(TokenKind::Colon)?;
            let else_expr = self.parse_expr(false, None)?;
            return Ok(Expr::Ternary(TernaryExpr {
                pos: ast.pos(),
                condition: Box::new(ast),
                if_expr: Box::new(if_expr),
                else_expr: Box::new(else_expr),
            }));
        }

        // Optional list expression
        if allow_comma && self.is(TokenKind::Comma) {
            self.accept_it();
            let next_expr = self.parse_expr(true, None)?;
            return Ok(Expr::List(ListExpr {
                pos: ast.pos(),
                first_expr: Box::new(ast),
                next_expr: Box::new(next_expr),
            }));
        }

        Ok(ast)
    }

    /// Parse a primary expression, dispatched on the current token.
    pub(crate) fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        if self.is_literal() {
            return Ok(Expr::Literal(self.parse_literal_expr()?));
        }
        if self.is_data_type() {
            return self.parse_type_name_or_function_call_expr();
        }
        if self.is(TokenKind::UnaryOp) || self.is_spell(TokenKind::BinaryOp, "-") {
            return Ok(Expr::Unary(self.parse_unary_expr()?));
        }
        if self.is(TokenKind::LParen) {
            return self.parse_bracket_or_cast_expr();
        }
        if self.is(TokenKind::LBrace) {
            return Ok(Expr::Initializer(self.parse_initializer_expr()?));
        }
        if self.is(TokenKind::Ident) {
            return self.parse_var_access_or_function_call_expr();
        }

        Err(self.error_unexpected_hint("expected primary expression"))
    }

    /// Parse a boolean, integer, or float literal.
    pub(crate) fn parse_literal_expr(&mut self) -> Result<LiteralExpr, ParseError> {
        if !self.is_literal() {
            return Err(self.error_unexpected_hint("expected literal expression"));
        }

        let pos = self.pos();
        let literal = self.accept_it().spell;
        Ok(LiteralExpr { pos, literal })
    }

    /// Parse a data type in expression position: a constructor call when an
    /// argument list follows (`float4(...)`), a bare type name otherwise.
    pub(crate) fn parse_type_name_or_function_call_expr(&mut self) -> Result<Expr, ParseError> {
        if !self.is_data_type() {
            return Err(self.error_unexpected_hint("expected type name or function call expression"));
        }

        let pos = self.pos();
        let type_name = self.accept_it().spell;

        if self.is(TokenKind::LParen) {
            let var_ident = VarIdent {
                pos,
                ident: type_name,
                array_indices: Vec::new(),
                next: None,
            };
            return Ok(Expr::FunctionCall(self.parse_function_call_expr(var_ident)?));
        }

        Ok(Expr::TypeName(TypeNameExpr { pos, type_name }))
    }

    /// Parse a prefix unary expression. `-` is classified as a binary
    /// operator by the scanner but may start a unary expression.
    pub(crate) fn parse_unary_expr(&mut self) -> Result<UnaryExpr, ParseError> {
        if !self.is(TokenKind::UnaryOp) && !self.is_spell(TokenKind::BinaryOp, "-") {
            return Err(self.error_unexpected_hint("expected unary expression operator"));
        }

        let pos = self.pos();
        let op = self.accept_it().spell;
        let expr = Box::new(self.parse_primary_expr()?);
        Ok(UnaryExpr { pos, op, expr })
    }

    /// Parse `( expr )` and decide between a cast and a bracket expression.
    ///
    /// The parenthesized expression is taken as the type of a cast iff the
    /// next token can start a primary expression and the inner expression is
    /// type-shaped (see [`is_cast_type_expr`]). This over-approximates:
    /// `(x) y` with `x` a variable is misparsed as a cast, and correcting
    /// that is deferred to semantic analysis.
    pub(crate) fn parse_bracket_or_cast_expr(&mut self) -> Result<Expr, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::LParen)?;
        let expr = self.parse_expr(true, None)?;
        self.accept(TokenKind::RParen)?;

        if self.is_primary_expr() && is_cast_type_expr(&expr) {
            let cast_expr = Box::new(self.parse_primary_expr()?);
            return Ok(Expr::Cast(CastExpr {
                pos,
                type_expr: Box::new(expr),
                expr: cast_expr,
            }));
        }

        Ok(Expr::Bracket(BracketExpr {
            pos,
            expr: Box::new(expr),
        }))
    }

    /// Parse an identifier chain in expression position: a function call when
    /// an argument list follows, a variable access otherwise.
    pub(crate) fn parse_var_access_or_function_call_expr(&mut self) -> Result<Expr, ParseError> {
        let var_ident = self.parse_var_ident()?;
        if self.is(TokenKind::LParen) {
            return Ok(Expr::FunctionCall(self.parse_function_call_expr(var_ident)?));
        }
        Ok(Expr::VarAccess(self.parse_var_access_expr(Some(var_ident))?))
    }

    /// Parse a variable access with optional assignment-in-expression.
    pub(crate) fn parse_var_access_expr(
        &mut self,
        var_ident: Option<VarIdent>,
    ) -> Result<VarAccessExpr, ParseError> {
        let var_ident = match var_ident {
            Some(var_ident) => var_ident,
            None => self.parse_var_ident()?,
        };
        let pos = var_ident.pos;

        let (assign_op, assign_expr) = if self.is(TokenKind::AssignOp) {
            let op = self.accept_it().spell;
            let expr = self.parse_expr(false, None)?;
            (Some(op), Some(Box::new(expr)))
        } else {
            (None, None)
        };

        Ok(VarAccessExpr {
            pos,
            var_ident,
            assign_op,
            assign_expr,
        })
    }

    /// Parse a function call expression for an already-parsed callee.
    pub(crate) fn parse_function_call_expr(
        &mut self,
        var_ident: VarIdent,
    ) -> Result<FunctionCallExpr, ParseError> {
        let pos = var_ident.pos;
        let call = self.parse_function_call(Some(var_ident))?;
        Ok(FunctionCallExpr { pos, call })
    }

    /// Parse a function call fragment. The callee may be given (statement
    /// disambiguation, constructor calls) or parsed here; a data type token
    /// is accepted as a constructor name.
    pub(crate) fn parse_function_call(
        &mut self,
        var_ident: Option<VarIdent>,
    ) -> Result<FunctionCall, ParseError> {
        let name = match var_ident {
            Some(var_ident) => var_ident,
            None if self.is_data_type() => {
                let pos = self.pos();
                VarIdent {
                    pos,
                    ident: self.accept_it().spell,
                    array_indices: Vec::new(),
                    next: None,
                }
            }
            None => self.parse_var_ident()?,
        };

        let pos = name.pos;
        let arguments = self.parse_argument_list()?;

        Ok(FunctionCall {
            pos,
            name,
            arguments,
        })
    }

    /// Parse a brace-enclosed initializer list.
    pub(crate) fn parse_initializer_expr(&mut self) -> Result<InitializerExpr, ParseError> {
        let pos = self.pos();
        let exprs = self.parse_initializer_list()?;
        Ok(InitializerExpr { pos, exprs })
    }

    // ===== Lists =====

    /// Parse a comma-separated expression list up to `terminator`.
    /// `allow_last_comma` permits one trailing comma before the terminator.
    pub(crate) fn parse_expr_list(
        &mut self,
        terminator: TokenKind,
        allow_last_comma: bool,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();

        if !self.is(terminator) {
            loop {
                exprs.push(self.parse_expr(false, None)?);
                if self.is(TokenKind::Comma) {
                    self.accept_it();
                    if allow_last_comma && self.is(terminator) {
                        break;
                    }
                } else {
                    break;
                }
            }
        }

        Ok(exprs)
    }

    /// Parse `'(' exprList ')'`. No trailing comma.
    pub(crate) fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.accept(TokenKind::LParen)?;
        let arguments = self.parse_expr_list(TokenKind::RParen, false)?;
        self.accept(TokenKind::RParen)?;
        Ok(arguments)
    }

    /// Parse `'{' exprList '}'`. A trailing comma is allowed.
    pub(crate) fn parse_initializer_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.accept(TokenKind::LBrace)?;
        let exprs = self.parse_expr_list(TokenKind::RBrace, true)?;
        self.accept(TokenKind::RBrace)?;
        Ok(exprs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::SourceCode;

    /// Parse `expr` from a var-decl initializer so the expression grammar is
    /// exercised through the public entry point.
    fn parse_init_expr(expr: &str) -> Expr {
        let text = format!("void f() {{ int x = {}; }}", expr);
        let program = Parser::new(None)
            .parse_source(&SourceCode::new("test.hlsl", text))
            .expect("parse failed");
        let func = match program.global_decls.into_iter().next().unwrap() {
            GlobalDecl::Function(func) => func,
            other => panic!("expected function, got {:?}", other),
        };
        match func.code_block.unwrap().stmnts.into_iter().next().unwrap() {
            Stmnt::VarDecl(var_decl) => var_decl
                .var_decls
                .into_iter()
                .next()
                .unwrap()
                .initializer
                .unwrap(),
            other => panic!("expected var decl statement, got {:?}", other),
        }
    }

    fn parse_err(stmnts: &str) -> bool {
        let text = format!("void f() {{ {} }}", stmnts);
        Parser::new(None)
            .parse_source(&SourceCode::new("test.hlsl", text))
            .is_none()
    }

    #[test]
    fn test_cast_expression() {
        let expr = parse_init_expr("(int)y + 1");

        let binary = match expr {
            Expr::Binary(binary) => binary,
            other => panic!("expected binary expression, got {:?}", other),
        };
        assert_eq!(binary.op, "+");

        let cast = match binary.lhs_expr.as_ref() {
            Expr::Cast(cast) => cast,
            other => panic!("expected cast, got {:?}", other),
        };
        match cast.type_expr.as_ref() {
            Expr::TypeName(name) => assert_eq!(name.type_name, "int"),
            other => panic!("expected type name, got {:?}", other),
        }
        match cast.expr.as_ref() {
            Expr::VarAccess(access) => assert_eq!(access.var_ident.ident, "y"),
            other => panic!("expected var access, got {:?}", other),
        }
        match binary.rhs_expr.as_ref() {
            Expr::Literal(lit) => assert_eq!(lit.literal, "1"),
            other => panic!("expected literal, got {:?}", other),
        }
    }

    #[test]
    fn test_binary_chain_is_right_leaning_without_precedence() {
        // No precedence in the parser: both orderings produce the same
        // right-leaning shape with the first operator at the root.
        for (text, first_op, second_op) in [("a + b * c", "+", "*"), ("a * b + c", "*", "+")] {
            let expr = parse_init_expr(text);
            let root = match expr {
                Expr::Binary(binary) => binary,
                other => panic!("expected binary expression, got {:?}", other),
            };
            assert_eq!(root.op, first_op);
            assert!(matches!(root.lhs_expr.as_ref(), Expr::VarAccess(_)));
            let rhs = match root.rhs_expr.as_ref() {
                Expr::Binary(binary) => binary,
                other => panic!("expected nested binary, got {:?}", other),
            };
            assert_eq!(rhs.op, second_op);
        }
    }

    #[test]
    fn test_ternary_expression() {
        let expr = parse_init_expr("flag ? 1 : 0");

        let ternary = match expr {
            Expr::Ternary(ternary) => ternary,
            other => panic!("expected ternary, got {:?}", other),
        };
        assert!(matches!(ternary.condition.as_ref(), Expr::VarAccess(_)));
        assert!(matches!(ternary.if_expr.as_ref(), Expr::Literal(_)));
        assert!(matches!(ternary.else_expr.as_ref(), Expr::Literal(_)));
    }

    #[test]
    fn test_list_expression_in_return() {
        let text = "void f() { return a, b; }";
        let program = Parser::new(None)
            .parse_source(&SourceCode::new("test.hlsl", text))
            .unwrap();
        let func = match &program.global_decls[0] {
            GlobalDecl::Function(func) => func,
            other => panic!("expected function, got {:?}", other),
        };
        let ret = match &func.code_block.as_ref().unwrap().stmnts[0] {
            Stmnt::Return(ret) => ret,
            other => panic!("expected return, got {:?}", other),
        };
        match ret.expr.as_ref().unwrap() {
            Expr::List(list) => {
                assert!(matches!(list.first_expr.as_ref(), Expr::VarAccess(_)));
                assert!(matches!(list.next_expr.as_ref(), Expr::VarAccess(_)));
            }
            other => panic!("expected list expression, got {:?}", other),
        }
    }

    #[test]
    fn test_initializer_allows_trailing_comma() {
        let expr = parse_init_expr("{ 1, 2, 3, }");

        match expr {
            Expr::Initializer(init) => assert_eq!(init.exprs.len(), 3),
            other => panic!("expected initializer, got {:?}", other),
        }
    }

    #[test]
    fn test_argument_list_rejects_trailing_comma() {
        assert!(parse_err("f(1, 2,);"));
    }

    #[test]
    fn test_constructor_call() {
        let expr = parse_init_expr("float3(1, 2, 3)");

        let call = match expr {
            Expr::FunctionCall(expr) => expr.call,
            other => panic!("expected function call, got {:?}", other),
        };
        assert_eq!(call.name.ident, "float3");
        assert_eq!(call.arguments.len(), 3);
    }

    #[test]
    fn test_unary_minus_and_nested_unary() {
        let expr = parse_init_expr("-!x");

        let outer = match expr {
            Expr::Unary(unary) => unary,
            other => panic!("expected unary, got {:?}", other),
        };
        assert_eq!(outer.op, "-");
        match outer.expr.as_ref() {
            Expr::Unary(inner) => assert_eq!(inner.op, "!"),
            other => panic!("expected nested unary, got {:?}", other),
        }
    }

    #[test]
    fn test_post_unary_inside_binary() {
        let expr = parse_init_expr("i++ + 1");

        let binary = match expr {
            Expr::Binary(binary) => binary,
            other => panic!("expected binary, got {:?}", other),
        };
        match binary.lhs_expr.as_ref() {
            Expr::PostUnary(post) => assert_eq!(post.op, "++"),
            other => panic!("expected post-unary, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_in_expression() {
        let expr = parse_init_expr("y = 2");

        let access = match expr {
            Expr::VarAccess(access) => access,
            other => panic!("expected var access, got {:?}", other),
        };
        assert_eq!(access.assign_op.as_deref(), Some("="));
        assert!(access.assign_expr.is_some());
    }

    #[test]
    fn test_bracket_expression_when_not_type_shaped() {
        let expr = parse_init_expr("(a + b) * c");

        let binary = match expr {
            Expr::Binary(binary) => binary,
            other => panic!("expected binary, got {:?}", other),
        };
        assert_eq!(binary.op, "*");
        match binary.lhs_expr.as_ref() {
            Expr::Bracket(bracket) => {
                assert!(matches!(bracket.expr.as_ref(), Expr::Binary(_)))
            }
            other => panic!("expected bracket expression, got {:?}", other),
        }
    }

    #[test]
    fn test_cast_over_approximation_is_preserved() {
        // '(x) y' is misparsed as a cast when x is a variable; semantic
        // analysis corrects it later. The parser must keep this shape.
        let expr = parse_init_expr("(x) y");

        let cast = match expr {
            Expr::Cast(cast) => cast,
            other => panic!("expected cast, got {:?}", other),
        };
        match cast.type_expr.as_ref() {
            Expr::VarAccess(access) => {
                assert_eq!(access.var_ident.ident, "x");
                assert!(access.assign_expr.is_none());
            }
            other => panic!("expected var access type expression, got {:?}", other),
        }
    }

    #[test]
    fn test_cast_never_takes_assignment_type_expr() {
        // '(x = 1) y' keeps the bracket shape: an assignment cannot be a type.
        assert!(parse_err("int z = (x = 1) y;"));
    }

    #[test]
    fn test_swizzle_chain_with_indices() {
        let expr = parse_init_expr("lights[i].color.rgb");

        let access = match expr {
            Expr::VarAccess(access) => access,
            other => panic!("expected var access, got {:?}", other),
        };
        assert_eq!(access.var_ident.ident, "lights");
        assert_eq!(access.var_ident.array_indices.len(), 1);
        let next = access.var_ident.next.as_ref().unwrap();
        assert_eq!(next.ident, "color");
        assert_eq!(next.next.as_ref().unwrap().ident, "rgb");
    }

    #[test]
    fn test_missing_primary_expression_hint() {
        assert!(parse_err("x = ;"));
    }
}
