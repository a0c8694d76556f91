//! Statement parsing implementation
//!
//! This module handles parsing of all statement forms:
//!
//! - Control flow: `if`/`else`, `for`, `while`, `do`-`while`, `switch`
//! - Declarations: variable and structure declaration statements
//! - Jumps: `return`, `break`, `continue`, `discard`
//! - Code blocks, null statements, verbatim directives
//! - The context-sensitive identifier-prefixed statement (variable
//!   declaration vs. assignment vs. function call vs. expression)
//!
//! Statement attributes (`[loop]`, `[branch]`, ...) are parsed before keyword
//! dispatch and attached to loop, branch, and switch nodes; for any other
//! statement they are parsed and dropped.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{decorate_var_decls, ParseError, Parser};

impl Parser<'_> {
    /// Parse a braced code block.
    pub(crate) fn parse_code_block(&mut self) -> Result<CodeBlock, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::LBrace)?;
        let stmnts = self.parse_stmnt_list()?;
        self.accept(TokenKind::RBrace)?;

        Ok(CodeBlock { pos, stmnts })
    }

    /// Parse a single statement, dispatched on the current token kind.
    pub(crate) fn parse_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        // Optional attributes precede keyword dispatch
        let attribs = if self.is(TokenKind::LBracket) {
            self.parse_attribute_list()?
        } else {
            Vec::new()
        };

        match self.kind() {
            TokenKind::Semicolon => return Ok(Stmnt::Null(self.parse_null_stmnt()?)),
            TokenKind::Directive => {
                return Ok(Stmnt::Directive(self.parse_directive_stmnt()?))
            }
            TokenKind::LBrace => return Ok(Stmnt::CodeBlock(self.parse_code_block_stmnt()?)),
            TokenKind::Return => return Ok(Stmnt::Return(self.parse_return_stmnt()?)),
            TokenKind::Ident => return self.parse_var_decl_or_assign_or_function_call_stmnt(),
            TokenKind::For => return Ok(Stmnt::ForLoop(self.parse_for_loop_stmnt(attribs)?)),
            TokenKind::While => {
                return Ok(Stmnt::WhileLoop(self.parse_while_loop_stmnt(attribs)?))
            }
            TokenKind::Do => {
                return Ok(Stmnt::DoWhileLoop(self.parse_do_while_loop_stmnt(attribs)?))
            }
            TokenKind::If => return Ok(Stmnt::If(self.parse_if_stmnt(attribs)?)),
            TokenKind::Switch => return Ok(Stmnt::Switch(self.parse_switch_stmnt(attribs)?)),
            TokenKind::CtrlTransfer => {
                return Ok(Stmnt::CtrlTransfer(self.parse_ctrl_transfer_stmnt()?))
            }
            TokenKind::Struct => return self.parse_struct_decl_or_var_decl_stmnt(),
            TokenKind::TypeModifier | TokenKind::StorageModifier => {
                return Ok(Stmnt::VarDecl(self.parse_var_decl_stmnt()?))
            }
            _ => {}
        }

        if self.is_data_type() {
            return Ok(Stmnt::VarDecl(self.parse_var_decl_stmnt()?));
        }

        // Statement of arbitrary expression
        Ok(Stmnt::Expr(self.parse_expr_stmnt(None)?))
    }

    /// Parse null statement (a bare `;`).
    pub(crate) fn parse_null_stmnt(&mut self) -> Result<NullStmnt, ParseError> {
        let pos = self.pos();
        self.semi()?;
        Ok(NullStmnt { pos })
    }

    /// Parse preprocessor directive in statement position.
    pub(crate) fn parse_directive_stmnt(&mut self) -> Result<DirectiveStmnt, ParseError> {
        let pos = self.pos();
        let line = self.accept(TokenKind::Directive)?.spell;
        Ok(DirectiveStmnt { pos, line })
    }

    /// Parse a code block in statement position.
    pub(crate) fn parse_code_block_stmnt(&mut self) -> Result<CodeBlockStmnt, ParseError> {
        let pos = self.pos();
        let code_block = self.parse_code_block()?;
        Ok(CodeBlockStmnt { pos, code_block })
    }

    /// Parse `for '(' initStmnt condition? ';' iteration? ')' body`.
    /// The init part is a full statement and consumes its own semicolon.
    pub(crate) fn parse_for_loop_stmnt(
        &mut self,
        attribs: Vec<FunctionCall>,
    ) -> Result<ForLoopStmnt, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::For)?;
        self.accept(TokenKind::LParen)?;

        let init_stmnt = Box::new(self.parse_stmnt()?);

        let condition = if !self.is(TokenKind::Semicolon) {
            Some(self.parse_expr(true, None)?)
        } else {
            None
        };
        self.semi()?;

        let iteration = if !self.is(TokenKind::RParen) {
            Some(self.parse_expr(true, None)?)
        } else {
            None
        };
        self.accept(TokenKind::RParen)?;

        let body_stmnt = Box::new(self.parse_stmnt()?);

        Ok(ForLoopStmnt {
            pos,
            attribs,
            init_stmnt,
            condition,
            iteration,
            body_stmnt,
        })
    }

    /// Parse `while '(' condition ')' body`.
    pub(crate) fn parse_while_loop_stmnt(
        &mut self,
        attribs: Vec<FunctionCall>,
    ) -> Result<WhileLoopStmnt, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::While)?;
        self.accept(TokenKind::LParen)?;
        let condition = self.parse_expr(true, None)?;
        self.accept(TokenKind::RParen)?;

        let body_stmnt = Box::new(self.parse_stmnt()?);

        Ok(WhileLoopStmnt {
            pos,
            attribs,
            condition,
            body_stmnt,
        })
    }

    /// Parse `do body while '(' condition ')' ';'`.
    pub(crate) fn parse_do_while_loop_stmnt(
        &mut self,
        attribs: Vec<FunctionCall>,
    ) -> Result<DoWhileLoopStmnt, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::Do)?;
        let body_stmnt = Box::new(self.parse_stmnt()?);

        self.accept(TokenKind::While)?;
        self.accept(TokenKind::LParen)?;
        let condition = self.parse_expr(true, None)?;
        self.accept(TokenKind::RParen)?;

        self.semi()?;

        Ok(DoWhileLoopStmnt {
            pos,
            attribs,
            body_stmnt,
            condition,
        })
    }

    /// Parse `if '(' condition ')' body else?`.
    pub(crate) fn parse_if_stmnt(
        &mut self,
        attribs: Vec<FunctionCall>,
    ) -> Result<IfStmnt, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::If)?;
        self.accept(TokenKind::LParen)?;
        let condition = self.parse_expr(true, None)?;
        self.accept(TokenKind::RParen)?;

        let body_stmnt = Box::new(self.parse_stmnt()?);

        let else_stmnt = if self.is(TokenKind::Else) {
            Some(Box::new(self.parse_else_stmnt()?))
        } else {
            None
        };

        Ok(IfStmnt {
            pos,
            attribs,
            condition,
            body_stmnt,
            else_stmnt,
        })
    }

    /// Parse `else body`; `else if` nests an if statement in the body.
    pub(crate) fn parse_else_stmnt(&mut self) -> Result<ElseStmnt, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::Else)?;
        let body_stmnt = Box::new(self.parse_stmnt()?);

        Ok(ElseStmnt { pos, body_stmnt })
    }

    /// Parse `switch '(' selector ')' '{' case* '}'`.
    pub(crate) fn parse_switch_stmnt(
        &mut self,
        attribs: Vec<FunctionCall>,
    ) -> Result<SwitchStmnt, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::Switch)?;
        self.accept(TokenKind::LParen)?;
        let selector = self.parse_expr(true, None)?;
        self.accept(TokenKind::RParen)?;

        self.accept(TokenKind::LBrace)?;
        let cases = self.parse_switch_case_list()?;
        self.accept(TokenKind::RBrace)?;

        Ok(SwitchStmnt {
            pos,
            attribs,
            selector,
            cases,
        })
    }

    /// Parse `break`, `continue`, or `discard`.
    pub(crate) fn parse_ctrl_transfer_stmnt(&mut self) -> Result<CtrlTransferStmnt, ParseError> {
        let pos = self.pos();

        let instruction = self.accept(TokenKind::CtrlTransfer)?.spell;
        self.semi()?;

        Ok(CtrlTransferStmnt { pos, instruction })
    }

    /// Parse a variable declaration statement:
    /// `(typeModifier | storageModifier)* varType varDeclList ;`
    pub(crate) fn parse_var_decl_stmnt(&mut self) -> Result<VarDeclStmnt, ParseError> {
        let pos = self.pos();
        let id = self.make_id();

        let mut type_modifiers = Vec::new();
        let mut storage_modifiers = Vec::new();

        let var_type = loop {
            let type_pos = self.pos();
            match self.kind() {
                TokenKind::StorageModifier => storage_modifiers.push(self.accept_it().spell),
                TokenKind::TypeModifier => type_modifiers.push(self.accept_it().spell),
                TokenKind::Ident => {
                    break VarType {
                        pos: type_pos,
                        base_type: self.accept_it().spell,
                        struct_type: None,
                        symbol_ref: None,
                    }
                }
                TokenKind::Struct => {
                    break VarType {
                        pos: type_pos,
                        base_type: String::new(),
                        struct_type: Some(self.parse_structure()?),
                        symbol_ref: None,
                    }
                }
                _ if self.is_data_type() => {
                    break VarType {
                        pos: type_pos,
                        base_type: self.accept_it().spell,
                        struct_type: None,
                        symbol_ref: None,
                    }
                }
                _ => return Err(self.error_unexpected()),
            }
        };

        let mut var_decls = self.parse_var_decl_list()?;
        self.semi()?;

        decorate_var_decls(&mut var_decls, id);

        Ok(VarDeclStmnt {
            pos,
            id,
            input_modifier: None,
            type_modifiers,
            storage_modifiers,
            var_type,
            var_decls,
        })
    }

    /// Parse `return expr? ;`.
    pub(crate) fn parse_return_stmnt(&mut self) -> Result<ReturnStmnt, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::Return)?;

        let expr = if !self.is(TokenKind::Semicolon) {
            Some(self.parse_expr(true, None)?)
        } else {
            None
        };

        self.semi()?;

        Ok(ReturnStmnt { pos, expr })
    }

    /// Parse an expression statement, optionally seeded with an identifier
    /// chain already consumed by the statement disambiguation (e.g. the `i`
    /// of `i++;`).
    pub(crate) fn parse_expr_stmnt(
        &mut self,
        var_ident: Option<VarIdent>,
    ) -> Result<ExprStmnt, ParseError> {
        let pos = var_ident.as_ref().map_or_else(|| self.pos(), |ident| ident.pos);

        let expr = match var_ident {
            Some(var_ident) => {
                let seed = Expr::VarAccess(VarAccessExpr {
                    pos: var_ident.pos,
                    var_ident,
                    assign_op: None,
                    assign_expr: None,
                });
                self.parse_expr(true, Some(seed))?
            }
            None => self.parse_expr(true, None)?,
        };

        self.semi()?;

        Ok(ExprStmnt { pos, expr })
    }

    /// Parse a `struct` statement: either a plain structure declaration or a
    /// variable declaration whose type is the freshly declared structure
    /// (`struct S { ... } s;`).
    pub(crate) fn parse_struct_decl_or_var_decl_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let pos = self.pos();

        let structure = self.parse_structure()?;

        if !self.is(TokenKind::Semicolon) {
            // Variable declaration with the previous structure type
            let id = self.make_id();
            let var_type = VarType {
                pos: structure.pos,
                base_type: String::new(),
                struct_type: Some(structure),
                symbol_ref: None,
            };

            let mut var_decls = self.parse_var_decl_list()?;
            self.semi()?;
            decorate_var_decls(&mut var_decls, id);

            return Ok(Stmnt::VarDecl(VarDeclStmnt {
                pos,
                id,
                input_modifier: None,
                type_modifiers: Vec::new(),
                storage_modifiers: Vec::new(),
                var_type,
                var_decls,
            }));
        }

        self.semi()?;

        Ok(Stmnt::StructDecl(StructDeclStmnt { pos, structure }))
    }

    /// Context-sensitive identifier-prefixed statement.
    ///
    /// Parse the identifier chain first, then decide:
    /// 1. `(` opens an argument list - function call statement
    /// 2. an assignment operator - assignment statement
    /// 3. `++`/`--` - expression statement seeded with the chain
    /// 4. otherwise, a single identifier is taken as a user type name and the
    ///    rest is a variable declaration statement; a dotted chain here is a
    ///    syntax error
    pub(crate) fn parse_var_decl_or_assign_or_function_call_stmnt(
        &mut self,
    ) -> Result<Stmnt, ParseError> {
        let pos = self.pos();
        let var_ident = self.parse_var_ident()?;

        if self.is(TokenKind::LParen) {
            let call = self.parse_function_call(Some(var_ident))?;
            self.semi()?;
            return Ok(Stmnt::FunctionCall(FunctionCallStmnt { pos, call }));
        }

        if self.is(TokenKind::AssignOp) {
            let op = self.accept_it().spell;
            let expr = self.parse_expr(true, None)?;
            self.semi()?;
            return Ok(Stmnt::Assign(AssignStmnt {
                pos,
                var_ident,
                op,
                expr,
            }));
        }

        if self.is_spell(TokenKind::UnaryOp, "++") || self.is_spell(TokenKind::UnaryOp, "--") {
            return Ok(Stmnt::Expr(self.parse_expr_stmnt(Some(var_ident))?));
        }

        if var_ident.next.is_none() {
            // Single identifier: treat it as a user type name
            let id = self.make_id();
            let var_type = VarType {
                pos: var_ident.pos,
                base_type: var_ident.ident,
                struct_type: None,
                symbol_ref: None,
            };

            let mut var_decls = self.parse_var_decl_list()?;
            self.semi()?;
            decorate_var_decls(&mut var_decls, id);

            return Ok(Stmnt::VarDecl(VarDeclStmnt {
                pos,
                id,
                input_modifier: None,
                type_modifiers: Vec::new(),
                storage_modifiers: Vec::new(),
                var_type,
                var_decls,
            }));
        }

        Err(self.error_unexpected_hint(
            "expected variable declaration, assignment or function call statement",
        ))
    }

    /// Parse one `case expr:` or `default:` label and the statements up to
    /// the next label or the closing brace. `break` is an ordinary statement
    /// inside the list.
    pub(crate) fn parse_switch_case(&mut self) -> Result<SwitchCase, ParseError> {
        let pos = self.pos();

        let expr = if self.is(TokenKind::Case) {
            self.accept_it();
            Some(self.parse_expr(false, None)?)
        } else {
            self.accept(TokenKind::Default)?;
            None
        };
        self.accept(TokenKind::Colon)?;

        let mut stmnts = Vec::new();
        while !self.is(TokenKind::Case)
            && !self.is(TokenKind::Default)
            && !self.is(TokenKind::RBrace)
        {
            stmnts.push(self.parse_stmnt()?);
        }

        Ok(SwitchCase { pos, expr, stmnts })
    }

    // ===== Lists =====

    pub(crate) fn parse_stmnt_list(&mut self) -> Result<Vec<Stmnt>, ParseError> {
        let mut stmnts = Vec::new();

        while !self.is(TokenKind::RBrace) {
            stmnts.push(self.parse_stmnt()?);
        }

        Ok(stmnts)
    }

    pub(crate) fn parse_switch_case_list(&mut self) -> Result<Vec<SwitchCase>, ParseError> {
        let mut cases = Vec::new();

        while self.is(TokenKind::Case) || self.is(TokenKind::Default) {
            cases.push(self.parse_switch_case()?);
        }

        Ok(cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::SourceCode;

    fn parse_body(stmnts: &str) -> Vec<Stmnt> {
        let text = format!("void f() {{ {} }}", stmnts);
        let program = Parser::new(None)
            .parse_source(&SourceCode::new("test.hlsl", text))
            .expect("parse failed");
        match program.global_decls.into_iter().next().unwrap() {
            GlobalDecl::Function(func) => func.code_block.unwrap().stmnts,
            other => panic!("expected function, got {:?}", other),
        }
    }

    fn parse_err(stmnts: &str) -> bool {
        let text = format!("void f() {{ {} }}", stmnts);
        Parser::new(None)
            .parse_source(&SourceCode::new("test.hlsl", text))
            .is_none()
    }

    #[test]
    fn test_for_loop() {
        let stmnts = parse_body("for (int i = 0; i < n; ++i) { a[i] = 0; }");

        let for_loop = match &stmnts[0] {
            Stmnt::ForLoop(for_loop) => for_loop,
            other => panic!("expected for loop, got {:?}", other),
        };

        match for_loop.init_stmnt.as_ref() {
            Stmnt::VarDecl(init) => {
                assert_eq!(init.var_type.base_type, "int");
                assert_eq!(init.var_decls[0].name, "i");
                assert!(init.var_decls[0].initializer.is_some());
            }
            other => panic!("expected var decl init, got {:?}", other),
        }

        match for_loop.condition.as_ref().unwrap() {
            Expr::Binary(cond) => assert_eq!(cond.op, "<"),
            other => panic!("expected binary condition, got {:?}", other),
        }

        match for_loop.iteration.as_ref().unwrap() {
            Expr::Unary(iter) => assert_eq!(iter.op, "++"),
            other => panic!("expected unary iteration, got {:?}", other),
        }

        let body = match for_loop.body_stmnt.as_ref() {
            Stmnt::CodeBlock(body) => &body.code_block.stmnts,
            other => panic!("expected code block body, got {:?}", other),
        };
        let assign = match &body[0] {
            Stmnt::Assign(assign) => assign,
            other => panic!("expected assignment, got {:?}", other),
        };
        assert_eq!(assign.var_ident.ident, "a");
        assert_eq!(assign.var_ident.array_indices.len(), 1);
        assert_eq!(assign.op, "=");
    }

    #[test]
    fn test_if_else_chain() {
        let stmnts = parse_body("if (x) return 1; else if (y) return 2; else return 3;");

        let if_stmnt = match &stmnts[0] {
            Stmnt::If(if_stmnt) => if_stmnt,
            other => panic!("expected if, got {:?}", other),
        };
        let else_stmnt = if_stmnt.else_stmnt.as_ref().unwrap();
        let nested = match else_stmnt.body_stmnt.as_ref() {
            Stmnt::If(nested) => nested,
            other => panic!("expected nested if, got {:?}", other),
        };
        assert!(nested.else_stmnt.is_some());
    }

    #[test]
    fn test_while_and_do_while() {
        let stmnts = parse_body("while (i < 4) i = i + 1; do { x = 0; } while (x);");

        assert!(matches!(stmnts[0], Stmnt::WhileLoop(_)));
        let do_while = match &stmnts[1] {
            Stmnt::DoWhileLoop(do_while) => do_while,
            other => panic!("expected do-while, got {:?}", other),
        };
        assert!(matches!(do_while.body_stmnt.as_ref(), Stmnt::CodeBlock(_)));
    }

    #[test]
    fn test_switch_cases_and_default() {
        let stmnts = parse_body(
            "switch (mode) { case 0: x = 1; break; case 1: case 2: x = 2; break; default: x = 0; }",
        );

        let switch = match &stmnts[0] {
            Stmnt::Switch(switch) => switch,
            other => panic!("expected switch, got {:?}", other),
        };
        assert_eq!(switch.cases.len(), 4);
        assert!(switch.cases[0].expr.is_some());
        // 'break' is an ordinary statement inside the case body
        assert_eq!(switch.cases[0].stmnts.len(), 2);
        assert!(matches!(switch.cases[0].stmnts[1], Stmnt::CtrlTransfer(_)));
        // fallthrough case has an empty body
        assert!(switch.cases[1].stmnts.is_empty());
        // default has no selector expression
        assert!(switch.cases[3].expr.is_none());
    }

    #[test]
    fn test_loop_attributes_attached() {
        let stmnts = parse_body("[unroll] for (int i = 0; i < 4; ++i) x = x + i; [branch] if (x) x = 0;");

        let for_loop = match &stmnts[0] {
            Stmnt::ForLoop(for_loop) => for_loop,
            other => panic!("expected for loop, got {:?}", other),
        };
        assert_eq!(for_loop.attribs.len(), 1);
        assert_eq!(for_loop.attribs[0].name.ident, "unroll");
        assert!(for_loop.attribs[0].arguments.is_empty());

        let if_stmnt = match &stmnts[1] {
            Stmnt::If(if_stmnt) => if_stmnt,
            other => panic!("expected if, got {:?}", other),
        };
        assert_eq!(if_stmnt.attribs[0].name.ident, "branch");
    }

    #[test]
    fn test_ctrl_transfer_kinds() {
        let stmnts = parse_body("discard; continue; break;");

        let spells: Vec<_> = stmnts
            .iter()
            .map(|stmnt| match stmnt {
                Stmnt::CtrlTransfer(ctrl) => ctrl.instruction.as_str(),
                other => panic!("expected control transfer, got {:?}", other),
            })
            .collect();
        assert_eq!(spells, ["discard", "continue", "break"]);
    }

    #[test]
    fn test_null_and_nested_block() {
        let stmnts = parse_body("; { ; }");

        assert!(matches!(stmnts[0], Stmnt::Null(_)));
        match &stmnts[1] {
            Stmnt::CodeBlock(block) => {
                assert!(matches!(block.code_block.stmnts[0], Stmnt::Null(_)))
            }
            other => panic!("expected code block, got {:?}", other),
        }
    }

    #[test]
    fn test_function_call_statement() {
        let stmnts = parse_body("clip(color.a - 0.5);");

        let call_stmnt = match &stmnts[0] {
            Stmnt::FunctionCall(call_stmnt) => call_stmnt,
            other => panic!("expected function call statement, got {:?}", other),
        };
        assert_eq!(call_stmnt.call.name.ident, "clip");
        assert_eq!(call_stmnt.call.arguments.len(), 1);
    }

    #[test]
    fn test_compound_assignment() {
        let stmnts = parse_body("color.rgb *= 0.5;");

        let assign = match &stmnts[0] {
            Stmnt::Assign(assign) => assign,
            other => panic!("expected assignment, got {:?}", other),
        };
        assert_eq!(assign.op, "*=");
        assert_eq!(assign.var_ident.ident, "color");
        assert_eq!(assign.var_ident.next.as_ref().unwrap().ident, "rgb");
    }

    #[test]
    fn test_increment_statement_seeds_expression() {
        let stmnts = parse_body("i++;");

        let expr_stmnt = match &stmnts[0] {
            Stmnt::Expr(expr_stmnt) => expr_stmnt,
            other => panic!("expected expression statement, got {:?}", other),
        };
        let post = match &expr_stmnt.expr {
            Expr::PostUnary(post) => post,
            other => panic!("expected post-unary, got {:?}", other),
        };
        assert_eq!(post.op, "++");
        match post.expr.as_ref() {
            Expr::VarAccess(access) => assert_eq!(access.var_ident.ident, "i"),
            other => panic!("expected var access, got {:?}", other),
        }
    }

    #[test]
    fn test_local_struct_decl_and_struct_typed_var() {
        let stmnts = parse_body("struct L { float v; }; struct M { float w; } m;");

        match &stmnts[0] {
            Stmnt::StructDecl(decl) => assert_eq!(decl.structure.name, "L"),
            other => panic!("expected struct decl statement, got {:?}", other),
        }
        let var_decl = match &stmnts[1] {
            Stmnt::VarDecl(var_decl) => var_decl,
            other => panic!("expected var decl statement, got {:?}", other),
        };
        assert_eq!(var_decl.var_type.struct_type.as_ref().unwrap().name, "M");
        assert_eq!(var_decl.var_decls[0].name, "m");
        assert_eq!(var_decl.var_decls[0].decl_stmnt_ref, var_decl.id);
    }

    #[test]
    fn test_modifier_prefixed_var_decl() {
        let stmnts = parse_body("static const float PI = 3.14159f;");

        let var_decl = match &stmnts[0] {
            Stmnt::VarDecl(var_decl) => var_decl,
            other => panic!("expected var decl statement, got {:?}", other),
        };
        assert_eq!(var_decl.storage_modifiers, ["static"]);
        assert_eq!(var_decl.type_modifiers, ["const"]);
        assert_eq!(var_decl.var_type.base_type, "float");
    }

    #[test]
    fn test_dotted_chain_cannot_declare() {
        assert!(parse_err("a.b c;"));
    }
}
