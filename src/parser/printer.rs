//! AST printer
//!
//! Dumps a parsed tree through a [`Log`], one line per node, using the
//! logger's indentation hooks for nesting. Each line carries the node name
//! and its salient string field (names, operators, literal spellings).
//!
//! Source positions are off by default so that two sources differing only in
//! whitespace produce byte-identical dumps; [`AstPrinter::with_positions`]
//! adds them for debugging.

use crate::log::Log;
use crate::parser::ast::*;
use crate::parser::visitor::{self, Visitor};

pub struct AstPrinter<'a> {
    log: &'a mut dyn Log,
    show_positions: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(log: &'a mut dyn Log) -> Self {
        Self {
            log,
            show_positions: false,
        }
    }

    /// Include `(line:col)` after every node name.
    pub fn with_positions(mut self) -> Self {
        self.show_positions = true;
        self
    }

    /// Print the whole tree.
    pub fn dump(&mut self, program: &Program) {
        self.visit_program(program);
    }

    fn print(&mut self, pos: SourcePos, name: &str, info: &str) {
        let mut msg = String::from(name);
        if self.show_positions {
            msg.push_str(&format!(" ({})", pos));
        }
        if !info.is_empty() {
            msg.push_str(&format!(" \"{}\"", info));
        }
        self.log.info(&msg);
    }
}

/// Print one line, then walk the children one indentation level deeper.
macro_rules! print_and_walk {
    ($self:ident, $ast:ident, $name:expr, $info:expr, $walk:path) => {{
        let info: &str = $info;
        $self.print($ast.pos, $name, info);
        $self.log.inc_indent();
        $walk($self, $ast);
        $self.log.dec_indent();
    }};
}

impl Visitor for AstPrinter<'_> {
    fn visit_program(&mut self, ast: &Program) {
        print_and_walk!(self, ast, "Program", "", visitor::walk_program);
    }

    fn visit_code_block(&mut self, ast: &CodeBlock) {
        print_and_walk!(self, ast, "CodeBlock", "", visitor::walk_code_block);
    }

    fn visit_buffer_decl_ident(&mut self, ast: &BufferDeclIdent) {
        self.print(ast.pos, "BufferDeclIdent", &ast.ident);
    }

    fn visit_function_call(&mut self, ast: &FunctionCall) {
        print_and_walk!(self, ast, "FunctionCall", "", visitor::walk_function_call);
    }

    fn visit_structure(&mut self, ast: &Structure) {
        print_and_walk!(self, ast, "Structure", &ast.name, visitor::walk_structure);
    }

    fn visit_switch_case(&mut self, ast: &SwitchCase) {
        print_and_walk!(self, ast, "SwitchCase", "", visitor::walk_switch_case);
    }

    fn visit_function_decl(&mut self, ast: &FunctionDecl) {
        print_and_walk!(self, ast, "FunctionDecl", &ast.name, visitor::walk_function_decl);
    }

    fn visit_uniform_buffer_decl(&mut self, ast: &UniformBufferDecl) {
        let info = format!("{} ({})", ast.name, ast.buffer_type);
        print_and_walk!(self, ast, "UniformBufferDecl", &info, visitor::walk_uniform_buffer_decl);
    }

    fn visit_texture_decl(&mut self, ast: &TextureDecl) {
        print_and_walk!(self, ast, "TextureDecl", &ast.texture_type, visitor::walk_texture_decl);
    }

    fn visit_sampler_decl(&mut self, ast: &SamplerDecl) {
        print_and_walk!(self, ast, "SamplerDecl", &ast.sampler_type, visitor::walk_sampler_decl);
    }

    fn visit_struct_decl(&mut self, ast: &StructDecl) {
        print_and_walk!(self, ast, "StructDecl", "", visitor::walk_struct_decl);
    }

    fn visit_directive_decl(&mut self, ast: &DirectiveDecl) {
        self.print(ast.pos, "DirectiveDecl", &ast.line);
    }

    fn visit_null_stmnt(&mut self, ast: &NullStmnt) {
        self.print(ast.pos, "NullStmnt", "");
    }

    fn visit_directive_stmnt(&mut self, ast: &DirectiveStmnt) {
        self.print(ast.pos, "DirectiveStmnt", &ast.line);
    }

    fn visit_code_block_stmnt(&mut self, ast: &CodeBlockStmnt) {
        print_and_walk!(self, ast, "CodeBlockStmnt", "", visitor::walk_code_block_stmnt);
    }

    fn visit_for_loop_stmnt(&mut self, ast: &ForLoopStmnt) {
        print_and_walk!(self, ast, "ForLoopStmnt", "", visitor::walk_for_loop_stmnt);
    }

    fn visit_while_loop_stmnt(&mut self, ast: &WhileLoopStmnt) {
        print_and_walk!(self, ast, "WhileLoopStmnt", "", visitor::walk_while_loop_stmnt);
    }

    fn visit_do_while_loop_stmnt(&mut self, ast: &DoWhileLoopStmnt) {
        print_and_walk!(self, ast, "DoWhileLoopStmnt", "", visitor::walk_do_while_loop_stmnt);
    }

    fn visit_if_stmnt(&mut self, ast: &IfStmnt) {
        print_and_walk!(self, ast, "IfStmnt", "", visitor::walk_if_stmnt);
    }

    fn visit_else_stmnt(&mut self, ast: &ElseStmnt) {
        print_and_walk!(self, ast, "ElseStmnt", "", visitor::walk_else_stmnt);
    }

    fn visit_switch_stmnt(&mut self, ast: &SwitchStmnt) {
        print_and_walk!(self, ast, "SwitchStmnt", "", visitor::walk_switch_stmnt);
    }

    fn visit_var_decl_stmnt(&mut self, ast: &VarDeclStmnt) {
        print_and_walk!(self, ast, "VarDeclStmnt", "", visitor::walk_var_decl_stmnt);
    }

    fn visit_assign_stmnt(&mut self, ast: &AssignStmnt) {
        print_and_walk!(self, ast, "AssignStmnt", &ast.op, visitor::walk_assign_stmnt);
    }

    fn visit_expr_stmnt(&mut self, ast: &ExprStmnt) {
        print_and_walk!(self, ast, "ExprStmnt", "", visitor::walk_expr_stmnt);
    }

    fn visit_function_call_stmnt(&mut self, ast: &FunctionCallStmnt) {
        print_and_walk!(self, ast, "FunctionCallStmnt", "", visitor::walk_function_call_stmnt);
    }

    fn visit_return_stmnt(&mut self, ast: &ReturnStmnt) {
        print_and_walk!(self, ast, "ReturnStmnt", "", visitor::walk_return_stmnt);
    }

    fn visit_struct_decl_stmnt(&mut self, ast: &StructDeclStmnt) {
        print_and_walk!(self, ast, "StructDeclStmnt", "", visitor::walk_struct_decl_stmnt);
    }

    fn visit_ctrl_transfer_stmnt(&mut self, ast: &CtrlTransferStmnt) {
        self.print(ast.pos, "CtrlTransferStmnt", &ast.instruction);
    }

    fn visit_list_expr(&mut self, ast: &ListExpr) {
        print_and_walk!(self, ast, "ListExpr", "", visitor::walk_list_expr);
    }

    fn visit_literal_expr(&mut self, ast: &LiteralExpr) {
        self.print(ast.pos, "LiteralExpr", &ast.literal);
    }

    fn visit_type_name_expr(&mut self, ast: &TypeNameExpr) {
        self.print(ast.pos, "TypeNameExpr", &ast.type_name);
    }

    fn visit_ternary_expr(&mut self, ast: &TernaryExpr) {
        print_and_walk!(self, ast, "TernaryExpr", "", visitor::walk_ternary_expr);
    }

    fn visit_binary_expr(&mut self, ast: &BinaryExpr) {
        print_and_walk!(self, ast, "BinaryExpr", &ast.op, visitor::walk_binary_expr);
    }

    fn visit_unary_expr(&mut self, ast: &UnaryExpr) {
        print_and_walk!(self, ast, "UnaryExpr", &ast.op, visitor::walk_unary_expr);
    }

    fn visit_post_unary_expr(&mut self, ast: &PostUnaryExpr) {
        print_and_walk!(self, ast, "PostUnaryExpr", &ast.op, visitor::walk_post_unary_expr);
    }

    fn visit_function_call_expr(&mut self, ast: &FunctionCallExpr) {
        print_and_walk!(self, ast, "FunctionCallExpr", "", visitor::walk_function_call_expr);
    }

    fn visit_bracket_expr(&mut self, ast: &BracketExpr) {
        print_and_walk!(self, ast, "BracketExpr", "", visitor::walk_bracket_expr);
    }

    fn visit_cast_expr(&mut self, ast: &CastExpr) {
        print_and_walk!(self, ast, "CastExpr", "", visitor::walk_cast_expr);
    }

    fn visit_var_access_expr(&mut self, ast: &VarAccessExpr) {
        let info = ast.assign_op.clone().unwrap_or_default();
        print_and_walk!(self, ast, "VarAccessExpr", &info, visitor::walk_var_access_expr);
    }

    fn visit_initializer_expr(&mut self, ast: &InitializerExpr) {
        print_and_walk!(self, ast, "InitializerExpr", "", visitor::walk_initializer_expr);
    }

    fn visit_pack_offset(&mut self, ast: &PackOffset) {
        let mut info = ast.register_name.clone();
        if let Some(component) = &ast.vector_component {
            info.push_str(&format!(" ({})", component));
        }
        self.print(ast.pos, "PackOffset", &info);
    }

    fn visit_var_semantic(&mut self, ast: &VarSemantic) {
        let info = match &ast.kind {
            VarSemanticKind::Semantic(semantic) => semantic.clone(),
            VarSemanticKind::Register(register) => format!("register({})", register),
            VarSemanticKind::PackOffset(_) => String::new(),
        };
        print_and_walk!(self, ast, "VarSemantic", &info, visitor::walk_var_semantic);
    }

    fn visit_var_type(&mut self, ast: &VarType) {
        print_and_walk!(self, ast, "VarType", &ast.base_type, visitor::walk_var_type);
    }

    fn visit_var_ident(&mut self, ast: &VarIdent) {
        print_and_walk!(self, ast, "VarIdent", &ast.ident, visitor::walk_var_ident);
    }

    fn visit_var_decl(&mut self, ast: &VarDecl) {
        print_and_walk!(self, ast, "VarDecl", &ast.name, visitor::walk_var_decl);
    }
}
