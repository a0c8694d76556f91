//! AST traversal
//!
//! [`Visitor`] has exactly one callback per node variant. Every callback
//! defaults to the matching `walk_*` function, which visits all children in
//! source order, so an empty `impl Visitor for T {}` already performs a
//! complete traversal and reaches every node exactly once.
//!
//! The `walk_global_decl` / `walk_stmnt` / `walk_expr` dispatchers match
//! exhaustively on their closed enums: adding a variant breaks compilation
//! until every traversal site handles it.

use crate::parser::ast::*;

pub trait Visitor {
    // --- Common ---

    fn visit_program(&mut self, ast: &Program) {
        walk_program(self, ast);
    }
    fn visit_code_block(&mut self, ast: &CodeBlock) {
        walk_code_block(self, ast);
    }
    fn visit_buffer_decl_ident(&mut self, ast: &BufferDeclIdent) {
        walk_buffer_decl_ident(self, ast);
    }
    fn visit_function_call(&mut self, ast: &FunctionCall) {
        walk_function_call(self, ast);
    }
    fn visit_structure(&mut self, ast: &Structure) {
        walk_structure(self, ast);
    }
    fn visit_switch_case(&mut self, ast: &SwitchCase) {
        walk_switch_case(self, ast);
    }

    // --- Global declarations ---

    fn visit_function_decl(&mut self, ast: &FunctionDecl) {
        walk_function_decl(self, ast);
    }
    fn visit_uniform_buffer_decl(&mut self, ast: &UniformBufferDecl) {
        walk_uniform_buffer_decl(self, ast);
    }
    fn visit_texture_decl(&mut self, ast: &TextureDecl) {
        walk_texture_decl(self, ast);
    }
    fn visit_sampler_decl(&mut self, ast: &SamplerDecl) {
        walk_sampler_decl(self, ast);
    }
    fn visit_struct_decl(&mut self, ast: &StructDecl) {
        walk_struct_decl(self, ast);
    }
    fn visit_directive_decl(&mut self, ast: &DirectiveDecl) {
        walk_directive_decl(self, ast);
    }

    // --- Statements ---

    fn visit_null_stmnt(&mut self, ast: &NullStmnt) {
        walk_null_stmnt(self, ast);
    }
    fn visit_directive_stmnt(&mut self, ast: &DirectiveStmnt) {
        walk_directive_stmnt(self, ast);
    }
    fn visit_code_block_stmnt(&mut self, ast: &CodeBlockStmnt) {
        walk_code_block_stmnt(self, ast);
    }
    fn visit_for_loop_stmnt(&mut self, ast: &ForLoopStmnt) {
        walk_for_loop_stmnt(self, ast);
    }
    fn visit_while_loop_stmnt(&mut self, ast: &WhileLoopStmnt) {
        walk_while_loop_stmnt(self, ast);
    }
    fn visit_do_while_loop_stmnt(&mut self, ast: &DoWhileLoopStmnt) {
        walk_do_while_loop_stmnt(self, ast);
    }
    fn visit_if_stmnt(&mut self, ast: &IfStmnt) {
        walk_if_stmnt(self, ast);
    }
    fn visit_else_stmnt(&mut self, ast: &ElseStmnt) {
        walk_else_stmnt(self, ast);
    }
    fn visit_switch_stmnt(&mut self, ast: &SwitchStmnt) {
        walk_switch_stmnt(self, ast);
    }
    fn visit_var_decl_stmnt(&mut self, ast: &VarDeclStmnt) {
        walk_var_decl_stmnt(self, ast);
    }
    fn visit_assign_stmnt(&mut self, ast: &AssignStmnt) {
        walk_assign_stmnt(self, ast);
    }
    fn visit_expr_stmnt(&mut self, ast: &ExprStmnt) {
        walk_expr_stmnt(self, ast);
    }
    fn visit_function_call_stmnt(&mut self, ast: &FunctionCallStmnt) {
        walk_function_call_stmnt(self, ast);
    }
    fn visit_return_stmnt(&mut self, ast: &ReturnStmnt) {
        walk_return_stmnt(self, ast);
    }
    fn visit_struct_decl_stmnt(&mut self, ast: &StructDeclStmnt) {
        walk_struct_decl_stmnt(self, ast);
    }
    fn visit_ctrl_transfer_stmnt(&mut self, ast: &CtrlTransferStmnt) {
        walk_ctrl_transfer_stmnt(self, ast);
    }

    // --- Expressions ---

    fn visit_list_expr(&mut self, ast: &ListExpr) {
        walk_list_expr(self, ast);
    }
    fn visit_literal_expr(&mut self, ast: &LiteralExpr) {
        walk_literal_expr(self, ast);
    }
    fn visit_type_name_expr(&mut self, ast: &TypeNameExpr) {
        walk_type_name_expr(self, ast);
    }
    fn visit_ternary_expr(&mut self, ast: &TernaryExpr) {
        walk_ternary_expr(self, ast);
    }
    fn visit_binary_expr(&mut self, ast: &BinaryExpr) {
        walk_binary_expr(self, ast);
    }
    fn visit_unary_expr(&mut self, ast: &UnaryExpr) {
        walk_unary_expr(self, ast);
    }
    fn visit_post_unary_expr(&mut self, ast: &PostUnaryExpr) {
        walk_post_unary_expr(self, ast);
    }
    fn visit_function_call_expr(&mut self, ast: &FunctionCallExpr) {
        walk_function_call_expr(self, ast);
    }
    fn visit_bracket_expr(&mut self, ast: &BracketExpr) {
        walk_bracket_expr(self, ast);
    }
    fn visit_cast_expr(&mut self, ast: &CastExpr) {
        walk_cast_expr(self, ast);
    }
    fn visit_var_access_expr(&mut self, ast: &VarAccessExpr) {
        walk_var_access_expr(self, ast);
    }
    fn visit_initializer_expr(&mut self, ast: &InitializerExpr) {
        walk_initializer_expr(self, ast);
    }

    // --- Variable fragments ---

    fn visit_pack_offset(&mut self, ast: &PackOffset) {
        walk_pack_offset(self, ast);
    }
    fn visit_var_semantic(&mut self, ast: &VarSemantic) {
        walk_var_semantic(self, ast);
    }
    fn visit_var_type(&mut self, ast: &VarType) {
        walk_var_type(self, ast);
    }
    fn visit_var_ident(&mut self, ast: &VarIdent) {
        walk_var_ident(self, ast);
    }
    fn visit_var_decl(&mut self, ast: &VarDecl) {
        walk_var_decl(self, ast);
    }
}

// ===== Dispatchers =====

pub fn walk_global_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &GlobalDecl) {
    match ast {
        GlobalDecl::Function(ast) => visitor.visit_function_decl(ast),
        GlobalDecl::UniformBuffer(ast) => visitor.visit_uniform_buffer_decl(ast),
        GlobalDecl::Texture(ast) => visitor.visit_texture_decl(ast),
        GlobalDecl::Sampler(ast) => visitor.visit_sampler_decl(ast),
        GlobalDecl::Struct(ast) => visitor.visit_struct_decl(ast),
        GlobalDecl::Directive(ast) => visitor.visit_directive_decl(ast),
    }
}

pub fn walk_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &Stmnt) {
    match ast {
        Stmnt::Null(ast) => visitor.visit_null_stmnt(ast),
        Stmnt::Directive(ast) => visitor.visit_directive_stmnt(ast),
        Stmnt::CodeBlock(ast) => visitor.visit_code_block_stmnt(ast),
        Stmnt::ForLoop(ast) => visitor.visit_for_loop_stmnt(ast),
        Stmnt::WhileLoop(ast) => visitor.visit_while_loop_stmnt(ast),
        Stmnt::DoWhileLoop(ast) => visitor.visit_do_while_loop_stmnt(ast),
        Stmnt::If(ast) => visitor.visit_if_stmnt(ast),
        Stmnt::Else(ast) => visitor.visit_else_stmnt(ast),
        Stmnt::Switch(ast) => visitor.visit_switch_stmnt(ast),
        Stmnt::VarDecl(ast) => visitor.visit_var_decl_stmnt(ast),
        Stmnt::Assign(ast) => visitor.visit_assign_stmnt(ast),
        Stmnt::Expr(ast) => visitor.visit_expr_stmnt(ast),
        Stmnt::FunctionCall(ast) => visitor.visit_function_call_stmnt(ast),
        Stmnt::Return(ast) => visitor.visit_return_stmnt(ast),
        Stmnt::StructDecl(ast) => visitor.visit_struct_decl_stmnt(ast),
        Stmnt::CtrlTransfer(ast) => visitor.visit_ctrl_transfer_stmnt(ast),
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &Expr) {
    match ast {
        Expr::List(ast) => visitor.visit_list_expr(ast),
        Expr::Literal(ast) => visitor.visit_literal_expr(ast),
        Expr::TypeName(ast) => visitor.visit_type_name_expr(ast),
        Expr::Ternary(ast) => visitor.visit_ternary_expr(ast),
        Expr::Binary(ast) => visitor.visit_binary_expr(ast),
        Expr::Unary(ast) => visitor.visit_unary_expr(ast),
        Expr::PostUnary(ast) => visitor.visit_post_unary_expr(ast),
        Expr::FunctionCall(ast) => visitor.visit_function_call_expr(ast),
        Expr::Bracket(ast) => visitor.visit_bracket_expr(ast),
        Expr::Cast(ast) => visitor.visit_cast_expr(ast),
        Expr::VarAccess(ast) => visitor.visit_var_access_expr(ast),
        Expr::Initializer(ast) => visitor.visit_initializer_expr(ast),
    }
}

// ===== Walk functions =====

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, ast: &Program) {
    for global_decl in &ast.global_decls {
        walk_global_decl(visitor, global_decl);
    }
}

pub fn walk_code_block<V: Visitor + ?Sized>(visitor: &mut V, ast: &CodeBlock) {
    for stmnt in &ast.stmnts {
        walk_stmnt(visitor, stmnt);
    }
}

pub fn walk_buffer_decl_ident<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &BufferDeclIdent) {}

pub fn walk_function_call<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionCall) {
    visitor.visit_var_ident(&ast.name);
    for argument in &ast.arguments {
        walk_expr(visitor, argument);
    }
}

pub fn walk_structure<V: Visitor + ?Sized>(visitor: &mut V, ast: &Structure) {
    for member in &ast.members {
        visitor.visit_var_decl_stmnt(member);
    }
}

pub fn walk_switch_case<V: Visitor + ?Sized>(visitor: &mut V, ast: &SwitchCase) {
    if let Some(expr) = &ast.expr {
        walk_expr(visitor, expr);
    }
    for stmnt in &ast.stmnts {
        walk_stmnt(visitor, stmnt);
    }
}

pub fn walk_function_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionDecl) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    visitor.visit_var_type(&ast.return_type);
    for parameter in &ast.parameters {
        visitor.visit_var_decl_stmnt(parameter);
    }
    if let Some(code_block) = &ast.code_block {
        visitor.visit_code_block(code_block);
    }
}

pub fn walk_uniform_buffer_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &UniformBufferDecl) {
    for member in &ast.members {
        visitor.visit_var_decl_stmnt(member);
    }
}

pub fn walk_texture_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &TextureDecl) {
    for name in &ast.names {
        visitor.visit_buffer_decl_ident(name);
    }
}

pub fn walk_sampler_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &SamplerDecl) {
    for name in &ast.names {
        visitor.visit_buffer_decl_ident(name);
    }
}

pub fn walk_struct_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &StructDecl) {
    visitor.visit_structure(&ast.structure);
}

pub fn walk_directive_decl<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &DirectiveDecl) {}

pub fn walk_null_stmnt<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &NullStmnt) {}

pub fn walk_directive_stmnt<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &DirectiveStmnt) {}

pub fn walk_code_block_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &CodeBlockStmnt) {
    visitor.visit_code_block(&ast.code_block);
}

pub fn walk_for_loop_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ForLoopStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    walk_stmnt(visitor, &ast.init_stmnt);
    if let Some(condition) = &ast.condition {
        walk_expr(visitor, condition);
    }
    if let Some(iteration) = &ast.iteration {
        walk_expr(visitor, iteration);
    }
    walk_stmnt(visitor, &ast.body_stmnt);
}

pub fn walk_while_loop_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &WhileLoopStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    walk_expr(visitor, &ast.condition);
    walk_stmnt(visitor, &ast.body_stmnt);
}

pub fn walk_do_while_loop_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &DoWhileLoopStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    walk_stmnt(visitor, &ast.body_stmnt);
    walk_expr(visitor, &ast.condition);
}

pub fn walk_if_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &IfStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    walk_expr(visitor, &ast.condition);
    walk_stmnt(visitor, &ast.body_stmnt);
    if let Some(else_stmnt) = &ast.else_stmnt {
        visitor.visit_else_stmnt(else_stmnt);
    }
}

pub fn walk_else_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ElseStmnt) {
    walk_stmnt(visitor, &ast.body_stmnt);
}

pub fn walk_switch_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &SwitchStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    walk_expr(visitor, &ast.selector);
    for switch_case in &ast.cases {
        visitor.visit_switch_case(switch_case);
    }
}

pub fn walk_var_decl_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarDeclStmnt) {
    visitor.visit_var_type(&ast.var_type);
    for var_decl in &ast.var_decls {
        visitor.visit_var_decl(var_decl);
    }
}

pub fn walk_assign_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &AssignStmnt) {
    visitor.visit_var_ident(&ast.var_ident);
    walk_expr(visitor, &ast.expr);
}

pub fn walk_expr_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ExprStmnt) {
    walk_expr(visitor, &ast.expr);
}

pub fn walk_function_call_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionCallStmnt) {
    visitor.visit_function_call(&ast.call);
}

pub fn walk_return_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ReturnStmnt) {
    if let Some(expr) = &ast.expr {
        walk_expr(visitor, expr);
    }
}

pub fn walk_struct_decl_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &StructDeclStmnt) {
    visitor.visit_structure(&ast.structure);
}

pub fn walk_ctrl_transfer_stmnt<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &CtrlTransferStmnt) {}

pub fn walk_list_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &ListExpr) {
    walk_expr(visitor, &ast.first_expr);
    walk_expr(visitor, &ast.next_expr);
}

pub fn walk_literal_expr<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &LiteralExpr) {}

pub fn walk_type_name_expr<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &TypeNameExpr) {}

pub fn walk_ternary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &TernaryExpr) {
    walk_expr(visitor, &ast.condition);
    walk_expr(visitor, &ast.if_expr);
    walk_expr(visitor, &ast.else_expr);
}

pub fn walk_binary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &BinaryExpr) {
    walk_expr(visitor, &ast.lhs_expr);
    walk_expr(visitor, &ast.rhs_expr);
}

pub fn walk_unary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &UnaryExpr) {
    walk_expr(visitor, &ast.expr);
}

pub fn walk_post_unary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &PostUnaryExpr) {
    walk_expr(visitor, &ast.expr);
}

pub fn walk_function_call_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionCallExpr) {
    visitor.visit_function_call(&ast.call);
}

pub fn walk_bracket_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &BracketExpr) {
    walk_expr(visitor, &ast.expr);
}

pub fn walk_cast_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &CastExpr) {
    walk_expr(visitor, &ast.type_expr);
    walk_expr(visitor, &ast.expr);
}

pub fn walk_var_access_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarAccessExpr) {
    visitor.visit_var_ident(&ast.var_ident);
    if let Some(assign_expr) = &ast.assign_expr {
        walk_expr(visitor, assign_expr);
    }
}

pub fn walk_initializer_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &InitializerExpr) {
    for expr in &ast.exprs {
        walk_expr(visitor, expr);
    }
}

pub fn walk_pack_offset<V: Visitor + ?Sized>(_visitor: &mut V, _ast: &PackOffset) {}

pub fn walk_var_semantic<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarSemantic) {
    if let VarSemanticKind::PackOffset(pack_offset) = &ast.kind {
        visitor.visit_pack_offset(pack_offset);
    }
}

pub fn walk_var_type<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarType) {
    if let Some(struct_type) = &ast.struct_type {
        visitor.visit_structure(struct_type);
    }
}

pub fn walk_var_ident<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarIdent) {
    for index in &ast.array_indices {
        walk_expr(visitor, index);
    }
    if let Some(next) = &ast.next {
        visitor.visit_var_ident(next);
    }
}

pub fn walk_var_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarDecl) {
    for dim in &ast.array_dims {
        walk_expr(visitor, dim);
    }
    for semantic in &ast.semantics {
        visitor.visit_var_semantic(semantic);
    }
    if let Some(initializer) = &ast.initializer {
        walk_expr(visitor, initializer);
    }
}
