//! AST (Abstract Syntax Tree) definitions for the HLSL front-end
//!
//! The tree is rooted at [`Program`] and owned strictly top-down. The few
//! back-references the tree needs (a variable declaration pointing at its
//! enclosing declaration statement, a variable type pointing at its own
//! anonymous structure) are expressed as non-owning [`NodeId`] handles
//! instead of shared ownership.

use std::fmt;

/// Unique identifier for AST nodes that can be the target of a back-reference.
///
/// Ids are assigned by the parser, start at 1, and are never reused within a
/// single parsed [`Program`].
pub type NodeId = usize;

/// Source position information for diagnostics and tooling.
///
/// `file` is the numeric id of the [`SourceCode`](crate::parser::lexer::SourceCode)
/// the position refers to; the file *name* is kept once on the source, not on
/// every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub file: u32,
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub fn new(file: u32, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Top-level translation unit: an ordered list of global declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub pos: SourcePos,
    pub global_decls: Vec<GlobalDecl>,
}

/// Braced statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub pos: SourcePos,
    pub stmnts: Vec<Stmnt>,
}

/// Global declarations
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalDecl {
    Function(FunctionDecl),
    UniformBuffer(UniformBufferDecl),
    Texture(TextureDecl),
    Sampler(SamplerDecl),
    Struct(StructDecl),
    Directive(DirectiveDecl),
}

/// Function declaration or definition.
///
/// `code_block` is `Some` iff the declaration is a definition; a forward
/// declaration ends in `;` instead of a body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub return_type: VarType,
    pub name: String,
    pub parameters: Vec<VarDeclStmnt>,
    pub semantic: Option<String>,
    pub code_block: Option<CodeBlock>,
}

/// Constant buffer declaration (`cbuffer` or `tbuffer`).
#[derive(Debug, Clone, PartialEq)]
pub struct UniformBufferDecl {
    pub pos: SourcePos,
    /// Buffer keyword as spelled, e.g. `cbuffer`.
    pub buffer_type: String,
    pub name: String,
    pub register_name: Option<String>,
    pub members: Vec<VarDeclStmnt>,
}

/// Texture object declaration, e.g. `Texture2D<float> shadowMap : register(t0);`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDecl {
    pub pos: SourcePos,
    pub texture_type: String,
    /// Generic color type between `<` and `>`, when present.
    pub color_type: Option<String>,
    /// Never empty.
    pub names: Vec<BufferDeclIdent>,
}

/// Sampler state declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerDecl {
    pub pos: SourcePos,
    pub sampler_type: String,
    /// Never empty.
    pub names: Vec<BufferDeclIdent>,
}

/// Global structure declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub pos: SourcePos,
    pub structure: Structure,
}

/// Preprocessor directive kept verbatim as an opaque declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDecl {
    pub pos: SourcePos,
    pub line: String,
}

/// Structure type: name plus ordered member declaration statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub pos: SourcePos,
    pub id: NodeId,
    pub name: String,
    pub members: Vec<VarDeclStmnt>,
}

/// Identifier inside a texture/sampler declaration, with its optional
/// register binding.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferDeclIdent {
    pub pos: SourcePos,
    pub ident: String,
    pub register_name: Option<String>,
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmnt {
    Null(NullStmnt),
    Directive(DirectiveStmnt),
    CodeBlock(CodeBlockStmnt),
    ForLoop(ForLoopStmnt),
    WhileLoop(WhileLoopStmnt),
    DoWhileLoop(DoWhileLoopStmnt),
    If(IfStmnt),
    Else(ElseStmnt),
    Switch(SwitchStmnt),
    VarDecl(VarDeclStmnt),
    Assign(AssignStmnt),
    Expr(ExprStmnt),
    FunctionCall(FunctionCallStmnt),
    Return(ReturnStmnt),
    StructDecl(StructDeclStmnt),
    CtrlTransfer(CtrlTransferStmnt),
}

/// Empty statement (a bare `;`).
#[derive(Debug, Clone, PartialEq)]
pub struct NullStmnt {
    pub pos: SourcePos,
}

/// Preprocessor directive in statement position, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveStmnt {
    pub pos: SourcePos,
    pub line: String,
}

/// Nested code block as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlockStmnt {
    pub pos: SourcePos,
    pub code_block: CodeBlock,
}

/// `for` loop. The init part is a full statement and owns its semicolon;
/// condition and iteration are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoopStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub init_stmnt: Box<Stmnt>,
    pub condition: Option<Expr>,
    pub iteration: Option<Expr>,
    pub body_stmnt: Box<Stmnt>,
}

/// `while` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoopStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub condition: Expr,
    pub body_stmnt: Box<Stmnt>,
}

/// `do`-`while` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileLoopStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub body_stmnt: Box<Stmnt>,
    pub condition: Expr,
}

/// `if` statement; the else-chain hangs off `else_stmnt`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub condition: Expr,
    pub body_stmnt: Box<Stmnt>,
    pub else_stmnt: Option<Box<ElseStmnt>>,
}

/// `else` branch; `else if` chains nest another [`IfStmnt`] in the body.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseStmnt {
    pub pos: SourcePos,
    pub body_stmnt: Box<Stmnt>,
}

/// `switch` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub selector: Expr,
    pub cases: Vec<SwitchCase>,
}

/// One `case expr:` or `default:` label with the statements up to the next
/// label or the closing brace. `expr` is `None` for `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub pos: SourcePos,
    pub expr: Option<Expr>,
    pub stmnts: Vec<Stmnt>,
}

/// Variable declaration statement: modifiers, a type, and one or more
/// declarators.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmnt {
    pub pos: SourcePos,
    /// Back-reference target for the contained [`VarDecl`]s.
    pub id: NodeId,
    pub input_modifier: Option<String>,
    pub type_modifiers: Vec<String>,
    pub storage_modifiers: Vec<String>,
    pub var_type: VarType,
    /// Never empty.
    pub var_decls: Vec<VarDecl>,
}

/// Assignment statement `varIdent op expr;`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmnt {
    pub pos: SourcePos,
    pub var_ident: VarIdent,
    /// Assignment operator as spelled, e.g. `=` or `+=`.
    pub op: String,
    pub expr: Expr,
}

/// Arbitrary expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmnt {
    pub pos: SourcePos,
    pub expr: Expr,
}

/// Function call in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallStmnt {
    pub pos: SourcePos,
    pub call: FunctionCall,
}

/// `return` statement with optional result expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmnt {
    pub pos: SourcePos,
    pub expr: Option<Expr>,
}

/// Structure declaration in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclStmnt {
    pub pos: SourcePos,
    pub structure: Structure,
}

/// `break`, `continue`, or `discard`.
#[derive(Debug, Clone, PartialEq)]
pub struct CtrlTransferStmnt {
    pub pos: SourcePos,
    pub instruction: String,
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    List(ListExpr),
    Literal(LiteralExpr),
    TypeName(TypeNameExpr),
    Ternary(TernaryExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    PostUnary(PostUnaryExpr),
    FunctionCall(FunctionCallExpr),
    Bracket(BracketExpr),
    Cast(CastExpr),
    VarAccess(VarAccessExpr),
    Initializer(InitializerExpr),
}

/// Comma-chained expression pair (`a, b`), right-linear.
#[derive(Debug, Clone, PartialEq)]
pub struct ListExpr {
    pub pos: SourcePos,
    pub first_expr: Box<Expr>,
    pub next_expr: Box<Expr>,
}

/// Boolean, integer, or floating-point literal, spelling preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub pos: SourcePos,
    pub literal: String,
}

/// A bare type name in expression position, e.g. the `int` in `(int)x`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNameExpr {
    pub pos: SourcePos,
    pub type_name: String,
}

/// Conditional expression `cond ? a : b`.
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub pos: SourcePos,
    pub condition: Box<Expr>,
    pub if_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
}

/// Binary expression.
///
/// The parser does not apply operator precedence: `a + b * c` comes out as
/// a right-leaning chain regardless of the operators involved, and a later
/// pass re-balances with precedence tables. Downstream passes rely on that
/// shape, so it must not be "fixed" during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub pos: SourcePos,
    pub lhs_expr: Box<Expr>,
    pub op: String,
    pub rhs_expr: Box<Expr>,
}

/// Prefix unary expression (`!x`, `-x`, `++x`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub pos: SourcePos,
    pub op: String,
    pub expr: Box<Expr>,
}

/// Postfix unary expression (`x++`, `x--`).
#[derive(Debug, Clone, PartialEq)]
pub struct PostUnaryExpr {
    pub pos: SourcePos,
    pub expr: Box<Expr>,
    pub op: String,
}

/// Function (or type-constructor) call in expression position.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallExpr {
    pub pos: SourcePos,
    pub call: FunctionCall,
}

/// Parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketExpr {
    pub pos: SourcePos,
    pub expr: Box<Expr>,
}

/// Cast expression `(type) expr`.
///
/// `type_expr` is syntactically constrained to a [`TypeNameExpr`] or a
/// [`VarAccessExpr`] without an assignment part; see the bracket-vs-cast
/// rule in the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub pos: SourcePos,
    pub type_expr: Box<Expr>,
    pub expr: Box<Expr>,
}

/// Variable access with optional assignment-in-expression
/// (`x`, `a.b[i]`, `x = expr`).
#[derive(Debug, Clone, PartialEq)]
pub struct VarAccessExpr {
    pub pos: SourcePos,
    pub var_ident: VarIdent,
    pub assign_op: Option<String>,
    pub assign_expr: Option<Box<Expr>>,
}

/// Brace-enclosed initializer list `{ a, b, c }`.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializerExpr {
    pub pos: SourcePos,
    pub exprs: Vec<Expr>,
}

/// Variable fragments
///
/// A variable type is either a base type spelling (scalar, vector, matrix,
/// texture, sampler, user identifier, or `void` for function returns) or an
/// owned anonymous [`Structure`] - exactly one of the two.
#[derive(Debug, Clone, PartialEq)]
pub struct VarType {
    pub pos: SourcePos,
    /// Empty iff `struct_type` is present.
    pub base_type: String,
    pub struct_type: Option<Structure>,
    /// Non-owning handle to the anonymous structure's [`Structure::id`].
    pub symbol_ref: Option<NodeId>,
}

/// Dotted identifier chain with per-step array indices: `a[0].b.c[i]`.
/// The chain is right-linear through `next`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarIdent {
    pub pos: SourcePos,
    pub ident: String,
    pub array_indices: Vec<Expr>,
    pub next: Option<Box<VarIdent>>,
}

/// Single declarator inside a [`VarDeclStmnt`].
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub pos: SourcePos,
    pub name: String,
    pub array_dims: Vec<Expr>,
    pub semantics: Vec<VarSemantic>,
    pub initializer: Option<Expr>,
    /// Id of the enclosing [`VarDeclStmnt`]; decorated by the parser at every
    /// construction site, so it is never dangling.
    pub decl_stmnt_ref: NodeId,
}

/// Colon-introduced binding annotation on a declarator.
#[derive(Debug, Clone, PartialEq)]
pub struct VarSemantic {
    pub pos: SourcePos,
    pub kind: VarSemanticKind,
}

/// The three mutually exclusive semantic forms.
#[derive(Debug, Clone, PartialEq)]
pub enum VarSemanticKind {
    /// Plain semantic identifier, e.g. `SV_Target`.
    Semantic(String),
    /// `register(IDENT)` slot binding.
    Register(String),
    /// `packoffset(IDENT(.comp)?)` layout annotation.
    PackOffset(PackOffset),
}

/// Uniform buffer layout annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct PackOffset {
    pub pos: SourcePos,
    pub register_name: String,
    pub vector_component: Option<String>,
}

/// Function call fragment shared by call expressions, call statements, and
/// attributes. The callee may be a type name acting as a constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub pos: SourcePos,
    pub name: VarIdent,
    pub arguments: Vec<Expr>,
}

impl GlobalDecl {
    /// Get the source position of this declaration
    pub fn pos(&self) -> SourcePos {
        match self {
            GlobalDecl::Function(ast) => ast.pos,
            GlobalDecl::UniformBuffer(ast) => ast.pos,
            GlobalDecl::Texture(ast) => ast.pos,
            GlobalDecl::Sampler(ast) => ast.pos,
            GlobalDecl::Struct(ast) => ast.pos,
            GlobalDecl::Directive(ast) => ast.pos,
        }
    }
}

impl Stmnt {
    /// Get the source position of this statement
    pub fn pos(&self) -> SourcePos {
        match self {
            Stmnt::Null(ast) => ast.pos,
            Stmnt::Directive(ast) => ast.pos,
            Stmnt::CodeBlock(ast) => ast.pos,
            Stmnt::ForLoop(ast) => ast.pos,
            Stmnt::WhileLoop(ast) => ast.pos,
            Stmnt::DoWhileLoop(ast) => ast.pos,
            Stmnt::If(ast) => ast.pos,
            Stmnt::Else(ast) => ast.pos,
            Stmnt::Switch(ast) => ast.pos,
            Stmnt::VarDecl(ast) => ast.pos,
            Stmnt::Assign(ast) => ast.pos,
            Stmnt::Expr(ast) => ast.pos,
            Stmnt::FunctionCall(ast) => ast.pos,
            Stmnt::Return(ast) => ast.pos,
            Stmnt::StructDecl(ast) => ast.pos,
            Stmnt::CtrlTransfer(ast) => ast.pos,
        }
    }
}

impl Expr {
    /// Get the source position of this expression
    pub fn pos(&self) -> SourcePos {
        match self {
            Expr::List(ast) => ast.pos,
            Expr::Literal(ast) => ast.pos,
            Expr::TypeName(ast) => ast.pos,
            Expr::Ternary(ast) => ast.pos,
            Expr::Binary(ast) => ast.pos,
            Expr::Unary(ast) => ast.pos,
            Expr::PostUnary(ast) => ast.pos,
            Expr::FunctionCall(ast) => ast.pos,
            Expr::Bracket(ast) => ast.pos,
            Expr::Cast(ast) => ast.pos,
            Expr::VarAccess(ast) => ast.pos,
            Expr::Initializer(ast) => ast.pos,
        }
    }
}
