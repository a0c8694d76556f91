// Integration tests for the HLSL front-end

use hlsl_front::log::{Log, MemoryLog};
use hlsl_front::parser::ast::*;
use hlsl_front::parser::visitor::{self, Visitor};
use hlsl_front::parser::{AstPrinter, Parser, SourceCode};

const SHADER: &str = r#"
#include "common.hlsl"

struct VertexOut {
    float4 position : SV_Position;
    float2 uv : TEXCOORD0;
};

cbuffer Scene : register(b0) {
    float4x4 worldViewProj : packoffset(c0);
    float3 lightDir;
    float time;
};

Texture2D<float> shadowMap : register(t0);
SamplerState linearSampler : register(s0);

float3 shade(float3 normal, float3 albedo);

float4 main(VertexOut input) : SV_Target {
    float4 color = float4(0, 0, 0, 1);
    [unroll]
    for (int i = 0; i < 4; ++i) {
        color.rgb += shade(lightDir, color.rgb) * (float)i;
    }
    if (color.a < 0.5)
        discard;
    else
        color.a = 1;
    switch (i) {
        case 0:
            color.r = time;
            break;
        default:
            break;
    }
    return color;
}
"#;

fn parse(text: &str) -> Program {
    Parser::new(None)
        .parse_source(&SourceCode::new("shader.hlsl", text))
        .expect("parse failed")
}

#[test]
fn test_full_shader_parses() {
    let program = parse(SHADER);

    let kinds: Vec<&str> = program
        .global_decls
        .iter()
        .map(|decl| match decl {
            GlobalDecl::Directive(_) => "directive",
            GlobalDecl::Struct(_) => "struct",
            GlobalDecl::UniformBuffer(_) => "cbuffer",
            GlobalDecl::Texture(_) => "texture",
            GlobalDecl::Sampler(_) => "sampler",
            GlobalDecl::Function(_) => "function",
        })
        .collect();
    assert_eq!(
        kinds,
        ["directive", "struct", "cbuffer", "texture", "sampler", "function", "function"]
    );
}

/// Walks the tree tracking the enclosing declaration statement, checking that
/// every declarator points back at exactly the statement that contains it.
#[derive(Default)]
struct DeclRefChecker {
    stack: Vec<NodeId>,
    checked: usize,
}

impl Visitor for DeclRefChecker {
    fn visit_var_decl_stmnt(&mut self, ast: &VarDeclStmnt) {
        self.stack.push(ast.id);
        visitor::walk_var_decl_stmnt(self, ast);
        self.stack.pop();
    }

    fn visit_var_decl(&mut self, ast: &VarDecl) {
        assert_eq!(
            Some(&ast.decl_stmnt_ref),
            self.stack.last(),
            "declarator '{}' does not reference its enclosing statement",
            ast.name
        );
        self.checked += 1;
        visitor::walk_var_decl(self, ast);
    }
}

#[test]
fn test_var_decl_back_references() {
    let program = parse(SHADER);

    let mut checker = DeclRefChecker::default();
    checker.visit_program(&program);

    // struct members, cbuffer members, the parameter declarations of both
    // functions, and the locals
    assert!(checker.checked >= 10, "only {} declarators checked", checker.checked);
}

/// Collects every node position reachable through the default walk.
#[derive(Default)]
struct PosCollector {
    positions: Vec<SourcePos>,
}

impl PosCollector {
    fn record(&mut self, pos: SourcePos) {
        self.positions.push(pos);
    }
}

macro_rules! record_and_walk {
    ($($method:ident => $ty:ty => $walk:ident,)*) => {
        impl Visitor for PosCollector {
            $(
                fn $method(&mut self, ast: &$ty) {
                    self.record(ast.pos);
                    visitor::$walk(self, ast);
                }
            )*
        }
    };
}

record_and_walk! {
    visit_program => Program => walk_program,
    visit_code_block => CodeBlock => walk_code_block,
    visit_buffer_decl_ident => BufferDeclIdent => walk_buffer_decl_ident,
    visit_function_call => FunctionCall => walk_function_call,
    visit_structure => Structure => walk_structure,
    visit_switch_case => SwitchCase => walk_switch_case,
    visit_function_decl => FunctionDecl => walk_function_decl,
    visit_uniform_buffer_decl => UniformBufferDecl => walk_uniform_buffer_decl,
    visit_texture_decl => TextureDecl => walk_texture_decl,
    visit_sampler_decl => SamplerDecl => walk_sampler_decl,
    visit_struct_decl => StructDecl => walk_struct_decl,
    visit_directive_decl => DirectiveDecl => walk_directive_decl,
    visit_null_stmnt => NullStmnt => walk_null_stmnt,
    visit_directive_stmnt => DirectiveStmnt => walk_directive_stmnt,
    visit_code_block_stmnt => CodeBlockStmnt => walk_code_block_stmnt,
    visit_for_loop_stmnt => ForLoopStmnt => walk_for_loop_stmnt,
    visit_while_loop_stmnt => WhileLoopStmnt => walk_while_loop_stmnt,
    visit_do_while_loop_stmnt => DoWhileLoopStmnt => walk_do_while_loop_stmnt,
    visit_if_stmnt => IfStmnt => walk_if_stmnt,
    visit_else_stmnt => ElseStmnt => walk_else_stmnt,
    visit_switch_stmnt => SwitchStmnt => walk_switch_stmnt,
    visit_var_decl_stmnt => VarDeclStmnt => walk_var_decl_stmnt,
    visit_assign_stmnt => AssignStmnt => walk_assign_stmnt,
    visit_expr_stmnt => ExprStmnt => walk_expr_stmnt,
    visit_function_call_stmnt => FunctionCallStmnt => walk_function_call_stmnt,
    visit_return_stmnt => ReturnStmnt => walk_return_stmnt,
    visit_struct_decl_stmnt => StructDeclStmnt => walk_struct_decl_stmnt,
    visit_ctrl_transfer_stmnt => CtrlTransferStmnt => walk_ctrl_transfer_stmnt,
    visit_list_expr => ListExpr => walk_list_expr,
    visit_literal_expr => LiteralExpr => walk_literal_expr,
    visit_type_name_expr => TypeNameExpr => walk_type_name_expr,
    visit_ternary_expr => TernaryExpr => walk_ternary_expr,
    visit_binary_expr => BinaryExpr => walk_binary_expr,
    visit_unary_expr => UnaryExpr => walk_unary_expr,
    visit_post_unary_expr => PostUnaryExpr => walk_post_unary_expr,
    visit_function_call_expr => FunctionCallExpr => walk_function_call_expr,
    visit_bracket_expr => BracketExpr => walk_bracket_expr,
    visit_cast_expr => CastExpr => walk_cast_expr,
    visit_var_access_expr => VarAccessExpr => walk_var_access_expr,
    visit_initializer_expr => InitializerExpr => walk_initializer_expr,
    visit_pack_offset => PackOffset => walk_pack_offset,
    visit_var_semantic => VarSemantic => walk_var_semantic,
    visit_var_type => VarType => walk_var_type,
    visit_var_ident => VarIdent => walk_var_ident,
    visit_var_decl => VarDecl => walk_var_decl,
}

#[test]
fn test_every_node_has_a_valid_position() {
    let source = SourceCode::with_id(7, "shader.hlsl", SHADER);
    let program = Parser::new(None).parse_source(&source).unwrap();

    let mut collector = PosCollector::default();
    collector.visit_program(&program);

    let line_count = SHADER.lines().count() as u32;
    assert!(!collector.positions.is_empty());
    for pos in &collector.positions {
        assert_eq!(pos.file, 7);
        assert!(pos.line >= 1 && pos.line <= line_count + 1, "line {}", pos.line);
        assert!(pos.column >= 1);
    }
}

/// Checks that no cast node carries an assignment in its type expression.
#[derive(Default)]
struct CastChecker {
    casts: usize,
}

impl Visitor for CastChecker {
    fn visit_cast_expr(&mut self, ast: &CastExpr) {
        match ast.type_expr.as_ref() {
            Expr::TypeName(_) => {}
            Expr::VarAccess(access) => {
                assert!(access.assign_op.is_none());
                assert!(access.assign_expr.is_none());
            }
            other => panic!("cast type expression has unexpected shape: {:?}", other),
        }
        self.casts += 1;
        visitor::walk_cast_expr(self, ast);
    }
}

#[test]
fn test_cast_type_expr_never_carries_assignment() {
    let program = parse(SHADER);

    let mut checker = CastChecker::default();
    checker.visit_program(&program);
    assert_eq!(checker.casts, 1);
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(SHADER), parse(SHADER));
}

#[test]
fn test_failed_parse_emits_exactly_one_error() {
    struct CountingLog {
        errors: usize,
        infos: usize,
    }

    impl Log for CountingLog {
        fn info(&mut self, _message: &str) {
            self.infos += 1;
        }
        fn warning(&mut self, _message: &str) {}
        fn error(&mut self, _message: &str) {
            self.errors += 1;
        }
    }

    let mut log = CountingLog { errors: 0, infos: 0 };
    let result = Parser::new(Some(&mut log))
        .parse_source(&SourceCode::new("broken.hlsl", "float4 main( { return 1; }"));

    assert!(result.is_none());
    assert_eq!(log.errors, 1);
    assert_eq!(log.infos, 0);
}

#[test]
fn test_printer_dump_round_trip_shape() {
    let dense = "struct S{float x;};float4 f(){S s;return 1;}";
    let airy = "struct S {\n    float x;\n};\n\nfloat4 f()\n{\n    S s;\n    return 1;\n}\n";

    let mut dense_log = MemoryLog::new();
    AstPrinter::new(&mut dense_log).dump(&parse(dense));

    let mut airy_log = MemoryLog::new();
    AstPrinter::new(&mut airy_log).dump(&parse(airy));

    assert_eq!(dense_log.infos, airy_log.infos);
}
