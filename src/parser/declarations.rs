//! Declaration parsing implementation
//!
//! This module handles parsing of global declarations and the shared
//! declaration fragments:
//!
//! - Functions: `float4 main(float2 uv) : SV_Target { ... }`
//! - Uniform buffers: `cbuffer Scene : register(b0) { ... };`
//! - Textures and samplers: `Texture2D<float4> albedo : register(t0);`
//! - Structures: `struct VertexIn { ... };`
//! - Variable fragments: types, declarators, semantics, identifiers
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{decorate_var_decls, ParseError, Parser};

impl Parser<'_> {
    /// Parse one global declaration, dispatched on the current token kind.
    pub(crate) fn parse_global_decl(&mut self) -> Result<GlobalDecl, ParseError> {
        match self.kind() {
            TokenKind::Sampler => Ok(GlobalDecl::Sampler(self.parse_sampler_decl()?)),
            TokenKind::Texture => Ok(GlobalDecl::Texture(self.parse_texture_decl()?)),
            TokenKind::UniformBuffer => {
                Ok(GlobalDecl::UniformBuffer(self.parse_uniform_buffer_decl()?))
            }
            TokenKind::Struct => Ok(GlobalDecl::Struct(self.parse_struct_decl()?)),
            TokenKind::Directive => Ok(GlobalDecl::Directive(self.parse_directive_decl()?)),
            _ => Ok(GlobalDecl::Function(self.parse_function_decl()?)),
        }
    }

    /// Parse function declaration or definition:
    /// `attribute* returnType name(params) (':' semantic)? (';' | codeBlock)`
    pub(crate) fn parse_function_decl(&mut self) -> Result<FunctionDecl, ParseError> {
        let pos = self.pos();

        let attribs = self.parse_attribute_list()?;
        // 'void' is only permitted for function return types
        let return_type = self.parse_var_type(true)?;
        let name = self.accept(TokenKind::Ident)?.spell;
        let parameters = self.parse_parameter_list()?;

        let semantic = if self.is(TokenKind::Colon) {
            Some(self.parse_semantic()?)
        } else {
            None
        };

        // A ';' makes this a forward declaration without a body
        let code_block = if self.is(TokenKind::Semicolon) {
            self.accept_it();
            None
        } else {
            Some(self.parse_code_block()?)
        };

        Ok(FunctionDecl {
            pos,
            attribs,
            return_type,
            name,
            parameters,
            semantic,
            code_block,
        })
    }

    /// Parse `cbuffer`/`tbuffer` declaration:
    /// `bufferType name register? { varDeclStmnt* } ;`
    pub(crate) fn parse_uniform_buffer_decl(&mut self) -> Result<UniformBufferDecl, ParseError> {
        let pos = self.pos();

        let buffer_type = self.accept(TokenKind::UniformBuffer)?.spell;
        let name = self.accept(TokenKind::Ident)?.spell;

        let register_name = if self.is(TokenKind::Colon) {
            Some(self.parse_register(true)?)
        } else {
            None
        };

        let members = self.parse_var_decl_stmnt_list()?;
        self.semi()?;

        Ok(UniformBufferDecl {
            pos,
            buffer_type,
            name,
            register_name,
            members,
        })
    }

    /// Parse texture declaration:
    /// `textureType ('<' scalarType '>')? bufferDeclIdentList ;`
    pub(crate) fn parse_texture_decl(&mut self) -> Result<TextureDecl, ParseError> {
        let pos = self.pos();

        let texture_type = self.accept(TokenKind::Texture)?.spell;

        // Optional generic color type ('<' colorType '>')
        let color_type = if self.is_spell(TokenKind::BinaryOp, "<") {
            self.accept_it();
            let color = self.accept(TokenKind::ScalarType)?.spell;
            self.accept_spell(TokenKind::BinaryOp, ">")?;
            Some(color)
        } else {
            None
        };

        let names = self.parse_buffer_decl_ident_list()?;
        self.semi()?;

        Ok(TextureDecl {
            pos,
            texture_type,
            color_type,
            names,
        })
    }

    /// Parse sampler declaration: `samplerType bufferDeclIdentList ;`
    pub(crate) fn parse_sampler_decl(&mut self) -> Result<SamplerDecl, ParseError> {
        let pos = self.pos();

        let sampler_type = self.accept(TokenKind::Sampler)?.spell;
        let names = self.parse_buffer_decl_ident_list()?;
        self.semi()?;

        Ok(SamplerDecl {
            pos,
            sampler_type,
            names,
        })
    }

    /// Parse global structure declaration: `structure ;`
    pub(crate) fn parse_struct_decl(&mut self) -> Result<StructDecl, ParseError> {
        let pos = self.pos();

        let structure = self.parse_structure()?;
        self.semi()?;

        Ok(StructDecl { pos, structure })
    }

    /// Parse preprocessor directive line as an opaque declaration.
    pub(crate) fn parse_directive_decl(&mut self) -> Result<DirectiveDecl, ParseError> {
        let pos = self.pos();
        let line = self.accept(TokenKind::Directive)?.spell;
        Ok(DirectiveDecl { pos, line })
    }

    /// Parse structure: `'struct' IDENT { varDeclStmnt* }`
    pub(crate) fn parse_structure(&mut self) -> Result<Structure, ParseError> {
        let pos = self.pos();
        let id = self.make_id();

        self.accept(TokenKind::Struct)?;
        let name = self.accept(TokenKind::Ident)?.spell;
        let members = self.parse_var_decl_stmnt_list()?;

        Ok(Structure {
            pos,
            id,
            name,
            members,
        })
    }

    /// Parse a single function parameter as a one-declarator variable
    /// declaration statement.
    pub(crate) fn parse_parameter(&mut self) -> Result<VarDeclStmnt, ParseError> {
        let pos = self.pos();
        let id = self.make_id();

        let mut input_modifier = None;
        let mut type_modifiers = Vec::new();
        let mut storage_modifiers = Vec::new();

        while matches!(
            self.kind(),
            TokenKind::InputModifier | TokenKind::TypeModifier | TokenKind::StorageModifier
        ) {
            match self.kind() {
                TokenKind::InputModifier => input_modifier = Some(self.accept_it().spell),
                TokenKind::TypeModifier => type_modifiers.push(self.accept_it().spell),
                _ => storage_modifiers.push(self.accept_it().spell),
            }
        }

        let var_type = self.parse_var_type(false)?;
        let mut var_decls = vec![self.parse_var_decl()?];
        decorate_var_decls(&mut var_decls, id);

        Ok(VarDeclStmnt {
            pos,
            id,
            input_modifier,
            type_modifiers,
            storage_modifiers,
            var_type,
            var_decls,
        })
    }

    /// Parse a variable type: `'void'` (where permitted), a base type
    /// spelling, a user identifier, or an anonymous structure.
    pub(crate) fn parse_var_type(&mut self, void_ok: bool) -> Result<VarType, ParseError> {
        let pos = self.pos();

        if self.is(TokenKind::Void) {
            if !void_ok {
                return Err(self.error("'void' type not allowed in this context"));
            }
            return Ok(VarType {
                pos,
                base_type: self.accept_it().spell,
                struct_type: None,
                symbol_ref: None,
            });
        }

        if self.is(TokenKind::Ident) || self.is_data_type() {
            return Ok(VarType {
                pos,
                base_type: self.accept_it().spell,
                struct_type: None,
                symbol_ref: None,
            });
        }

        if self.is(TokenKind::Struct) {
            // Anonymous structure declaration; the type node keeps a
            // non-owning handle to its own structure for later passes.
            let structure = self.parse_structure()?;
            let symbol_ref = Some(structure.id);
            return Ok(VarType {
                pos,
                base_type: String::new(),
                struct_type: Some(structure),
                symbol_ref,
            });
        }

        Err(self.error_unexpected_hint("expected type specifier"))
    }

    /// Parse a declarator: `IDENT arrayDim* varSemantic* ('=' expr)?`
    ///
    /// The back-reference is filled in by the enclosing statement rule via
    /// [`decorate_var_decls`].
    pub(crate) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let pos = self.pos();

        let name = self.accept(TokenKind::Ident)?.spell;
        let array_dims = self.parse_array_dimension_list()?;
        let semantics = self.parse_var_semantic_list()?;

        let initializer = if self.is_spell(TokenKind::AssignOp, "=") {
            Some(self.parse_initializer()?)
        } else {
            None
        };

        Ok(VarDecl {
            pos,
            name,
            array_dims,
            semantics,
            initializer,
            decl_stmnt_ref: 0,
        })
    }

    /// Parse `IDENT register?` inside a texture/sampler declaration.
    pub(crate) fn parse_buffer_decl_ident(&mut self) -> Result<BufferDeclIdent, ParseError> {
        let pos = self.pos();

        let ident = self.accept(TokenKind::Ident)?.spell;
        let register_name = if self.is(TokenKind::Colon) {
            Some(self.parse_register(true)?)
        } else {
            None
        };

        Ok(BufferDeclIdent {
            pos,
            ident,
            register_name,
        })
    }

    /// Parse `(':')? 'register' '(' IDENT ')'` and return the register name.
    pub(crate) fn parse_register(&mut self, parse_colon: bool) -> Result<String, ParseError> {
        if parse_colon {
            self.accept(TokenKind::Colon)?;
        }

        self.accept(TokenKind::Register)?;
        self.accept(TokenKind::LParen)?;
        let register_name = self.accept(TokenKind::Ident)?.spell;
        self.accept(TokenKind::RParen)?;

        Ok(register_name)
    }

    /// Parse `(':')? 'packoffset' '(' IDENT ('.' IDENT)? ')'`
    pub(crate) fn parse_pack_offset(&mut self, parse_colon: bool) -> Result<PackOffset, ParseError> {
        let pos = self.pos();

        if parse_colon {
            self.accept(TokenKind::Colon)?;
        }

        self.accept(TokenKind::PackOffset)?;
        self.accept(TokenKind::LParen)?;

        let register_name = self.accept(TokenKind::Ident)?.spell;

        let vector_component = if self.is(TokenKind::Dot) {
            self.accept_it();
            Some(self.accept(TokenKind::Ident)?.spell)
        } else {
            None
        };

        self.accept(TokenKind::RParen)?;

        Ok(PackOffset {
            pos,
            register_name,
            vector_component,
        })
    }

    /// Parse `':' IDENT` (function result semantic).
    pub(crate) fn parse_semantic(&mut self) -> Result<String, ParseError> {
        self.accept(TokenKind::Colon)?;
        Ok(self.accept(TokenKind::Ident)?.spell)
    }

    /// Parse one colon-introduced semantic: plain identifier, register
    /// binding, or pack offset.
    pub(crate) fn parse_var_semantic(&mut self) -> Result<VarSemantic, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::Colon)?;

        let kind = if self.is(TokenKind::Register) {
            VarSemanticKind::Register(self.parse_register(false)?)
        } else if self.is(TokenKind::PackOffset) {
            VarSemanticKind::PackOffset(self.parse_pack_offset(false)?)
        } else {
            VarSemanticKind::Semantic(self.accept(TokenKind::Ident)?.spell)
        };

        Ok(VarSemantic { pos, kind })
    }

    /// Parse a dotted identifier chain: `IDENT arrayIndex* ('.' varIdent)?`
    pub(crate) fn parse_var_ident(&mut self) -> Result<VarIdent, ParseError> {
        let pos = self.pos();

        let ident = self.accept(TokenKind::Ident)?.spell;
        let array_indices = self.parse_array_dimension_list()?;

        let next = if self.is(TokenKind::Dot) {
            self.accept_it();
            Some(Box::new(self.parse_var_ident()?))
        } else {
            None
        };

        Ok(VarIdent {
            pos,
            ident,
            array_indices,
            next,
        })
    }

    /// Parse a single array dimension: `'[' expr ']'`
    pub(crate) fn parse_array_dimension(&mut self) -> Result<Expr, ParseError> {
        self.accept(TokenKind::LBracket)?;
        let expr = self.parse_expr(false, None)?;
        self.accept(TokenKind::RBracket)?;
        Ok(expr)
    }

    /// Parse `'=' expr` and return the initializer expression.
    pub(crate) fn parse_initializer(&mut self) -> Result<Expr, ParseError> {
        self.accept_spell(TokenKind::AssignOp, "=")?;
        self.parse_expr(false, None)
    }

    /// Parse one attribute: `'[' IDENT ('(' exprList ')')? ']'`
    ///
    /// Attributes reuse the [`FunctionCall`] node; an attribute without an
    /// argument list simply has no arguments.
    pub(crate) fn parse_attribute(&mut self) -> Result<FunctionCall, ParseError> {
        let pos = self.pos();

        self.accept(TokenKind::LBracket)?;

        let name_pos = self.pos();
        let ident = self.accept(TokenKind::Ident)?.spell;
        let name = VarIdent {
            pos: name_pos,
            ident,
            array_indices: Vec::new(),
            next: None,
        };

        let mut arguments = Vec::new();
        if self.is(TokenKind::LParen) {
            self.accept_it();

            if !self.is(TokenKind::RParen) {
                loop {
                    arguments.push(self.parse_expr(false, None)?);
                    if self.is(TokenKind::Comma) {
                        self.accept_it();
                    } else {
                        break;
                    }
                }
            }

            self.accept(TokenKind::RParen)?;
        }

        self.accept(TokenKind::RBracket)?;

        Ok(FunctionCall {
            pos,
            name,
            arguments,
        })
    }

    // ===== Lists =====

    /// Parse a comma-separated declarator list (at least one).
    pub(crate) fn parse_var_decl_list(&mut self) -> Result<Vec<VarDecl>, ParseError> {
        let mut var_decls = Vec::new();

        loop {
            var_decls.push(self.parse_var_decl()?);
            if self.is(TokenKind::Comma) {
                self.accept_it();
            } else {
                break;
            }
        }

        Ok(var_decls)
    }

    /// Parse a braced list of variable declaration statements.
    pub(crate) fn parse_var_decl_stmnt_list(&mut self) -> Result<Vec<VarDeclStmnt>, ParseError> {
        let mut members = Vec::new();

        self.accept(TokenKind::LBrace)?;
        while !self.is(TokenKind::RBrace) {
            members.push(self.parse_var_decl_stmnt()?);
        }
        self.accept_it();

        Ok(members)
    }

    /// Parse a parenthesized parameter list (possibly empty).
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<VarDeclStmnt>, ParseError> {
        let mut parameters = Vec::new();

        self.accept(TokenKind::LParen)?;

        if !self.is(TokenKind::RParen) {
            loop {
                parameters.push(self.parse_parameter()?);
                if self.is(TokenKind::Comma) {
                    self.accept_it();
                } else {
                    break;
                }
            }
        }

        self.accept(TokenKind::RParen)?;

        Ok(parameters)
    }

    /// Parse zero or more `'[' expr ']'` dimensions.
    pub(crate) fn parse_array_dimension_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut array_dims = Vec::new();

        while self.is(TokenKind::LBracket) {
            array_dims.push(self.parse_array_dimension()?);
        }

        Ok(array_dims)
    }

    /// Parse zero or more colon-introduced semantics.
    pub(crate) fn parse_var_semantic_list(&mut self) -> Result<Vec<VarSemantic>, ParseError> {
        let mut semantics = Vec::new();

        while self.is(TokenKind::Colon) {
            semantics.push(self.parse_var_semantic()?);
        }

        Ok(semantics)
    }

    /// Parse zero or more `[...]` attributes.
    pub(crate) fn parse_attribute_list(&mut self) -> Result<Vec<FunctionCall>, ParseError> {
        let mut attribs = Vec::new();

        while self.is(TokenKind::LBracket) {
            attribs.push(self.parse_attribute()?);
        }

        Ok(attribs)
    }

    /// Parse a comma-separated identifier list (at least one entry).
    pub(crate) fn parse_buffer_decl_ident_list(
        &mut self,
    ) -> Result<Vec<BufferDeclIdent>, ParseError> {
        let mut idents = Vec::new();

        idents.push(self.parse_buffer_decl_ident()?);
        while self.is(TokenKind::Comma) {
            self.accept_it();
            idents.push(self.parse_buffer_decl_ident()?);
        }

        Ok(idents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::SourceCode;

    fn parse(text: &str) -> Program {
        Parser::new(None)
            .parse_source(&SourceCode::new("test.hlsl", text))
            .expect("parse failed")
    }

    fn parse_err(text: &str) -> bool {
        Parser::new(None)
            .parse_source(&SourceCode::new("test.hlsl", text))
            .is_none()
    }

    #[test]
    fn test_uniform_buffer_decl() {
        let program = parse("cbuffer C : register(b0) { float a; float4 b; };");

        let buffer = match &program.global_decls[0] {
            GlobalDecl::UniformBuffer(buffer) => buffer,
            other => panic!("expected uniform buffer, got {:?}", other),
        };
        assert_eq!(buffer.buffer_type, "cbuffer");
        assert_eq!(buffer.name, "C");
        assert_eq!(buffer.register_name.as_deref(), Some("b0"));
        assert_eq!(buffer.members.len(), 2);
        assert_eq!(buffer.members[0].var_type.base_type, "float");
        assert_eq!(buffer.members[0].var_decls[0].name, "a");
        assert_eq!(buffer.members[1].var_type.base_type, "float4");
        assert_eq!(buffer.members[1].var_decls[0].name, "b");
    }

    #[test]
    fn test_struct_decl_then_use() {
        let program = parse("struct S { float x; };\nfloat4 f() { S s; return 1; }");

        let decl = match &program.global_decls[0] {
            GlobalDecl::Struct(decl) => decl,
            other => panic!("expected struct declaration, got {:?}", other),
        };
        assert_eq!(decl.structure.name, "S");
        assert_eq!(decl.structure.members.len(), 1);
        assert_eq!(decl.structure.members[0].var_type.base_type, "float");

        // 'S s;' inside the function is a var-decl statement with user type S
        let func = match &program.global_decls[1] {
            GlobalDecl::Function(func) => func,
            other => panic!("expected function, got {:?}", other),
        };
        let stmnt = &func.code_block.as_ref().unwrap().stmnts[0];
        match stmnt {
            Stmnt::VarDecl(var_decl) => {
                assert_eq!(var_decl.var_type.base_type, "S");
                assert_eq!(var_decl.var_decls[0].name, "s");
            }
            other => panic!("expected var decl statement, got {:?}", other),
        }
    }

    #[test]
    fn test_texture_decl_with_color_type_and_registers() {
        let program = parse("Texture2D<float> shadowMap : register(t0), noiseMap;");

        let texture = match &program.global_decls[0] {
            GlobalDecl::Texture(texture) => texture,
            other => panic!("expected texture declaration, got {:?}", other),
        };
        assert_eq!(texture.texture_type, "Texture2D");
        assert_eq!(texture.color_type.as_deref(), Some("float"));
        assert_eq!(texture.names.len(), 2);
        assert_eq!(texture.names[0].ident, "shadowMap");
        assert_eq!(texture.names[0].register_name.as_deref(), Some("t0"));
        assert_eq!(texture.names[1].ident, "noiseMap");
        assert_eq!(texture.names[1].register_name, None);
    }

    #[test]
    fn test_sampler_decl() {
        let program = parse("SamplerState linearSampler : register(s0);");

        let sampler = match &program.global_decls[0] {
            GlobalDecl::Sampler(sampler) => sampler,
            other => panic!("expected sampler declaration, got {:?}", other),
        };
        assert_eq!(sampler.sampler_type, "SamplerState");
        assert!(!sampler.names.is_empty());
        assert_eq!(sampler.names[0].register_name.as_deref(), Some("s0"));
    }

    #[test]
    fn test_forward_declaration_has_no_body() {
        let program = parse("float lighting(float3 normal);");

        let func = match &program.global_decls[0] {
            GlobalDecl::Function(func) => func,
            other => panic!("expected function, got {:?}", other),
        };
        assert_eq!(func.name, "lighting");
        assert!(func.code_block.is_none());
        assert_eq!(func.parameters.len(), 1);
    }

    #[test]
    fn test_parameter_modifiers() {
        let program = parse("void f(inout const float4 color, in uint index) {}");

        let func = match &program.global_decls[0] {
            GlobalDecl::Function(func) => func,
            other => panic!("expected function, got {:?}", other),
        };
        assert_eq!(func.return_type.base_type, "void");

        let first = &func.parameters[0];
        assert_eq!(first.input_modifier.as_deref(), Some("inout"));
        assert_eq!(first.type_modifiers, ["const"]);
        assert_eq!(first.var_decls[0].name, "color");
        assert_eq!(first.var_decls[0].decl_stmnt_ref, first.id);

        let second = &func.parameters[1];
        assert_eq!(second.input_modifier.as_deref(), Some("in"));
        assert_eq!(second.var_type.base_type, "uint");
    }

    #[test]
    fn test_void_rejected_in_parameter_type() {
        assert!(parse_err("float f(void x) { return 1; }"));
    }

    #[test]
    fn test_function_attributes() {
        let program = parse("[numthreads(8, 8, 1)] void cs() {}");

        let func = match &program.global_decls[0] {
            GlobalDecl::Function(func) => func,
            other => panic!("expected function, got {:?}", other),
        };
        assert_eq!(func.attribs.len(), 1);
        assert_eq!(func.attribs[0].name.ident, "numthreads");
        assert_eq!(func.attribs[0].arguments.len(), 3);
    }

    #[test]
    fn test_pack_offset_semantic() {
        let program = parse("cbuffer C { float4 a : packoffset(c0.y); };");

        let buffer = match &program.global_decls[0] {
            GlobalDecl::UniformBuffer(buffer) => buffer,
            other => panic!("expected uniform buffer, got {:?}", other),
        };
        let semantics = &buffer.members[0].var_decls[0].semantics;
        assert_eq!(semantics.len(), 1);
        match &semantics[0].kind {
            VarSemanticKind::PackOffset(pack_offset) => {
                assert_eq!(pack_offset.register_name, "c0");
                assert_eq!(pack_offset.vector_component.as_deref(), Some("y"));
            }
            other => panic!("expected pack offset, got {:?}", other),
        }
    }

    #[test]
    fn test_anonymous_struct_var_type_symbol_ref() {
        let program = parse("float4 f(struct Inner { float x; } p) { return 1; }");

        let func = match &program.global_decls[0] {
            GlobalDecl::Function(func) => func,
            other => panic!("expected function, got {:?}", other),
        };
        let var_type = &func.parameters[0].var_type;
        assert!(var_type.base_type.is_empty());
        let structure = var_type.struct_type.as_ref().unwrap();
        assert_eq!(structure.name, "Inner");
        assert_eq!(var_type.symbol_ref, Some(structure.id));
    }

    #[test]
    fn test_multiple_declarators_share_statement() {
        let program = parse("cbuffer C { float a, b[4], c : FOG; };");

        let buffer = match &program.global_decls[0] {
            GlobalDecl::UniformBuffer(buffer) => buffer,
            other => panic!("expected uniform buffer, got {:?}", other),
        };
        let member = &buffer.members[0];
        assert_eq!(member.var_decls.len(), 3);
        assert_eq!(member.var_decls[1].array_dims.len(), 1);
        for var_decl in &member.var_decls {
            assert_eq!(var_decl.decl_stmnt_ref, member.id);
        }
    }
}
