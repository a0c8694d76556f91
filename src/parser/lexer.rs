//! Lexer (scanner) for HLSL source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Preprocessor directive lines are not expanded: each one becomes a
//! single [`TokenKind::Directive`] token carrying the line verbatim, so later
//! passes can re-emit it untouched.

use super::ast::SourcePos;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An input buffer handed to the front-end: a display name plus the text.
///
/// `id` distinguishes buffers when several sources are parsed by the same
/// host; it is stamped into every [`SourcePos`] the scanner produces.
#[derive(Debug, Clone)]
pub struct SourceCode {
    pub id: u32,
    pub name: String,
    pub text: String,
}

impl SourceCode {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn with_id(id: u32, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Classification of a scanned token.
///
/// Keywords are grouped into category kinds (`ScalarType`, `InputModifier`,
/// `CtrlTransfer`, ...) rather than one kind per keyword; the concrete
/// keyword survives in [`Token::spell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,

    // Literals
    BoolLiteral,
    IntLiteral,
    FloatLiteral,

    // Punctuation
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }
    Comma,
    Semicolon,
    Colon,
    Dot,

    // Operator classes; the spelling carries the concrete operator
    UnaryOp,
    BinaryOp,
    AssignOp,
    TernaryOp,

    // Type categories
    ScalarType,
    VectorType,
    MatrixType,
    Texture,
    Sampler,
    Void,

    // Declaration keywords
    UniformBuffer,
    InputModifier,
    TypeModifier,
    StorageModifier,
    Register,
    PackOffset,
    Struct,

    // Control flow keywords
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Default,
    Return,
    /// `break`, `continue`, or `discard`
    CtrlTransfer,

    /// Verbatim preprocessor line
    Directive,

    EndOfStream,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Ident => "identifier",
            TokenKind::BoolLiteral => "boolean literal",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "floating-point literal",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
            TokenKind::UnaryOp => "unary operator",
            TokenKind::BinaryOp => "binary operator",
            TokenKind::AssignOp => "assignment operator",
            TokenKind::TernaryOp => "'?'",
            TokenKind::ScalarType => "scalar type",
            TokenKind::VectorType => "vector type",
            TokenKind::MatrixType => "matrix type",
            TokenKind::Texture => "texture type",
            TokenKind::Sampler => "sampler type",
            TokenKind::Void => "'void'",
            TokenKind::UniformBuffer => "buffer keyword",
            TokenKind::InputModifier => "input modifier",
            TokenKind::TypeModifier => "type modifier",
            TokenKind::StorageModifier => "storage modifier",
            TokenKind::Register => "'register'",
            TokenKind::PackOffset => "'packoffset'",
            TokenKind::Struct => "'struct'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::For => "'for'",
            TokenKind::While => "'while'",
            TokenKind::Do => "'do'",
            TokenKind::Switch => "'switch'",
            TokenKind::Case => "'case'",
            TokenKind::Default => "'default'",
            TokenKind::Return => "'return'",
            TokenKind::CtrlTransfer => "control transfer",
            TokenKind::Directive => "directive",
            TokenKind::EndOfStream => "end of stream",
        };
        f.write_str(name)
    }
}

/// A scanned token: classification, verbatim spelling, and source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub spell: String,
    pub pos: SourcePos,
}

impl Token {
    fn new(kind: TokenKind, spell: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            spell: spell.into(),
            pos,
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, Error)]
#[error("lexical error ({file}:{pos}) : {message}")]
pub struct LexError {
    pub file: String,
    pub pos: SourcePos,
    pub message: String,
}

/// Keyword spelling to token-kind classification table.
static KEYWORDS: Lazy<FxHashMap<String, TokenKind>> = Lazy::new(|| {
    let mut map = FxHashMap::default();

    let mut put = |spell: &str, kind: TokenKind| {
        map.insert(spell.to_string(), kind);
    };

    put("true", TokenKind::BoolLiteral);
    put("false", TokenKind::BoolLiteral);

    put("void", TokenKind::Void);

    put("struct", TokenKind::Struct);
    put("cbuffer", TokenKind::UniformBuffer);
    put("tbuffer", TokenKind::UniformBuffer);
    put("register", TokenKind::Register);
    put("packoffset", TokenKind::PackOffset);

    for spell in ["in", "out", "inout", "uniform"] {
        put(spell, TokenKind::InputModifier);
    }
    for spell in ["const", "row_major", "column_major"] {
        put(spell, TokenKind::TypeModifier);
    }
    for spell in [
        "extern",
        "nointerpolation",
        "precise",
        "shared",
        "groupshared",
        "static",
        "volatile",
    ] {
        put(spell, TokenKind::StorageModifier);
    }

    put("if", TokenKind::If);
    put("else", TokenKind::Else);
    put("for", TokenKind::For);
    put("while", TokenKind::While);
    put("do", TokenKind::Do);
    put("switch", TokenKind::Switch);
    put("case", TokenKind::Case);
    put("default", TokenKind::Default);
    put("return", TokenKind::Return);
    for spell in ["break", "continue", "discard"] {
        put(spell, TokenKind::CtrlTransfer);
    }

    for spell in [
        "texture",
        "Texture1D",
        "Texture1DArray",
        "Texture2D",
        "Texture2DArray",
        "Texture3D",
        "TextureCube",
        "TextureCubeArray",
        "Texture2DMS",
        "Texture2DMSArray",
        "Buffer",
        "RWBuffer",
        "RWTexture1D",
        "RWTexture1DArray",
        "RWTexture2D",
        "RWTexture2DArray",
        "RWTexture3D",
    ] {
        put(spell, TokenKind::Texture);
    }

    for spell in [
        "sampler",
        "sampler1D",
        "sampler2D",
        "sampler3D",
        "samplerCUBE",
        "sampler_state",
        "SamplerState",
        "SamplerComparisonState",
    ] {
        put(spell, TokenKind::Sampler);
    }

    // Scalar types and their derived vector/matrix forms
    let scalars = ["bool", "int", "uint", "dword", "half", "float", "double"];
    for scalar in scalars {
        map.insert(scalar.to_string(), TokenKind::ScalarType);
        for n in 2..=4 {
            map.insert(format!("{scalar}{n}"), TokenKind::VectorType);
        }
        for rows in 2..=4 {
            for cols in 2..=4 {
                map.insert(format!("{scalar}{rows}x{cols}"), TokenKind::MatrixType);
            }
        }
    }

    map
});

/// Lexer for HLSL source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    file_id: u32,
    file_name: String,
}

impl Lexer {
    /// Create a new lexer over the given source buffer.
    pub fn new(source: &SourceCode) -> Self {
        Self {
            input: source.text.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            file_id: source.id,
            file_name: source.name.clone(),
        }
    }

    /// Tokenize the entire input. The returned stream always ends with a
    /// single [`TokenKind::EndOfStream`] token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::EndOfStream, "", self.current_pos()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let pos = self.current_pos();
        let ch = self.advance().ok_or_else(|| LexError {
            file: self.file_name.clone(),
            pos,
            message: "unexpected end of source".to_string(),
        })?;

        match ch {
            // Directive line, kept verbatim
            '#' => Ok(self.directive_line(pos)),

            // Numeric literals
            '0'..='9' => self.number_literal(ch, pos),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.number_literal(ch, pos)
            }

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, pos)),

            // Operators and punctuation
            '+' => {
                if self.consume('+') {
                    Ok(Token::new(TokenKind::UnaryOp, "++", pos))
                } else if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "+=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "+", pos))
                }
            }
            '-' => {
                if self.consume('-') {
                    Ok(Token::new(TokenKind::UnaryOp, "--", pos))
                } else if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "-=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "-", pos))
                }
            }
            '*' => {
                if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "*=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "*", pos))
                }
            }
            '/' => {
                if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "/=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "/", pos))
                }
            }
            '%' => {
                if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "%=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "%", pos))
                }
            }
            '=' => {
                if self.consume('=') {
                    Ok(Token::new(TokenKind::BinaryOp, "==", pos))
                } else {
                    Ok(Token::new(TokenKind::AssignOp, "=", pos))
                }
            }
            '!' => {
                if self.consume('=') {
                    Ok(Token::new(TokenKind::BinaryOp, "!=", pos))
                } else {
                    Ok(Token::new(TokenKind::UnaryOp, "!", pos))
                }
            }
            '~' => Ok(Token::new(TokenKind::UnaryOp, "~", pos)),
            '<' => {
                if self.consume('<') {
                    if self.consume('=') {
                        Ok(Token::new(TokenKind::AssignOp, "<<=", pos))
                    } else {
                        Ok(Token::new(TokenKind::BinaryOp, "<<", pos))
                    }
                } else if self.consume('=') {
                    Ok(Token::new(TokenKind::BinaryOp, "<=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "<", pos))
                }
            }
            '>' => {
                if self.consume('>') {
                    if self.consume('=') {
                        Ok(Token::new(TokenKind::AssignOp, ">>=", pos))
                    } else {
                        Ok(Token::new(TokenKind::BinaryOp, ">>", pos))
                    }
                } else if self.consume('=') {
                    Ok(Token::new(TokenKind::BinaryOp, ">=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, ">", pos))
                }
            }
            '&' => {
                if self.consume('&') {
                    Ok(Token::new(TokenKind::BinaryOp, "&&", pos))
                } else if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "&=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "&", pos))
                }
            }
            '|' => {
                if self.consume('|') {
                    Ok(Token::new(TokenKind::BinaryOp, "||", pos))
                } else if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "|=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "|", pos))
                }
            }
            '^' => {
                if self.consume('=') {
                    Ok(Token::new(TokenKind::AssignOp, "^=", pos))
                } else {
                    Ok(Token::new(TokenKind::BinaryOp, "^", pos))
                }
            }
            '?' => Ok(Token::new(TokenKind::TernaryOp, "?", pos)),
            ':' => Ok(Token::new(TokenKind::Colon, ":", pos)),
            '.' => Ok(Token::new(TokenKind::Dot, ".", pos)),
            ',' => Ok(Token::new(TokenKind::Comma, ",", pos)),
            ';' => Ok(Token::new(TokenKind::Semicolon, ";", pos)),
            '(' => Ok(Token::new(TokenKind::LParen, "(", pos)),
            ')' => Ok(Token::new(TokenKind::RParen, ")", pos)),
            '[' => Ok(Token::new(TokenKind::LBracket, "[", pos)),
            ']' => Ok(Token::new(TokenKind::RBracket, "]", pos)),
            '{' => Ok(Token::new(TokenKind::LBrace, "{", pos)),
            '}' => Ok(Token::new(TokenKind::RBrace, "}", pos)),

            _ => Err(LexError {
                file: self.file_name.clone(),
                pos,
                message: format!("unexpected character '{}'", ch),
            }),
        }
    }

    /// Consume the rest of a `#` line as one verbatim directive token.
    fn directive_line(&mut self, pos: SourcePos) -> Token {
        let mut line = String::from('#');

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            line.push(ch);
            self.advance();
        }

        Token::new(TokenKind::Directive, line.trim_end(), pos)
    }

    /// Parse a numeric literal: decimal or hex integer, or a float with
    /// optional fraction, exponent, and `f`/`h` suffix.
    fn number_literal(&mut self, first: char, pos: SourcePos) -> Result<Token, LexError> {
        let mut spell = String::new();
        spell.push(first);

        // Hex integers have no float forms
        if first == '0' && self.peek().is_some_and(|c| c == 'x' || c == 'X') {
            if let Some(ch) = self.advance() {
                spell.push(ch);
            }
            let mut any = false;
            while let Some(ch) = self.peek() {
                if ch.is_ascii_hexdigit() {
                    spell.push(ch);
                    self.advance();
                    any = true;
                } else {
                    break;
                }
            }
            if !any {
                return Err(LexError {
                    file: self.file_name.clone(),
                    pos,
                    message: format!("invalid hexadecimal literal '{}'", spell),
                });
            }
            return Ok(Token::new(TokenKind::IntLiteral, spell, pos));
        }

        let mut is_float = first == '.';

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                spell.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Fraction part ('.' must be followed by a digit to avoid eating the
        // dot of a swizzle like "1..x" never occurring in valid sources, and
        // to keep "x.y" member access intact)
        if !is_float
            && self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit())
        {
            is_float = true;
            spell.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    spell.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // Exponent part
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let mut lookahead = 1;
            if self
                .peek_ahead(1)
                .is_some_and(|c| c == '+' || c == '-')
            {
                lookahead = 2;
            }
            if self.peek_ahead(lookahead).is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                for _ in 0..lookahead {
                    if let Some(ch) = self.advance() {
                        spell.push(ch);
                    }
                }
                while let Some(ch) = self.peek() {
                    if ch.is_ascii_digit() {
                        spell.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        // Precision suffix
        if self
            .peek()
            .is_some_and(|c| matches!(c, 'f' | 'F' | 'h' | 'H'))
        {
            is_float = true;
            if let Some(ch) = self.advance() {
                spell.push(ch);
            }
        }

        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        Ok(Token::new(kind, spell, pos))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first: char, pos: SourcePos) -> Token {
        let mut ident = String::new();
        ident.push(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match KEYWORDS.get(&ident) {
            Some(&kind) => Token::new(kind, ident, pos),
            None => Token::new(TokenKind::Ident, ident, pos),
        }
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */)
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_pos = self.current_pos();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexError {
            file: self.file_name.clone(),
            pos: start_pos,
            message: "unterminated block comment".to_string(),
        })
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Consume the current character if it matches `expected`.
    fn consume(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source position
    fn current_pos(&self) -> SourcePos {
        SourcePos::new(self.file_id, self.line, self.column)
    }
}
