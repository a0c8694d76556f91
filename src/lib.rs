//! # Introduction
//!
//! `hlsl_front` is the front-end of an HLSL shader translator: it parses
//! vertex/pixel/geometry shader source into a typed abstract syntax tree
//! suitable for semantic analysis and code generation back-ends.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Visitor passes (printer, analyzers, ...)
//! ```
//!
//! 1. [`parser::lexer`] — scans the source into classified tokens with
//!    positions; directive lines are kept verbatim.
//! 2. [`parser::parse`] — recursive descent parser; returns the [`parser::ast::Program`]
//!    root or `None` after reporting the first syntax error.
//! 3. [`parser::visitor`] — exhaustive traversal trait for downstream passes;
//!    [`parser::printer`] is the bundled reference pass.
//! 4. [`log`] — the diagnostic sink the front-end reports through.
//!
//! ## Example
//!
//! ```
//! use hlsl_front::log::StdLog;
//! use hlsl_front::parser::{Parser, SourceCode};
//!
//! let source = SourceCode::new("shader.hlsl", "float4 main() : SV_Target { return 1; }");
//! let mut log = StdLog::new();
//! let program = Parser::new(Some(&mut log)).parse_source(&source);
//! assert!(program.is_some());
//! ```

pub mod log;
pub mod parser;
