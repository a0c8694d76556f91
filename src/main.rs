// hlsl-front driver: parse a shader file and dump its AST

use std::fs;
use std::path::Path;

use hlsl_front::log::StdLog;
use hlsl_front::parser::{AstPrinter, Parser, SourceCode};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("hlsl-front");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <shader.hlsl> [--positions]", program_name);
        eprintln!();
        eprintln!("Parses the shader and dumps the AST to stdout.");
        std::process::exit(1);
    }

    let input_file = &args[1];
    let show_positions = args.iter().any(|arg| arg == "--positions");

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        std::process::exit(1);
    }

    let text = match fs::read_to_string(input_file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: Failed to read '{}': {}", input_file, err);
            std::process::exit(1);
        }
    };

    let source = SourceCode::new(input_file.clone(), text);
    let mut log = StdLog::new();

    let program = match Parser::new(Some(&mut log)).parse_source(&source) {
        Some(program) => program,
        // The diagnostic already went to the log
        None => std::process::exit(1),
    };

    let mut printer = AstPrinter::new(&mut log);
    if show_positions {
        printer = printer.with_positions();
    }
    printer.dump(&program);
}
