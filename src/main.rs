use std::fs;

use clap::Parser;
use minilang::{
    ast::dump_program,
    interpreter::{
        evaluator::core::Context,
        lexer::{dump_tokens, tokenize},
        parser::statement::parse_program,
    },
};

/// minilang is a tree-walking interpreter for a minimal integer
/// expression-and-statement language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token dump before parsing.
    #[arg(short, long)]
    tokens: bool,

    /// Print the indented syntax tree before execution.
    #[arg(short, long)]
    ast: bool,

    /// Path to the source file to run.
    path: String,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.path);
                     std::process::exit(1);
                 });

    if let Err(e) = run_pipeline(&args, &source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Drives the three stages in order, emitting the requested debug dumps
/// between them.
fn run_pipeline(args: &Args, source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    if args.tokens {
        print!("{}", dump_tokens(&tokens));
    }

    let program = parse_program(&tokens)?;
    if args.ast {
        print!("{}", dump_program(&program));
    }

    let mut context = Context::new();
    context.run(&program)?;

    Ok(())
}
