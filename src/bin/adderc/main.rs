//! # adderc
//!
//! A small front end driver for Adder: reads a source file, runs the lexer
//! and parser, and prints the resulting token stream or AST.
mod cli;

use cli::Cli;

use std::{error::Error, fs};

use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    let path = fs::canonicalize(&args.file)?;
    let source = fs::read_to_string(&path)?;

    info!("parsing {}", path.display());

    if args.tokens {
        match adder_lang::tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{token:?}");
                }
                Ok(())
            }
            Err(err) => report(err, &source),
        }
    } else {
        match adder_lang::parse(&source) {
            Ok(module) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&module)?);
                } else {
                    println!("{module:#?}");
                }
                Ok(())
            }
            Err(err) => report(err, &source),
        }
    }
}

fn report(err: adder_lang::SyntaxError, source: &str) -> Result<(), Box<dyn Error>> {
    let err = err.with_excerpt(source);
    eprintln!("{err}");
    std::process::exit(1);
}
