mod repl;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser as _;
use pascal_rs::{calculate, new_interpreter, Lexer, Parser, Printer};
use tracing::Level;

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// log pipeline activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// run a program file and print the final variable store
    Run {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
    /// print the token stream of a file
    Tokens {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
    /// print the syntax tree of a program file
    Ast {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
    /// evaluate a single arithmetic expression
    Calc {
        #[arg(name = "EXPR")]
        expression: String,

        /// print the expression tree instead of its value
        #[arg(long)]
        tree: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Run { file }) => {
            let source = read_source(&file)?;
            let mut engine = new_interpreter();
            println!("{}", engine.run(&source)?);
        }
        Some(Commands::Tokens { file }) => {
            let source = read_source(&file)?;
            for token in Lexer::new(&source) {
                let token = token?;
                println!("Token({}, {})", token.kind(), token);
            }
            println!("Token(EOF)");
        }
        Some(Commands::Ast { file }) => {
            let source = read_source(&file)?;
            let program = Parser::new(Lexer::new(&source))?.parse()?;
            print!("{}", Printer::render(&program));
        }
        Some(Commands::Calc { expression, tree }) => {
            if tree {
                let expression = Parser::new(Lexer::new(&expression))?.parse_expression()?;
                print!("{}", Printer::render_expression(&expression));
            } else {
                println!("{}", calculate(&expression)?);
            }
        }
        None => repl::start()?,
    }

    Ok(())
}

fn read_source(file: &Path) -> Result<String> {
    tracing::debug!(file = %file.display(), "reading source");
    fs::read_to_string(file).with_context(|| format!("could not read {}", file.display()))
}
