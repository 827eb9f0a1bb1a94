pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod printer;
pub mod token;

mod engine;
mod interpreter;

pub use engine::Engine;
pub use environment::Environment;
pub use error::{Error, LexError, Result};
pub use evaluator::{evaluate, Evaluator};
pub use interpreter::{new_interpreter, new_repl};
pub use lexer::Lexer;
pub use object::Object;
pub use parser::Parser;
pub use printer::Printer;

/// Parses and runs a whole program on an empty store.
pub fn interpret(source: &str) -> Result<Environment> {
    let program = Parser::new(Lexer::new(source))?.parse()?;
    evaluate(&program, Environment::new())
}

/// Parses and evaluates a single arithmetic expression with no variables
/// bound.
pub fn calculate(source: &str) -> Result<Object> {
    let expression = Parser::new(Lexer::new(source))?.parse_expression()?;
    Evaluator::new().eval_expression(&expression)
}
