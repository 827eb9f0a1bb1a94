use anyhow::Result;
use tracing::debug;

use crate::{evaluate, Engine, Environment, Evaluator, Lexer, Parser};

/// Engine for whole programs. Each run prints the store after the program.
pub fn new_interpreter() -> Box<dyn Engine> {
    Box::new(ProgramEngine {
        env: Environment::new(),
    })
}

/// Engine for REPL lines. A line is an expression, whose value is printed,
/// or a statement list, after which the store is printed.
pub fn new_repl() -> Box<dyn Engine> {
    Box::new(LineEngine {
        env: Environment::new(),
    })
}

struct ProgramEngine {
    env: Environment,
}

impl Engine for ProgramEngine {
    fn run(&mut self, input: &str) -> Result<String> {
        let program = Parser::new(Lexer::new(input))?.parse()?;

        // Runs on a copy so a failing program leaves the session untouched.
        self.env = evaluate(&program, self.env.clone())?;

        debug!(program = %program.name, bindings = self.env.len(), "program finished");

        Ok(self.env.to_string())
    }

    fn environment(&self) -> &Environment {
        &self.env
    }
}

struct LineEngine {
    env: Environment,
}

impl Engine for LineEngine {
    fn run(&mut self, input: &str) -> Result<String> {
        if let Ok(expression) = Parser::new(Lexer::new(input)).and_then(|p| p.parse_expression())
        {
            debug!(%expression, "evaluating expression line");
            let evaluator = Evaluator::with_environment(std::mem::take(&mut self.env));
            let value = evaluator.eval_expression(&expression);
            self.env = evaluator.into_environment();
            return Ok(value?.to_string());
        }

        let compound = Parser::new(Lexer::new(input))?.parse_statements()?;

        let mut evaluator = Evaluator::with_environment(self.env.clone());
        evaluator.eval_compound(&compound)?;
        self.env = evaluator.into_environment();

        debug!(bindings = self.env.len(), "statement line finished");

        Ok(self.env.to_string())
    }

    fn environment(&self) -> &Environment {
        &self.env
    }
}
