use anyhow::Result;

use crate::environment::Environment;

/// A session that accepts source text and keeps its variable store
/// between runs.
pub trait Engine {
    fn run(&mut self, input: &str) -> Result<String>;

    fn environment(&self) -> &Environment;
}
