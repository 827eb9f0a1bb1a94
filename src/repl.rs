use std::io::{self, Write};

use anyhow::Result;
use pascal_rs::new_repl;

const BANNER: &str = r#"
Pascal subset REPL. Enter an expression or statements separated by ';'.
Bindings are kept between lines. Ctrl-D quits.
"#;

pub fn start() -> Result<()> {
    let mut engine = new_repl();

    println!("{}", BANNER.trim());

    loop {
        print!("pascal> ");
        io::stdout().flush()?;

        let mut input = String::new();

        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            return Ok(());
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match engine.run(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(err) => println!("error: {}", err),
        }
    }
}
