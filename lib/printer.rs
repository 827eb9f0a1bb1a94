use crate::ast::{Expression, Node, Program};

const SPACE: char = ' ';
const VERTICAL: char = '│';
const HORIZONTAL: char = '─';
const VERTICAL_AND_RIGHT: char = '├';
const UP_AND_RIGHT: char = '└';

/// Renders an AST as an indented tree drawn with box-drawing connectors,
/// one node per line.
pub struct Printer {
    output: String,
}

impl Printer {
    pub fn render(program: &Program) -> String {
        Self::render_node(Node::Program(program))
    }

    pub fn render_expression(expression: &Expression) -> String {
        Self::render_node(Node::Expression(expression))
    }

    pub fn render_node(node: Node<'_>) -> String {
        let mut printer = Printer {
            output: String::new(),
        };
        printer.write_node(node, String::new());
        printer.output
    }

    fn write_node(&mut self, node: Node<'_>, indent: String) {
        self.output.push_str(&indent);
        self.output.push(HORIZONTAL);
        self.output.push_str(&format!("({})\n", node.label()));

        let base = continuation(indent);
        let children = node.children();
        let last = children.len().saturating_sub(1);

        for (index, child) in children.into_iter().enumerate() {
            let connector = if index == last {
                UP_AND_RIGHT
            } else {
                VERTICAL_AND_RIGHT
            };
            self.write_node(child, format!("{base}{SPACE}{SPACE}{connector}"));
        }
    }
}

// Below a child, its connector becomes a vertical rule if siblings follow,
// otherwise blank space.
fn continuation(mut indent: String) -> String {
    match indent.pop() {
        Some(VERTICAL_AND_RIGHT) => indent.push(VERTICAL),
        Some(UP_AND_RIGHT) => indent.push(SPACE),
        Some(char) => indent.push(char),
        None => {}
    }
    indent
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{lexer::Lexer, parser::Parser};

    #[test]
    fn expression_tree() {
        let tests = vec![
            (
                "1 + 2 * 3",
                vec![
                    "─(+)",
                    "  ├─(1)",
                    "  └─(*)",
                    "     ├─(2)",
                    "     └─(3)",
                ],
            ),
            (
                "(1 - 2) * 3",
                vec![
                    "─(*)",
                    "  ├─(-)",
                    "  │  ├─(1)",
                    "  │  └─(2)",
                    "  └─(3)",
                ],
            ),
            ("--2.5", vec!["─(-)", "  └─(-)", "     └─(2.5)"]),
        ];

        for (input, lines) in tests {
            let expression = Parser::new(Lexer::new(input))
                .unwrap()
                .parse_expression()
                .unwrap();
            assert_eq!(
                Printer::render_expression(&expression),
                expected(lines),
                "input: {input}"
            );
        }
    }

    #[test]
    fn program_tree() {
        let program = Parser::new(Lexer::new(
            "PROGRAM p; VAR a: INTEGER; BEGIN a := 1; END.",
        ))
        .unwrap()
        .parse()
        .unwrap();

        assert_eq!(
            Printer::render(&program),
            expected(vec![
                "─(PROGRAM p)",
                "  └─(BLOCK)",
                "     ├─(VAR a)",
                "     │  └─(INTEGER)",
                "     └─(COMPOUND)",
                "        ├─(:=)",
                "        │  ├─(a)",
                "        │  └─(1)",
                "        └─(NOOP)",
            ])
        );
    }

    fn expected(lines: Vec<&str>) -> String {
        lines.iter().map(|line| format!("{line}\n")).collect()
    }
}
