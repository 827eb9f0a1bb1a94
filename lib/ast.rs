use std::fmt;

use crate::object::Object;

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub name: String,
    pub block: Block,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub declarations: Vec<VarDecl>,
    pub body: Compound,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VarDecl {
    pub variable: Var,
    pub type_spec: TypeSpec,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeSpec {
    Integer,
    Real,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Compound {
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Compound(Compound),
    Assign { target: Var, value: Expression },
    NoOp,
}

/// A variable reference. `key` is the case-folded form used for storage,
/// `name` keeps the spelling from the source.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Var {
    pub name: String,
    pub key: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = name.to_lowercase();
        Self { name, key }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    BinOp {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    Num(Object),
    Var(Var),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mul,
    IntegerDiv,
    FloatDiv,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

/// Borrowed view over any node kind, for consumers that walk the whole tree
/// without caring about the concrete type of each node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Block(&'a Block),
    VarDecl(&'a VarDecl),
    Type(TypeSpec),
    Compound(&'a Compound),
    Statement(&'a Statement),
    Var(&'a Var),
    Expression(&'a Expression),
}

impl<'a> Node<'a> {
    pub fn label(&self) -> String {
        match self {
            Node::Program(program) => format!("PROGRAM {}", program.name),
            Node::Block(_) => "BLOCK".to_string(),
            Node::VarDecl(decl) => format!("VAR {}", decl.variable.name),
            Node::Type(type_spec) => type_spec.to_string(),
            Node::Compound(_) => "COMPOUND".to_string(),
            Node::Statement(statement) => match statement {
                Statement::Compound(_) => "COMPOUND".to_string(),
                Statement::Assign { .. } => ":=".to_string(),
                Statement::NoOp => "NOOP".to_string(),
            },
            Node::Var(var) => var.name.clone(),
            Node::Expression(expression) => match expression {
                Expression::BinOp { operator, .. } => operator.to_string(),
                Expression::UnaryOp { operator, .. } => operator.to_string(),
                Expression::Num(value) => value.to_string(),
                Expression::Var(var) => var.name.clone(),
            },
        }
    }

    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Program(program) => vec![Node::Block(&program.block)],
            Node::Block(block) => block
                .declarations
                .iter()
                .map(Node::VarDecl)
                .chain(std::iter::once(Node::Compound(&block.body)))
                .collect(),
            Node::VarDecl(decl) => vec![Node::Type(decl.type_spec)],
            Node::Type(_) | Node::Var(_) => Vec::new(),
            Node::Compound(compound) => compound.statements.iter().map(Node::Statement).collect(),
            Node::Statement(statement) => match statement {
                Statement::Compound(compound) => Node::Compound(compound).children(),
                Statement::Assign { target, value } => {
                    vec![Node::Var(target), Node::Expression(value)]
                }
                Statement::NoOp => Vec::new(),
            },
            Node::Expression(expression) => match expression {
                Expression::BinOp { left, right, .. } => {
                    vec![Node::Expression(left), Node::Expression(right)]
                }
                Expression::UnaryOp { operand, .. } => vec![Node::Expression(operand)],
                Expression::Num(_) | Expression::Var(_) => Vec::new(),
            },
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeSpec::Integer => write!(f, "INTEGER"),
            TypeSpec::Real => write!(f, "REAL"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOperator::Plus => write!(f, "+"),
            BinaryOperator::Minus => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::IntegerDiv => write!(f, "DIV"),
            BinaryOperator::FloatDiv => write!(f, "/"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::BinOp {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::UnaryOp { operator, operand } => write!(f, "({}{})", operator, operand),
            Expression::Num(value) => write!(f, "{}", value),
            Expression::Var(var) => write!(f, "{}", var.name),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Compound(compound) => write!(f, "{}", compound),
            Statement::Assign { target, value } => write!(f, "{} := {}", target.name, value),
            Statement::NoOp => Ok(()),
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let statements: Vec<String> = self.statements.iter().map(|s| s.to_string()).collect();
        write!(f, "BEGIN {} END", statements.join("; "))
    }
}
