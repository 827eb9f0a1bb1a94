use tracing::trace;

use crate::{
    ast::{
        BinaryOperator, Block, Compound, Expression, Program, Statement, TypeSpec,
        UnaryOperator, Var, VarDecl,
    },
    error::{Error, Result},
    lexer::Lexer,
    object::Object,
    token::Token,
};

/// Deepest nesting accepted for parentheses, unary operators and
/// `BEGIN ... END` blocks, and the tallest expression tree accepted.
/// Both the parser and the evaluator recurse once per level.
pub const MAX_DEPTH: usize = 128;

pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let cur_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            cur_token,
            depth: 0,
        })
    }

    /// Parses a whole program. Consumes the parser: the token stream only
    /// moves forward, so there is nothing left to parse afterwards.
    pub fn parse(mut self) -> Result<Program> {
        let program = self.parse_program()?;
        self.expect_eof()?;
        trace!(name = %program.name, "parsed program");
        Ok(program)
    }

    /// Parses a single expression spanning the whole input.
    pub fn parse_expression(mut self) -> Result<Expression> {
        let (expression, _) = self.parse_expr()?;
        self.expect_eof()?;
        Ok(expression)
    }

    /// Parses a bare statement list spanning the whole input, as typed on a
    /// REPL line.
    pub fn parse_statements(mut self) -> Result<Compound> {
        let statements = self.parse_statement_list()?;
        self.expect_eof()?;
        Ok(Compound { statements })
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.cur_token, next))
    }

    fn eat(&mut self, expected: Token) -> Result<Token> {
        if self.cur_token.variant_eq(&expected) {
            self.advance()
        } else {
            Err(Error::syntax(describe(&expected), self.cur_token.clone()))
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::MaxDepth {
                depth: self.depth,
                max_depth: MAX_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // Height counts operator nodes on the longest path, so a lone literal is 0.
    fn check_height(&self, height: usize) -> Result<usize> {
        if height > MAX_DEPTH {
            return Err(Error::MaxDepth {
                depth: height,
                max_depth: MAX_DEPTH,
            });
        }
        Ok(height)
    }

    fn expect_eof(&self) -> Result<()> {
        match self.cur_token {
            Token::Eof => Ok(()),
            _ => Err(Error::syntax(describe(&Token::Eof), self.cur_token.clone())),
        }
    }

    // program := PROGRAM variable SEMI block DOT
    fn parse_program(&mut self) -> Result<Program> {
        self.eat(Token::Program)?;
        let name = self.parse_variable()?.name;
        self.eat(Token::Semi)?;
        let block = self.parse_block()?;
        self.eat(Token::Dot)?;
        Ok(Program { name, block })
    }

    // block := declarations compound_statement
    fn parse_block(&mut self) -> Result<Block> {
        let declarations = self.parse_declarations()?;
        let body = self.parse_compound()?;
        Ok(Block { declarations, body })
    }

    // declarations := (VAR (var_decl SEMI)+)*
    fn parse_declarations(&mut self) -> Result<Vec<VarDecl>> {
        let mut declarations = Vec::new();

        while self.cur_token.variant_eq(&Token::Var) {
            self.eat(Token::Var)?;
            loop {
                declarations.extend(self.parse_var_decl()?);
                self.eat(Token::Semi)?;
                if !matches!(self.cur_token, Token::Ident(_)) {
                    break;
                }
            }
        }

        Ok(declarations)
    }

    // var_decl := ID (COMMA ID)* COLON type_spec
    fn parse_var_decl(&mut self) -> Result<Vec<VarDecl>> {
        let mut variables = vec![self.parse_variable()?];

        while self.cur_token.variant_eq(&Token::Comma) {
            self.eat(Token::Comma)?;
            variables.push(self.parse_variable()?);
        }

        self.eat(Token::Colon)?;

        let type_spec = self.parse_type_spec()?;

        Ok(variables
            .into_iter()
            .map(|variable| VarDecl {
                variable,
                type_spec,
            })
            .collect())
    }

    // type_spec := INTEGER | REAL
    fn parse_type_spec(&mut self) -> Result<TypeSpec> {
        let type_spec = match self.cur_token {
            Token::Integer => TypeSpec::Integer,
            Token::Real => TypeSpec::Real,
            _ => return Err(Error::syntax("INTEGER or REAL", self.cur_token.clone())),
        };
        self.advance()?;
        Ok(type_spec)
    }

    // compound := BEGIN statement_list END
    fn parse_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        self.eat(Token::Begin)?;
        let statements = self.parse_statement_list()?;
        self.eat(Token::End)?;
        self.leave();
        Ok(Compound { statements })
    }

    // statement_list := statement (SEMI statement)*
    fn parse_statement_list(&mut self) -> Result<Vec<Statement>> {
        let mut statements = vec![self.parse_statement()?];

        while self.cur_token.variant_eq(&Token::Semi) {
            self.eat(Token::Semi)?;
            statements.push(self.parse_statement()?);
        }

        // Two statements with no separator between them.
        if matches!(self.cur_token, Token::Ident(_)) {
            return Err(Error::syntax(describe(&Token::Semi), self.cur_token.clone()));
        }

        Ok(statements)
    }

    // statement := compound | assignment | empty
    fn parse_statement(&mut self) -> Result<Statement> {
        match self.cur_token {
            Token::Begin => Ok(Statement::Compound(self.parse_compound()?)),
            Token::Ident(_) => self.parse_assignment(),
            _ => Ok(Statement::NoOp),
        }
    }

    // assignment := variable ASSIGN expr
    fn parse_assignment(&mut self) -> Result<Statement> {
        let target = self.parse_variable()?;
        self.eat(Token::Assign)?;
        let (value, _) = self.parse_expr()?;
        Ok(Statement::Assign { target, value })
    }

    // variable := ID
    fn parse_variable(&mut self) -> Result<Var> {
        match self.eat(Token::Ident(String::new()))? {
            Token::Ident(name) => Ok(Var::new(name)),
            token => Err(Error::syntax(describe(&Token::Ident(String::new())), token)),
        }
    }

    // expr := term ((PLUS | MINUS) term)*
    fn parse_expr(&mut self) -> Result<(Expression, usize)> {
        let (mut node, mut height) = self.parse_term()?;

        loop {
            let operator = match self.cur_token {
                Token::Plus => BinaryOperator::Plus,
                Token::Minus => BinaryOperator::Minus,
                _ => break,
            };
            self.advance()?;
            let (right, right_height) = self.parse_term()?;
            height = self.check_height(height.max(right_height) + 1)?;
            node = Expression::BinOp {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok((node, height))
    }

    // term := factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*
    fn parse_term(&mut self) -> Result<(Expression, usize)> {
        let (mut node, mut height) = self.parse_factor()?;

        loop {
            let operator = match self.cur_token {
                Token::Mul => BinaryOperator::Mul,
                Token::IntegerDiv => BinaryOperator::IntegerDiv,
                Token::FloatDiv => BinaryOperator::FloatDiv,
                _ => break,
            };
            self.advance()?;
            let (right, right_height) = self.parse_factor()?;
            height = self.check_height(height.max(right_height) + 1)?;
            node = Expression::BinOp {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok((node, height))
    }

    // factor := (PLUS | MINUS) factor | INTEGER_CONST | REAL_CONST
    //         | LPAREN expr RPAREN | variable
    fn parse_factor(&mut self) -> Result<(Expression, usize)> {
        match self.cur_token {
            Token::Plus | Token::Minus => {
                self.enter()?;
                let operator = match self.advance()? {
                    Token::Plus => UnaryOperator::Plus,
                    _ => UnaryOperator::Minus,
                };
                let (operand, height) = self.parse_factor()?;
                self.leave();
                let height = self.check_height(height + 1)?;
                Ok((
                    Expression::UnaryOp {
                        operator,
                        operand: Box::new(operand),
                    },
                    height,
                ))
            }
            Token::IntegerConst(value) => {
                self.advance()?;
                Ok((Expression::Num(Object::Integer(value)), 0))
            }
            Token::RealConst(value) => {
                self.advance()?;
                Ok((Expression::Num(Object::Real(value)), 0))
            }
            Token::Lparen => {
                self.enter()?;
                self.eat(Token::Lparen)?;
                let grouped = self.parse_expr()?;
                self.eat(Token::Rparen)?;
                self.leave();
                Ok(grouped)
            }
            Token::Ident(_) => Ok((Expression::Var(self.parse_variable()?), 0)),
            _ => Err(Error::syntax("expression", self.cur_token.clone())),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Ident(_) => "identifier".to_string(),
        Token::IntegerConst(_) | Token::RealConst(_) => "number".to_string(),
        token => token.to_string(),
    }
}
