use tracing::{debug, trace};

use crate::{
    ast::{
        BinaryOperator, Block, Compound, Expression, Program, Statement, UnaryOperator, Var,
        VarDecl,
    },
    environment::Environment,
    error::{Error, Result},
    object::Object,
};

/// Runs `program` against `env` and hands the store back. On error the
/// store is dropped along with whatever the program had assigned so far.
pub fn evaluate(program: &Program, env: Environment) -> Result<Environment> {
    let mut evaluator = Evaluator::with_environment(env);
    evaluator.eval(program)?;
    Ok(evaluator.into_environment())
}

#[derive(Default)]
pub struct Evaluator {
    env: Environment,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }

    pub fn eval(&mut self, program: &Program) -> Result<()> {
        debug!(program = %program.name, "evaluating program");
        self.eval_block(&program.block)
    }

    fn eval_block(&mut self, block: &Block) -> Result<()> {
        for declaration in &block.declarations {
            self.eval_var_decl(declaration);
        }
        self.eval_compound(&block.body)
    }

    // Declared types are not enforced at runtime.
    fn eval_var_decl(&mut self, declaration: &VarDecl) {
        trace!(
            name = %declaration.variable.name,
            type_spec = %declaration.type_spec,
            "declared variable"
        );
    }

    pub fn eval_compound(&mut self, compound: &Compound) -> Result<()> {
        for statement in &compound.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    fn eval_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Compound(compound) => self.eval_compound(compound),
            Statement::Assign { target, value } => self.eval_assign_statement(target, value),
            Statement::NoOp => Ok(()),
        }
    }

    fn eval_assign_statement(&mut self, target: &Var, value: &Expression) -> Result<()> {
        let value = self.eval_expression(value)?;
        debug!(name = %target.key, %value, "assign");
        self.env.set(&target.key, value);
        Ok(())
    }

    pub fn eval_expression(&self, expression: &Expression) -> Result<Object> {
        match expression {
            Expression::Num(value) => Ok(*value),
            Expression::Var(var) => self.eval_var_expression(var),
            Expression::UnaryOp { operator, operand } => {
                let operand = self.eval_expression(operand)?;
                self.eval_unary_expression(*operator, operand)
            }
            Expression::BinOp {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                self.eval_binary_expression(left, *operator, right)
            }
        }
    }

    fn eval_var_expression(&self, var: &Var) -> Result<Object> {
        self.env
            .get(&var.key)
            .ok_or_else(|| Error::Name(var.name.clone()))
    }

    fn eval_unary_expression(&self, operator: UnaryOperator, operand: Object) -> Result<Object> {
        match (operator, operand) {
            (UnaryOperator::Plus, operand) => Ok(operand),
            (UnaryOperator::Minus, Object::Integer(value)) => value
                .checked_neg()
                .map(Object::Integer)
                .ok_or(Error::Overflow),
            (UnaryOperator::Minus, Object::Real(value)) => Ok(Object::Real(-value)),
        }
    }

    fn eval_binary_expression(
        &self,
        left: Object,
        operator: BinaryOperator,
        right: Object,
    ) -> Result<Object> {
        match (left, right) {
            (Object::Integer(left), Object::Integer(right)) => {
                self.eval_integer_binary_expression(left, operator, right)
            }
            (left, right) => {
                self.eval_real_binary_expression(left.as_real(), operator, right.as_real())
            }
        }
    }

    fn eval_integer_binary_expression(
        &self,
        left: i64,
        operator: BinaryOperator,
        right: i64,
    ) -> Result<Object> {
        let value = match operator {
            BinaryOperator::Plus => left.checked_add(right),
            BinaryOperator::Minus => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::IntegerDiv => {
                if right == 0 {
                    return Err(Error::DivisionByZero);
                }
                left.checked_div(right)
            }
            BinaryOperator::FloatDiv => {
                return self.eval_real_binary_expression(left as f64, operator, right as f64)
            }
        };
        value.map(Object::Integer).ok_or(Error::Overflow)
    }

    fn eval_real_binary_expression(
        &self,
        left: f64,
        operator: BinaryOperator,
        right: f64,
    ) -> Result<Object> {
        let value = match operator {
            BinaryOperator::Plus => left + right,
            BinaryOperator::Minus => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::IntegerDiv | BinaryOperator::FloatDiv if right == 0.0 => {
                return Err(Error::DivisionByZero)
            }
            BinaryOperator::IntegerDiv => (left / right).trunc(),
            BinaryOperator::FloatDiv => left / right,
        };
        if !value.is_finite() {
            return Err(Error::Overflow);
        }
        Ok(Object::Real(value))
    }
}
