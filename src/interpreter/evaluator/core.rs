use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{operator::Operator, scalar::apply},
        lexer::Token,
        value::core::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

/// The two stacks of the shunting-yard fold.
#[derive(Debug, Default)]
struct Fold {
    operands:  Vec<Number>,
    operators: Vec<Pending>,
}

impl Fold {
    fn push_operand(&mut self, value: Number) {
        tracing::trace!(%value, "push operand");
        self.operands.push(value);
    }

    /// Pops `b` then `a` and pushes `a op b`.
    fn reduce(&mut self, op: Operator) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(RuntimeError::MissingOperand { operator: op });
        };
        let result = apply(op, left, right)?;
        tracing::trace!(%left, %op, %right, %result, "reduce");
        self.operands.push(result);
        Ok(())
    }

    /// Applies every stacked operator above the nearest `(` that binds at
    /// least as tightly as `op`, then stacks `op`.
    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            self.operators.pop();
            self.reduce(top)?;
        }
        self.operators.push(Pending::Operator(op));
        Ok(())
    }

    /// Applies operators down to the matching `(` and discards it.
    fn close_paren(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.reduce(op)?,
                Some(Pending::LeftParen) => return Ok(()),
                None => return Err(RuntimeError::UnbalancedParenthesis),
            }
        }
    }

    fn finish(mut self) -> EvalResult<Number> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.reduce(op)?,
                Pending::LeftParen => return Err(RuntimeError::UnbalancedParenthesis),
            }
        }

        match self.operands.as_slice() {
            [result] => Ok(*result),
            [] => Err(RuntimeError::EmptyExpression),
            rest => Err(RuntimeError::DanglingOperand { count: rest.len() }),
        }
    }
}

/// Parses a number lexeme, narrowing integral values to integers.
///
/// # Errors
/// Returns `RuntimeError::MalformedNumber` if the lexeme is not a valid
/// decimal number.
pub fn parse_number(lexeme: &str) -> EvalResult<Number> {
    lexeme.parse::<f64>()
          .ok()
          .filter(|v| v.is_finite())
          .map(Number::from_real)
          .ok_or_else(|| RuntimeError::MalformedNumber { lexeme: lexeme.to_owned() })
}

/// Evaluates a numeric token stream with the two-stack shunting-yard
/// algorithm.
///
/// Tokens are scanned once from left to right. Operators are left-associative
/// and `*`, `/` bind tighter than `+`, `-`.
///
/// # Parameters
/// - `tokens`: The token stream. Identifiers and symbols are not accepted.
///
/// # Returns
/// The single value left on the operand stack.
///
/// # Errors
/// Returns a `RuntimeError` for malformed numbers, unsupported tokens,
/// division by zero, missing or dangling operands, and unbalanced
/// parentheses.
///
/// # Example
/// ```
/// use exparse::interpreter::{
///     evaluator::core::evaluate_numeric,
///     lexer::tokenize,
///     value::core::Number,
/// };
///
/// let result = evaluate_numeric(&tokenize("2 + 3 * 4")).unwrap();
/// assert_eq!(result, Number::Integer(14));
///
/// let result = evaluate_numeric(&tokenize("(2 + 3) * 4")).unwrap();
/// assert_eq!(result, Number::Integer(20));
/// ```
pub fn evaluate_numeric(tokens: &[Token]) -> EvalResult<Number> {
    let mut fold = Fold::default();

    for token in tokens {
        match token {
            Token::Number(lexeme) => fold.push_operand(parse_number(lexeme)?),
            Token::Operator(op) => fold.push_operator(*op)?,
            Token::LeftParen => fold.operators.push(Pending::LeftParen),
            Token::RightParen => fold.close_paren()?,
            Token::Identifier(_) | Token::Symbol(_) => {
                return Err(RuntimeError::UnsupportedToken { token: token.to_string() });
            },
        }
    }

    fold.finish()
}
