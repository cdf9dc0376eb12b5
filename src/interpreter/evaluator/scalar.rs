use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, operator::Operator},
        value::core::Number,
    },
};

/// Applies an arithmetic operator to two numbers, computing `left op right`.
///
/// Two integers use checked `i64` arithmetic and fall back to real arithmetic
/// on overflow. An exact integer quotient stays an integer; any other
/// quotient is real. Real results collapse to integers when integral.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed number.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` if `op` is `/` and `right` is zero.
/// - `RuntimeError::Overflow` if the result is not finite.
///
/// # Example
/// ```
/// use exparse::interpreter::{
///     evaluator::{operator::Operator, scalar::apply},
///     value::core::Number,
/// };
///
/// let quotient = apply(Operator::Div, Number::Integer(10), Number::Integer(4)).unwrap();
/// assert_eq!(quotient, Number::Real(2.5));
///
/// let quotient = apply(Operator::Div, Number::Integer(10), Number::Integer(5)).unwrap();
/// assert_eq!(quotient, Number::Integer(2));
/// ```
pub fn apply(op: Operator, left: Number, right: Number) -> EvalResult<Number> {
    use Number::Integer;

    if let (Integer(a), Integer(b)) = (left, right)
       && let Some(result) = apply_integer(op, a, b)?
    {
        return Ok(result);
    }

    apply_real(op, left.as_real(), right.as_real())
}

/// Integer arithmetic. `Ok(None)` means the result does not fit an exact
/// integer and has to be computed as a real.
fn apply_integer(op: Operator, a: i64, b: i64) -> EvalResult<Option<Number>> {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            match a.checked_rem(b) {
                Some(0) => a.checked_div(b),
                _ => None,
            }
        },
    };

    Ok(result.map(Number::Integer))
}

fn apply_real(op: Operator, a: f64, b: f64) -> EvalResult<Number> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            a / b
        },
    };

    if !result.is_finite() {
        return Err(RuntimeError::Overflow);
    }

    Ok(Number::from_real(result))
}
