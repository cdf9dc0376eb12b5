use std::fmt;

/// The four binary arithmetic operators.
///
/// All operators are left-associative; ties in precedence resolve by
/// evaluating the earlier operator first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Operator precedence, fixed for the lifetime of the process.
///
/// Higher ranks bind tighter.
pub const PRECEDENCE: [(Operator, u8); 4] =
    [(Operator::Add, 1), (Operator::Sub, 1), (Operator::Mul, 2), (Operator::Div, 2)];

impl Operator {
    /// Returns the precedence rank of this operator as listed in
    /// [`PRECEDENCE`].
    ///
    /// # Example
    /// ```
    /// use exparse::interpreter::evaluator::operator::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => PRECEDENCE[0].1,
            Self::Mul | Self::Div => PRECEDENCE[2].1,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
