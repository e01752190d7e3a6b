use crate::common::{Int, Method};
use crate::error::SyntaxError;
use crate::roll::{null_tracer, record, SharedTracer, Toss};
use crate::tree::{RollNode, Rollable, SupportsTracing};
use std::fmt::{self, Write};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl ArithmeticOperator {
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Applies the operator with `operand` on the right.
    ///
    /// Division truncates toward zero. Exponentiation keeps the sign of `value`:
    /// `(-2) ^ 2` is `-4`. Results saturate at the bounds of [Int].
    pub fn apply(self, value: Int, operand: Int) -> Int {
        match self {
            Self::Add => value.saturating_add(operand),
            Self::Sub => value.saturating_sub(operand),
            Self::Mul => value.saturating_mul(operand),
            Self::Div => value.checked_div(operand).unwrap_or(value),
            Self::Exp => {
                let exp = u32::try_from(operand).unwrap_or(u32::MAX);
                if value >= 0 {
                    value.saturating_pow(exp)
                } else {
                    let magnitude = value.unsigned_abs().saturating_pow(exp);
                    Int::try_from(magnitude).map_or(Int::MIN, |x| -x)
                }
            }
        }
    }
}

impl FromStr for ArithmeticOperator {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "^" => Self::Exp,
            _ => return Err(SyntaxError::InvalidOperator(s.to_owned())),
        })
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// Applies one operator and a fixed operand to the outcomes of a rollable.
///
/// The bounds are the operator applied to the inner bounds, so for an operator that
/// is not monotonic over the inner range `minimum` may exceed `maximum`.
#[derive(Clone)]
pub struct Arithmetic {
    inner: Box<RollNode>,
    operator: ArithmeticOperator,
    value: Int,
    tracer: SharedTracer,
}

impl Arithmetic {
    const KIND: &'static str = "Arithmetic";

    pub fn new(
        inner: impl Into<RollNode>,
        operator: ArithmeticOperator,
        value: Int,
    ) -> Result<Self, SyntaxError> {
        if value < 0 || (value == 0 && operator == ArithmeticOperator::Div) {
            return Err(SyntaxError::OperatorValueMismatch {
                operator: operator.to_string(),
                value,
            });
        }
        Ok(Self {
            inner: Box::new(inner.into()),
            operator,
            value,
            tracer: null_tracer(),
        })
    }

    pub fn from_symbol(
        inner: impl Into<RollNode>,
        symbol: &str,
        value: Int,
    ) -> Result<Self, SyntaxError> {
        Self::new(inner, symbol.parse()?, value)
    }

    pub fn inner_rollable(&self) -> &RollNode {
        &self.inner
    }

    pub(crate) fn inner_mut(&mut self) -> &mut RollNode {
        &mut self.inner
    }

    pub fn operator(&self) -> ArithmeticOperator {
        self.operator
    }

    pub fn value(&self) -> Int {
        self.value
    }

    fn decorate(&self, method: Method, inner: Int) -> Toss {
        let result = self.operator.apply(inner, self.value);
        let operation = format!("{} {} {}", inner, self.operator, self.value);
        record(&self.tracer, Self::KIND, self.notation(), method, result, operation)
    }
}

impl Rollable for Arithmetic {
    fn roll(&self) -> Toss {
        self.decorate(Method::Roll, self.inner.roll().value())
    }

    fn minimum(&self) -> Toss {
        self.decorate(Method::Minimum, self.inner.minimum().value())
    }

    fn maximum(&self) -> Toss {
        self.decorate(Method::Maximum, self.inner.maximum().value())
    }

    fn notation(&self) -> String {
        let inner = self.inner.notation();
        // `D6+0*2` would read as a modifier on the die
        if inner.contains('+') || !self.inner.is_valid() {
            format!("({}){}{}", inner, self.operator, self.value)
        } else {
            format!("{}{}{}", inner, self.operator, self.value)
        }
    }
}

impl SupportsTracing for Arithmetic {
    fn set_tracer(&mut self, tracer: SharedTracer) {
        self.tracer = tracer;
    }

    fn tracer(&self) -> &SharedTracer {
        &self.tracer
    }
}

impl PartialEq for Arithmetic {
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator && self.value == other.value && self.inner == other.inner
    }
}

impl fmt::Debug for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arithmetic")
            .field("inner", &self.inner)
            .field("operator", &self.operator)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cup::Cup;
    use crate::dice::{CustomDie, SidedDie};
    use crate::roll::MemoryTracer;
    use crate::test_utils::step_roller;
    use std::rc::Rc;

    /// A rollable that always lands on `x`.
    fn fixed(x: Int) -> CustomDie {
        CustomDie::new([x, x]).unwrap()
    }

    fn check(x: Int, symbol: &str, value: Int, expected: Int) {
        let modifier = Arithmetic::from_symbol(fixed(x), symbol, value).unwrap();
        assert_eq!(modifier.roll().value(), expected, "{} {} {}", x, symbol, value);
    }

    #[test]
    fn test_basic_operators() {
        check(7, "+", 3, 10);
        check(7, "-", 3, 4);
        check(-7, "-", 3, -10);
        check(7, "*", 3, 21);
        check(7, "*", 0, 0);
    }

    #[test]
    fn test_division_truncates() {
        check(-7, "/", 2, -3);
        check(7, "/", 2, 3);
        check(-1, "/", 3, 0);
        check(9, "/", 3, 3);
    }

    #[test]
    fn test_signed_power() {
        check(-2, "^", 3, -8);
        check(2, "^", 3, 8);
        check(-2, "^", 2, -4);
        check(-3, "^", 0, -1);
        check(0, "^", 0, 1);
        check(5, "^", 1, 5);
    }

    #[test]
    fn test_saturates() {
        check(10, "^", 40, Int::MAX);
        check(-10, "^", 40, Int::MIN);
        check(Int::MAX - 1, "+", 5, Int::MAX);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Arithmetic::from_symbol(fixed(1), "/", 0).unwrap_err(),
            SyntaxError::OperatorValueMismatch {
                operator: "/".to_owned(),
                value: 0
            }
        );
        for symbol in ["+", "-", "*", "/", "^"] {
            assert_eq!(
                Arithmetic::from_symbol(fixed(1), symbol, -1).unwrap_err(),
                SyntaxError::OperatorValueMismatch {
                    operator: symbol.to_owned(),
                    value: -1
                }
            );
        }
        assert_eq!(
            Arithmetic::from_symbol(fixed(1), "%", 2).unwrap_err(),
            SyntaxError::InvalidOperator("%".to_owned())
        );
        assert!(Arithmetic::from_symbol(fixed(1), "*", 0).is_ok());
    }

    #[test]
    fn test_bounds() {
        let d6 = SidedDie::new(6).unwrap();
        let modifier = Arithmetic::from_symbol(d6, "*", 3).unwrap();
        assert_eq!(modifier.minimum().value(), 3);
        assert_eq!(modifier.maximum().value(), 18);

        // decorated bounds are not reordered
        let die = CustomDie::new([-3, 1]).unwrap();
        let modifier = Arithmetic::from_symbol(die, "^", 2).unwrap();
        assert_eq!(modifier.minimum().value(), -9);
        assert_eq!(modifier.maximum().value(), 1);
    }

    #[test]
    fn test_notation() {
        let d4 = SidedDie::new(4).unwrap();
        let cup = Cup::from_rollable(d4.clone(), 2).unwrap();
        assert_eq!(Arithmetic::from_symbol(cup, "*", 3).unwrap().notation(), "2D4*3");

        let cup = Cup::new([SidedDie::new(6).unwrap().into(), d4.into()]);
        let modifier = Arithmetic::from_symbol(cup, "^", 2).unwrap();
        assert_eq!(modifier.notation(), "(D6+D4)^2");

        let nested = Arithmetic::from_symbol(modifier, "-", 1).unwrap();
        assert_eq!(nested.notation(), "((D6+D4)^2)-1");
        let outer = Arithmetic::from_symbol(SidedDie::new(8).unwrap(), "+", 1).unwrap();
        let outer = Arithmetic::from_symbol(outer, "/", 2).unwrap();
        assert_eq!(outer.notation(), "(D8+1)/2");

        let empty = Arithmetic::from_symbol(Cup::default(), "+", 2).unwrap();
        assert_eq!(empty.notation(), "(0)+2");
    }

    #[test]
    fn test_inner_rollable() {
        let d6 = SidedDie::new(6).unwrap();
        let modifier = Arithmetic::from_symbol(d6.clone(), "+", 2).unwrap();
        assert_eq!(*modifier.inner_rollable(), RollNode::from(d6));
        assert_eq!(modifier.operator(), ArithmeticOperator::Add);
        assert_eq!(modifier.value(), 2);
    }

    #[test]
    fn test_traces_decoration() {
        let memory = Rc::new(MemoryTracer::new());
        let d8 = SidedDie::with_roller(8, step_roller(7, 1)).unwrap();
        let mut modifier = Arithmetic::from_symbol(d8, "+", 3).unwrap();
        modifier.set_tracer(memory.clone());
        assert_eq!(modifier.roll().value(), 10);
        modifier.maximum();
        modifier.minimum();
        let tosses = memory.tosses();
        assert_eq!(tosses.len(), 3);
        assert_eq!(tosses[0].operation(), "7 + 3");
        assert_eq!(tosses[0].context().source(), "D8+3");
        assert_eq!(tosses[1].operation(), "8 + 3");
        assert_eq!(tosses[2].value(), 4);
    }
}
