//! Операторы калькулятора и результат вычисления.
//!
//! Поддерживаются ровно четыре бинарные операции: `+`, `-`, `*`, `/`.
//! Сложение, вычитание и умножение дают целое, деление всегда даёт `f64`.
//!
//! # Примеры
//!
//! ```
//! use simple_calculator::operator::{Operator, Value};
//!
//! let op: Operator = "+".parse().unwrap();
//! assert_eq!(op.apply(6, 3).unwrap(), Value::Integer(9));
//!
//! let op: Operator = "/".parse().unwrap();
//! assert_eq!(op.apply(6, 3).unwrap().to_string(), "2.00");
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::CalcError;

/// Арифметическая операция.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Деление с плавающей точкой.
    Div,
}

impl Operator {
    /// Все операторы в порядке вывода в меню.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Название операции для меню.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Sub => "Subtraction",
            Self::Mul => "Multiplication",
            Self::Div => "Division",
        }
    }

    /// Применить операцию к операндам.
    ///
    /// Целочисленные операции выполняются с переносом (wrapping), как
    /// обычная 32-битная арифметика в дополнительном коде.
    ///
    /// # Ошибки
    ///
    /// [`CalcError::DivisionByZero`] при делении на ноль.
    pub fn apply(self, left: i32, right: i32) -> Result<Value, CalcError> {
        match self {
            Self::Add => Ok(Value::Integer(left.wrapping_add(right))),
            Self::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
            Self::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
            Self::Div => {
                if right == 0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(Value::Real(f64::from(left) / f64::from(right)))
                }
            }
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Сравнение точное: `" +"` или `"+ "` — не оператор.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == text)
            .ok_or_else(|| CalcError::InvalidOperator {
                text: text.to_owned(),
            })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Результат вычисления.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Результат `+`, `-`, `*`.
    Integer(i32),
    /// Результат `/`.
    Real(f64),
}

impl Value {
    /// Целое значение для строки «Result as integer».
    ///
    /// Для деления всегда `None`: частное не выводится усечённым.
    #[must_use]
    pub const fn as_integer(self) -> Option<i32> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Real(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(x) => write!(f, "{x:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_symbols() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Sub);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Mul);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Div);
    }

    #[test]
    fn parse_is_exact() {
        for text in ["%", "x", "add", "++", " +", "+ ", "//", ""] {
            let err = text.parse::<Operator>().unwrap_err();
            assert!(
                matches!(err, CalcError::InvalidOperator { text: ref t } if t == text),
                "{text:?}"
            );
        }
    }

    #[test]
    fn symbol_roundtrips_through_display() {
        for op in Operator::ALL {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(Operator::Add.apply(6, 3).unwrap(), Value::Integer(9));
        assert_eq!(Operator::Sub.apply(6, 3).unwrap(), Value::Integer(3));
        assert_eq!(Operator::Sub.apply(3, 6).unwrap(), Value::Integer(-3));
        assert_eq!(Operator::Mul.apply(-4, 3).unwrap(), Value::Integer(-12));
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(
            Operator::Add.apply(i32::MAX, 1).unwrap(),
            Value::Integer(i32::MIN)
        );
        assert_eq!(
            Operator::Sub.apply(i32::MIN, 1).unwrap(),
            Value::Integer(i32::MAX)
        );
        assert_eq!(
            Operator::Mul.apply(65_536, 65_536).unwrap(),
            Value::Integer(0)
        );
    }

    #[test]
    fn division_is_real() {
        assert_eq!(Operator::Div.apply(6, 3).unwrap(), Value::Real(2.0));
        assert_eq!(Operator::Div.apply(7, 2).unwrap(), Value::Real(3.5));
        assert_eq!(Operator::Div.apply(-1, 4).unwrap(), Value::Real(-0.25));
        assert_eq!(
            Operator::Div.apply(i32::MIN, -1).unwrap(),
            Value::Real(2_147_483_648.0)
        );
    }

    #[test]
    fn division_by_zero() {
        assert!(matches!(
            Operator::Div.apply(6, 0),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            Operator::Div.apply(0, 0),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Integer(-12).to_string(), "-12");
        assert_eq!(Value::Real(2.0).to_string(), "2.00");
        assert_eq!(Value::Real(10.0 / 3.0).to_string(), "3.33");
        assert_eq!(Value::Real(2.0 / 3.0).to_string(), "0.67");
        assert_eq!(Value::Real(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn only_integers_have_integer_form() {
        assert_eq!(Value::Integer(9).as_integer(), Some(9));
        assert_eq!(Value::Real(2.0).as_integer(), None);
    }
}
