//! Разбор операндов.
//!
//! Операнд — десятичное целое со знаком в диапазоне `i32`. ASCII-пробелы по
//! краям игнорируются, допускается один ведущий знак `+` или `-`.
//!
//! # Примеры
//!
//! ```
//! use simple_calculator::{CalcError, Field, operand::parse_operand};
//!
//! assert_eq!(parse_operand(Field::FirstOperand, " -42 ").unwrap(), -42);
//! assert!(matches!(
//!     parse_operand(Field::FirstOperand, "3.5"),
//!     Err(CalcError::NotANumber { .. })
//! ));
//! ```

use std::num::IntErrorKind;

use crate::{CalcError, Field};

/// Разбирает текст операнда.
///
/// Синтаксис проверяется раньше диапазона: `99999999999x` — это
/// [`CalcError::NotANumber`], а не [`CalcError::Overflow`].
///
/// # Ошибки
///
/// - [`CalcError::MissingInput`] для пустой строки или строки из пробелов.
/// - [`CalcError::NotANumber`] если текст не является целым литералом.
/// - [`CalcError::Overflow`] если значение не помещается в `i32`.
pub fn parse_operand(field: Field, text: &str) -> Result<i32, CalcError> {
    if text.trim().is_empty() {
        return Err(CalcError::MissingInput { field });
    }

    // Вокруг числа допустимы только ASCII-пробелы.
    let literal = text.trim_matches(|c: char| c.is_ascii_whitespace());

    if !is_integer_literal(literal) {
        return Err(CalcError::NotANumber {
            text: literal.to_owned(),
        });
    }

    literal.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CalcError::Overflow {
            text: literal.to_owned(),
        },
        _ => CalcError::NotANumber {
            text: literal.to_owned(),
        },
    })
}

/// `[+-]?[0-9]+`
fn is_integer_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix(['+', '-']).unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
