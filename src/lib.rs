//! # simple_calculator
//!
//! Простой интерактивный консольный калькулятор.
//!
//! Читает из stdin два целых числа и символ операции, выполняет одну
//! операцию и печатает результат. Поддерживает:
//! - Операнды в диапазоне `i32`
//! - Операции `+`, `-`, `*` (целый результат) и `/` (результат `f64`)
//! - Первая же ошибка завершает сеанс, повторного ввода нет
//!
//! # Пример использования
//!
//! ```
//! use std::io::Cursor;
//!
//! use simple_calculator::Session;
//!
//! let mut session = Session::new(Cursor::new("6\n3\n+\n"), Vec::new());
//! let calc = session.run().unwrap();
//! assert_eq!(calc.value.as_integer(), Some(9));
//!
//! let transcript = String::from_utf8(session.into_output()).unwrap();
//! assert!(transcript.contains("Result: 6 + 3 = 9"));
//! ```

pub mod config;
pub mod logger;
pub mod operand;
pub mod operator;
pub mod session;

use std::fmt::{self, Display};
use std::io;

pub use config::Config;
pub use operator::{Operator, Value};
pub use session::{Calculation, Session};

/// Поле ввода, которое читает сеанс.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Первый операнд.
    FirstOperand,
    /// Второй операнд.
    SecondOperand,
    /// Символ операции.
    Operator,
}

impl Field {
    /// Что ожидалось в поле, в формулировке сообщения об ошибке.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::FirstOperand | Self::SecondOperand => "number",
            Self::Operator => "operation",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstOperand => "first operand",
            Self::SecondOperand => "second operand",
            Self::Operator => "operator",
        })
    }
}

/// Общий тип ошибки калькулятора.
///
/// `Display` даёт ровно ту строку, которую видит пользователь.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Пустая строка или строка из пробелов.
    #[error("Error: Please enter a valid {}!", .field.expected())]
    MissingInput {
        /// Поле, в котором не оказалось ввода.
        field: Field,
    },

    /// Текст операнда не является целым числом.
    #[error("Error: Please enter valid numbers only!")]
    NotANumber {
        /// Введённый текст без пробелов по краям.
        text: String,
    },

    /// Число вне диапазона `i32`.
    #[error("Error: Number is too large or too small!")]
    Overflow {
        /// Введённый текст без пробелов по краям.
        text: String,
    },

    /// Деление на ноль.
    #[error("Error: Cannot divide by zero!")]
    DivisionByZero,

    /// Неизвестный символ операции.
    #[error("Error: Invalid operation! Please use +, -, *, or /")]
    InvalidOperator {
        /// Введённая строка как есть.
        text: String,
    },

    /// Прочие сбои (ошибки ввода-вывода).
    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] io::Error),
}

impl CalcError {
    /// Код завершения для режима `--strict-exit`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Unexpected(_) => 1,
            Self::MissingInput { .. } => 2,
            Self::NotANumber { .. } => 3,
            Self::Overflow { .. } => 4,
            Self::DivisionByZero => 5,
            Self::InvalidOperator { .. } => 6,
        }
    }
}

/// Запускает один сеанс калькулятора на stdin/stdout.
///
/// Ошибки сеанса к моменту возврата уже выведены пользователю.
///
/// # Ошибки
///
/// Возвращает [`CalcError`], которым завершился сеанс.
pub fn run(config: &Config) -> Result<Calculation, CalcError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(stdin.lock(), stdout.lock())
        .with_pause(config.pause)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_message_depends_on_field() {
        let err = CalcError::MissingInput {
            field: Field::FirstOperand,
        };
        assert_eq!(err.to_string(), "Error: Please enter a valid number!");

        let err = CalcError::MissingInput {
            field: Field::SecondOperand,
        };
        assert_eq!(err.to_string(), "Error: Please enter a valid number!");

        let err = CalcError::MissingInput {
            field: Field::Operator,
        };
        assert_eq!(err.to_string(), "Error: Please enter a valid operation!");
    }

    #[test]
    fn user_facing_messages() {
        let err = CalcError::NotANumber { text: "abc".into() };
        assert_eq!(err.to_string(), "Error: Please enter valid numbers only!");

        let err = CalcError::Overflow {
            text: "9999999999".into(),
        };
        assert_eq!(err.to_string(), "Error: Number is too large or too small!");

        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Error: Cannot divide by zero!"
        );

        let err = CalcError::InvalidOperator { text: "%".into() };
        assert_eq!(
            err.to_string(),
            "Error: Invalid operation! Please use +, -, *, or /"
        );
    }

    #[test]
    fn unexpected_surfaces_message_verbatim() {
        let err = CalcError::from(io::Error::other("stream closed"));
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred: stream closed"
        );
    }

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let errors = [
            CalcError::Unexpected(io::Error::other("x")),
            CalcError::MissingInput {
                field: Field::Operator,
            },
            CalcError::NotANumber { text: String::new() },
            CalcError::Overflow { text: String::new() },
            CalcError::DivisionByZero,
            CalcError::InvalidOperator { text: String::new() },
        ];
        let codes: Vec<u8> = errors.iter().map(CalcError::exit_code).collect();
        assert_eq!(codes, [1, 2, 3, 4, 5, 6]);
    }
}
