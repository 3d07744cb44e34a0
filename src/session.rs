//! Сеанс калькулятора: приглашения, разбор ввода, вычисление и отчёт.
//!
//! Сеанс линейный: первый операнд, второй операнд, операция, результат.
//! Любая ошибка выводится одной строкой и завершает сеанс без повторного
//! запроса ввода.

use std::fmt::{self, Display};
use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::operand::parse_operand;
use crate::operator::{Operator, Value};
use crate::{CalcError, Field};

const BANNER: &str = "=== Simple Calculator ===";
const FIRST_PROMPT: &str = "Enter the first number: ";
const SECOND_PROMPT: &str = "Enter the second number: ";
const OPERATOR_PROMPT: &str = "Enter your choice (+, -, *, /): ";
const PAUSE_PROMPT: &str = "Press any key to exit...";

/// Успешно выполненное вычисление.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    /// Первый операнд.
    pub left: i32,
    /// Операция.
    pub operator: Operator,
    /// Второй операнд.
    pub right: i32,
    /// Результат.
    pub value: Value,
}

impl Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.value
        )
    }
}

/// Один сеанс калькулятора поверх произвольных потоков ввода и вывода.
pub struct Session<R, W> {
    input: R,
    output: W,
    pause: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Создаёт сеанс.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pause: false,
        }
    }

    /// Ждать строку ввода перед завершением сеанса.
    #[must_use]
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Выполняет сеанс целиком и выводит результат или ошибку.
    ///
    /// Это единственное место, где ошибки показываются пользователю:
    /// к моменту возврата `Err` сообщение уже напечатано.
    ///
    /// # Ошибки
    ///
    /// Возвращает первую возникшую [`CalcError`].
    pub fn run(&mut self) -> Result<Calculation, CalcError> {
        let outcome = self
            .write_banner()
            .and_then(|()| self.calculate())
            .and_then(|calc| self.write_result(&calc).map(|()| calc));

        if let Err(err) = &outcome {
            info!(code = err.exit_code(), "session failed: {err:?}");
            if let Err(report_err) = self.write_error(err) {
                error!("could not report error: {report_err}");
            }
        }

        if self.pause {
            if let Err(pause_err) = self.wait_for_exit() {
                error!("pause prompt failed: {pause_err}");
            }
        }

        outcome
    }

    /// Запрашивает операнды и операцию и вычисляет результат.
    ///
    /// Печатает приглашения, но не результат и не ошибки.
    ///
    /// # Ошибки
    ///
    /// - [`CalcError::MissingInput`], [`CalcError::NotANumber`],
    ///   [`CalcError::Overflow`] при разборе ввода.
    /// - [`CalcError::InvalidOperator`] для неизвестной операции.
    /// - [`CalcError::DivisionByZero`] при делении на ноль.
    /// - [`CalcError::Unexpected`] при сбое ввода-вывода.
    pub fn calculate(&mut self) -> Result<Calculation, CalcError> {
        let left = self.read_operand(Field::FirstOperand, FIRST_PROMPT)?;
        let right = self.read_operand(Field::SecondOperand, SECOND_PROMPT)?;

        self.write_menu()?;
        let text = self.read_field(Field::Operator, OPERATOR_PROMPT)?;
        let operator: Operator = text.parse()?;
        debug!(%operator, "operator selected");

        let value = operator.apply(left, right)?;
        let calc = Calculation {
            left,
            operator,
            right,
            value,
        };
        debug!(%calc, "calculation complete");
        Ok(calc)
    }

    /// Возвращает поток вывода.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_operand(&mut self, field: Field, prompt: &str) -> Result<i32, CalcError> {
        let text = self.read_field(field, prompt)?;
        let operand = parse_operand(field, &text)?;
        debug!(%field, operand, "operand parsed");
        Ok(operand)
    }

    /// Печатает приглашение и читает одну строку без символов конца строки.
    ///
    /// Конец ввода считается пустой строкой.
    fn read_field(&mut self, field: Field, prompt: &str) -> Result<String, CalcError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let line = self.read_line()?;
        let text = trim_line_ending(&line);

        if text.trim().is_empty() {
            return Err(CalcError::MissingInput { field });
        }
        Ok(text.to_owned())
    }

    /// Читает строку; байты не из UTF-8 заменяются на `U+FFFD`.
    fn read_line(&mut self) -> Result<String, CalcError> {
        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_banner(&mut self) -> Result<(), CalcError> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<(), CalcError> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose an operation:")?;
        for op in Operator::ALL {
            writeln!(self.output, "{} for {}", op.symbol(), op.name())?;
        }
        Ok(())
    }

    fn write_result(&mut self, calc: &Calculation) -> Result<(), CalcError> {
        writeln!(self.output)?;
        writeln!(self.output, "Result: {calc}")?;
        if let Some(n) = calc.value.as_integer() {
            writeln!(self.output, "Result as integer: {n}")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn write_error(&mut self, err: &CalcError) -> Result<(), CalcError> {
        // Пустая строка ввода сообщается сразу после приглашения.
        if !matches!(err, CalcError::MissingInput { .. }) {
            writeln!(self.output)?;
        }
        writeln!(self.output, "{err}")?;
        self.output.flush()?;
        Ok(())
    }

    fn wait_for_exit(&mut self) -> Result<(), CalcError> {
        writeln!(self.output)?;
        writeln!(self.output, "{PAUSE_PROMPT}")?;
        self.output.flush()?;

        self.read_line()?;
        Ok(())
    }
}

fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}
