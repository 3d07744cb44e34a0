//! Параметры командной строки.
//!
//! Без аргументов калькулятор ведёт себя как исходная программа: один
//! сеанс и код завершения 0 на любом пути.

use clap::Parser;

/// Параметры запуска калькулятора.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "simple-calculator")]
#[command(about = "Interactive calculator for two integers and one operator")]
pub struct Config {
    /// Exit with a non-zero status that identifies the error kind.
    #[arg(long)]
    pub strict_exit: bool,

    /// Wait for a line of input before exiting.
    #[arg(long)]
    pub pause: bool,

    /// Print debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Код завершения для исхода сеанса.
    ///
    /// Без `--strict-exit` всегда 0: обработанная ошибка не считается сбоем
    /// процесса.
    #[must_use]
    pub fn exit_code<T>(&self, outcome: &Result<T, crate::CalcError>) -> u8 {
        match outcome {
            Err(err) if self.strict_exit => err.exit_code(),
            _ => 0,
        }
    }
}
