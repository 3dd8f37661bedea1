//! Terminal console over stdin/stdout.

use std::io::{self, BufRead, BufReader, Write};

use quizmaster_core::traits::Console;

/// A `Console` that prompts on stdout and reads answers from stdin.
///
/// Unparseable integers are re-prompted rather than surfaced: the person at
/// the keyboard can always try again. End of input is an error — the process
/// has no way to continue a session without a participant.
pub struct StdConsole {
    reader: Box<dyn BufRead>,
}

impl StdConsole {
    /// Console over the process's stdin.
    pub fn new() -> Self {
        Self {
            reader: Box::new(BufReader::new(io::stdin())),
        }
    }

    /// Console over an arbitrary reader (useful for testing).
    pub fn with_reader(reader: Box<dyn BufRead>) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            anyhow::bail!("console input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt_text(&mut self, message: &str) -> anyhow::Result<String> {
        print!("{message} ");
        io::stdout().flush()?;
        self.read_line()
    }

    fn prompt_int(&mut self, message: &str) -> anyhow::Result<i64> {
        loop {
            let line = self.prompt_text(message)?;
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    println!("Please enter a whole number.");
                }
            }
        }
    }

    fn announce(&mut self, message: &str) {
        println!("{message}");
    }
}
