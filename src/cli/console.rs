//! Line-oriented console used by the interactive menus
//!
//! Wraps any `BufRead` + `Write` pair so the menus can be driven by stdin
//! and stdout in the binary and by in-memory buffers in tests.

use crate::types::BankError;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Prompting console over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text without a trailing newline and flush
    pub fn write(&mut self, text: &str) -> Result<(), BankError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a line of text
    pub fn line(&mut self, text: &str) -> Result<(), BankError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line, trimmed
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` once the input is exhausted
    pub fn read_line(&mut self) -> Result<String, BankError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BankError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Show a prompt and read the answer
    pub fn prompt(&mut self, text: &str) -> Result<String, BankError> {
        self.write(text)?;
        self.read_line()
    }

    /// Show a prompt and parse the answer
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming `expected` if the answer does not parse
    pub fn prompt_parse<T: FromStr>(&mut self, text: &str, expected: &str) -> Result<T, BankError> {
        let answer = self.prompt(text)?;
        answer
            .parse()
            .map_err(|_| BankError::invalid_input(&answer, expected))
    }

    /// Read a number, repeating `retry` until the answer parses
    pub fn read_number(&mut self, prompt: &str, retry: &str) -> Result<u32, BankError> {
        let mut answer = self.prompt(prompt)?;
        loop {
            if let Ok(number) = answer.parse() {
                return Ok(number);
            }
            answer = self.prompt(retry)?;
        }
    }

    /// Read a number within `range`, repeating `retry` until one is given
    pub fn read_choice(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
        retry: &str,
    ) -> Result<u32, BankError> {
        let mut choice = self.read_number(prompt, retry)?;
        while !range.contains(&choice) {
            choice = self.read_number(retry, retry)?;
        }
        Ok(choice)
    }

    /// Direct access to the output stream
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console and return the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
