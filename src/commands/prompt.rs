use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use super::Console;
use crate::util::Report;

impl<R: BufRead, W: Write, L: Report> Console<R, W, L> {
    /// Prints `prompt` and reads one line without its terminator.
    /// `None` once input is exhausted.
    pub(crate) fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Re-prompts until the line parses and `accept` holds for the value.
    fn read_parsed<T, F>(&mut self, prompt: &str, hint: &str, accept: F) -> io::Result<Option<T>>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };

            match line.trim().parse() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => self.log.error(hint),
            }
        }
    }

    pub(crate) fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.read_parsed(prompt, "Invalid input. Please enter a number.", |_| true)
    }

    /// `nan` and `inf` parse as `f64` but are not grades.
    pub(crate) fn read_float(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.read_parsed(
            prompt,
            "Invalid input. Please enter a number (e.g., 85.5).",
            |value: &f64| value.is_finite(),
        )
    }

    /// Whitespace-only lines count as non-empty.
    pub(crate) fn read_nonempty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            match self.read_line(prompt)? {
                Some(line) if line.is_empty() => self.log.error("Input cannot be empty."),
                other => return Ok(other),
            }
        }
    }
}
