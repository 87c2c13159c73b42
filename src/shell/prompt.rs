//! Interactive prompting
//!
//! Wraps a reader/writer pair so prompt logic is testable over in-memory
//! buffers. Retry loops for numeric choices live here; `NotANumber` never
//! escapes the prompt boundary.

use std::io::{self, BufRead, Write};

use crate::menu::parse_choice;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line of output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Prints the invite and reads one trimmed line of input.
    ///
    /// Fails with `UnexpectedEof` when the input stream is exhausted.
    pub fn ask(&mut self, invite: &str) -> io::Result<String> {
        write!(self.output, "{}", invite)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Reads an integer choice, re-prompting until one parses.
    pub fn ask_choice(&mut self) -> io::Result<i32> {
        loop {
            let raw = self.ask(">> ")?;
            match parse_choice(&raw) {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say("Enter a number")?,
            }
        }
    }
}
