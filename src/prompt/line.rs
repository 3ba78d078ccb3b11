//! Line Prompter
//!
//! `Prompter` over any buffered reader and writer.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::error::{DirectoryError, Result};

use super::Prompter;

/// Reads answers line by line from `reader`, writes prompts to `writer`
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Create a prompter over the given reader and writer
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter, returning the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Borrow the writer (tests inspect captured output through this)
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process console
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(DirectoryError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    fn notify(&mut self, message: &str) {
        // A broken console surfaces on the next ask
        let _ = writeln!(self.writer, "{}", message);
    }
}
