//! Prompt Module
//!
//! The input source the directory talks to.
//!
//! The directory never touches stdin/stdout itself. It asks a `Prompter`
//! for one line per question and hands it messages to show when an answer
//! is rejected, which lets tests drive registration and login from a
//! scripted buffer.

mod line;

pub use line::LinePrompter;

use crate::error::Result;

/// Source of answers for interactive flows
pub trait Prompter {
    /// Show `prompt` and block until one line of input is available
    ///
    /// The returned string has no line terminator. Running out of input
    /// is `DirectoryError::InputClosed`.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show a message to the user (rejections, confirmations)
    fn notify(&mut self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        (**self).ask(prompt)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}
