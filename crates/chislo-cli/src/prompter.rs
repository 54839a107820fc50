//! Console line I/O for the interactive driver.

use std::io::{self, BufRead, Write};

/// Line-based prompt/response device the driver talks to.
///
/// Abstracting this behind a trait keeps the driver testable with
/// scripted input instead of a live terminal.
pub trait Prompt {
    /// Print a prompt (no trailing newline) and read one line.
    ///
    /// Returns `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print a message followed by a newline.
    fn say(&mut self, message: &str);
}

/// Stdin/stdout prompter used by the real game.
pub struct ConsolePrompter;

impl Prompt for ConsolePrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}
