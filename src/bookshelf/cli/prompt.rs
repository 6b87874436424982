use super::print::print_messages;
use bookshelf::api::CmdMessage;
use bookshelf::error::{LibraryError, Result};
use std::io::{BufRead, Write};

/// Line-based prompting over any reader/writer pair.
pub(crate) struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    /// Prints `label` and returns the next line, trimmed. Bytes that are not
    /// UTF-8 become U+FFFD. End of input is [`LibraryError::InputClosed`].
    pub(crate) fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(LibraryError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Asks until `parse` accepts the answer. `InvalidInput` errors are shown
    /// and retried; anything else is returned.
    pub(crate) fn ask_until<T, F>(&mut self, label: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(LibraryError::InvalidInput(msg)) => {
                    print_messages(&mut self.output, &[CmdMessage::error(msg)])?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
