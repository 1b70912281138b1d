use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::model::service::ServiceType;

const INVALID_INPUT: &str = "Invalid input, please try again: ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended before a valid value was entered")]
    EndOfInput,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Console reader that re-prompts until it gets an acceptable value.
///
/// Text left on a line after an accepted number is kept for the next read,
/// so `1 150` answers both prompts at once. A rejected read discards the
/// rest of its line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Prompter<R, W> {
        Prompter {
            input,
            output,
            pending: String::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn read_service_type(&mut self) -> Result<ServiceType, InputError> {
        writeln!(
            self.output,
            "\nWould you like to calculate your mobile or land line bill?"
        )?;
        write!(
            self.output,
            "\nEnter 1 for mobile bill or 0 for landline bill: "
        )?;
        self.output.flush()?;

        self.read_valid(ServiceType::from_selection)
    }

    pub fn read_minutes(&mut self) -> Result<u32, InputError> {
        writeln!(self.output, "\nPlease enter your total minutes used: ")?;
        self.output.flush()?;

        self.read_valid(|value| u32::try_from(value).ok())
    }

    fn read_valid<T>(&mut self, accept: impl Fn(i64) -> Option<T>) -> Result<T, InputError> {
        loop {
            self.fill_pending()?;

            let parsed = parse_leading_integer(&self.pending);
            if let Some((value, consumed)) = parsed {
                if let Some(accepted) = accept(value) {
                    self.pending.drain(..consumed);
                    return Ok(accepted);
                }
            }

            debug!("Rejected input {:?}", self.pending.trim_end());
            self.pending.clear();
            writeln!(self.output, "{}", INVALID_INPUT)?;
            self.output.flush()?;
        }
    }

    /// Drops leading whitespace from the unread text, pulling in new lines
    /// until some non-blank text is available.
    fn fill_pending(&mut self) -> Result<(), InputError> {
        loop {
            let start = self.pending.len() - self.pending.trim_start().len();
            self.pending.drain(..start);
            if !self.pending.is_empty() {
                return Ok(());
            }

            if self.input.read_line(&mut self.pending)? == 0 {
                return Err(InputError::EndOfInput);
            }
        }
    }
}

/// Reads an optionally signed integer from the start of `text` and returns
/// it with the number of bytes it used, so `50.9` reads as 50 and leaves
/// `.9` unread.
fn parse_leading_integer(text: &str) -> Option<(i64, usize)> {
    let sign = if text.starts_with(['+', '-']) { 1 } else { 0 };
    let digits = text[sign..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let consumed = sign + digits;
    let value = text[..consumed].parse().ok()?;
    Some((value, consumed))
}
