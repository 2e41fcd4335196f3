use std::io::{BufRead, Write};

use tracing::debug;

use super::validate::{parse_attempts, parse_guess, Rejection};
use crate::{render, Error, Guess, Guesser, Turn};

const ATTEMPTS_PROMPT: &str = "Please enter the number of chances you would like to allow for this game: ";
const GUESS_PROMPT: &str = "Enter your guess (or type \"quit\"): ";

/// Line-oriented player. Asks again until the answer is valid.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn say(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn ask_attempts(&mut self) -> Result<u32, Error> {
        self.ask(ATTEMPTS_PROMPT, "attempt limit", parse_attempts)
    }

    pub fn ask_guess(&mut self) -> Result<Guess, Error> {
        self.ask(GUESS_PROMPT, "guess", parse_guess)
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        what: &'static str,
        parse: impl Fn(&str) -> Result<T, Rejection>,
    ) -> Result<T, Error> {
        loop {
            writeln!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(Error::InputClosed(what));
            }

            match parse(&self.line) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!(?rejection, "rejected {what}");
                    writeln!(self.output, "{rejection}")?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Guesser for Console<R, W> {
    fn guess(&mut self, _history: &[Turn]) -> Result<Guess, Error> {
        self.ask_guess()
    }

    fn feedback(&mut self, turn: &Turn) {
        if let Err(e) = writeln!(self.output, "{}", render::hints(&turn.score)) {
            debug!(error = %e, "failed to print hints");
        }
    }
}
