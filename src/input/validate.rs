//! Turns raw console lines into values the game can use.
//!
//! Everything here is recoverable: a [`Rejection`] is shown to the player,
//! who is then asked again.

use thiserror::Error;

use crate::{Code, Error, Guess, MAX_ATTEMPTS};

/// Typed at the guess prompt to give up.
pub const QUIT: &str = "quit";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Remember to make a guess!")]
    BlankGuess,
    #[error("Remember to guess exactly four numbers!")]
    GuessLength,
    #[error("Remember to only guess numbers whose values range 1-6!")]
    GuessSymbol,
    #[error("You may not leave this field blank!")]
    BlankAttempts,
    #[error("You should always give yourself a chance!")]
    ZeroAttempts,
    #[error("You really don't need the beginning zero(es)!")]
    LeadingZero,
    #[error("Remember to only enter positive numbers for this field!")]
    NotANumber,
    #[error("You may not have that many chances!")]
    TooManyAttempts,
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

pub fn parse_guess(line: &str) -> Result<Guess, Rejection> {
    let line = strip_line_ending(line);
    if line == QUIT {
        return Ok(Guess::Quit);
    }
    if line.is_empty() {
        return Err(Rejection::BlankGuess);
    }

    match line.parse::<Code>() {
        Ok(code) => Ok(Guess::Code(code)),
        Err(Error::InvalidGuessLength { .. }) => Err(Rejection::GuessLength),
        Err(_) => Err(Rejection::GuessSymbol),
    }
}

pub fn parse_attempts(line: &str) -> Result<u32, Rejection> {
    let line = strip_line_ending(line);
    if line.is_empty() {
        return Err(Rejection::BlankAttempts);
    }
    if line == "0" {
        return Err(Rejection::ZeroAttempts);
    }
    if line.starts_with('0') {
        return Err(Rejection::LeadingZero);
    }
    if !line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::NotANumber);
    }

    // Anything past ten digits is over the limit.
    if line.len() > 10 {
        return Err(Rejection::TooManyAttempts);
    }
    match line.parse::<u64>() {
        Ok(n) if n <= u64::from(MAX_ATTEMPTS) => Ok(n as u32),
        _ => Err(Rejection::TooManyAttempts),
    }
}
