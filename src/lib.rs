use std::{fmt, str::FromStr};

use itertools::Itertools;
use rand::Rng;

#[cfg(test)]
macro_rules! guesser {
    (|$history:ident| $impl:block) => {{
        struct G;
        impl $crate::Guesser for G {
            fn guess(
                &mut self,
                $history: &[$crate::Turn],
            ) -> Result<$crate::Guess, $crate::Error> {
                $impl
            }
        }
        G
    }};
}

mod error;
pub mod input;
pub mod render;
mod session;

pub use error::Error;
pub use session::{Feedback, Guesser, Session, Status, Turn};

/// Number of symbols in a code.
pub const CODE_LENGTH: usize = 4;
/// Symbols run from 1 up to and including this value.
pub const SYMBOLS: u8 = 6;
/// Largest attempt limit a player may ask for.
pub const MAX_ATTEMPTS: u32 = i32::MAX as u32;

/// A well-formed sequence of [`CODE_LENGTH`] symbols, each in `1..=SYMBOLS`.
///
/// Used both for the secret and for the player's guesses. The only ways to
/// build one validate their input, so anything holding a `Code` can score it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Code(std::array::from_fn(|_| rng.random_range(1..=SYMBOLS)))
    }

    pub fn symbols(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Every possible code, in lexicographic order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CODE_LENGTH)
            .map(|_| 1..=SYMBOLS)
            .multi_cartesian_product()
            .map(|symbols| {
                let mut code = [0; CODE_LENGTH];
                code.copy_from_slice(&symbols);
                Code(code)
            })
    }
}

impl TryFrom<[u8; CODE_LENGTH]> for Code {
    type Error = Error;

    fn try_from(symbols: [u8; CODE_LENGTH]) -> Result<Self, Self::Error> {
        for (i, &s) in symbols.iter().enumerate() {
            if !(1..=SYMBOLS).contains(&s) {
                return Err(Error::InvalidGuessSymbol {
                    symbol: char::from_digit(u32::from(s), 10).unwrap_or('?'),
                    position: i + 1,
                });
            }
        }
        Ok(Code(symbols))
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != CODE_LENGTH {
            return Err(Error::length(found));
        }

        let mut code = [0; CODE_LENGTH];
        for (i, c) in s.chars().enumerate() {
            match c.to_digit(10) {
                Some(d) if (1..=u32::from(SYMBOLS)).contains(&d) => code[i] = d as u8,
                _ => {
                    return Err(Error::InvalidGuessSymbol {
                        symbol: c,
                        position: i + 1,
                    })
                }
            }
        }
        Ok(Code(code))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}

/// What the player submits on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Code(Code),
    /// Give up. Ends the game as a loss without scoring anything.
    Quit,
}

/// Feedback for one guess: `exact` symbols in the right place, `value`
/// symbols present elsewhere in the code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub exact: usize,
    pub value: usize,
}

impl Score {
    /// Scores `guess` against `code`. A code slot counts towards at most one
    /// match, exact matches claim their slots first.
    pub fn compute(code: &Code, guess: &Code) -> Self {
        let mut score = Score::default();

        let mut used = [false; CODE_LENGTH];
        for (i, (c, g)) in code.0.iter().zip(&guess.0).enumerate() {
            if c == g {
                score.exact += 1;
                used[i] = true;
            }
        }

        for (i, g) in guess.0.iter().enumerate() {
            if code.0[i] == *g {
                continue;
            }
            if code.0.iter().enumerate().any(|(j, c)| {
                if c == g && !used[j] {
                    used[j] = true;
                    return true;
                }
                false
            }) {
                score.value += 1;
            }
        }

        score
    }

    pub fn is_win(&self) -> bool {
        self.exact == CODE_LENGTH
    }
}
