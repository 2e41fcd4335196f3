use thiserror::Error;

use crate::{CODE_LENGTH, SYMBOLS};

#[derive(Error, Debug)]
pub enum Error {
    #[error("a code must be exactly {expected} symbols long, got {found}")]
    InvalidGuessLength { expected: usize, found: usize },
    #[error("symbol {symbol:?} at position {position} is not in 1-{max}", max = SYMBOLS)]
    InvalidGuessSymbol { symbol: char, position: usize },
    #[error("input ended before a valid {0} was entered")]
    InputClosed(&'static str),
    #[error("console I/O failed")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn length(found: usize) -> Self {
        Error::InvalidGuessLength {
            expected: CODE_LENGTH,
            found,
        }
    }
}
