mod console;
mod validate;

pub use console::Console;
pub use validate::{parse_attempts, parse_guess, Rejection, QUIT};
