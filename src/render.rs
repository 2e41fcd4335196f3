use itertools::Itertools;

use crate::{Score, Status};

pub const INSTRUCTIONS: &str = "
Welcome to Mastermind!
The secret code will consist of four integers whose values range from 1 to 6.
Here's an example of an allowed guess: 1234
Plus signs indicate a correct number in the correct spot.
Negative signs indicate a correct number in the incorrect spot.

Each position in the secret code can only be matched once. For example, a
guess of 1134 against a secret code of 1234 would get three plus signs: one
for each of the exact matches in the first, third and fourth positions. The
number match in the second position would be ignored.
";

/// `[ + + - ]`: exact matches first, then value matches.
pub fn hints(score: &Score) -> String {
    let markers = std::iter::repeat_n('+', score.exact)
        .chain(std::iter::repeat_n('-', score.value))
        .join(" ");
    if markers.is_empty() {
        "[ ]".to_string()
    } else {
        format!("[ {markers} ]")
    }
}

pub fn outcome(status: Status) -> &'static str {
    match status {
        Status::Won => "You solved it!",
        Status::Lost => "You lose :(",
        Status::Quit => "You quit. You lose :(",
        Status::AwaitingGuess => "The game is still on.",
    }
}
