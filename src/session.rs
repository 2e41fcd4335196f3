use rand::Rng;
use tracing::{debug, info};

use crate::{Code, Error, Guess, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    AwaitingGuess,
    Won,
    Lost,
    /// The player gave up, or never had an attempt to begin with.
    Quit,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::AwaitingGuess
    }
}

/// A scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub score: Score,
}

/// Result of submitting a guess. `score` is `None` only when the player quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub score: Option<Score>,
    pub status: Status,
}

/// Supplies guesses to a [`Session`], and hears back how each one scored.
pub trait Guesser {
    fn guess(&mut self, history: &[Turn]) -> Result<Guess, Error>;

    fn feedback(&mut self, _turn: &Turn) {}
}

impl Guesser for fn(history: &[Turn]) -> Result<Guess, Error> {
    fn guess(&mut self, history: &[Turn]) -> Result<Guess, Error> {
        (*self)(history)
    }
}

/// One game against a hidden code.
#[derive(Debug)]
pub struct Session {
    secret: Code,
    attempt_limit: u32,
    attempts_used: u32,
    status: Status,
    history: Vec<Turn>,
}

impl Session {
    /// A limit of zero means the player walked away before the first guess,
    /// so the session starts out as [`Status::Quit`].
    pub fn new(secret: Code, attempt_limit: u32) -> Self {
        let status = if attempt_limit == 0 {
            Status::Quit
        } else {
            Status::AwaitingGuess
        };
        Self {
            secret,
            attempt_limit,
            attempts_used: 0,
            status,
            history: Vec::new(),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, attempt_limit: u32) -> Self {
        Self::new(Code::random(rng), attempt_limit)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn attempt_limit(&self) -> u32 {
        self.attempt_limit
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempt_limit.saturating_sub(self.attempts_used)
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Panics if the game is already over.
    pub fn submit(&mut self, guess: Guess) -> Feedback {
        assert!(
            !self.is_over(),
            "guess submitted to a finished game ({:?})",
            self.status
        );

        let guess = match guess {
            Guess::Quit => {
                self.status = Status::Quit;
                info!(attempts = self.attempts_used, "player quit");
                return Feedback {
                    score: None,
                    status: self.status,
                };
            }
            Guess::Code(code) => code,
        };

        self.attempts_used += 1;
        let score = Score::compute(&self.secret, &guess);
        self.history.push(Turn { guess, score });
        debug!(
            attempt = self.attempts_used,
            exact = score.exact,
            value = score.value,
            "scored guess"
        );

        if score.is_win() {
            self.status = Status::Won;
            info!(attempts = self.attempts_used, "code broken");
        } else if self.attempts_used >= self.attempt_limit {
            self.status = Status::Lost;
            info!(attempts = self.attempts_used, "out of attempts");
        }

        Feedback {
            score: Some(score),
            status: self.status,
        }
    }

    /// Asks `guesser` for guesses until the game ends.
    pub fn play<G: Guesser + ?Sized>(&mut self, guesser: &mut G) -> Result<Status, Error> {
        while !self.is_over() {
            let guess = guesser.guess(&self.history)?;
            if self.submit(guess).score.is_some() {
                if let Some(turn) = self.history.last() {
                    guesser.feedback(turn);
                }
            }
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Code, Guess, Score, Session, Status};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    mod submit {
        use super::*;

        #[test]
        fn limit_one_wrong_guess_loses() {
            let mut s = Session::new(code("1234"), 1);
            let fb = s.submit(Guess::Code(code("1243")));
            assert_eq!(fb.status, Status::Lost);
            assert_eq!(fb.score, Some(Score { exact: 2, value: 2 }));
            assert_eq!(s.attempts_used(), 1);
            assert_eq!(s.attempts_remaining(), 0);
        }

        #[test]
        fn quit_first_consumes_nothing() {
            let mut s = Session::new(code("1234"), 3);
            let fb = s.submit(Guess::Quit);
            assert_eq!(fb.status, Status::Quit);
            assert_eq!(fb.score, None);
            assert_eq!(s.attempts_used(), 0);
            assert!(s.history().is_empty());
        }

        #[test]
        fn win_on_last_attempt() {
            let mut s = Session::new(code("1234"), 2);
            assert_eq!(s.submit(Guess::Code(code("4321"))).status, Status::AwaitingGuess);
            let fb = s.submit(Guess::Code(code("1234")));
            assert_eq!(fb.status, Status::Won);
            assert_eq!(fb.score, Some(Score { exact: 4, value: 0 }));
        }

        #[test]
        fn win_with_attempts_to_spare() {
            let mut s = Session::new(code("5566"), 10);
            s.submit(Guess::Code(code("6655")));
            let fb = s.submit(Guess::Code(code("5566")));
            assert_eq!(fb.status, Status::Won);
            assert_eq!(s.attempts_used(), 2);
            assert_eq!(s.attempts_remaining(), 8);
        }

        #[test]
        fn keeps_history() {
            let mut s = Session::new(code("1111"), 5);
            s.submit(Guess::Code(code("1122")));
            s.submit(Guess::Code(code("2222")));
            let history = s.history();
            assert_eq!(history.len(), 2);
            assert_eq!(history[0].guess, code("1122"));
            assert_eq!(history[0].score, Score { exact: 2, value: 0 });
            assert_eq!(history[1].score, Score::default());
        }

        #[test]
        fn zero_limit_starts_quit() {
            let s = Session::new(code("1234"), 0);
            assert_eq!(s.status(), Status::Quit);
            assert!(s.is_over());
        }

        #[test]
        #[should_panic(expected = "finished game")]
        fn no_guesses_after_the_end() {
            let mut s = Session::new(code("1234"), 1);
            s.submit(Guess::Code(code("1234")));
            s.submit(Guess::Code(code("1234")));
        }
    }

    mod play {
        use super::*;
        use crate::{Error, Turn};

        #[test]
        fn genius() {
            let mut s = Session::new(code("3416"), 4);
            let mut g = guesser!(|_history| { Ok(Guess::Code("3416".parse()?)) });
            assert_eq!(s.play(&mut g).unwrap(), Status::Won);
            assert_eq!(s.attempts_used(), 1);
        }

        #[test]
        fn third_time_lucky() {
            let mut s = Session::new(code("3416"), 4);
            let mut g = guesser!(|history| {
                if history.len() == 2 {
                    return Ok(Guess::Code("3416".parse()?));
                }
                Ok(Guess::Code("1111".parse()?))
            });
            assert_eq!(s.play(&mut g).unwrap(), Status::Won);
            assert_eq!(s.attempts_used(), 3);
        }

        #[test]
        fn oops() {
            let mut s = Session::new(code("3416"), 6);
            let mut g = guesser!(|_history| { Ok(Guess::Code("2222".parse()?)) });
            assert_eq!(s.play(&mut g).unwrap(), Status::Lost);
            assert_eq!(s.attempts_used(), 6);
        }

        #[test]
        fn gives_up() {
            let mut s = Session::new(code("3416"), 6);
            let mut g = guesser!(|history| {
                if history.len() == 1 {
                    return Ok(Guess::Quit);
                }
                Ok(Guess::Code("2222".parse()?))
            });
            assert_eq!(s.play(&mut g).unwrap(), Status::Quit);
            assert_eq!(s.attempts_used(), 1);
        }

        #[test]
        fn zero_limit_never_asks() {
            let mut s = Session::new(code("3416"), 0);
            let mut g = guesser!(|_history| { panic!("asked for a guess") });
            assert_eq!(s.play(&mut g).unwrap(), Status::Quit);
        }

        #[test]
        fn guesser_error_stops_play() {
            let mut s = Session::new(code("3416"), 6);
            let mut g = guesser!(|_history| { Err(Error::InputClosed("guess")) });
            assert!(matches!(s.play(&mut g), Err(Error::InputClosed("guess"))));
            assert_eq!(s.status(), Status::AwaitingGuess);
        }

        #[test]
        fn fn_pointer_guesser() {
            fn always(_: &[Turn]) -> Result<Guess, Error> {
                Ok(Guess::Code("6666".parse()?))
            }
            let mut s = Session::new(code("6666"), 1);
            let mut g = always as fn(&[Turn]) -> Result<Guess, Error>;
            assert_eq!(s.play(&mut g).unwrap(), Status::Won);
        }

        #[test]
        fn feedback_sees_every_scored_turn() {
            struct Recorder(Vec<Turn>);
            impl crate::Guesser for Recorder {
                fn guess(&mut self, history: &[Turn]) -> Result<Guess, Error> {
                    Ok(match history.len() {
                        0 => Guess::Code("1243".parse()?),
                        1 => Guess::Code("1134".parse()?),
                        _ => Guess::Quit,
                    })
                }

                fn feedback(&mut self, turn: &Turn) {
                    self.0.push(*turn);
                }
            }

            let mut s = Session::new(code("1234"), 10);
            let mut r = Recorder(Vec::new());
            assert_eq!(s.play(&mut r).unwrap(), Status::Quit);
            assert_eq!(r.0, s.history());
            assert_eq!(r.0[0].score, Score { exact: 2, value: 2 });
            assert_eq!(r.0[1].score, Score { exact: 3, value: 0 });
        }
    }
}
