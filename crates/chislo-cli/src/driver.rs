//! Interactive session driver.
//!
//! Owns the round-level state machine: restore decision on entry, the
//! guess/evaluate loop per round, save-on-exit, stats report and the
//! replay decision. All game rules live in `chislo-core`; this module
//! only routes parsed input and renders outcomes.

use anyhow::Result;
use chislo_core::{
    Direction, GameSession, GuessInput, Hint, InvalidGuess, Outcome, format_stats, parse_guess,
};
use tracing::{info, warn};

use crate::confirm::parse_yes_no;
use crate::prompter::Prompt;
use crate::text;

/// How a round ended from the driver's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    /// Win or exhaustion; the session recorded a stat.
    Completed,
    /// The exit keyword (or end of input).
    ExitRequested,
}

pub struct Driver<P: Prompt> {
    session: GameSession,
    io: P,
}

impl<P: Prompt> Driver<P> {
    pub fn new(session: GameSession, io: P) -> Self {
        Self { session, io }
    }

    /// Run a full game session to completion.
    pub fn run(&mut self) -> Result<()> {
        self.io.say(text::WELCOME);
        self.start_session()?;

        loop {
            self.io.say(&text::instructions(self.session.config()));

            match self.play_round()? {
                RoundEnd::ExitRequested => {
                    if self.ask_yes_no(text::SAVE_PROMPT)? {
                        self.session.save()?;
                        self.io.say(text::SAVED);
                    }
                    break;
                }
                RoundEnd::Completed => {
                    self.show_stats();
                    if !self.ask_yes_no(text::REPLAY_PROMPT)? {
                        break;
                    }
                    self.session.generate_secret();
                }
            }
        }

        self.io.say(text::FAREWELL);
        Ok(())
    }

    /// Entry decision: offer to restore an existing save, otherwise
    /// (or on decline/failure) start a fresh round.
    fn start_session(&mut self) -> Result<()> {
        if self.session.config().save_path.exists()
            && self.ask_yes_no(text::RESTORE_PROMPT)?
        {
            match self.session.restore() {
                Ok(true) if self.session.has_secret() => {
                    info!("restored saved session");
                    self.io.say(text::RESTORE_OK);
                    return Ok(());
                }
                Ok(_) => {
                    self.io.say(text::RESTORE_FAILED);
                }
                Err(e) => {
                    warn!("restore failed: {e}");
                    self.io.say(text::RESTORE_FAILED);
                }
            }
        }

        self.session.generate_secret();
        Ok(())
    }

    /// One round: solicit guesses until win, exhaustion or exit.
    fn play_round(&mut self) -> Result<RoundEnd> {
        loop {
            let prompt = text::guess_prompt(self.session.attempts() + 1);
            let Some(line) = self.io.read_line(&prompt)? else {
                // End of input behaves like the exit keyword.
                return Ok(RoundEnd::ExitRequested);
            };

            match parse_guess(&line, self.session.config()) {
                GuessInput::Exit => return Ok(RoundEnd::ExitRequested),
                GuessInput::Hint => match self.session.hint()? {
                    Hint::NeedAttemptFirst => self.io.say(text::HINT_NEED_ATTEMPT),
                    Hint::Range { min, max } => self.io.say(&text::hint_range(min, max)),
                },
                GuessInput::Invalid(InvalidGuess::OutOfRange) => {
                    let message = text::out_of_range(self.session.config());
                    self.io.say(&message);
                }
                GuessInput::Invalid(InvalidGuess::NotANumber) => {
                    self.io.say(text::INVALID_NUMBER);
                }
                GuessInput::Guess(number) => match self.session.evaluate_guess(number)? {
                    Outcome::Continuing(direction) => self.say_direction(direction),
                    Outcome::Won { number, attempts } => {
                        self.io.say(&text::win(number, attempts));
                        return Ok(RoundEnd::Completed);
                    }
                    Outcome::LostOutOfAttempts { number, direction } => {
                        // Direction first, then the exhaustion report.
                        self.say_direction(direction);
                        self.io.say(&text::loss(number));
                        return Ok(RoundEnd::Completed);
                    }
                },
            }
        }
    }

    fn say_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Higher => self.io.say(text::SECRET_HIGHER),
            Direction::Lower => self.io.say(text::SECRET_LOWER),
        }
    }

    /// Print the stats log, or the empty-state message.
    fn show_stats(&mut self) {
        let rows = format_stats(self.session.stats());
        if rows.is_empty() {
            self.io.say(text::NO_STATS);
            return;
        }
        self.io.say(text::STATS_HEADER);
        for row in rows {
            self.io.say(&row);
        }
    }

    /// Re-prompt until an unambiguous yes/no answer. End of input
    /// counts as "no".
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let Some(line) = self.io.read_line(prompt)? else {
                return Ok(false);
            };
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => self.io.say(text::YES_NO_REPROMPT),
            }
        }
    }
}
