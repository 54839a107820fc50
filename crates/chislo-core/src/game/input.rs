//! Guess token parsing.
//!
//! Parsing is a pure function over the raw input token; the re-prompt loop
//! belongs to the driver. This keeps validation testable without any I/O.

use crate::config::GameConfig;

/// Keyword that requests leaving the game.
pub const EXIT_KEYWORD: &str = "выход";
/// Keyword that requests a hint.
pub const HINT_KEYWORD: &str = "подсказка";

/// Result of parsing one raw input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    /// A well-formed guess inside the configured range.
    Guess(i64),
    /// The exit keyword.
    Exit,
    /// The hint keyword. Does not consume an attempt.
    Hint,
    /// Anything else; the driver should report and re-prompt.
    Invalid(InvalidGuess),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGuess {
    NotANumber,
    OutOfRange,
}

/// Parse a raw input token into a [`GuessInput`].
///
/// Tokens are trimmed and lowercased before matching, so `" ВЫХОД "`
/// is accepted as the exit keyword.
pub fn parse_guess(raw: &str, config: &GameConfig) -> GuessInput {
    let token = raw.trim().to_lowercase();

    if token == EXIT_KEYWORD {
        return GuessInput::Exit;
    }
    if token == HINT_KEYWORD {
        return GuessInput::Hint;
    }

    match token.parse::<i64>() {
        Ok(number) if config.contains(number) => GuessInput::Guess(number),
        Ok(_) => GuessInput::Invalid(InvalidGuess::OutOfRange),
        Err(_) => GuessInput::Invalid(InvalidGuess::NotANumber),
    }
}
