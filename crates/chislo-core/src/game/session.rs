use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::stats::StatRecord;
use crate::storage::{self, SaveData};

/// Result of evaluating one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Wrong guess, attempts remain. Carries the direction of the secret
    /// relative to the guess.
    Continuing(Direction),
    /// The guess matched the secret.
    Won { number: i64, attempts: u32 },
    /// Wrong guess on the last allowed attempt. Still carries the
    /// direction so the final guess gets its feedback before the loss
    /// report.
    LostOutOfAttempts { number: i64, direction: Direction },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The secret is larger than the guess.
    Higher,
    /// The secret is smaller than the guess.
    Lower,
}

/// Hint derivation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Hints are only available after at least one attempt.
    NeedAttemptFirst,
    /// A sub-interval of the configured range containing the secret.
    Range { min: i64, max: i64 },
}

/// One game session: secret number, attempt counter and accumulated stats.
///
/// The session owns all game state exclusively. Console interaction lives
/// in the driver, which feeds parsed guesses in and renders the outcomes.
pub struct GameSession {
    config: GameConfig,
    secret: Option<i64>,
    attempts: u32,
    stats: Vec<StatRecord>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            secret: None,
            attempts: 0,
            stats: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    pub fn stats(&self) -> &[StatRecord] {
        &self.stats
    }

    /// Draw a new secret uniformly from the configured range and start
    /// a fresh round.
    pub fn generate_secret(&mut self) {
        let number = rand::rng().random_range(self.config.min_range..=self.config.max_range);
        debug!(number, "generated secret");
        self.secret = Some(number);
        self.attempts = 0;
    }

    /// Fix the secret explicitly and start a fresh round.
    pub fn set_secret(&mut self, number: i64) {
        self.secret = Some(number);
        self.attempts = 0;
    }

    /// Evaluate one guess against the secret.
    ///
    /// Consumes exactly one attempt. A correct guess wins even when it is
    /// the last allowed attempt; the exhaustion check only applies to
    /// wrong guesses. Terminal outcomes append a stat record.
    pub fn evaluate_guess(&mut self, guess: i64) -> Result<Outcome> {
        let secret = self.secret.ok_or(Error::NoSecretNumber)?;
        self.attempts += 1;

        if guess == secret {
            self.record_round(secret, true);
            return Ok(Outcome::Won {
                number: secret,
                attempts: self.attempts,
            });
        }

        let direction = if guess < secret {
            Direction::Higher
        } else {
            Direction::Lower
        };

        if self.attempts >= self.config.max_attempts {
            self.record_round(secret, false);
            return Ok(Outcome::LostOutOfAttempts {
                number: secret,
                direction,
            });
        }

        Ok(Outcome::Continuing(direction))
    }

    /// Derive a hint interval around the secret.
    ///
    /// The half-width is `max(10, span / 10)` and the interval is clamped
    /// to the configured range, so it always contains the secret and never
    /// leaks it exactly. Requires at least one attempt; never consumes one.
    pub fn hint(&self) -> Result<Hint> {
        let secret = self.secret.ok_or(Error::NoSecretNumber)?;
        if self.attempts == 0 {
            return Ok(Hint::NeedAttemptFirst);
        }

        let radius = ((self.config.max_range - self.config.min_range) / 10).max(10);
        Ok(Hint::Range {
            min: (secret - radius).max(self.config.min_range),
            max: (secret + radius).min(self.config.max_range),
        })
    }

    fn record_round(&mut self, number: i64, success: bool) {
        self.stats
            .push(StatRecord::now(&self.config, number, self.attempts, success));
    }

    /// Persist the current state to the configured save path,
    /// overwriting any existing save.
    pub fn save(&self) -> Result<()> {
        let data = SaveData {
            secret_number: self.secret,
            attempts: self.attempts,
            stats: self.stats.clone(),
        };
        storage::save_game(&self.config.save_path, &data)
    }

    /// Restore state from the configured save path.
    ///
    /// Returns `Ok(false)` when no save file exists. A file that exists
    /// but does not parse surfaces as [`Error::CorruptSave`]; the caller
    /// decides whether to start fresh.
    pub fn restore(&mut self) -> Result<bool> {
        match storage::load_game(&self.config.save_path)? {
            Some(data) => {
                self.secret = data.secret_number;
                self.attempts = data.attempts;
                self.stats = data.stats;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_secret(secret: i64) -> GameSession {
        let mut session = GameSession::new(GameConfig::default());
        session.set_secret(secret);
        session
    }

    #[test]
    fn test_generate_secret_in_range() {
        let mut session = GameSession::new(GameConfig::default());
        for _ in 0..100 {
            session.generate_secret();
            session.evaluate_guess(1).unwrap();
            let Hint::Range { min, max } = session.hint().unwrap() else {
                panic!("expected a range hint after one attempt");
            };
            assert!(min >= 1 && max <= 100);
        }
    }

    #[test]
    fn test_generate_resets_attempts() {
        let mut session = session_with_secret(50);
        session.evaluate_guess(10).unwrap();
        session.evaluate_guess(20).unwrap();
        assert_eq!(session.attempts(), 2);
        session.generate_secret();
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn test_evaluate_without_secret_fails() {
        let mut session = GameSession::new(GameConfig::default());
        assert!(matches!(
            session.evaluate_guess(50),
            Err(Error::NoSecretNumber)
        ));
    }

    #[test]
    fn test_win_iff_equal() {
        let mut session = session_with_secret(50);
        assert_eq!(
            session.evaluate_guess(49).unwrap(),
            Outcome::Continuing(Direction::Higher)
        );
        assert_eq!(
            session.evaluate_guess(51).unwrap(),
            Outcome::Continuing(Direction::Lower)
        );
        assert_eq!(
            session.evaluate_guess(50).unwrap(),
            Outcome::Won {
                number: 50,
                attempts: 3
            }
        );
    }

    #[test]
    fn test_attempts_increment_once_per_evaluation() {
        let mut session = session_with_secret(50);
        for expected in 1..=5 {
            session.evaluate_guess(1).unwrap();
            assert_eq!(session.attempts(), expected);
        }
    }

    #[test]
    fn test_hint_never_consumes_attempt() {
        let mut session = session_with_secret(50);
        session.evaluate_guess(1).unwrap();
        for _ in 0..10 {
            session.hint().unwrap();
        }
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn test_loss_exactly_on_last_attempt() {
        // 9 wrong guesses keep the round going, the 10th loses.
        let mut session = session_with_secret(3);
        for _ in 0..9 {
            assert!(matches!(
                session.evaluate_guess(99).unwrap(),
                Outcome::Continuing(_)
            ));
        }
        assert_eq!(
            session.evaluate_guess(99).unwrap(),
            Outcome::LostOutOfAttempts {
                number: 3,
                direction: Direction::Lower
            }
        );
    }

    #[test]
    fn test_final_losing_guess_keeps_direction() {
        let mut session = session_with_secret(50);
        for _ in 0..9 {
            session.evaluate_guess(25).unwrap();
        }
        // The 10th wrong guess still reports which way the secret lies.
        assert_eq!(
            session.evaluate_guess(75).unwrap(),
            Outcome::LostOutOfAttempts {
                number: 50,
                direction: Direction::Lower
            }
        );
    }

    #[test]
    fn test_correct_final_guess_wins_not_loses() {
        let mut session = session_with_secret(3);
        for _ in 0..9 {
            session.evaluate_guess(99).unwrap();
        }
        assert_eq!(
            session.evaluate_guess(3).unwrap(),
            Outcome::Won {
                number: 3,
                attempts: 10
            }
        );
    }

    #[test]
    fn test_directional_feedback_scenario() {
        let mut session = session_with_secret(50);
        let guesses = [25, 75, 60, 55, 52, 51];
        let expected = [
            Direction::Higher,
            Direction::Lower,
            Direction::Lower,
            Direction::Lower,
            Direction::Lower,
            Direction::Lower,
        ];
        for (guess, direction) in guesses.into_iter().zip(expected) {
            assert_eq!(
                session.evaluate_guess(guess).unwrap(),
                Outcome::Continuing(direction)
            );
        }
        assert_eq!(
            session.evaluate_guess(50).unwrap(),
            Outcome::Won {
                number: 50,
                attempts: 7
            }
        );
    }

    #[test]
    fn test_terminal_outcomes_append_stats() {
        let mut session = session_with_secret(50);
        session.evaluate_guess(50).unwrap();
        assert_eq!(session.stats().len(), 1);
        assert!(session.stats()[0].success);
        assert_eq!(session.stats()[0].attempts, 1);

        session.set_secret(3);
        for _ in 0..10 {
            session.evaluate_guess(99).unwrap();
        }
        assert_eq!(session.stats().len(), 2);
        assert!(!session.stats()[1].success);
        assert_eq!(session.stats()[1].attempts, 10);
    }

    #[test]
    fn test_hint_requires_attempt() {
        let session = session_with_secret(50);
        assert_eq!(session.hint().unwrap(), Hint::NeedAttemptFirst);
    }

    #[test]
    fn test_hint_interval_contains_secret() {
        for secret in [1, 5, 50, 95, 100] {
            let mut session = session_with_secret(secret);
            session.evaluate_guess(1).unwrap();
            let Hint::Range { min, max } = session.hint().unwrap() else {
                panic!("expected a range hint");
            };
            assert!(min <= secret && secret <= max, "secret {secret} outside hint");
            assert!(min >= 1 && max <= 100, "hint not clamped to range");
        }
    }

    #[test]
    fn test_hint_half_width() {
        // Span 99 gives radius max(10, 9) = 10.
        let mut session = session_with_secret(50);
        session.evaluate_guess(1).unwrap();
        assert_eq!(session.hint().unwrap(), Hint::Range { min: 40, max: 60 });

        // Span 999 gives radius 99.
        let config = GameConfig {
            min_range: 1,
            max_range: 1000,
            ..Default::default()
        };
        let mut session = GameSession::new(config);
        session.set_secret(500);
        session.evaluate_guess(1).unwrap();
        assert_eq!(
            session.hint().unwrap(),
            Hint::Range { min: 401, max: 599 }
        );
    }

    #[test]
    fn test_save_restore_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::with_save_path(dir.path().join("game_save.json"));

        let mut session = GameSession::new(config.clone());
        session.set_secret(42);
        session.evaluate_guess(42).unwrap();
        session.set_secret(7);
        session.evaluate_guess(1).unwrap();
        session.evaluate_guess(2).unwrap();
        session.save().unwrap();

        let mut restored = GameSession::new(config);
        assert!(restored.restore().unwrap());
        assert_eq!(restored.attempts(), 2);
        assert_eq!(restored.stats(), session.stats());
        // Same secret: one more wrong guess, then the winning one.
        assert!(matches!(
            restored.evaluate_guess(6).unwrap(),
            Outcome::Continuing(Direction::Higher)
        ));
        assert!(matches!(
            restored.evaluate_guess(7).unwrap(),
            Outcome::Won { number: 7, .. }
        ));
    }

    #[test]
    fn test_restore_without_save_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::with_save_path(dir.path().join("missing.json"));
        let mut session = GameSession::new(config);
        assert!(!session.restore().unwrap());
    }

    #[test]
    fn test_hint_clamped_at_bounds() {
        let mut session = session_with_secret(3);
        session.evaluate_guess(99).unwrap();
        assert_eq!(session.hint().unwrap(), Hint::Range { min: 1, max: 13 });

        let mut session = session_with_secret(98);
        session.evaluate_guess(1).unwrap();
        assert_eq!(session.hint().unwrap(), Hint::Range { min: 88, max: 100 });
    }
}
