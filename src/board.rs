//! Append-only record of guesses and their feedback across a game.

use thiserror::Error;

use crate::feedback::{render_feedback, Verdict};

/// Maximum number of attempts before the game is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// One recorded guess and the feedback it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: String,
    pub feedback: Vec<Verdict>,
}

#[derive(Debug, Error)]
pub enum BoardError {
    /// `record` was called with an index that is not the next free slot.
    #[error("attempt index {got} out of order (expected {expected})")]
    NonSequentialIndex { expected: usize, got: usize },

    #[error("board already holds the maximum number of attempts")]
    Full,
}

/// Stores attempts strictly in order and renders them for display.
#[derive(Debug, Default)]
pub struct Board {
    attempts: Vec<Attempt>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an attempt at `index`, which must equal the current attempt
    /// count. No overwrites, no gaps.
    pub fn record(
        &mut self,
        index: usize,
        guess: String,
        feedback: Vec<Verdict>,
    ) -> Result<(), BoardError> {
        if self.attempts.len() >= MAX_ATTEMPTS {
            return Err(BoardError::Full);
        }
        if index != self.attempts.len() {
            return Err(BoardError::NonSequentialIndex {
                expected: self.attempts.len(),
                got: index,
            });
        }
        self.attempts.push(Attempt { guess, feedback });
        Ok(())
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.attempts.len() >= MAX_ATTEMPTS
    }

    /// One display line per stored attempt, numbered 1-based.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.attempts.iter().enumerate().map(|(i, attempt)| {
            format!(
                "Guess {}: {}  {}",
                i + 1,
                attempt.guess,
                render_feedback(&attempt.feedback)
            )
        })
    }
}
