//! Turn-based game loop: prompt, validate, score, and end the game.

use std::io::{BufRead, Write};

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, BoardError, MAX_ATTEMPTS};
use crate::debug_log;
use crate::feedback::{compute_feedback, is_all_correct, WORD_LENGTH};
use crate::wordlist::{choose_secret, WordListError};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O failure during game")]
    Io(#[from] std::io::Error),

    #[error("word list unusable")]
    WordList(#[from] WordListError),

    // Only reachable through internal misuse of the board, never from
    // player input.
    #[error("guess board rejected attempt")]
    Board(#[from] BoardError),
}

enum GuessInput {
    Valid(String),
    Invalid,
    /// Input stream ran dry before the game ended.
    Eof,
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn read_guess<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<GuessInput, GameError> {
    writeln!(writer, "\nEnter your guess ({WORD_LENGTH} letters):")?;
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(GuessInput::Eof);
    }
    let input = input.trim().to_uppercase();

    if is_valid_word(&input) {
        Ok(GuessInput::Valid(input))
    } else {
        writeln!(writer, "Invalid word. Please enter {WORD_LENGTH} letters.")?;
        Ok(GuessInput::Invalid)
    }
}

/// One in-progress game: the secret, the board of scored attempts, and the
/// win/loss status. Mutated only by [`Game::submit`].
struct Game {
    secret: String,
    board: Board,
    status: GameStatus,
}

impl Game {
    fn new(secret: String) -> Self {
        Self {
            secret,
            board: Board::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Score a validated guess, record it, and update the status.
    fn submit(&mut self, guess: String) -> Result<(), GameError> {
        let feedback = compute_feedback(&self.secret, &guess);
        let won = is_all_correct(&feedback);
        self.board.record(self.board.len(), guess, feedback)?;

        if won {
            self.status = GameStatus::Won;
        } else if self.board.is_full() {
            self.status = GameStatus::Lost;
        }
        Ok(())
    }
}

/// Run one game against a fixed secret, reading guesses from `reader` and
/// writing all player-visible text to `writer`.
///
/// Invalid guesses (wrong length or non-alphabetic) are rejected with an
/// "Invalid word" message and do not consume an attempt. Exhausted input
/// (EOF) before the game ends is treated as an implicit loss: the secret is
/// revealed and [`GameOutcome::Lost`] is returned rather than spinning or
/// erroring out.
pub fn run_game<R: BufRead, W: Write>(
    secret: &str,
    mut reader: R,
    mut writer: W,
) -> Result<GameOutcome, GameError> {
    debug_assert!(is_valid_word(secret));
    let mut game = Game::new(secret.to_uppercase());

    writeln!(
        writer,
        "Guess the {WORD_LENGTH}-letter word. You have {MAX_ATTEMPTS} attempts."
    )?;

    while game.status == GameStatus::InProgress {
        let guess = match read_guess(&mut reader, &mut writer)? {
            GuessInput::Valid(guess) => guess,
            GuessInput::Invalid => continue,
            GuessInput::Eof => {
                debug_log!("input exhausted after {} attempts", game.board.len());
                writeln!(
                    writer,
                    "No more input. The secret word was {}.",
                    game.secret
                )?;
                return Ok(GameOutcome::Lost);
            }
        };

        game.submit(guess)?;
        for line in game.board.render() {
            writeln!(writer, "{line}")?;
        }

        match game.status {
            GameStatus::Won => {
                writeln!(
                    writer,
                    "Congratulations! You guessed the word in {} {}.",
                    game.board.len(),
                    if game.board.len() == 1 { "try" } else { "tries" }
                )?;
                return Ok(GameOutcome::Won);
            }
            GameStatus::Lost => {
                writeln!(
                    writer,
                    "Out of attempts! The secret word was {}.",
                    game.secret
                )?;
                return Ok(GameOutcome::Lost);
            }
            GameStatus::InProgress => {}
        }
    }

    // The loop only exits through a terminal status above.
    unreachable!("game loop ended while still in progress")
}

/// Choose a secret from `words` and play one game over the given streams.
pub fn play<R, W, G>(
    words: &[String],
    rng: &mut G,
    reader: R,
    writer: W,
) -> Result<GameOutcome, GameError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let secret = choose_secret(words, rng)?;
    run_game(&secret, reader, writer)
}
