// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod feedback;
pub mod game;
pub mod logging;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use board::{Attempt, Board, BoardError, MAX_ATTEMPTS};
pub use feedback::{compute_feedback, is_all_correct, render_feedback, Verdict, WORD_LENGTH};
pub use game::{play, run_game, GameError, GameOutcome};
pub use wordlist::{
    choose_secret, load_from_file, load_from_str, WordListError, EMBEDDED_WORDLIST, MIN_WORDS,
};
