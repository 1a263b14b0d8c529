use std::io;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use wordle_game::cli::parse_cli;
use wordle_game::game::{play, GameOutcome};
use wordle_game::info_log;
use wordle_game::wordlist::{load_from_file, load_from_str, EMBEDDED_WORDLIST};

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    // The embedded list ships with far more than the minimum, so this only
    // fails for user-supplied files.
    let loaded = match &cli.wordlist_path {
        Some(path) => load_from_file(path),
        None => load_from_str(EMBEDDED_WORDLIST),
    };
    let words = match loaded {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word list: {e}");
            return ExitCode::FAILURE;
        }
    };

    info_log!("playing with {} candidate words", words.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match play(&words, &mut rng, stdin.lock(), stdout.lock()) {
        Ok(GameOutcome::Won) | Ok(GameOutcome::Lost) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
