//! Word-list loading and secret-word selection.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::debug_log;
use crate::feedback::WORD_LENGTH;

/// Default dictionary shipped with the binary, one word per line.
pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

/// Sanity floor: a usable word source must yield at least this many words.
pub const MIN_WORDS: usize = 10;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list")]
    Io(#[from] std::io::Error),

    #[error("word list too small: found {found} usable words, need at least {min}")]
    TooFewWords { found: usize, min: usize },

    #[error("no words available to choose a secret from")]
    EmptyList,
}

fn is_playable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse whitespace-delimited tokens, uppercased; tokens that are not
/// exactly five ASCII letters are skipped. Fails if fewer than
/// [`MIN_WORDS`] usable words survive filtering.
pub fn load_from_str(data: &str) -> Result<Vec<String>, WordListError> {
    let words: Vec<String> = data
        .split_whitespace()
        .map(|token| token.to_uppercase())
        .filter(|word| is_playable(word))
        .collect();
    if words.len() < MIN_WORDS {
        return Err(WordListError::TooFewWords {
            found: words.len(),
            min: MIN_WORDS,
        });
    }
    debug_log!("loaded {} words", words.len());
    Ok(words)
}

/// Load and validate a word list from `reader`.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<String>, WordListError> {
    let mut data = String::new();
    BufReader::new(reader).read_to_string(&mut data)?;
    load_from_str(&data)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Pick one secret uniformly at random. The caller supplies the RNG so a
/// test or a `--seed` run can make the pick reproducible.
pub fn choose_secret<R: Rng>(words: &[String], rng: &mut R) -> Result<String, WordListError> {
    words
        .choose(rng)
        .cloned()
        .ok_or(WordListError::EmptyList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn test_load_from_str_normalizes_and_filters() {
        let data = "apple\ncrane  slate\nCAT\ntoolong\ncr4ne\n\
                    raise stare arise irate atone stone shine\n";
        let words = load_from_str(data).unwrap();
        assert_eq!(words.len(), 10);
        assert_eq!(words[0], "APPLE");
        assert!(words.iter().all(|w| is_playable(w)));
        assert!(!words.contains(&"CAT".to_string()));
        assert!(!words.contains(&"TOOLONG".to_string()));
        assert!(!words.contains(&"CR4NE".to_string()));
    }

    #[test]
    fn test_load_from_str_enforces_minimum() {
        // The floor applies to every load path, not just files.
        let err = load_from_str("apple\ncrane\nslate\n").unwrap_err();
        match err {
            WordListError::TooFewWords { found, min } => {
                assert_eq!(found, 3);
                assert_eq!(min, MIN_WORDS);
            }
            other => panic!("expected TooFewWords, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_wordlist_is_usable() {
        let words = load_from_str(EMBEDDED_WORDLIST).unwrap();
        assert!(words.len() >= MIN_WORDS);
        assert!(words.contains(&"APPLE".to_string()));
        assert!(words.iter().all(|w| w.len() == WORD_LENGTH));
    }

    #[test]
    fn test_load_from_reader_enforces_minimum() {
        let err = load_from_reader(Cursor::new("apple\ncrane\nslate\n")).unwrap_err();
        assert!(matches!(err, WordListError::TooFewWords { found: 3, .. }));
    }

    #[test]
    fn test_load_from_file_missing_path_is_io_error() {
        let err = load_from_file("/definitely/not/a/real/wordlist.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io(_)));
    }

    #[test]
    fn test_choose_secret_returns_member() {
        let words = vec![
            "CRANE".to_string(),
            "SLATE".to_string(),
            "RAISE".to_string(),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = choose_secret(&words, &mut rng).unwrap();
            assert!(words.contains(&secret));
        }
    }

    #[test]
    fn test_choose_secret_is_reproducible_with_same_seed() {
        let words = load_from_str(EMBEDDED_WORDLIST).unwrap();
        let a = choose_secret(&words, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = choose_secret(&words, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_secret_empty_list_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = choose_secret(&[], &mut rng).unwrap_err();
        assert!(matches!(err, WordListError::EmptyList));
    }
}
