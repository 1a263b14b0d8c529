//! Per-letter feedback computation for a guess against the secret word.

/// Fixed word length for every secret and guess in a game.
pub const WORD_LENGTH: usize = 5;

/// Verdict for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position.
    Correct,
    /// Letter occurs in the secret at a different, unconsumed position.
    Present,
    /// Letter does not occur among the remaining unconsumed positions.
    Absent,
}

impl Verdict {
    /// Display marker: `G` for correct, `Y` for present, `_` for absent.
    pub fn to_char(self) -> char {
        match self {
            Verdict::Correct => 'G',
            Verdict::Present => 'Y',
            Verdict::Absent => '_',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Verdict::Correct),
            'Y' => Some(Verdict::Present),
            '_' => Some(Verdict::Absent),
            _ => None,
        }
    }
}

/// Compare `guess` against `secret` and produce one verdict per position.
///
/// Both arguments must already be validated: uppercase, ASCII-alphabetic,
/// exactly [`WORD_LENGTH`] characters. The comparison runs in two passes:
///
/// 1. Exact matches are marked `Correct` and the secret position is consumed.
/// 2. Each remaining guess position scans the unconsumed secret positions for
///    its letter; any hit is `Present`, otherwise `Absent`.
///
/// Only the first pass consumes. A secret letter claimed by an exact match is
/// never reused as a `Present`, but a misplaced letter can be credited at
/// every guess position that repeats it, so a guess with more copies of a
/// letter than the secret still scores each copy as `Present`.
pub fn compute_feedback(secret: &str, guess: &str) -> Vec<Verdict> {
    let secret_chars: Vec<char> = secret.chars().collect();
    let guess_chars: Vec<char> = guess.chars().collect();
    debug_assert_eq!(secret_chars.len(), WORD_LENGTH);
    debug_assert_eq!(guess_chars.len(), WORD_LENGTH);

    let mut verdicts = vec![Verdict::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // First pass: exact matches.
    for i in 0..WORD_LENGTH {
        if guess_chars[i] == secret_chars[i] {
            verdicts[i] = Verdict::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: misplaced letters match any occurrence not already
    // claimed by an exact match.
    for i in 0..WORD_LENGTH {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if (0..WORD_LENGTH).any(|j| !consumed[j] && secret_chars[j] == guess_chars[i]) {
            verdicts[i] = Verdict::Present;
        }
    }

    verdicts
}

/// True iff `feedback` holds exactly [`WORD_LENGTH`] verdicts and every one
/// is `Correct`. A shorter or longer sequence is never a win.
pub fn is_all_correct(feedback: &[Verdict]) -> bool {
    feedback.len() == WORD_LENGTH && feedback.iter().all(|v| *v == Verdict::Correct)
}

/// Render a feedback row as its marker string, e.g. `_YYY_`.
pub fn render_feedback(feedback: &[Verdict]) -> String {
    feedback.iter().map(|v| v.to_char()).collect()
}
