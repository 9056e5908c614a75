//! Score a single guess against a solution

use crate::core::{Feedback, Word, WordError};

/// A guess, the solution it was scored against and the feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
}

/// Validate both words and evaluate the guess
///
/// # Errors
///
/// Returns `WordError` if either input is not a 5-letter word.
pub fn score_words(guess: &str, solution: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let feedback = Feedback::evaluate(&guess, &solution);

    Ok(ScoreResult {
        guess,
        solution,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_words() {
        let result = score_words("TRACE", "crane").unwrap();
        assert_eq!(result.guess.text(), "trace");
        assert_eq!(result.solution.text(), "crane");
        assert_eq!(result.feedback.to_emoji(), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn score_rejects_invalid_words() {
        assert_eq!(score_words("trac", "crane"), Err(WordError::InvalidLength(4)));
        assert_eq!(score_words("trace", "cr4ne"), Err(WordError::InvalidCharacters));
    }
}
