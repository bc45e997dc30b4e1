use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    /// Every question in the category has already been asked.
    #[error("no unseen questions remain")]
    Exhausted,
}

/// Candidate ids that are not in `previous`, in their original order.
pub fn remaining_questions(candidates: &[i32], previous: &[i32]) -> Vec<i32> {
    let seen: HashSet<i32> = previous.iter().copied().collect();

    candidates
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect()
}

/// Pick the next quiz question.
///
/// Removes every id in `previous` from `candidates` and chooses uniformly at
/// random among what is left.
///
/// # Errors
///
/// Returns [`QuizError::Exhausted`] when no candidate remains, which covers both
/// an empty category and a category whose questions have all been seen.
///
/// # Examples
/// ```
/// use rand::thread_rng;
/// use trivia_quiz::{QuizError, select_next_question};
///
/// assert_eq!(select_next_question(&[1], &[], &mut thread_rng()), Ok(1));
/// assert_eq!(
///     select_next_question(&[1], &[1], &mut thread_rng()),
///     Err(QuizError::Exhausted)
/// );
/// ```
pub fn select_next_question<R>(
    candidates: &[i32],
    previous: &[i32],
    rng: &mut R,
) -> Result<i32, QuizError>
where
    R: Rng + ?Sized,
{
    remaining_questions(candidates, previous)
        .choose(rng)
        .copied()
        .ok_or(QuizError::Exhausted)
}
