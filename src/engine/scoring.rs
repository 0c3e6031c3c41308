use crate::config::ScoringMode;

/// Decides whether `submitted` answers `expected`. Both are compared trimmed.
pub(crate) fn is_correct(mode: ScoringMode, submitted: &str, expected: &str) -> bool {
    let submitted = submitted.trim();
    let expected = expected.trim();
    match mode {
        ScoringMode::AlwaysCorrect => true,
        ScoringMode::ExactMatch => submitted == expected,
        ScoringMode::IgnoreCase => submitted.to_lowercase() == expected.to_lowercase(),
    }
}

/// Applies one submission to `(score, streak)`.
/// A hit extends the streak and adds it to the score; a miss clears the streak only.
pub(crate) fn apply(score: u32, streak: u32, correct: bool) -> (u32, u32) {
    if correct {
        let streak = streak.saturating_add(1);
        (score.saturating_add(streak), streak)
    } else {
        (score, 0)
    }
}
