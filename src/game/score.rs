//! Session scoring

/// Score for finishing in the optimal number of moves
pub const PERFECT_SCORE: f64 = 10.0;

/// Score for finishing on the last allowed move
pub const BUDGET_SCORE: f64 = 5.0;

/// Score a finished ladder
///
/// Full marks at or below `min_tries`, falling linearly to half marks at `max_tries`,
/// clamped to [0, 10] and rounded to one decimal place. A budget with no slack scores
/// any overrun as half marks.
///
/// # Examples
/// ```
/// use word_ladder::game::calculate_score;
///
/// assert_eq!(calculate_score(4, 4, 7), 10.0);
/// assert_eq!(calculate_score(5, 4, 7), 8.3);
/// assert_eq!(calculate_score(7, 4, 7), 5.0);
/// ```
#[must_use]
pub fn calculate_score(tries: usize, min_tries: usize, max_tries: usize) -> f64 {
    if tries <= min_tries {
        return PERFECT_SCORE;
    }
    if max_tries <= min_tries {
        return BUDGET_SCORE;
    }

    let overrun = (tries - min_tries) as f64;
    let slack = (max_tries - min_tries) as f64;
    let raw = PERFECT_SCORE - (PERFECT_SCORE - BUDGET_SCORE) * overrun / slack;
    (raw.clamp(0.0, PERFECT_SCORE) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn score_at_bounds() {
        assert!((calculate_score(4, 4, 7) - 10.0).abs() < f64::EPSILON);
        assert!((calculate_score(7, 4, 7) - 5.0).abs() < f64::EPSILON);
        assert!((calculate_score(5, 4, 7) - 8.3).abs() < f64::EPSILON);
        assert!((calculate_score(6, 4, 7) - 6.7).abs() < f64::EPSILON);
    }

    #[test]
    fn fewer_tries_than_minimum_is_perfect() {
        assert!((calculate_score(0, 4, 7) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_slack_overrun_is_half_marks() {
        assert!((calculate_score(5, 4, 4) - 5.0).abs() < f64::EPSILON);
        assert!((calculate_score(4, 4, 4) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn far_overrun_clamps_to_zero() {
        assert!(calculate_score(100, 4, 7).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn score_is_bounded_and_non_increasing(
            min in 0usize..20,
            slack in 0usize..10,
            tries in 0usize..40,
        ) {
            let max = min + slack;
            let score = calculate_score(tries, min, max);
            prop_assert!((0.0..=10.0).contains(&score));
            prop_assert!(calculate_score(tries + 1, min, max) <= score);
        }
    }
}
