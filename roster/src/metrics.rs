//! Score normalization and derived-metric computation.
//!
//! Derived metrics are always recomputed from scratch in the order
//! total → average → grade; there is no delta update when a single subject
//! changes.

use crate::record::{Grade, StudentRecord};

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;
const SUBJECT_COUNT: f64 = 4.0;

/// Clamp a raw subject score into `[MIN_SCORE, MAX_SCORE]`.
pub fn normalize(raw: i64) -> i64 {
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

/// Sum the record's (normalized) scores and store the result as its total.
pub fn compute_total(record: &mut StudentRecord) -> i64 {
    let scores = record.scores();
    let total = scores.korean + scores.english + scores.math + scores.science;
    record.total = total;
    total
}

/// Store `total / 4.0` as the record's average. Requires [`compute_total`]
/// to have run first.
pub fn compute_average(record: &mut StudentRecord) -> f64 {
    let average = record.total as f64 / SUBJECT_COUNT;
    record.average = average;
    average
}

/// Store the letter grade for the record's average. Requires
/// [`compute_average`] to have run first.
pub fn compute_grade(record: &mut StudentRecord) -> Grade {
    let grade = Grade::from_average(record.average);
    record.grade = grade;
    grade
}

/// Recompute every derived metric after a score change.
pub fn recompute(record: &mut StudentRecord) {
    compute_total(record);
    compute_average(record);
    compute_grade(record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Scores;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(normalize(-10), 0);
        assert_eq!(normalize(0), 0);
        assert_eq!(normalize(55), 55);
        assert_eq!(normalize(100), 100);
        assert_eq!(normalize(105), 100);
        assert_eq!(normalize(i64::MIN), 0);
        assert_eq!(normalize(i64::MAX), 100);
    }

    #[test]
    fn test_compute_in_order() {
        let mut record = StudentRecord::new("S1", "Kim", Scores::new(90, 90, 90, 89));
        assert_eq!(compute_total(&mut record), 359);
        assert_eq!(compute_average(&mut record), 89.75);
        assert_eq!(compute_grade(&mut record), Grade::B);
    }

    #[test]
    fn test_perfect_and_zero_records() {
        let perfect = StudentRecord::new("P", "Perfect", Scores::new(100, 100, 100, 100));
        assert_eq!(perfect.total(), 400);
        assert_eq!(perfect.grade(), Grade::A);

        let zero = StudentRecord::new("Z", "Zero", Scores::new(-1, -1, -1, -1));
        assert_eq!(zero.total(), 0);
        assert_eq!(zero.average(), 0.0);
        assert_eq!(zero.grade(), Grade::F);
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent_and_in_range(x in any::<i64>()) {
            let once = normalize(x);
            prop_assert_eq!(normalize(once), once);
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&once));
        }

        #[test]
        fn prop_derived_metrics_follow_scores(
            k in -50i64..150,
            e in -50i64..150,
            m in -50i64..150,
            s in -50i64..150,
        ) {
            let record = StudentRecord::new("P", "Prop", Scores::new(k, e, m, s));
            let expected_total = normalize(k) + normalize(e) + normalize(m) + normalize(s);
            prop_assert_eq!(record.total(), expected_total);
            prop_assert_eq!(record.average(), expected_total as f64 / 4.0);
            prop_assert_eq!(record.grade(), Grade::from_average(record.average()));
        }
    }
}
