//! Course progress computation.

/// Percentage of a course completed, given completed and total lesson counts.
///
/// A course with no lessons is defined to be 0% complete rather than an
/// error: the caller can only reach this point through an existing lesson,
/// so a zero total means the course's lessons were deleted concurrently.
pub fn completion_percent(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (completed as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of_four_is_25_percent() {
        assert_eq!(completion_percent(1, 4), 25.0);
    }

    #[test]
    fn test_three_of_four_is_75_percent() {
        assert_eq!(completion_percent(3, 4), 75.0);
    }

    #[test]
    fn test_all_lessons_complete_is_100_percent() {
        assert_eq!(completion_percent(7, 7), 100.0);
    }

    #[test]
    fn test_no_completions_is_zero() {
        assert_eq!(completion_percent(0, 10), 0.0);
    }

    #[test]
    fn test_zero_lesson_course_is_zero_not_nan() {
        let pct = completion_percent(0, 0);
        assert_eq!(pct, 0.0);
        assert!(!pct.is_nan());
    }

    #[test]
    fn test_thirds_are_fractional() {
        let pct = completion_percent(1, 3);
        assert!((pct - 33.333333).abs() < 1e-4);
    }
}
