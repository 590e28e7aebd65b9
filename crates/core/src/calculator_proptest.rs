//! Property-based tests for the grade scale and GPA projection

#[cfg(test)]
mod tests {
    use crate::domain::*;
    use crate::error::CoreError;
    use proptest::prelude::*;

    prop_compose! {
        fn course()(
            name in "[A-Z][a-z]{0,8}",
            credit_hours in 0u32..6,
            grade in 0.0f64..105.0,
        ) -> Course {
            Course::new(name, credit_hours, grade)
        }
    }

    proptest! {
        #[test]
        fn test_grade_points_monotonic(a in -50.0f64..150.0, b in -50.0f64..150.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(grade_points(low) <= grade_points(high));
        }

        #[test]
        fn test_grade_points_in_range(x in proptest::num::f64::ANY) {
            let points = grade_points(x);
            prop_assert!((0.0..=4.333).contains(&points));
        }

        #[test]
        fn test_empty_course_list_returns_prior_gpa(
            gpa in 0.0f64..4.333,
            credits in 0.5f64..200.0,
        ) {
            prop_assert_eq!(calculate_final_gpa(gpa, credits, &[]), Ok(gpa));
        }

        #[test]
        fn test_reordering_courses_does_not_change_gpa(
            courses in prop::collection::vec(course(), 0..8),
            gpa in 0.0f64..4.333,
            credits in 0.0f64..120.0,
        ) {
            let mut reversed = courses.clone();
            reversed.reverse();
            let mut rotated = courses.clone();
            if !rotated.is_empty() {
                rotated.rotate_left(1);
            }

            let original = calculate_final_gpa(gpa, credits, &courses);
            prop_assert_eq!(&original, &calculate_final_gpa(gpa, credits, &reversed));
            prop_assert_eq!(&original, &calculate_final_gpa(gpa, credits, &rotated));
        }

        #[test]
        fn test_final_gpa_stays_within_scale(
            courses in prop::collection::vec(course(), 1..8),
            gpa in 0.0f64..4.333,
            credits in 0.0f64..120.0,
        ) {
            match calculate_final_gpa(gpa, credits, &courses) {
                Ok(final_gpa) => {
                    prop_assert!(final_gpa >= -1e-9);
                    prop_assert!(final_gpa <= 4.333 + 1e-9);
                }
                Err(e) => {
                    prop_assert_eq!(e, CoreError::NoCreditHours);
                    prop_assert_eq!(credits, 0.0);
                }
            }
        }
    }
}
