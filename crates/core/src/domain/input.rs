//! Text-to-number conversion at the boundary with the presentation layer.
//!
//! The prior GPA and prior credit hours are strict: a bad value blocks the
//! calculation and names the offending field. Course credit hours and grades
//! are lenient and fall back to zero.

use crate::domain::course::Course;
use crate::error::{CoreError, Result};

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn parse_prior_gpa(text: &str) -> Result<f64> {
    parse_finite(text).ok_or_else(|| CoreError::GpaNotParsable {
        input: text.to_string(),
    })
}

pub fn parse_prior_credit_hours(text: &str) -> Result<f64> {
    parse_finite(text).ok_or_else(|| CoreError::CreditsNotParsable {
        input: text.to_string(),
    })
}

/// Whole, non-negative credit hours, or 0 when the text is not one
pub fn parse_credit_hours_or_zero(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Numeric grade, or 0.0 when the text is not a finite number
pub fn parse_grade_or_zero(text: &str) -> f64 {
    parse_finite(text).unwrap_or(0.0)
}

/// Build a course from add-course form text. Never fails.
pub fn course_from_text(name: &str, credit_hours_text: &str, grade_text: &str) -> Course {
    Course::new(
        name,
        parse_credit_hours_or_zero(credit_hours_text),
        parse_grade_or_zero(grade_text),
    )
}
