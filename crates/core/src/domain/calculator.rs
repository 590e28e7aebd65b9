use serde::{Deserialize, Serialize};

use crate::domain::course::Course;
use crate::domain::input::{parse_prior_credit_hours, parse_prior_gpa};
use crate::error::{CoreError, Result};

/// Outcome of a GPA projection, with the intermediate sums kept for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaReport {
    pub prior_gpa: f64,
    pub prior_credit_hours: f64,
    pub semester_credit_points: f64,
    pub semester_credit_hours: u64,
    pub total_credit_hours: f64,
    pub final_gpa: f64,
}

/// Credit-weighted grade points and credit hours earned this semester.
///
/// Per-course credit points are summed in ascending order, so the total is
/// the same for every ordering of `courses`.
pub fn semester_totals(courses: &[Course]) -> (f64, u64) {
    let mut credit_points: Vec<f64> = courses.iter().map(Course::credit_points).collect();
    credit_points.sort_by(f64::total_cmp);

    let semester_credit_points = credit_points.iter().sum();
    let semester_credit_hours = courses.iter().map(|c| u64::from(c.credit_hours)).sum();
    (semester_credit_points, semester_credit_hours)
}

/// Project the cumulative GPA after the semester.
///
/// Fails with [`CoreError::NoCreditHours`] when there is nothing to average
/// over (prior credit hours and semester credit hours sum to zero), and with
/// [`CoreError::NotFinite`] when the inputs are too large for an f64 result.
/// The returned GPA is always finite.
pub fn project(prior_gpa: f64, prior_credit_hours: f64, courses: &[Course]) -> Result<GpaReport> {
    let (semester_credit_points, semester_credit_hours) = semester_totals(courses);
    let total_credit_hours = prior_credit_hours + semester_credit_hours as f64;

    if total_credit_hours == 0.0 {
        return Err(CoreError::NoCreditHours);
    }

    let final_gpa = if semester_credit_hours == 0 {
        // Nothing new this semester: the GPA stays put
        prior_gpa
    } else {
        (prior_gpa * prior_credit_hours + semester_credit_points) / total_credit_hours
    };

    if !final_gpa.is_finite() {
        return Err(CoreError::NotFinite);
    }

    Ok(GpaReport {
        prior_gpa,
        prior_credit_hours,
        semester_credit_points,
        semester_credit_hours,
        total_credit_hours,
        final_gpa,
    })
}

pub fn calculate_final_gpa(prior_gpa: f64, prior_credit_hours: f64, courses: &[Course]) -> Result<f64> {
    project(prior_gpa, prior_credit_hours, courses).map(|report| report.final_gpa)
}

/// Parse the raw prior GPA and credit hours text, then project.
///
/// The GPA field is checked first, so when both are unparsable the caller
/// hears about the GPA.
pub fn calculate_report(prior_gpa_text: &str, prior_credit_hours_text: &str, courses: &[Course]) -> Result<GpaReport> {
    let prior_gpa = parse_prior_gpa(prior_gpa_text)?;
    let prior_credit_hours = parse_prior_credit_hours(prior_credit_hours_text)?;
    project(prior_gpa, prior_credit_hours, courses)
}

pub fn calculate(prior_gpa_text: &str, prior_credit_hours_text: &str, courses: &[Course]) -> Result<f64> {
    calculate_report(prior_gpa_text, prior_credit_hours_text, courses).map(|report| report.final_gpa)
}
