use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Current GPA is not a number: {input:?}")]
    GpaNotParsable { input: String },

    #[error("Credits taken is not a number: {input:?}")]
    CreditsNotParsable { input: String },

    #[error("No credit hours to average over")]
    NoCreditHours,

    #[error("GPA is too large to represent")]
    NotFinite,

    #[error("Course index {index} out of range (have {len} courses)")]
    CourseIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
