/// Commands the presentation layer sends to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a course built from add-course form text
    AddCourse {
        name: String,
        credit_hours_text: String,
        grade_text: String,
    },

    /// Remove every course with this name
    RemoveCourses { name: String },

    /// Remove the single course at this position
    RemoveCourseAt { index: usize },

    /// Remove all courses
    ClearCourses,

    /// Project the GPA from the raw prior GPA and credits text
    Calculate {
        prior_gpa_text: String,
        prior_credit_hours_text: String,
    },

    /// Quit the application
    Quit,
}
