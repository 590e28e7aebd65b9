use super::{calculator::GpaReport, course::Course};

/// Domain events emitted by the session after each state change
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A course was appended to the list
    CourseAdded { index: usize, course: Course },

    /// Every course with this name was removed, `credit_hours` between them
    CoursesRemoved { name: String, removed: usize, credit_hours: u64 },

    /// A single course was removed from the list
    CourseRemoved { index: usize, course: Course },

    /// The course list was emptied
    CoursesCleared { removed: usize },

    /// A GPA projection was computed
    GpaCalculated(GpaReport),

    /// User requested to quit the application
    QuitRequested,
}
