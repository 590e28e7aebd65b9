use crate::domain::{CourseList, Event, GpaReport};

/// Read-only projection of session state for UI consumption
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionSummary {
    /// Number of courses currently in the list
    pub course_count: usize,

    /// Credit hours across the current course list
    pub semester_credit_hours: u64,

    /// The most recent successful projection, if still current
    pub last_report: Option<GpaReport>,

    /// Whether the course list changed since `last_report` was computed
    pub stale: bool,

    pub quit_requested: bool,
}

impl SessionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event to update the projection
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::CourseAdded { course, .. } => {
                self.course_count += 1;
                self.semester_credit_hours += u64::from(course.credit_hours);
                self.mark_stale();
            }

            Event::CourseRemoved { course, .. } => {
                self.course_count = self.course_count.saturating_sub(1);
                self.semester_credit_hours = self.semester_credit_hours.saturating_sub(u64::from(course.credit_hours));
                self.mark_stale();
            }

            Event::CoursesRemoved { removed, credit_hours, .. } => {
                self.course_count = self.course_count.saturating_sub(*removed);
                self.semester_credit_hours = self.semester_credit_hours.saturating_sub(*credit_hours);
                if *removed > 0 {
                    self.mark_stale();
                }
            }

            Event::CoursesCleared { .. } => {
                self.course_count = 0;
                self.semester_credit_hours = 0;
                self.mark_stale();
            }

            Event::GpaCalculated(report) => {
                self.last_report = Some(report.clone());
                self.stale = false;
            }

            Event::QuitRequested => {
                self.quit_requested = true;
            }
        }
    }

    /// Summary of a session that starts out with `courses` already loaded
    pub fn for_courses(courses: &CourseList) -> Self {
        Self {
            course_count: courses.len(),
            semester_credit_hours: courses.credit_hours(),
            ..Self::default()
        }
    }

    fn mark_stale(&mut self) {
        if self.last_report.is_some() {
            self.stale = true;
        }
    }
}
