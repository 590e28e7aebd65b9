use crate::config::UiConfig;
use gpacalc_core::app::SessionSummary;
use gpacalc_core::domain::{Course, Event, GpaReport};
use gpacalc_core::CoreError;

pub const GPA_ALERT: &str =
    "Please enter your current GPA as a decimal. If you don't have one then enter 0.0.";
pub const CREDITS_ALERT: &str =
    "Please enter your credits taken as a number. If you haven't taken any then enter 0.";
pub const NO_CREDITS_ALERT: &str =
    "Add a course or enter your credits taken before calculating.";

/// The TUI Model - the complete UI state.
///
/// `courses` mirrors the session's course list and is kept in step purely by
/// applying the events the session emits.
#[derive(Debug, Default)]
pub struct TuiModel {
    pub courses: Vec<Course>,

    /// Running totals derived from the same events
    pub summary: SessionSummary,

    pub ui: UiConfig,

    /// Raw text of the current GPA field
    pub prior_gpa: String,

    /// Raw text of the credits taken field
    pub prior_credits: String,

    pub focus: Focus,

    /// Highlighted row in the course list
    pub selected: usize,

    pub mode: ViewMode,

    /// One-line status message shown above the key hints
    pub status: Option<String>,

    pub should_quit: bool,
}

/// Which part of the main screen receives key presses
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    PriorGpa,
    PriorCredits,
    Courses,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::PriorGpa => Focus::PriorCredits,
            Focus::PriorCredits => Focus::Courses,
            Focus::Courses => Focus::PriorGpa,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::PriorGpa => Focus::Courses,
            Focus::PriorCredits => Focus::PriorGpa,
            Focus::Courses => Focus::PriorCredits,
        }
    }
}

/// What is drawn on top of the main screen
#[derive(Debug, Default, Clone, PartialEq)]
pub enum ViewMode {
    #[default]
    Main,

    /// Add-course form
    AddCourse(AddCourseForm),

    /// Calculated GPA sheet
    Result(GpaReport),

    /// Alert with a message the user must dismiss
    Alert(String),

    Help,
}

/// Text fields of the add-course form
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddCourseForm {
    pub name: String,
    pub credit_hours: String,
    pub grade: String,
    pub field: FormField,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    CreditHours,
    Grade,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::CreditHours,
            FormField::CreditHours => FormField::Grade,
            FormField::Grade => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Grade,
            FormField::CreditHours => FormField::Name,
            FormField::Grade => FormField::CreditHours,
        }
    }
}

impl AddCourseForm {
    pub fn active_text_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::CreditHours => &mut self.credit_hours,
            FormField::Grade => &mut self.grade,
        }
    }
}

/// Alert text for a rejected command
pub fn alert_message(error: &CoreError) -> String {
    match error {
        CoreError::GpaNotParsable { .. } => GPA_ALERT.to_string(),
        CoreError::CreditsNotParsable { .. } => CREDITS_ALERT.to_string(),
        CoreError::NoCreditHours => NO_CREDITS_ALERT.to_string(),
        other => other.to_string(),
    }
}

impl TuiModel {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            ui,
            ..Self::default()
        }
    }

    /// Start from courses the session was seeded with
    pub fn with_courses(ui: UiConfig, courses: &[Course]) -> Self {
        let mut model = Self::new(ui);
        model.courses = courses.to_vec();
        model.summary = SessionSummary::for_courses(&courses.iter().cloned().collect());
        model
    }

    /// Apply a session event to both the course mirror and the UI state
    pub fn apply_event(&mut self, event: &Event) {
        self.summary.apply(event);

        match event {
            Event::CourseAdded { index, course } => {
                let at = (*index).min(self.courses.len());
                self.courses.insert(at, course.clone());
                self.selected = at;
                self.status = Some(format!("Added {}", course.name));
            }

            Event::CourseRemoved { index, course } => {
                if *index < self.courses.len() {
                    self.courses.remove(*index);
                }
                self.status = Some(format!("Removed {}", course.name));
            }

            Event::CoursesRemoved { name, removed, .. } => {
                self.courses.retain(|c| &c.name != name);
                self.status = Some(format!("Removed {} course(s) named {}", removed, name));
            }

            Event::CoursesCleared { removed } => {
                self.courses.clear();
                self.status = Some(format!("Cleared {} course(s)", removed));
            }

            Event::GpaCalculated(report) => {
                self.mode = ViewMode::Result(report.clone());
            }

            Event::QuitRequested => {
                self.should_quit = true;
            }
        }

        self.clamp_selection();
    }

    /// Show a rejected command to the user
    pub fn apply_error(&mut self, error: &CoreError) {
        self.mode = ViewMode::Alert(alert_message(error));
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.courses.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.courses.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Text buffer of the focused main-screen field, if a text field has focus
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::PriorGpa => Some(&mut self.prior_gpa),
            Focus::PriorCredits => Some(&mut self.prior_credits),
            Focus::Courses => None,
        }
    }

    /// Whether a popup is drawn over the main screen
    pub fn has_popup(&self) -> bool {
        self.mode != ViewMode::Main
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.courses.len() {
            self.selected = self.courses.len().saturating_sub(1);
        }
    }
}
