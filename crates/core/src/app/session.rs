use crate::app::Command;
use crate::domain::{calculate_report, course_from_text, Course, CourseList, Event, GpaReport};
use crate::error::Result;
use crate::ports::SessionObserver;
use tracing::{debug, info, warn};

/// State for one run of the calculator: the course list and whoever is
/// listening for changes to it.
///
/// The session is owned by the presentation layer and lives exactly as long
/// as it does. Nothing here is global.
#[derive(Default)]
pub struct Session {
    courses: CourseList,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("courses", &self.courses)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: courses.into_iter().collect(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn courses(&self) -> &CourseList {
        &self.courses
    }

    /// Apply a command and notify observers of whatever changed.
    ///
    /// Errors leave the session untouched and notify nobody.
    pub fn handle(&mut self, cmd: Command) -> Result<Vec<Event>> {
        let events = match cmd {
            Command::AddCourse { name, credit_hours_text, grade_text } => {
                vec![self.add_course(&name, &credit_hours_text, &grade_text)]
            }
            Command::RemoveCourses { name } => {
                let hours_before = self.courses.credit_hours();
                let removed = self.courses.remove_by_name(&name);
                let credit_hours = hours_before - self.courses.credit_hours();
                info!("Removed {} course(s) named {:?}", removed, name);
                vec![Event::CoursesRemoved { name, removed, credit_hours }]
            }
            Command::RemoveCourseAt { index } => {
                let course = self.courses.remove_at(index)?;
                info!("Removed course {} at index {}", course, index);
                vec![Event::CourseRemoved { index, course }]
            }
            Command::ClearCourses => {
                let removed = self.courses.clear();
                info!("Cleared {} course(s)", removed);
                vec![Event::CoursesCleared { removed }]
            }
            Command::Calculate { prior_gpa_text, prior_credit_hours_text } => {
                let report = self.calculate(&prior_gpa_text, &prior_credit_hours_text)?;
                vec![Event::GpaCalculated(report)]
            }
            Command::Quit => {
                info!("Quit command received");
                vec![Event::QuitRequested]
            }
        };

        self.publish(&events);
        Ok(events)
    }

    fn add_course(&mut self, name: &str, credit_hours_text: &str, grade_text: &str) -> Event {
        let course = course_from_text(name, credit_hours_text, grade_text);
        if course.credit_hours == 0 || course.grade == 0.0 {
            debug!(
                credit_hours_text,
                grade_text, "Course field(s) unparsable or zero, stored as {}", course
            );
        }
        info!("Adding course {}", course);
        let index = self.courses.add(course.clone());
        Event::CourseAdded { index, course }
    }

    fn calculate(&self, prior_gpa_text: &str, prior_credit_hours_text: &str) -> Result<GpaReport> {
        match calculate_report(prior_gpa_text, prior_credit_hours_text, self.courses.as_slice()) {
            Ok(report) => {
                info!(
                    courses = self.courses.len(),
                    final_gpa = report.final_gpa,
                    "GPA calculated"
                );
                Ok(report)
            }
            Err(e) => {
                warn!("Calculation rejected: {}", e);
                Err(e)
            }
        }
    }

    fn publish(&mut self, events: &[Event]) {
        for event in events {
            for observer in &mut self.observers {
                observer.notify(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::ports::EventRecorder;

    fn add(name: &str, hours: &str, grade: &str) -> Command {
        Command::AddCourse {
            name: name.to_string(),
            credit_hours_text: hours.to_string(),
            grade_text: grade.to_string(),
        }
    }

    fn calculate(gpa: &str, credits: &str) -> Command {
        Command::Calculate {
            prior_gpa_text: gpa.to_string(),
            prior_credit_hours_text: credits.to_string(),
        }
    }

    #[test]
    fn test_add_course_emits_event() {
        let mut session = Session::new();
        let events = session.handle(add("Physics", "4", "91.2")).unwrap();

        assert_eq!(
            events,
            vec![Event::CourseAdded {
                index: 0,
                course: Course::new("Physics", 4, 91.2),
            }]
        );
        assert_eq!(session.courses().len(), 1);
    }

    #[test]
    fn test_add_course_with_garbage_falls_back_to_zero() {
        let mut session = Session::new();
        session.handle(add("Z", "abc", "xyz")).unwrap();
        assert_eq!(session.courses().as_slice(), &[Course::new("Z", 0, 0.0)]);
    }

    #[test]
    fn test_remove_courses_removes_every_match() {
        let mut session = Session::with_courses([
            Course::new("X", 3, 90.0),
            Course::new("Y", 3, 80.0),
            Course::new("X", 4, 70.0),
        ]);

        let events = session
            .handle(Command::RemoveCourses { name: "X".to_string() })
            .unwrap();

        assert_eq!(
            events,
            vec![Event::CoursesRemoved {
                name: "X".to_string(),
                removed: 2,
                credit_hours: 7,
            }]
        );
        let names: Vec<_> = session.courses().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Y".to_string()]);
    }

    #[test]
    fn test_remove_course_at_out_of_range_leaves_state() {
        let recorder = EventRecorder::new();
        let mut session = Session::with_courses([Course::new("X", 3, 90.0)]);
        session.subscribe(Box::new(recorder.clone()));

        let err = session.handle(Command::RemoveCourseAt { index: 5 }).unwrap_err();

        assert_eq!(err, CoreError::CourseIndexOutOfRange { index: 5, len: 1 });
        assert_eq!(session.courses().len(), 1);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_calculate_uses_current_courses() {
        let mut session = Session::new();
        session.handle(add("A", "3", "96.6")).unwrap();
        session.handle(add("B", "3", "94.2")).unwrap();

        let events = session.handle(calculate("3.5", "30")).unwrap();
        match &events[..] {
            [Event::GpaCalculated(report)] => {
                assert_eq!(report.semester_credit_hours, 6);
                assert!((report.final_gpa - 129.0 / 36.0).abs() < 1e-9);
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }

    #[test]
    fn test_huge_credit_hours_do_not_overflow() {
        let mut session = Session::new();
        session.handle(add("Big", "4294967295", "90")).unwrap();
        session.handle(add("One", "1", "90")).unwrap();

        let events = session.handle(calculate("3.0", "10")).unwrap();
        match &events[..] {
            [Event::GpaCalculated(report)] => {
                assert_eq!(report.semester_credit_hours, 4_294_967_296);
                assert!(report.final_gpa.is_finite());
            }
            other => panic!("unexpected events: {:?}", other),
        }

        let events = session.handle(Command::RemoveCourses { name: "Big".to_string() }).unwrap();
        assert_eq!(
            events,
            vec![Event::CoursesRemoved {
                name: "Big".to_string(),
                removed: 1,
                credit_hours: u64::from(u32::MAX),
            }]
        );
    }

    #[test]
    fn test_calculate_parse_errors() {
        let mut session = Session::new();
        assert!(matches!(
            session.handle(calculate("", "0")),
            Err(CoreError::GpaNotParsable { .. })
        ));
        assert!(matches!(
            session.handle(calculate("3.0", "")),
            Err(CoreError::CreditsNotParsable { .. })
        ));
        assert_eq!(session.handle(calculate("3.0", "0")), Err(CoreError::NoCreditHours));
    }

    #[test]
    fn test_observers_see_events_in_order() {
        let recorder = EventRecorder::new();
        let mut session = Session::new();
        session.subscribe(Box::new(recorder.clone()));

        session.handle(add("A", "3", "90")).unwrap();
        session.handle(Command::ClearCourses).unwrap();
        session.handle(Command::Quit).unwrap();

        assert_eq!(
            recorder.take(),
            vec![
                Event::CourseAdded { index: 0, course: Course::new("A", 3, 90.0) },
                Event::CoursesCleared { removed: 1 },
                Event::QuitRequested,
            ]
        );
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_closure_observer() {
        let seen = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = seen.clone();

        let mut session = Session::new();
        session.subscribe(Box::new(move |_: &Event| counter.set(counter.get() + 1)));
        session.handle(add("A", "3", "90")).unwrap();
        session.handle(add("B", "3", "90")).unwrap();

        assert_eq!(seen.get(), 2);
    }
}
