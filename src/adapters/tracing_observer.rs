use gpacalc_core::domain::Event;
use gpacalc_core::ports::SessionObserver;
use tracing::debug;

/// Session observer that writes every domain event to the log
#[derive(Debug, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl SessionObserver for TracingObserver {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::CourseAdded { index, course } => {
                debug!(index, name = %course.name, credit_hours = course.credit_hours, grade = course.grade, "course added");
            }
            Event::CourseRemoved { index, course } => {
                debug!(index, name = %course.name, "course removed");
            }
            Event::CoursesRemoved { name, removed, credit_hours } => {
                debug!(%name, removed, credit_hours, "courses removed by name");
            }
            Event::CoursesCleared { removed } => {
                debug!(removed, "courses cleared");
            }
            Event::GpaCalculated(report) => {
                debug!(
                    prior_gpa = report.prior_gpa,
                    prior_credit_hours = report.prior_credit_hours,
                    semester_credit_points = report.semester_credit_points,
                    semester_credit_hours = report.semester_credit_hours,
                    final_gpa = report.final_gpa,
                    "gpa calculated"
                );
            }
            Event::QuitRequested => debug!("quit requested"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpacalc_core::app::{Command, Session};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn add(name: &str) -> Command {
        Command::AddCourse {
            name: name.to_string(),
            credit_hours_text: "3".to_string(),
            grade_text: "90".to_string(),
        }
    }

    #[test]
    fn test_tracing_observer_logs_every_event() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut session = Session::new();
            session.subscribe(Box::new(TracingObserver::new()));

            session.handle(add("Chemistry")).unwrap();
            session.handle(add("History")).unwrap();
            session.handle(Command::RemoveCourseAt { index: 1 }).unwrap();
            session
                .handle(Command::Calculate {
                    prior_gpa_text: "3.0".to_string(),
                    prior_credit_hours_text: "10".to_string(),
                })
                .unwrap();
            session.handle(Command::RemoveCourses { name: "Chemistry".to_string() }).unwrap();
            session.handle(Command::ClearCourses).unwrap();
            session.handle(Command::Quit).unwrap();
        });

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("course added").count(), 2);
        assert!(output.contains("name=Chemistry"));
        assert!(output.contains("course removed"));
        assert!(output.contains("name=History"));
        assert!(output.contains("gpa calculated"));
        assert!(output.contains("semester_credit_hours=3"));
        assert!(output.contains("courses removed by name"));
        assert!(output.contains("courses cleared"));
        assert!(output.contains("quit requested"));
    }
}
