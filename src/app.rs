use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use gpacalc_core::app::{Command, Session};
use gpacalc_core::domain::Course;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::adapters::TracingObserver;
use crate::cli::CliArgs;
use crate::config::Config;
use crate::tui::{TuiMessage, TuiModel, TuiUpdate, TuiView};

/// Sample classes for `--demo`
pub fn demo_courses() -> Vec<Course> {
    vec![
        Course::new("Class 1", 3, 96.6),
        Course::new("Class 2", 3, 94.2),
        Course::new("Class 3", 4, 95.4),
        Course::new("Class 4", 3, 84.9),
        Course::new("Class 5", 1, 86.1),
    ]
}

/// Wires the session to the TUI model: key presses become commands, the
/// session's events flow back into the model.
pub struct App {
    pub session: Session,
    pub model: TuiModel,
}

impl App {
    pub fn new(config: Config, cli_args: &CliArgs) -> App {
        let courses = if cli_args.demo { demo_courses() } else { Vec::new() };

        let mut session = Session::with_courses(courses.clone());
        session.subscribe(Box::new(TracingObserver::new()));

        let mut model = TuiModel::with_courses(config.ui, &courses);
        if let Some(gpa) = &cli_args.gpa {
            model.prior_gpa = gpa.clone();
        }
        if let Some(credits) = &cli_args.credits {
            model.prior_credits = credits.clone();
        }

        App { session, model }
    }

    /// Handle one key press end to end
    pub fn handle_key(&mut self, key: event::KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let msg = TuiUpdate::handle_key(&mut self.model, key.code, key.modifiers)?;
        self.dispatch(msg);
        Ok(())
    }

    /// Send a message to the session and fold the outcome into the model
    pub fn dispatch(&mut self, msg: TuiMessage) {
        let TuiMessage::Command(cmd) = msg else {
            return;
        };

        debug!("Dispatching {:?}", cmd);
        match self.session.handle(cmd) {
            Ok(events) => {
                for event in &events {
                    self.model.apply_event(event);
                }
            }
            Err(e) => self.model.apply_error(&e),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| TuiView::render(&self.model, f))?;

            if let TermEvent::Key(key) = event::read()? {
                self.handle_key(key)?;
            }

            if self.model.should_quit {
                info!("Quit requested, exiting main loop");
                break;
            }
        }
        Ok(())
    }

    /// Convenience for callers that already have a command in hand
    pub fn send(&mut self, cmd: Command) {
        self.dispatch(TuiMessage::Command(cmd));
    }
}
