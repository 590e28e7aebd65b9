use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use gpacalc_core::app::Command;
use super::model::{AddCourseForm, Focus, TuiModel, ViewMode};

/// Messages that can be sent from the TUI to the session
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Send a command to the session
    Command(Command),

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly.
    /// Returns a TuiMessage that should be sent to the session.
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(TuiMessage::Command(Command::Quit));
        }

        match model.mode {
            ViewMode::Main => Self::handle_main_keys(model, key, modifiers),
            ViewMode::AddCourse(_) => Self::handle_form_keys(model, key),
            ViewMode::Result(_) | ViewMode::Alert(_) => Self::handle_popup_keys(model, key),
            ViewMode::Help => {
                // Any key closes help
                model.mode = ViewMode::Main;
                Ok(TuiMessage::None)
            }
        }
    }

    /// Build the calculate command from whatever is typed right now
    pub fn calculate(model: &TuiModel) -> TuiMessage {
        TuiMessage::Command(Command::Calculate {
            prior_gpa_text: model.prior_gpa.clone(),
            prior_credit_hours_text: model.prior_credits.clone(),
        })
    }

    fn handle_main_keys(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        match key {
            KeyCode::Esc => return Ok(TuiMessage::Command(Command::Quit)),
            KeyCode::Tab => {
                model.focus = model.focus.next();
                return Ok(TuiMessage::None);
            }
            KeyCode::BackTab => {
                model.focus = model.focus.prev();
                return Ok(TuiMessage::None);
            }
            _ => {}
        }

        if model.focus == Focus::Courses {
            return Self::handle_course_list_keys(model, key, modifiers);
        }

        match key {
            KeyCode::Enter => Ok(Self::calculate(model)),

            KeyCode::Up => {
                model.focus = model.focus.prev();
                Ok(TuiMessage::None)
            }

            KeyCode::Down => {
                model.focus = model.focus.next();
                Ok(TuiMessage::None)
            }

            KeyCode::Backspace => {
                if let Some(text) = model.focused_text_mut() {
                    text.pop();
                }
                Ok(TuiMessage::None)
            }

            KeyCode::Char(c) => {
                if let Some(text) = model.focused_text_mut() {
                    text.push(c);
                }
                Ok(TuiMessage::None)
            }

            _ => Ok(TuiMessage::None),
        }
    }

    fn handle_course_list_keys(model: &mut TuiModel, key: KeyCode, _modifiers: KeyModifiers) -> Result<TuiMessage> {
        match key {
            // Navigation
            KeyCode::Up | KeyCode::Char('k') => {
                model.select_prev();
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                model.select_next();
                Ok(TuiMessage::None)
            }

            // Actions
            KeyCode::Char('a') | KeyCode::Char('+') => {
                model.mode = ViewMode::AddCourse(AddCourseForm::default());
                Ok(TuiMessage::None)
            }

            KeyCode::Char('d') | KeyCode::Delete => {
                if model.selected_course().is_some() {
                    Ok(TuiMessage::Command(Command::RemoveCourseAt { index: model.selected }))
                } else {
                    Ok(TuiMessage::None)
                }
            }

            KeyCode::Char('D') => match model.selected_course() {
                Some(course) => Ok(TuiMessage::Command(Command::RemoveCourses {
                    name: course.name.clone(),
                })),
                None => Ok(TuiMessage::None),
            },

            KeyCode::Char('X') => {
                if model.courses.is_empty() {
                    Ok(TuiMessage::None)
                } else {
                    Ok(TuiMessage::Command(Command::ClearCourses))
                }
            }

            KeyCode::Char('c') | KeyCode::Enter => Ok(Self::calculate(model)),

            KeyCode::Char('?') => {
                model.mode = ViewMode::Help;
                Ok(TuiMessage::None)
            }

            KeyCode::Char('q') => Ok(TuiMessage::Command(Command::Quit)),

            _ => Ok(TuiMessage::None),
        }
    }

    fn handle_form_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        if key == KeyCode::Enter {
            let ViewMode::AddCourse(form) = std::mem::take(&mut model.mode) else {
                return Ok(TuiMessage::None);
            };
            return Ok(TuiMessage::Command(Command::AddCourse {
                name: form.name.trim().to_string(),
                credit_hours_text: form.credit_hours,
                grade_text: form.grade,
            }));
        }

        if key == KeyCode::Esc {
            model.mode = ViewMode::Main;
            return Ok(TuiMessage::None);
        }

        if let ViewMode::AddCourse(form) = &mut model.mode {
            match key {
                KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
                KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
                KeyCode::Backspace => {
                    form.active_text_mut().pop();
                }
                KeyCode::Char(c) => form.active_text_mut().push(c),
                _ => {}
            }
        }

        Ok(TuiMessage::None)
    }

    fn handle_popup_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')) {
            model.mode = ViewMode::Main;
        }
        Ok(TuiMessage::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::tui::model::FormField;
    use gpacalc_core::domain::Course;

    fn press(model: &mut TuiModel, key: KeyCode) -> TuiMessage {
        TuiUpdate::handle_key(model, key, KeyModifiers::NONE).unwrap()
    }

    fn type_text(model: &mut TuiModel, text: &str) {
        for c in text.chars() {
            press(model, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_into_input_fields() {
        let mut model = TuiModel::default();
        type_text(&mut model, "3.55");
        press(&mut model, KeyCode::Backspace);
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "30");

        assert_eq!(model.prior_gpa, "3.5");
        assert_eq!(model.prior_credits, "30");
    }

    #[test]
    fn test_enter_in_field_calculates() {
        let mut model = TuiModel::default();
        type_text(&mut model, "3.5");

        let msg = press(&mut model, KeyCode::Enter);
        assert_eq!(
            msg,
            TuiMessage::Command(Command::Calculate {
                prior_gpa_text: "3.5".to_string(),
                prior_credit_hours_text: String::new(),
            })
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut model = TuiModel::default();
        model.mode = ViewMode::AddCourse(AddCourseForm::default());
        let msg = TuiUpdate::handle_key(&mut model, KeyCode::Char('c'), KeyModifiers::CONTROL).unwrap();
        assert_eq!(msg, TuiMessage::Command(Command::Quit));
    }

    #[test]
    fn test_add_course_form_flow() {
        let mut model = TuiModel::default();
        model.focus = Focus::Courses;

        press(&mut model, KeyCode::Char('a'));
        type_text(&mut model, "Physics ");
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "4");
        press(&mut model, KeyCode::Tab);
        type_text(&mut model, "91.2");

        match &model.mode {
            ViewMode::AddCourse(form) => assert_eq!(form.field, FormField::Grade),
            other => panic!("expected form, got {:?}", other),
        }

        let msg = press(&mut model, KeyCode::Enter);
        assert_eq!(
            msg,
            TuiMessage::Command(Command::AddCourse {
                name: "Physics".to_string(),
                credit_hours_text: "4".to_string(),
                grade_text: "91.2".to_string(),
            })
        );
        assert_eq!(model.mode, ViewMode::Main);
    }

    #[test]
    fn test_add_course_form_cancel() {
        let mut model = TuiModel::default();
        model.focus = Focus::Courses;
        press(&mut model, KeyCode::Char('a'));
        type_text(&mut model, "Dropped");

        assert_eq!(press(&mut model, KeyCode::Esc), TuiMessage::None);
        assert_eq!(model.mode, ViewMode::Main);
    }

    #[test]
    fn test_delete_keys() {
        let courses = vec![Course::new("X", 3, 90.0), Course::new("Y", 3, 80.0)];
        let mut model = TuiModel::with_courses(UiConfig::default(), &courses);
        model.focus = Focus::Courses;
        press(&mut model, KeyCode::Char('j'));

        assert_eq!(
            press(&mut model, KeyCode::Char('d')),
            TuiMessage::Command(Command::RemoveCourseAt { index: 1 })
        );
        assert_eq!(
            press(&mut model, KeyCode::Char('D')),
            TuiMessage::Command(Command::RemoveCourses { name: "Y".to_string() })
        );
    }

    #[test]
    fn test_delete_on_empty_list_does_nothing() {
        let mut model = TuiModel::default();
        model.focus = Focus::Courses;
        assert_eq!(press(&mut model, KeyCode::Char('d')), TuiMessage::None);
        assert_eq!(press(&mut model, KeyCode::Char('D')), TuiMessage::None);
        assert_eq!(press(&mut model, KeyCode::Char('X')), TuiMessage::None);
    }

    #[test]
    fn test_selection_bounds() {
        let courses = vec![Course::new("A", 3, 90.0), Course::new("B", 3, 80.0)];
        let mut model = TuiModel::with_courses(UiConfig::default(), &courses);
        model.focus = Focus::Courses;

        for _ in 0..5 {
            press(&mut model, KeyCode::Down);
        }
        assert_eq!(model.selected, 1);

        for _ in 0..5 {
            press(&mut model, KeyCode::Char('k'));
        }
        assert_eq!(model.selected, 0);
    }

    #[test]
    fn test_popups_close() {
        let mut model = TuiModel::default();
        model.mode = ViewMode::Alert("oops".to_string());
        press(&mut model, KeyCode::Char('x'));
        assert!(model.has_popup());
        press(&mut model, KeyCode::Enter);
        assert_eq!(model.mode, ViewMode::Main);

        model.focus = Focus::Courses;
        press(&mut model, KeyCode::Char('?'));
        assert_eq!(model.mode, ViewMode::Help);
        press(&mut model, KeyCode::Char('z'));
        assert_eq!(model.mode, ViewMode::Main);
    }

    #[test]
    fn test_quit_keys() {
        let mut model = TuiModel::default();
        // 'q' is just text while a field has focus
        assert_eq!(press(&mut model, KeyCode::Char('q')), TuiMessage::None);
        assert_eq!(model.prior_gpa, "q");

        assert_eq!(press(&mut model, KeyCode::Esc), TuiMessage::Command(Command::Quit));
        model.focus = Focus::Courses;
        assert_eq!(press(&mut model, KeyCode::Char('q')), TuiMessage::Command(Command::Quit));
    }
}
