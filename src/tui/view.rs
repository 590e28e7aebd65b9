use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Stylize,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use gpacalc_core::domain::{Course, GpaReport};
use super::model::{AddCourseForm, Focus, FormField, TuiModel, ViewMode};

const ACCENT: Color = Color::Red;

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // GPA / credits inputs
                Constraint::Min(3),    // Semester classes
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Key hints
            ])
            .split(size);

        Self::render_title(frame, chunks[0]);
        Self::render_inputs(model, frame, chunks[1]);
        Self::render_courses(model, frame, chunks[2]);
        Self::render_status_line(model, frame, chunks[3]);
        Self::render_key_hints(model, frame, chunks[4]);

        match &model.mode {
            ViewMode::Main => {}
            ViewMode::AddCourse(form) => Self::render_add_course(form, frame, size),
            ViewMode::Result(report) => Self::render_result(model, report, frame, size),
            ViewMode::Alert(message) => Self::render_alert(message, frame, size),
            ViewMode::Help => Self::render_help(frame, size),
        }
    }

    fn render_title(frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("NCSU GPA Calculator")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        frame.render_widget(title, area);
    }

    fn render_inputs(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Self::input_line("Current GPA:  ", &model.prior_gpa, "0.0", model.focus == Focus::PriorGpa),
            Self::input_line("Credits Taken:", &model.prior_credits, "0", model.focus == Focus::PriorCredits),
        ];

        let inputs = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Before This Semester"));
        frame.render_widget(inputs, area);
    }

    fn input_line<'a>(label: &'a str, text: &'a str, placeholder: &'a str, focused: bool) -> Line<'a> {
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![Span::styled(label, label_style), Span::raw(" ")];
        if text.is_empty() {
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::raw(text));
        }
        if focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }

    fn render_courses(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let focused = model.focus == Focus::Courses;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Semester Classes");

        if model.courses.is_empty() {
            let empty = Paragraph::new("Press 'a' to add a course.")
                .block(block)
                .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = model
            .courses
            .iter()
            .map(|course| ListItem::new(Self::course_line(model, course)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if focused {
            state.select(Some(model.selected));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn course_line<'a>(model: &TuiModel, course: &'a Course) -> Line<'a> {
        let mut spans = vec![
            Span::styled(course.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(credit_hours_label(course.credit_hours), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                format!("{:.*}", model.ui.grade_precision, course.grade),
                Style::default().fg(ACCENT),
            ),
        ];

        if model.ui.show_letter_grades {
            spans.push(Span::raw(format!(" ({})", course.letter_grade())));
        }

        Line::from(spans)
    }

    fn render_status_line(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(Self::build_status_text(model))
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(status, area);
    }

    /// Build status text for the status line
    pub fn build_status_text(model: &TuiModel) -> String {
        let summary = &model.summary;
        let mut parts = vec![
            format!("{} courses", summary.course_count),
            format!("{} semester credit hours", summary.semester_credit_hours),
        ];

        if let Some(report) = &summary.last_report {
            let stale = if summary.stale { " (outdated)" } else { "" };
            parts.push(format!(
                "Last GPA: {:.*}{}",
                model.ui.gpa_precision, report.final_gpa, stale
            ));
        }

        if let Some(message) = &model.status {
            parts.push(message.clone());
        }

        parts.join(" | ")
    }

    fn render_key_hints(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let hints = match (&model.mode, model.focus) {
            (ViewMode::AddCourse(_), _) => "Tab Next field | Enter Add course | Esc Cancel",
            (ViewMode::Result(_), _) | (ViewMode::Alert(_), _) => "Enter Okay",
            (ViewMode::Help, _) => "Any key to close",
            (ViewMode::Main, Focus::Courses) => {
                "a Add | d Delete | D Delete all named | c Calculate | Tab Switch | ? Help | q Quit"
            }
            (ViewMode::Main, _) => "Type a number | Enter Calculate | Tab Switch | Esc Quit",
        };

        frame.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::Gray)), area);
    }

    fn render_add_course(form: &AddCourseForm, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 50, area);
        frame.render_widget(Clear, popup_area);

        let field = |label: &'static str, text: &str, placeholder: &'static str, which: FormField| {
            let focused = form.field == which;
            let mut spans = vec![
                if focused {
                    label.fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    label.bold()
                },
                Span::raw(" "),
            ];
            if text.is_empty() {
                spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::raw(text.to_string()));
            }
            if focused {
                spans.push("_".fg(Color::Yellow));
            }
            Line::from(spans)
        };

        let lines = vec![
            Line::from(""),
            field("Name:        ", &form.name, "Course Name", FormField::Name),
            Line::from(""),
            field("Credit Hours:", &form.credit_hours, "0", FormField::CreditHours),
            Line::from(""),
            field("Grade:       ", &form.grade, "0.0", FormField::Grade),
            Line::from("Enter your grade 0-100.".gray().italic()),
        ];

        let popup = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Add A Course").border_style(Style::default().fg(ACCENT)))
            .wrap(Wrap { trim: false });
        frame.render_widget(popup, popup_area);
    }

    fn render_result(model: &TuiModel, report: &GpaReport, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 50, area);
        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{:.*}", model.ui.gpa_precision, report.final_gpa),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(format!(
                "{} semester credit hours worth {:.3} credit points",
                report.semester_credit_hours, report.semester_credit_points
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(
                "This will be your grade at the end of the semester given the provided semester classes and grades."
                    .gray(),
            )
            .alignment(Alignment::Center),
        ];

        let popup = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Calculated GPA").border_style(Style::default().fg(ACCENT)))
            .wrap(Wrap { trim: true });
        frame.render_widget(popup, popup_area);
    }

    fn render_alert(message: &str, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(message),
            Line::from(""),
            Line::from("Press Enter to continue.".gray().italic()),
        ];

        let popup = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Alert"))
            .style(Style::default().fg(ACCENT))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(popup, popup_area);
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(70, 70, area);
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled("GPA Calculator Help", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled("Inputs:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  Tab / Shift+Tab - Switch between fields and the class list"),
            Line::from("  Enter - Calculate"),
            Line::from(""),
            Line::from(Span::styled("Semester Classes:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  ↑/k ↓/j - Move"),
            Line::from("  a - Add a course"),
            Line::from("  d - Delete the highlighted course"),
            Line::from("  D - Delete every course with the highlighted name"),
            Line::from("  X - Delete all courses"),
            Line::from("  c - Calculate"),
            Line::from(""),
            Line::from(Span::styled("Global:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  Ctrl+C / Esc - Quit"),
            Line::from(""),
            Line::from("Press any key to close help..."),
        ];

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        frame.render_widget(help, popup_area);
    }

    /// Helper to create centered rectangle
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

/// "1 Credit Hour" / "3 Credit Hours"
pub fn credit_hours_label(credit_hours: u32) -> String {
    if credit_hours == 1 {
        "1 Credit Hour".to_string()
    } else {
        format!("{} Credit Hours", credit_hours)
    }
}
