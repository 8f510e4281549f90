use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::{priority_color, BORDER_COLOR, FOCUS_COLOR, MUTED_FG_COLOR, TEXT_FG_COLOR};
use crate::tasks::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    DueDate,
    Priority,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::DueDate,
            FormField::DueDate => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::DueDate => FormField::Title,
            FormField::Priority => FormField::DueDate,
        }
    }
}

/// The "New Task" input pane.
#[derive(Debug, Default)]
pub struct TaskForm {
    pub title: String,
    pub due_date: String,
    pub priority: Priority,
    pub focus: FormField,
}

impl TaskForm {
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::DueDate => self.due_date.push(c),
            FormField::Priority if c == ' ' => self.priority = self.priority.next(),
            FormField::Priority => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::DueDate => {
                self.due_date.pop();
            }
            FormField::Priority => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Only acts while the priority field has focus.
    pub fn cycle_priority(&mut self, forward: bool) {
        if self.focus != FormField::Priority {
            return;
        }
        self.priority = if forward {
            self.priority.next()
        } else {
            self.priority.previous()
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn value_line<'a>(&self, field: FormField, value: &'a str, focused: bool) -> Line<'a> {
        let mut spans = vec![Span::styled(value, Style::new().fg(TEXT_FG_COLOR))];
        if focused && self.focus == field {
            spans.push(Span::styled("█", Style::new().fg(FOCUS_COLOR)));
        }
        Line::from(spans)
    }

    fn label<'a>(&self, field: FormField, text: &'a str, focused: bool) -> Line<'a> {
        let style = if focused && self.focus == field {
            Style::new().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(MUTED_FG_COLOR)
        };
        Line::styled(text, style)
    }

    /// `focused` is true while keystrokes go to the form.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border = if focused { FOCUS_COLOR } else { BORDER_COLOR };
        let block = Block::bordered()
            .title(Line::from(" New Task ").centered())
            .border_style(Style::new().fg(border));

        let priority = Line::from(vec![
            Span::styled("◀ ", Style::new().fg(MUTED_FG_COLOR)),
            Span::styled(
                self.priority.as_str(),
                Style::new()
                    .fg(priority_color(self.priority))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::new().fg(MUTED_FG_COLOR)),
        ]);

        let lines = vec![
            self.label(FormField::Title, "Task:", focused),
            self.value_line(FormField::Title, &self.title, focused),
            Line::raw(""),
            self.label(FormField::DueDate, "Due Date (yyyy-MM-dd):", focused),
            self.value_line(FormField::DueDate, &self.due_date, focused),
            Line::raw(""),
            self.label(FormField::Priority, "Priority:", focused),
            priority,
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
