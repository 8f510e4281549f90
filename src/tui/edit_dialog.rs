//! Three-step edit prompt: title, then due date, then priority.
//!
//! Each step starts from the task's current value. Backing out of any step
//! abandons the whole edit.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use super::{centered, priority_color, FOCUS_COLOR, MUTED_FG_COLOR, POPUP_BG, TEXT_FG_COLOR};
use crate::tasks::{Priority, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EditStep {
    Title,
    DueDate,
    Priority,
}

impl EditStep {
    fn prompt(self) -> &'static str {
        match self {
            EditStep::Title => "Edit task:",
            EditStep::DueDate => "Edit date (yyyy-MM-dd):",
            EditStep::Priority => "Change priority:",
        }
    }

    fn number(self) -> u8 {
        match self {
            EditStep::Title => 1,
            EditStep::DueDate => 2,
            EditStep::Priority => 3,
        }
    }
}

#[derive(Debug)]
pub struct EditDialog {
    /// Position of the task being edited.
    pub index: usize,
    pub step: EditStep,
    pub title: String,
    pub due_date: String,
    pub priority: Priority,
}

impl EditDialog {
    pub fn new(index: usize, task: &Task) -> Self {
        Self {
            index,
            step: EditStep::Title,
            title: task.title.clone(),
            due_date: task.due_date_label(),
            priority: task.priority,
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self.step {
            EditStep::Title => self.title.push(c),
            EditStep::DueDate => self.due_date.push(c),
            EditStep::Priority if c == ' ' => self.priority = self.priority.next(),
            EditStep::Priority => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.step {
            EditStep::Title => {
                self.title.pop();
            }
            EditStep::DueDate => {
                self.due_date.pop();
            }
            EditStep::Priority => {}
        }
    }

    pub fn cycle_priority(&mut self, forward: bool) {
        if self.step != EditStep::Priority {
            return;
        }
        self.priority = if forward {
            self.priority.next()
        } else {
            self.priority.previous()
        };
    }

    /// Accepts the current step. Returns true once the last step is accepted.
    pub fn advance(&mut self) -> bool {
        match self.step {
            EditStep::Title => {
                self.step = EditStep::DueDate;
                false
            }
            EditStep::DueDate => {
                self.step = EditStep::Priority;
                false
            }
            EditStep::Priority => true,
        }
    }

    /// Values the user accepted. When the dialog was abandoned, the current
    /// step and every later one come back as `None`.
    pub fn answers(&self, finished: bool) -> (Option<&str>, Option<&str>, Option<Priority>) {
        let accepted = |step: EditStep| finished || step < self.step;
        (
            accepted(EditStep::Title).then_some(self.title.as_str()),
            accepted(EditStep::DueDate).then_some(self.due_date.as_str()),
            accepted(EditStep::Priority).then_some(self.priority),
        )
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 50, 8);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(Line::from(format!(" Edit Task ({}/3) ", self.step.number())).centered())
            .border_style(Style::new().fg(FOCUS_COLOR))
            .style(Style::new().bg(POPUP_BG));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [prompt_area, value_area, _, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled(
            self.step.prompt(),
            Style::new().fg(MUTED_FG_COLOR),
        ))
        .render(prompt_area, buf);

        let cursor = Span::styled("█", Style::new().fg(FOCUS_COLOR));
        let value = match self.step {
            EditStep::Title => Line::from(vec![
                Span::styled(self.title.as_str(), Style::new().fg(TEXT_FG_COLOR)),
                cursor,
            ]),
            EditStep::DueDate => Line::from(vec![
                Span::styled(self.due_date.as_str(), Style::new().fg(TEXT_FG_COLOR)),
                cursor,
            ]),
            EditStep::Priority => Line::from(vec![
                Span::styled("◀ ", Style::new().fg(MUTED_FG_COLOR)),
                Span::styled(
                    self.priority.as_str(),
                    Style::new()
                        .fg(priority_color(self.priority))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::new().fg(MUTED_FG_COLOR)),
            ]),
        };
        Paragraph::new(value).render(value_area, buf);

        let accept = if self.step == EditStep::Priority {
            " save  "
        } else {
            " next  "
        };
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::new().fg(FOCUS_COLOR)),
            Span::styled(accept, Style::new().fg(MUTED_FG_COLOR)),
            Span::styled("Esc", Style::new().fg(FOCUS_COLOR)),
            Span::styled(" cancel", Style::new().fg(MUTED_FG_COLOR)),
        ]))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}
