use std::{mem, time::Duration};

use anyhow::Result;
use crossterm::event::Event;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind::SLATE, Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget,
        Widget,
    },
    DefaultTerminal, Frame,
};
use tracing::{debug, info, warn};

use super::{
    edit_dialog::EditDialog,
    form::TaskForm,
    priority_color,
    toast::{self, Toast},
    BORDER_COLOR, ERROR_COLOR, MUTED_FG_COLOR, SUCCESS_COLOR, TEXT_FG_COLOR,
};
use crate::error::TaskError;
use crate::tasks::{EditOutcome, Task, TaskList};

const TICK_RATE: Duration = Duration::from_millis(100);

const NORMAL_ROW_BG: Color = SLATE.c950;
const ALT_ROW_BG_COLOR: Color = SLATE.c900;
const SELECTED_STYLE: Style = Style::new().bg(SLATE.c800).add_modifier(Modifier::BOLD);
const COMPLETED_TITLE_FG: Color = SLATE.c400;
const PENDING_FG: Color = ERROR_COLOR;

/// Where keystrokes go.
#[derive(Debug)]
pub enum Mode {
    Browse,
    Compose,
    Editing(EditDialog),
}

pub struct App {
    tasks: TaskList,
    state: ListState,
    form: TaskForm,
    mode: Mode,
    toast: Option<Toast>,
    toast_duration: Duration,
    exit: bool,
}

const fn alternate_colors(i: usize) -> Color {
    if i % 2 == 0 {
        NORMAL_ROW_BG
    } else {
        ALT_ROW_BG_COLOR
    }
}

impl App {
    pub fn new(tasks: TaskList, toast_duration: Duration) -> Self {
        Self {
            tasks,
            state: ListState::default(),
            form: TaskForm::default(),
            mode: Mode::Browse,
            toast: None,
            toast_duration,
            exit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            self.update_toast();
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    /// Waits at most one tick so expired toasts get cleared without input.
    fn handle_events(&mut self) -> Result<()> {
        if !event::poll(TICK_RATE)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => Ok(()),
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            if key_event.code == KeyCode::Char('c') {
                self.exit();
            }
            return Ok(());
        }
        match self.mode {
            Mode::Browse => self.handle_browse_key(key_event),
            Mode::Compose => self.handle_compose_key(key_event),
            Mode::Editing(_) => self.handle_edit_key(key_event),
        }
        Ok(())
    }

    fn handle_browse_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit(),
            KeyCode::Char('h') => self.select_none(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            KeyCode::Char('a') | KeyCode::Char('i') => self.mode = Mode::Compose,
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('t') | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('s') => self.save(),
            _ => {}
        }
    }

    fn handle_compose_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => self.add_task(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_previous(),
            KeyCode::Left => self.form.cycle_priority(false),
            KeyCode::Right => self.form.cycle_priority(true),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key_event: KeyEvent) {
        let Mode::Editing(dialog) = &mut self.mode else {
            return;
        };
        match key_event.code {
            KeyCode::Esc => self.finish_edit(false),
            KeyCode::Enter => {
                if dialog.advance() {
                    self.finish_edit(true);
                }
            }
            KeyCode::Left => dialog.cycle_priority(false),
            KeyCode::Right => dialog.cycle_priority(true),
            KeyCode::Backspace => dialog.backspace(),
            KeyCode::Char(c) => dialog.input_char(c),
            _ => {}
        }
    }

    fn exit(&mut self) {
        self.exit = true;
    }

    /// The selected row, if it still points at a task.
    fn selected(&self) -> Option<usize> {
        self.state.selected().filter(|i| *i < self.tasks.len())
    }

    fn select_none(&mut self) {
        self.state.select(None);
    }

    fn select_next(&mut self) {
        let Some(last) = self.tasks.len().checked_sub(1) else {
            return;
        };
        let next = self.selected().map_or(0, |i| (i + 1).min(last));
        self.state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let Some(last) = self.tasks.len().checked_sub(1) else {
            return;
        };
        let previous = self.selected().map_or(last, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }

    fn select_first(&mut self) {
        if !self.tasks.is_empty() {
            self.state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if let Some(last) = self.tasks.len().checked_sub(1) {
            self.state.select(Some(last));
        }
    }

    /// Keeps the selection on the same row, or the new last row.
    fn clamp_selection(&mut self) {
        let clamped = match (self.state.selected(), self.tasks.len().checked_sub(1)) {
            (Some(i), Some(last)) => Some(i.min(last)),
            _ => None,
        };
        self.state.select(clamped);
    }

    fn notify_success(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::success(message, self.toast_duration));
    }

    fn notify_error(&mut self, err: TaskError) {
        warn!(%err, "action rejected");
        self.toast = Some(Toast::error(err.to_string(), self.toast_duration));
    }

    fn update_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    fn add_task(&mut self) {
        match self
            .tasks
            .add(&self.form.title, &self.form.due_date, self.form.priority)
        {
            Ok(task) => {
                info!(title = %task.title, due = %task.due_date, priority = %task.priority, "task added");
                self.form.clear();
                self.mode = Mode::Browse;
                self.notify_success("Task added ✅");
            }
            Err(err) => self.notify_error(err),
        }
    }

    fn remove_selected(&mut self) {
        let selected = self.selected();
        match self.tasks.remove(selected) {
            Ok(task) => {
                info!(title = %task.title, "task removed");
                self.clamp_selection();
                self.notify_success("Task removed 🗑️");
            }
            Err(err) => self.notify_error(err),
        }
    }

    fn start_edit(&mut self) {
        let Some((index, task)) = self
            .selected()
            .and_then(|i| self.tasks.get(i).map(|task| (i, task)))
        else {
            return self.notify_error(TaskError::NoSelection);
        };
        self.mode = Mode::Editing(EditDialog::new(index, task));
    }

    fn finish_edit(&mut self, finished: bool) {
        let Mode::Editing(dialog) = mem::replace(&mut self.mode, Mode::Browse) else {
            return;
        };
        let (title, due, priority) = dialog.answers(finished);
        match self.tasks.edit(Some(dialog.index), title, due, priority) {
            Ok(EditOutcome::Updated) => {
                info!(index = dialog.index, "task updated");
                self.notify_success("Task updated ✏️");
            }
            Ok(EditOutcome::Cancelled) => debug!(index = dialog.index, "edit discarded"),
            Err(err) => self.notify_error(err),
        }
    }

    fn toggle_selected(&mut self) {
        let selected = self.selected();
        match self.tasks.toggle_completed(selected) {
            Ok(completed) => {
                info!(index = ?selected, completed, "status changed");
                if completed {
                    self.notify_success("Marked complete ✅");
                } else {
                    self.notify_success("Marked pending ⏳");
                }
            }
            Err(err) => self.notify_error(err),
        }
    }

    /// Tasks only live in memory; saving just acknowledges the request.
    fn save(&mut self) {
        info!(count = self.tasks.len(), "save requested, tasks stay in memory");
        self.notify_success("Tasks saved in memory 💾");
    }

    fn render_header(area: Rect, buf: &mut Buffer) {
        Paragraph::new("📝 Smart To-Do List")
            .bold()
            .centered()
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let hints: &[(&str, &str)] = match self.mode {
            Mode::Browse => &[
                ("a", "add"),
                ("e", "edit"),
                ("d", "remove"),
                ("t", "status"),
                ("s", "save"),
                ("j/k", "move"),
                ("q", "quit"),
            ],
            Mode::Compose => &[
                ("Tab", "next field"),
                ("←/→", "priority"),
                ("Enter", "add"),
                ("Esc", "back"),
            ],
            Mode::Editing(_) => &[("Enter", "next"), ("Esc", "cancel")],
        };
        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, action)| [format!(" <{key}>").blue().bold(), format!(" {action}").into()])
            .collect();
        Paragraph::new(Line::from(spans))
            .centered()
            .render(area, buf);
    }

    fn render_list(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .title(Line::raw(format!(" All Tasks ({}) ", self.tasks.len())).centered())
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::new().fg(BORDER_COLOR))
            .bg(NORMAL_ROW_BG);

        if self.tasks.is_empty() {
            Paragraph::new(Line::styled(
                "No tasks yet. Press a to add one.",
                Style::new().fg(MUTED_FG_COLOR),
            ))
            .centered()
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks
            .items()
            .iter()
            .enumerate()
            .map(|(i, task)| ListItem::from(task).bg(alternate_colors(i)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(SELECTED_STYLE)
            .highlight_symbol(">")
            .highlight_spacing(HighlightSpacing::Always);

        // `Widget` and `StatefulWidget` both define `render`.
        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [form_area, list_area] =
            Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)]).areas(main_area);

        App::render_header(header_area, buf);
        self.form
            .render(form_area, buf, matches!(self.mode, Mode::Compose));
        self.render_list(list_area, buf);
        self.render_footer(footer_area, buf);

        if let Mode::Editing(dialog) = &self.mode {
            dialog.render(area, buf);
        }
        if let Some(toast) = &self.toast {
            toast::render(toast, area, buf);
        }
    }
}

impl From<&Task> for ListItem<'_> {
    fn from(task: &Task) -> Self {
        let title_style = if task.completed {
            Style::new()
                .fg(COMPLETED_TITLE_FG)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::new().fg(TEXT_FG_COLOR).add_modifier(Modifier::BOLD)
        };
        let (status_icon, status_color) = if task.completed {
            ("✅", SUCCESS_COLOR)
        } else {
            ("⏳", PENDING_FG)
        };

        let title = Line::styled(format!(" {}", task.title), title_style);
        let details = Line::from(vec![
            Span::styled(
                format!(" 📅 {}", task.due_date_label()),
                Style::new().fg(MUTED_FG_COLOR),
            ),
            Span::raw("   "),
            Span::styled(
                format!("⚡ {} Priority", task.priority),
                Style::new()
                    .fg(priority_color(task.priority))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{status_icon} {}", task.status_label()),
                Style::new().fg(status_color),
            ),
        ]);
        ListItem::new(vec![title, details])
    }
}
