use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use floatfield::{ErrorStyle, FieldConfig, FloatingLabelTextField, TextBinding};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    keymap::{self, KeyCommand},
    terminal::FormTerminal,
    validation::email_error,
};

const HELP: &str = "Tab/↑↓ move • Esc leave field • Ctrl+U clear • Ctrl+S submit • Ctrl+Q quit";

/// A field on the demo form together with the config it was created from.
pub struct FormField {
    pub binding: TextBinding,
    base: FieldConfig,
    fixed_error: Option<ErrorStyle>,
    field: FloatingLabelTextField,
}

impl FormField {
    pub fn new(binding: TextBinding, base: FieldConfig) -> Self {
        let fixed_error = base.error().cloned();
        let field = FloatingLabelTextField::new(binding.clone(), base.clone());
        Self {
            binding,
            base,
            fixed_error,
            field,
        }
    }

    pub fn title(&self) -> &str {
        self.base.title().text()
    }

    fn revalidate(&mut self, validate_email: bool) {
        let error = if validate_email {
            self.binding.with(email_error)
        } else {
            None
        };
        let error = error.or_else(|| self.fixed_error.clone());
        if self.field.config().error() != error.as_ref() {
            self.field.set_config(self.base.clone().with_error(error));
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub tick_rate: Duration,
    pub validate_email: bool,
}

pub enum Outcome {
    Submitted,
    Cancelled,
}

pub struct App {
    fields: Vec<FormField>,
    focused: Option<usize>,
    options: AppOptions,
    outcome: Option<Outcome>,
}

impl App {
    pub fn new(fields: Vec<FormField>, options: AppOptions) -> Self {
        let mut app = Self {
            fields,
            focused: None,
            options,
            outcome: None,
        };
        for field in &mut app.fields {
            field.revalidate(options.validate_email);
        }
        app
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn run(&mut self) -> Result<Outcome> {
        let mut terminal = FormTerminal::enter()?;
        loop {
            let now = Instant::now();
            self.tick(now);
            terminal.draw(|frame| self.draw(frame, now))?;
            if let Some(outcome) = self.outcome.take() {
                return Ok(outcome);
            }
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => self.handle_key(key, now),
                Event::Mouse(mouse) => self.handle_mouse(&mouse, now),
                Event::Resize(width, height) => terminal.resize(width, height)?,
                // The terminal window lost focus; so does the form.
                Event::FocusLost => self.focus(None, now),
                Event::FocusGained | Event::Paste(_) => {}
            }
        }
    }

    /// Fire due focus requests and grant them.
    fn tick(&mut self, now: Instant) {
        for index in 0..self.fields.len() {
            let Some(request) = self.fields[index].field.tick(now) else {
                continue;
            };
            if request.focused {
                self.focus(Some(index), now);
            } else if self.focused == Some(index) {
                self.focus(None, now);
            }
        }
    }

    fn focus(&mut self, target: Option<usize>, now: Instant) {
        if self.focused == target {
            return;
        }
        if let Some(previous) = self.focused.take() {
            self.fields[previous].field.focus_changed(false, now);
        }
        if let Some(index) = target {
            tracing::debug!(field = self.fields[index].title(), "focus granted");
            self.fields[index].field.focus_changed(true, now);
        }
        self.focused = target;
    }

    fn step_focus(&mut self, delta: isize, now: Instant) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        let next = match self.focused {
            Some(index) => (index as isize + delta).rem_euclid(len as isize) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.focus(Some(next), now);
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match keymap::classify(&key) {
            KeyCommand::Submit => self.outcome = Some(Outcome::Submitted),
            KeyCommand::Quit => self.outcome = Some(Outcome::Cancelled),
            KeyCommand::NextField => self.step_focus(1, now),
            KeyCommand::PrevField => self.step_focus(-1, now),
            KeyCommand::Blur => self.focus(None, now),
            KeyCommand::Edit(event) => {
                let validate_email = self.options.validate_email;
                if let Some(index) = self.focused {
                    let field = &mut self.fields[index];
                    if field.field.handle_key(&event).consumed() {
                        field.revalidate(validate_email);
                    }
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let validate_email = self.options.validate_email;
        let position = Position::new(mouse.column, mouse.row);
        let hit = self.fields.iter().position(|field| {
            field
                .field
                .layout()
                .is_some_and(|layout| layout.hit(position).is_some())
        });
        let Some(index) = hit else {
            // Pressing outside every field takes focus away.
            self.focus(None, now);
            return;
        };
        let form_field = &mut self.fields[index];
        let handled = form_field.field.handle_mouse(mouse, now);
        form_field.revalidate(validate_email);
        if !handled && self.focused != Some(index) {
            // The input is already on screen; a press on it focuses it
            // directly.
            self.focus(Some(index), now);
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>, now: Instant) {
        let area = frame.area();
        let width = area.width.saturating_sub(2);
        let mut constraints = self
            .fields
            .iter()
            .map(|field| Constraint::Length(field.field.height(width, now)))
            .collect::<Vec<_>>();
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints)
            .horizontal_margin(1)
            .split(area);

        for (field, row) in self.fields.iter_mut().zip(rows.iter()) {
            field.field.render(frame, *row, now);
        }

        let footer = Paragraph::new(Line::from(HELP)).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, rows[rows.len() - 1]);
    }
}
