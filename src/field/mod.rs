mod binding;
mod focus;
mod input;
mod state;

use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
};

use crate::{
    config::FieldConfig,
    presentation::{self, FieldLayout, FieldView, HitTarget},
};

pub use binding::TextBinding;
pub use focus::{FOCUS_DELAY, FocusRequest};
pub use input::KeyEdit;
pub use state::{FieldAttributes, FieldState, THICK_BORDER, THIN_BORDER};

/// A text input whose title floats above it once the field is active or
/// filled.
///
/// The host owns the text through a [`TextBinding`] and the focus: it feeds
/// taps, focus changes, keys and clock ticks in, and grants the
/// [`FocusRequest`]s that [`tick`](Self::tick) hands back.
#[derive(Debug)]
pub struct FloatingLabelTextField {
    text: TextBinding,
    config: FieldConfig,
    state: FieldState,
    layout: Option<FieldLayout>,
}

impl FloatingLabelTextField {
    pub fn new(text: TextBinding, config: FieldConfig) -> Self {
        Self {
            text,
            config,
            state: FieldState::new(),
            layout: None,
        }
    }

    pub fn text(&self) -> &TextBinding {
        &self.text
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Swap in a new configuration, e.g. after the caller re-validated the
    /// text and produced or removed an error.
    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    pub fn is_highlighted(&self) -> bool {
        self.state.is_highlighted()
    }

    pub fn attributes(&self) -> FieldAttributes {
        self.text.with(|text| self.state.attributes(&self.config, text))
    }

    pub fn tap(&mut self, now: Instant) -> bool {
        let state = &mut self.state;
        self.text.with(|text| state.tap(text, now))
    }

    pub fn focus_changed(&mut self, focused: bool, now: Instant) -> bool {
        self.state.focus_changed(focused, now)
    }

    /// Empties the bound text. Highlight and focus stay as they are.
    pub fn clear(&mut self) {
        tracing::debug!(title = self.config.title().text(), "field cleared");
        self.text.clear();
    }

    /// Advance the field clock. Returns the focus change the field wants
    /// once its deferred request is due.
    pub fn tick(&mut self, now: Instant) -> Option<FocusRequest> {
        self.state.poll_focus(now)
    }

    pub fn cancel_pending_focus(&mut self) {
        self.state.cancel_pending_focus();
    }

    /// Edit the text with a key press. Keys are only taken while focused,
    /// and a backspace on empty text is not an edit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyEdit {
        if !self.state.is_focused() {
            return KeyEdit::Ignored;
        }
        let edit = match input::classify(key) {
            KeyEdit::Inserted(ch) => {
                self.text.update(|text| text.push(ch));
                KeyEdit::Inserted(ch)
            }
            KeyEdit::Deleted => match self.text.update(String::pop) {
                Some(_) => KeyEdit::Deleted,
                None => KeyEdit::Ignored,
            },
            KeyEdit::Cleared => {
                self.clear();
                KeyEdit::Cleared
            }
            KeyEdit::Ignored => KeyEdit::Ignored,
        };
        if edit.consumed() {
            tracing::trace!(?edit, "field edited");
        }
        edit
    }

    /// Route a mouse press using the regions of the last draw.
    pub fn handle_mouse(&mut self, event: &MouseEvent, now: Instant) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let Some(layout) = self.layout else {
            return false;
        };
        match layout.hit(Position::new(event.column, event.row)) {
            Some(HitTarget::ClearButton) => {
                self.clear();
                true
            }
            Some(HitTarget::Container) => self.tap(now),
            None => false,
        }
    }

    /// The view of the field at `now`.
    pub fn view(&mut self, now: Instant) -> FieldView {
        let state = &mut self.state;
        let config = &self.config;
        self.text.with(|text| {
            state.observe_label(text, now);
            presentation::render(state, config, text, now)
        })
    }

    /// Rows the field needs at `width` when drawn at `now`.
    pub fn height(&self, width: u16, now: Instant) -> u16 {
        let view = self
            .text
            .with(|text| presentation::render(&self.state, &self.config, text, now));
        view.height(width)
    }

    /// Draw into `area`, remember the hit regions and place the cursor when
    /// focused.
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect, now: Instant) {
        let view = self.view(now);
        let layout = view.layout(area);
        if let Some(cursor) = view.cursor_position(&layout) {
            frame.set_cursor_position(cursor);
        }
        frame.render_widget(&view, area);
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<&FieldLayout> {
        self.layout.as_ref()
    }
}

impl Drop for FloatingLabelTextField {
    fn drop(&mut self) {
        self.state.cancel_pending_focus();
    }
}
