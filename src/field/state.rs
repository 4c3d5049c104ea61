use std::time::Instant;

use ratatui::style::Color;

use super::focus::{DeferredFocus, FocusRequest};
use crate::{config::FieldConfig, presentation::LabelTransition, style::Font};

pub const THIN_BORDER: f32 = 1.0;
pub const THICK_BORDER: f32 = 2.0;

/// Runtime state of one mounted field.
///
/// `highlighted` is the field's own notion of being active. It leads the
/// host focus after a tap and follows it on every real focus change.
#[derive(Debug, Default)]
pub struct FieldState {
    highlighted: bool,
    focused: bool,
    focus_task: DeferredFocus,
    label: LabelTransition,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn input_visible(&self, text: &str) -> bool {
        input_visible(self.highlighted, text)
    }

    /// Tap on the collapsed field. Returns `false` without touching state
    /// when the input is already on screen.
    pub fn tap(&mut self, text: &str, now: Instant) -> bool {
        if self.input_visible(text) {
            return false;
        }
        self.set_highlighted(true, now);
        true
    }

    /// Host focus moved to or away from this field.
    pub fn focus_changed(&mut self, focused: bool, now: Instant) -> bool {
        if self.focused == focused {
            return false;
        }
        tracing::debug!(focused, "field focus changed");
        self.focused = focused;
        self.set_highlighted(focused, now);
        true
    }

    fn set_highlighted(&mut self, highlighted: bool, now: Instant) {
        if self.highlighted == highlighted {
            return;
        }
        tracing::debug!(highlighted, "field highlight changed");
        self.highlighted = highlighted;
        if highlighted {
            self.focus_task.schedule(now);
        }
    }

    /// Fires the focus requests whose delay has elapsed. The request carries
    /// the highlight state as of `now`.
    pub fn poll_focus(&mut self, now: Instant) -> Option<FocusRequest> {
        let fired = self.focus_task.take_due(now);
        if fired == 0 {
            return None;
        }
        tracing::debug!(fired, focused = self.highlighted, "focus request fired");
        Some(FocusRequest {
            focused: self.highlighted,
        })
    }

    pub fn pending_focus_requests(&self) -> usize {
        self.focus_task.pending()
    }

    pub fn next_focus_deadline(&self) -> Option<Instant> {
        self.focus_task.next_deadline()
    }

    pub fn cancel_pending_focus(&mut self) {
        self.focus_task.cancel();
    }

    pub fn attributes(&self, config: &FieldConfig, text: &str) -> FieldAttributes {
        FieldAttributes::derive(self.highlighted, config, text)
    }

    pub(crate) fn observe_label(&mut self, text: &str, now: Instant) {
        let expanded = self.input_visible(text);
        self.label.observe(expanded, now);
    }

    pub(crate) fn label_transition(&self) -> &LabelTransition {
        &self.label
    }
}

/// Presentation values derived from state, config and text on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldAttributes {
    pub input_visible: bool,
    pub clear_button_visible: bool,
    pub border_color: Color,
    pub border_width: f32,
    pub label_font: Font,
    pub label_color: Color,
}

impl FieldAttributes {
    pub fn derive(highlighted: bool, config: &FieldConfig, text: &str) -> Self {
        let has_text = !text.is_empty();
        let input_visible = input_visible(highlighted, text);
        let title = config.title();

        let border_color = match config.error() {
            Some(error) => error.color(),
            None if highlighted || has_text => title.floating_color(),
            None => config.border_color(),
        };
        let border_width = if highlighted && has_text && config.has_error() {
            THICK_BORDER
        } else {
            THIN_BORDER
        };
        let (label_font, label_color) = if input_visible {
            (title.floating_font(), title.floating_color())
        } else {
            (title.font(), title.color())
        };

        Self {
            input_visible,
            clear_button_visible: config.show_clear_button() && has_text,
            border_color,
            border_width,
            label_font,
            label_color,
        }
    }
}

fn input_visible(highlighted: bool, text: &str) -> bool {
    highlighted || !text.is_empty()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        field::FOCUS_DELAY,
        style::{ACCENT, ErrorStyle},
    };

    fn email() -> FieldConfig {
        FieldConfig::titled("Email")
    }

    fn email_with_error() -> FieldConfig {
        email().with_error(Some(ErrorStyle::new("💩 is not a valid email address.")))
    }

    #[test]
    fn non_empty_text_always_shows_input() {
        let state = FieldState::new();
        for text in ["a", "me@red.to", "💩", " "] {
            assert!(state.input_visible(text), "{text:?} should expand");
        }
    }

    #[test]
    fn idle_empty_field_is_collapsed() {
        let state = FieldState::new();
        assert!(!state.input_visible(""));
        let attrs = state.attributes(&email(), "");
        assert!(!attrs.input_visible);
        assert!(!attrs.clear_button_visible);
        assert_eq!(attrs.border_color, Color::DarkGray);
        assert_eq!(attrs.border_width, THIN_BORDER);
        assert_eq!(attrs.label_font, Font::Body);
        assert_eq!(attrs.label_color, Color::Gray);
    }

    #[test]
    fn tap_highlights_and_schedules_one_focus_request() {
        let start = Instant::now();
        let mut state = FieldState::new();
        assert!(state.tap("", start));
        assert!(state.is_highlighted());
        assert!(!state.is_focused());
        assert_eq!(state.pending_focus_requests(), 1);
        assert_eq!(state.next_focus_deadline(), Some(start + FOCUS_DELAY));

        assert_eq!(state.poll_focus(start + Duration::from_millis(10)), None);
        assert_eq!(
            state.poll_focus(start + FOCUS_DELAY),
            Some(FocusRequest { focused: true })
        );
        assert_eq!(state.poll_focus(start + FOCUS_DELAY * 2), None);
    }

    #[test]
    fn tap_is_ignored_when_input_visible() {
        let start = Instant::now();
        let mut state = FieldState::new();
        assert!(!state.tap("me@red.to", start));
        assert!(!state.is_highlighted());
        assert_eq!(state.pending_focus_requests(), 0);

        assert!(state.tap("", start));
        assert!(!state.tap("", start));
        assert_eq!(state.pending_focus_requests(), 1);
    }

    #[test]
    fn focus_request_reads_latest_highlight() {
        let start = Instant::now();
        let mut state = FieldState::new();
        state.tap("", start);
        state.focus_changed(true, start + Duration::from_millis(20));
        state.focus_changed(false, start + Duration::from_millis(40));
        assert!(!state.is_highlighted());
        assert_eq!(
            state.poll_focus(start + FOCUS_DELAY),
            Some(FocusRequest { focused: false })
        );
    }

    #[test]
    fn focus_sync_drives_highlight() {
        let start = Instant::now();
        let mut state = FieldState::new();
        assert!(state.focus_changed(true, start));
        assert!(state.is_highlighted());
        assert_eq!(state.pending_focus_requests(), 1);
        assert!(!state.focus_changed(true, start));

        assert!(state.focus_changed(false, start));
        assert!(!state.is_highlighted());
        assert!(!state.input_visible(""));
    }

    #[test]
    fn losing_focus_keeps_filled_field_expanded() {
        let start = Instant::now();
        let mut state = FieldState::new();
        state.focus_changed(true, start);
        state.focus_changed(false, start);
        assert!(state.input_visible("me@red.to"));
    }

    #[test]
    fn each_rising_edge_schedules_its_own_request() {
        let start = Instant::now();
        let mut state = FieldState::new();
        state.tap("", start);
        state.focus_changed(true, start);
        state.focus_changed(false, start);
        state.tap("", start + Duration::from_millis(30));
        assert_eq!(state.pending_focus_requests(), 2);
        assert!(state.poll_focus(start + FOCUS_DELAY).is_some());
        assert_eq!(state.pending_focus_requests(), 1);
    }

    #[test]
    fn cancel_prevents_firing() {
        let start = Instant::now();
        let mut state = FieldState::new();
        state.tap("", start);
        state.cancel_pending_focus();
        assert_eq!(state.poll_focus(start + FOCUS_DELAY), None);
    }

    #[test]
    fn highlight_uses_floating_color_border() {
        let start = Instant::now();
        let mut state = FieldState::new();
        state.tap("", start);
        let attrs = state.attributes(&email(), "");
        assert!(attrs.input_visible);
        assert_eq!(attrs.border_color, ACCENT);
        assert_eq!(attrs.label_font, Font::Footnote);
        assert_eq!(attrs.label_color, ACCENT);
    }

    #[test]
    fn error_color_overrides_border() {
        let start = Instant::now();
        let mut state = FieldState::new();
        let config = email_with_error();
        assert_eq!(state.attributes(&config, "").border_color, Color::Red);
        assert_eq!(state.attributes(&config, "💩").border_color, Color::Red);
        state.focus_changed(true, start);
        assert_eq!(state.attributes(&config, "💩").border_color, Color::Red);
    }

    #[test]
    fn thick_border_needs_highlight_text_and_error() {
        let start = Instant::now();
        let plain = email();
        let error = email_with_error();
        for highlighted in [false, true] {
            let mut state = FieldState::new();
            if highlighted {
                state.focus_changed(true, start);
            }
            for text in ["", "💩"] {
                for config in [&plain, &error] {
                    let expected = if highlighted && !text.is_empty() && config.has_error() {
                        THICK_BORDER
                    } else {
                        THIN_BORDER
                    };
                    assert_eq!(state.attributes(config, text).border_width, expected);
                }
            }
        }
    }

    #[test]
    fn clear_button_follows_flag_and_text() {
        let state = FieldState::new();
        assert!(state.attributes(&email(), "me@red.to").clear_button_visible);
        let hidden = email().with_clear_button(false);
        assert!(!state.attributes(&hidden, "me@red.to").clear_button_visible);
        assert!(!state.attributes(&email(), "").clear_button_visible);
    }
}
