use std::time::Instant;

use ratatui::{
    layout::Position,
    style::{Color, Modifier, Style},
    widgets::Padding,
};

use super::animation::blend_style;
use super::layout::FieldLayout;
use crate::{
    config::FieldConfig,
    field::{FieldState, THICK_BORDER},
};

/// Padding around the label while the input is hidden.
pub const COLLAPSED_PADDING: Padding = Padding::new(2, 2, 1, 1);
/// Padding once the input is shown. One row less on top keeps the total
/// height unchanged when the input row appears.
pub const EXPANDED_PADDING: Padding = Padding::new(2, 2, 0, 1);

pub const CLEAR_GLYPH: &str = "×";

/// A run of text with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    pub style: Style,
    /// Prompt drawn in place of empty text.
    pub placeholder: Option<Segment>,
    /// Whether the terminal cursor belongs at the end of the input.
    pub cursor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderView {
    pub color: Color,
    pub width: f32,
}

impl BorderView {
    pub fn is_thick(&self) -> bool {
        self.width >= THICK_BORDER
    }
}

/// Everything needed to draw a field for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub label: Segment,
    pub input: Option<InputView>,
    pub clear_button: Option<Segment>,
    pub error: Option<Segment>,
    pub border: BorderView,
    pub background: Color,
    pub padding: Padding,
}

/// Builds the view of a field. Pure: the same inputs give the same view.
pub fn render(state: &FieldState, config: &FieldConfig, text: &str, now: Instant) -> FieldView {
    let attrs = state.attributes(config, text);
    let title = config.title();

    let (from, to) = if attrs.input_visible {
        (title.inline_style(), title.floating_style())
    } else {
        (title.floating_style(), title.inline_style())
    };
    let progress = state.label_transition().progress(now);
    let label = Segment::new(title.text(), blend_style(from, to, progress));

    let input = attrs.input_visible.then(|| {
        let mut style = Style::default();
        if progress < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }
        let placeholder = config
            .placeholder()
            .filter(|_| text.is_empty())
            .map(|prompt| Segment::new(prompt, placeholder_style()));
        InputView {
            text: text.to_owned(),
            style,
            placeholder,
            cursor: state.is_focused(),
        }
    });

    let clear_button = attrs
        .clear_button_visible
        .then(|| Segment::new(CLEAR_GLYPH, Style::default().fg(Color::Gray)));

    let error = config
        .error()
        .map(|error| Segment::new(error.text(), error.style()));

    FieldView {
        label,
        input,
        clear_button,
        error,
        border: BorderView {
            color: attrs.border_color,
            width: attrs.border_width,
        },
        background: config.background_color(),
        padding: if attrs.input_visible {
            EXPANDED_PADDING
        } else {
            COLLAPSED_PADDING
        },
    }
}

fn placeholder_style() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
}

impl FieldView {
    pub fn is_collapsed(&self) -> bool {
        self.input.is_none()
    }

    /// Terminal cursor position for a focused input laid out by `layout`.
    pub fn cursor_position(&self, layout: &FieldLayout) -> Option<Position> {
        let input = self.input.as_ref().filter(|input| input.cursor)?;
        let rect = layout.input?;
        if rect.width == 0 {
            return None;
        }
        let shown = super::layout::visible_tail(&input.text, rect.width.saturating_sub(1));
        let offset = super::layout::display_width(shown).min(rect.width.saturating_sub(1));
        Some(Position::new(rect.x + offset, rect.y))
    }
}
