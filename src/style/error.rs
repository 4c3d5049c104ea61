use std::borrow::Cow;

use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

use super::Font;

/// Appearance of a validation message shown beneath the field.
///
/// The message is produced by the caller; a field holding an `ErrorStyle`
/// is in its error state, and its color also paints the border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorStyle {
    text: Cow<'static, str>,
    #[serde(default = "default_font")]
    font: Font,
    #[serde(default = "default_color")]
    color: Color,
}

fn default_font() -> Font {
    Font::Footnote
}

fn default_color() -> Color {
    Color::Red
}

impl ErrorStyle {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            font: default_font(),
            color: default_color(),
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn style(&self) -> Style {
        self.font.apply(Style::default().fg(self.color))
    }
}
