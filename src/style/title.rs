use std::borrow::Cow;

use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};

use super::{ACCENT, Font};

/// Appearance of the field title, both inline and floating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyle {
    text: Cow<'static, str>,
    #[serde(default)]
    font: Font,
    #[serde(default = "default_floating_font")]
    floating_font: Font,
    #[serde(default = "default_color")]
    color: Color,
    #[serde(default = "default_floating_color")]
    floating_color: Color,
}

fn default_floating_font() -> Font {
    Font::Footnote
}

fn default_color() -> Color {
    Color::Gray
}

fn default_floating_color() -> Color {
    ACCENT
}

impl TitleStyle {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            font: Font::Body,
            floating_font: default_floating_font(),
            color: default_color(),
            floating_color: default_floating_color(),
        }
    }

    pub fn with_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_floating_font(mut self, font: Font) -> Self {
        self.floating_font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_floating_color(mut self, color: Color) -> Self {
        self.floating_color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Font used once the label has floated above the input.
    pub fn floating_font(&self) -> Font {
        self.floating_font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Color used once the label has floated above the input. It is also the
    /// border color of an active field without error.
    pub fn floating_color(&self) -> Color {
        self.floating_color
    }

    pub(crate) fn inline_style(&self) -> Style {
        self.font.apply(Style::default().fg(self.color))
    }

    pub(crate) fn floating_style(&self) -> Style {
        self.floating_font.apply(Style::default().fg(self.floating_color))
    }
}
