use std::borrow::Cow;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::style::{ErrorStyle, TitleStyle};

/// Everything a caller decides about one field's appearance.
///
/// A config is a value: builder methods return a new config rather than
/// mutating one that a field already holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    #[serde(default = "default_border_color")]
    border_color: Color,
    #[serde(default = "default_background_color")]
    background_color: Color,
    #[serde(default = "default_show_clear_button")]
    show_clear_button: bool,
    title: TitleStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorStyle>,
}

fn default_border_color() -> Color {
    Color::DarkGray
}

fn default_background_color() -> Color {
    Color::Reset
}

fn default_show_clear_button() -> bool {
    true
}

impl FieldConfig {
    pub fn new(title: TitleStyle) -> Self {
        Self {
            border_color: default_border_color(),
            background_color: default_background_color(),
            show_clear_button: default_show_clear_button(),
            title,
            placeholder: None,
            error: None,
        }
    }

    /// Shorthand for a config whose title only overrides the text.
    pub fn titled(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(TitleStyle::new(text))
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn with_title(mut self, title: TitleStyle) -> Self {
        self.title = title;
        self
    }

    /// Prompt shown in the revealed input while the text is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_error(mut self, error: Option<ErrorStyle>) -> Self {
        self.error = error;
        self
    }

    /// Border color of an idle, empty, error-free field.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn show_clear_button(&self) -> bool {
        self.show_clear_button
    }

    pub fn title(&self) -> &TitleStyle {
        &self.title
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn error(&self) -> Option<&ErrorStyle> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
