use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

/// Text styles a field can use for its label and error text.
///
/// Terminals have a single glyph size, so each font is rendered as a fixed
/// combination of text modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Font {
    LargeTitle,
    Title,
    Headline,
    #[default]
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption,
}

impl Font {
    pub fn modifier(self) -> Modifier {
        match self {
            Font::LargeTitle => Modifier::BOLD | Modifier::UNDERLINED,
            Font::Title | Font::Headline => Modifier::BOLD,
            Font::Body | Font::Callout => Modifier::empty(),
            Font::Subheadline => Modifier::ITALIC,
            Font::Footnote => Modifier::DIM,
            Font::Caption => Modifier::DIM | Modifier::ITALIC,
        }
    }

    /// Applies this font on top of `style`.
    pub fn apply(self, style: Style) -> Style {
        style.add_modifier(self.modifier())
    }
}
