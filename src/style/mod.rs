mod error;
mod font;
mod title;

use ratatui::style::Color;

pub use error::ErrorStyle;
pub use font::Font;
pub use title::TitleStyle;

/// Accent color of the floating label and of an active border.
pub const ACCENT: Color = Color::Cyan;
