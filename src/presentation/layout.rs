use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::{Block, BorderType},
};
use textwrap::wrap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::view::{CLEAR_GLYPH, FieldView};

/// Cells between the input and the clear button.
const CLEAR_SPACING: u16 = 2;

/// Screen regions of a drawn field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub container: Rect,
    pub label: Rect,
    pub input: Option<Rect>,
    pub clear_button: Option<Rect>,
    pub error: Option<Rect>,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    ClearButton,
    Container,
}

impl FieldLayout {
    pub fn hit(&self, position: Position) -> Option<HitTarget> {
        let on_clear = self.clear_button.is_some_and(|rect| rect.contains(position));
        if on_clear {
            Some(HitTarget::ClearButton)
        } else if self.container.contains(position) {
            Some(HitTarget::Container)
        } else {
            None
        }
    }
}

impl FieldView {
    pub(crate) fn block(&self) -> Block<'static> {
        let block = Block::bordered()
            .border_style(Style::default().fg(self.border.color))
            .style(Style::default().bg(self.background))
            .padding(self.padding);
        if self.border.is_thick() {
            block.border_type(BorderType::Thick)
        } else {
            block.border_type(BorderType::Rounded)
        }
    }

    fn inner_width(&self, width: u16) -> u16 {
        width
            .saturating_sub(2)
            .saturating_sub(self.padding.left + self.padding.right)
            .max(1)
    }

    pub(crate) fn error_lines(&self, width: u16) -> Vec<String> {
        let Some(error) = &self.error else {
            return Vec::new();
        };
        let mut lines: Vec<String> = wrap(&error.text, usize::from(self.inner_width(width)))
            .into_iter()
            .map(|line| line.into_owned())
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    fn error_rows(&self, width: u16) -> u16 {
        u16::try_from(self.error_lines(width).len()).unwrap_or(u16::MAX)
    }

    /// Rows the field needs when drawn `width` cells wide. Saturates at
    /// `u16::MAX` for errors longer than any terminal.
    pub fn height(&self, width: u16) -> u16 {
        [
            1,
            u16::from(self.input.is_some()),
            self.error_rows(width),
            self.padding.top,
            self.padding.bottom,
        ]
        .into_iter()
        .fold(2, u16::saturating_add)
    }

    pub fn layout(&self, area: Rect) -> FieldLayout {
        let container = Rect {
            height: self.height(area.width).min(area.height),
            ..area
        };
        let inner = self.block().inner(container);
        let error_rows = self.error_rows(area.width);

        let mut constraints = vec![Constraint::Length(1)];
        if self.input.is_some() {
            constraints.push(Constraint::Length(1));
        }
        if error_rows > 0 {
            constraints.push(Constraint::Length(error_rows));
        }
        let rows = Layout::vertical(constraints).split(inner);

        let label = rows[0];
        let mut next = 1;
        let (input, clear_button) = if self.input.is_some() {
            let row = rows[next];
            next += 1;
            if self.clear_button.is_some() {
                let constraints = [
                    Constraint::Min(1),
                    Constraint::Length(display_width(CLEAR_GLYPH)),
                ];
                let columns = Layout::horizontal(constraints)
                    .spacing(CLEAR_SPACING)
                    .split(row);
                (Some(columns[0]), Some(columns[1]))
            } else {
                (Some(row), None)
            }
        } else {
            (None, None)
        };
        let error = (error_rows > 0).then(|| rows[next]);

        FieldLayout {
            container,
            label,
            input,
            clear_button,
            error,
        }
    }
}

pub(crate) fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Longest suffix of `text` that fits in `width` cells.
pub(crate) fn visible_tail(text: &str, width: u16) -> &str {
    let budget = usize::from(width);
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = index;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::{
        config::FieldConfig,
        field::FieldState,
        presentation::render,
        style::ErrorStyle,
    };

    fn view(text: &str, config: &FieldConfig) -> FieldView {
        render(&FieldState::new(), config, text, Instant::now())
    }

    #[test]
    fn height_is_stable_across_expansion() {
        let config = FieldConfig::titled("Email");
        assert_eq!(view("", &config).height(30), 5);
        assert_eq!(view("me@red.to", &config).height(30), 5);
    }

    #[test]
    fn error_text_wraps_to_inner_width() {
        let config = FieldConfig::titled("Email")
            .with_error(Some(ErrorStyle::new("💩 is not a valid email address.")));
        let view = view("💩", &config);
        // 20 wide minus borders and padding leaves 14 cells.
        let lines = view.error_lines(20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| line.width() <= 14));
        assert_eq!(view.height(20), 5 + lines.len() as u16);
    }

    #[test]
    fn height_saturates_for_huge_errors() {
        let config = FieldConfig::titled("Email")
            .with_error(Some(ErrorStyle::new("a ".repeat(70_000))));
        let view = view("x", &config);
        assert_eq!(view.height(7), u16::MAX);
        let layout = view.layout(Rect::new(0, 0, 7, 40));
        assert_eq!(layout.container.height, 40);
    }

    #[test]
    fn clear_button_sits_at_the_right_edge() {
        let config = FieldConfig::titled("Email");
        let layout = view("me@red.to", &config).layout(Rect::new(0, 0, 30, 10));
        let clear = layout.clear_button.expect("clear button");
        let input = layout.input.expect("input");
        // Right border at 29, right padding 27..29.
        assert_eq!(clear.x, 26);
        assert_eq!(clear.width, 1);
        assert_eq!(input.x, 3);
        assert_eq!(input.right() + CLEAR_SPACING, clear.x);
        assert_eq!(layout.container.height, 5);
    }

    #[test]
    fn hit_prefers_clear_button() {
        let config = FieldConfig::titled("Email");
        let layout = view("me@red.to", &config).layout(Rect::new(0, 0, 30, 10));
        let clear = layout.clear_button.expect("clear button");
        assert_eq!(
            layout.hit(Position::new(clear.x, clear.y)),
            Some(HitTarget::ClearButton)
        );
        assert_eq!(layout.hit(Position::new(1, 1)), Some(HitTarget::Container));
        assert_eq!(layout.hit(Position::new(1, 7)), None);
    }

    #[test]
    fn visible_tail_keeps_the_end() {
        assert_eq!(visible_tail("me@red.to", 4), "d.to");
        assert_eq!(visible_tail("me@red.to", 40), "me@red.to");
        assert_eq!(visible_tail("💩💩", 3), "💩");
        assert_eq!(visible_tail("", 3), "");
    }
}
