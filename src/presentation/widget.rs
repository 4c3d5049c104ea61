use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{layout::visible_tail, view::FieldView};

impl Widget for &FieldView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        self.block().render(layout.container, buf);

        Paragraph::new(Line::from(Span::styled(
            self.label.text.as_str(),
            self.label.style,
        )))
        .render(layout.label, buf);

        if let (Some(input), Some(rect)) = (&self.input, layout.input) {
            let line = match &input.placeholder {
                Some(prompt) if input.text.is_empty() => {
                    Line::from(Span::styled(prompt.text.as_str(), prompt.style))
                }
                _ => {
                    let reserve = u16::from(input.cursor);
                    let shown = visible_tail(&input.text, rect.width.saturating_sub(reserve));
                    Line::from(Span::styled(shown, input.style))
                }
            };
            Paragraph::new(line).render(rect, buf);
        }

        if let (Some(clear), Some(rect)) = (&self.clear_button, layout.clear_button) {
            Paragraph::new(Line::from(Span::styled(clear.text.as_str(), clear.style)))
                .render(rect, buf);
        }

        if let (Some(error), Some(rect)) = (&self.error, layout.error) {
            let lines = self
                .error_lines(area.width)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, error.style)))
                .collect::<Vec<_>>();
            Paragraph::new(lines).render(rect, buf);
        }
    }
}

impl Widget for FieldView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
