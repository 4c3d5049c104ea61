#![allow(dead_code)]

use std::time::Instant;

use floatfield::{FieldConfig, FloatingLabelTextField, TextBinding};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

pub fn field(text: &str, config: FieldConfig) -> (TextBinding, FloatingLabelTextField) {
    let binding = TextBinding::new(text);
    let field = FloatingLabelTextField::new(binding.clone(), config);
    (binding, field)
}

pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test terminal")
}

pub fn draw(
    terminal: &mut Terminal<TestBackend>,
    field: &mut FloatingLabelTextField,
    now: Instant,
) -> Buffer {
    terminal
        .draw(|frame| field.render(frame, frame.area(), now))
        .expect("draw field");
    terminal.backend().buffer().clone()
}

/// Symbols of one buffer row joined into a string.
pub fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Row content between the vertical borders, trimmed.
pub fn row_content(buffer: &Buffer, y: u16) -> String {
    let text = row(buffer, y);
    let chars: Vec<char> = text.chars().collect();
    chars[1..chars.len().saturating_sub(1)]
        .iter()
        .collect::<String>()
        .trim()
        .to_string()
}
