use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of feeding a key to a focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdit {
    Inserted(char),
    Deleted,
    Cleared,
    Ignored,
}

impl KeyEdit {
    pub fn consumed(self) -> bool {
        !matches!(self, KeyEdit::Ignored)
    }
}

pub(crate) fn classify(key: &KeyEvent) -> KeyEdit {
    if key.kind == KeyEventKind::Release {
        return KeyEdit::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') | KeyCode::Char('U') => KeyEdit::Cleared,
            _ => KeyEdit::Ignored,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return KeyEdit::Ignored;
    }
    match key.code {
        KeyCode::Char(ch) => KeyEdit::Inserted(ch),
        KeyCode::Backspace => KeyEdit::Deleted,
        _ => KeyEdit::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_characters_insert() {
        assert_eq!(
            classify(&key(KeyCode::Char('@'), KeyModifiers::NONE)),
            KeyEdit::Inserted('@')
        );
        assert_eq!(
            classify(&key(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            KeyEdit::Inserted('E')
        );
    }

    #[test]
    fn control_characters_are_rejected() {
        let edit = classify(&key(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(edit, KeyEdit::Ignored);
        assert!(!edit.consumed());
    }

    #[test]
    fn ctrl_u_clears() {
        assert_eq!(
            classify(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            KeyEdit::Cleared
        );
    }

    #[test]
    fn navigation_keys_pass_through() {
        for code in [KeyCode::Tab, KeyCode::Enter, KeyCode::Esc, KeyCode::Up] {
            assert_eq!(classify(&key(code, KeyModifiers::NONE)), KeyEdit::Ignored);
        }
    }
}
