use std::sync::LazyLock;

use floatfield::ErrorStyle;
use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

/// Error for a non-empty value that does not look like an email address.
pub fn email_error(text: &str) -> Option<ErrorStyle> {
    if text.is_empty() || EMAIL.is_match(text) {
        return None;
    }
    Some(ErrorStyle::new(format!("{text} is not a valid email address.")))
}
