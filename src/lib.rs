#![deny(rust_2018_idioms)]
//! A floating label text field for ratatui.
//!
//! The title sits inside the field like a placeholder while the field is
//! idle and empty, and floats above the input once the field is tapped,
//! focused or filled. An optional clear button empties the text, and an
//! optional caller-supplied error is drawn beneath the input and recolors
//! the border.
//!
//! ```no_run
//! use std::time::Instant;
//! use floatfield::prelude::*;
//!
//! let email = TextBinding::new("");
//! let mut field = FloatingLabelTextField::new(email.clone(), FieldConfig::titled("Email"));
//! field.tap(Instant::now());
//! ```

mod config;
mod field;
mod io;
mod presentation;
mod style;

pub use config::FieldConfig;
pub use field::{
    FOCUS_DELAY, FieldAttributes, FieldState, FloatingLabelTextField, FocusRequest, KeyEdit,
    THICK_BORDER, THIN_BORDER, TextBinding,
};
pub use io::{DocumentFormat, load_field_config};
pub use presentation::{
    BorderView, CLEAR_GLYPH, COLLAPSED_PADDING, EXPANDED_PADDING, FieldLayout, FieldView,
    HitTarget, InputView, LABEL_ANIMATION, LabelTransition, Segment, ease_in_out, render,
};
pub use style::{ACCENT, ErrorStyle, Font, TitleStyle};

pub mod prelude {
    pub use super::{
        ErrorStyle, FieldConfig, FloatingLabelTextField, FocusRequest, Font, TextBinding,
        TitleStyle,
    };
}
