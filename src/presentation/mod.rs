mod animation;
mod layout;
mod view;
mod widget;

pub use animation::{LABEL_ANIMATION, LabelTransition, ease_in_out};
pub use layout::{FieldLayout, HitTarget};
pub use view::{
    BorderView, CLEAR_GLYPH, COLLAPSED_PADDING, EXPANDED_PADDING, FieldView, InputView, Segment,
    render,
};
