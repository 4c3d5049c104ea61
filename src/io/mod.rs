mod format;
mod input;

pub use format::DocumentFormat;
pub use input::load_field_config;
