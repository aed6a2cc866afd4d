pub mod settings;
pub mod style;
