pub mod bitmap_font;
pub mod ui_font;

pub use ui_font::{FontSet, FontSource, UiFont};
