pub mod draw;
pub mod layout;
pub mod placeholder_image;
