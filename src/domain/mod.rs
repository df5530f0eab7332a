pub mod canvas;
pub mod descriptor;
pub mod font;
pub mod output_directory;
pub mod path_error;
