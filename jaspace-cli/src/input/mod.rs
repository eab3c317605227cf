//! Input handling module

pub mod discovery;
pub mod file_reader;

pub use discovery::{collect_files, FileFilter};
pub use file_reader::FileReader;
