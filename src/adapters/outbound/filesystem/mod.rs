mod file_writer;
mod repository_scanner;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use repository_scanner::FileSystemScanner;
