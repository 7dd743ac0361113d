/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod output_presenter;
pub mod page_formatter;
pub mod progress_reporter;
pub mod repository_scanner;

pub use output_presenter::OutputPresenter;
pub use page_formatter::PageFormatter;
pub use progress_reporter::ProgressReporter;
pub use repository_scanner::RepositoryScanner;
