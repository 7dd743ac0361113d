use aptly_webindex::adapters::outbound::console::StderrProgressReporter;
use aptly_webindex::adapters::outbound::filesystem::{
    FileSystemScanner, FileSystemWriter, StdoutPresenter,
};
use aptly_webindex::adapters::outbound::formatters::HtmlFormatter;
use aptly_webindex::application::dto::WebindexRequest;
use aptly_webindex::application::use_cases::GenerateWebindexUseCase;
use aptly_webindex::cli::Args;
use aptly_webindex::config;
use aptly_webindex::ports::outbound::{OutputPresenter, PageFormatter};
use aptly_webindex::shared::error::{ExitCode, WebindexError};
use aptly_webindex::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Default page title, kept from the original page.
const DEFAULT_TITLE: &str = "aptly-webindex";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate repository root
    let repository_root = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_repository_path(&repository_root)?;

    // Load configuration: explicit path wins, otherwise auto-discover in
    // the repository root. CLI flags override config values.
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&repository_root)?.unwrap_or_default(),
    };

    let title = args
        .title
        .or_else(|| config.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let output = args.output.or_else(|| config.output.clone());

    // Create adapters (Dependency Injection)
    let scanner = FileSystemScanner::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateWebindexUseCase::new(scanner, progress_reporter);

    // Execute use case
    let request = WebindexRequest::new(repository_root, title);
    let response = use_case.execute(request)?;

    // Render the page
    let formatter = match config.css {
        Some(css) => HtmlFormatter::with_css(css),
        None => HtmlFormatter::new(),
    };
    let page = formatter.format(&response.distributions, &response.metadata)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match output {
        Some(output_path) => Box::new(FileSystemWriter::new(PathBuf::from(output_path))),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&page)?;

    Ok(())
}

fn validate_repository_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(WebindexError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for repository roots
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| WebindexError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(WebindexError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Security: Repository path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(WebindexError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
