//! aptly-webindex - static HTML index generator for Debian-style repositories
//!
//! This library scans a repository tree (per-architecture `Packages` index
//! files under `dists/`), aggregates the newest and older versions of every
//! package, and renders one self-contained HTML page with links into the
//! repository's `pool/`.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`webindex`): pure domain values, the Debian version
//!   comparator, the stanza parser and the aggregator
//! - **Application Layer** (`application`): the index-generation use case
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use aptly_webindex::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let scanner = FileSystemScanner::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateWebindexUseCase::new(scanner, progress_reporter);
//!
//! // Execute
//! let request = WebindexRequest::new(PathBuf::from("."), "aptly-webindex".to_string());
//! let response = use_case.execute(request)?;
//!
//! // Render
//! let formatter = HtmlFormatter::new();
//! let page = formatter.format(&response.distributions, &response.metadata)?;
//! println!("{}", page);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod webindex;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemScanner, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::HtmlFormatter;
    pub use crate::application::dto::{WebindexRequest, WebindexResponse};
    pub use crate::application::use_cases::GenerateWebindexUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, PageFormatter, ProgressReporter, RepositoryScanner,
    };
    pub use crate::shared::Result;
    pub use crate::webindex::domain::{
        Artifact, DebianVersion, Distribution, PackageRecord, PackageSummary, ReportMetadata,
    };
    pub use crate::webindex::services::{parse_index, summarize};
}
