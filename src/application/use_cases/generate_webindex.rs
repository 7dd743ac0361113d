use crate::application::dto::{WebindexRequest, WebindexResponse};
use crate::ports::outbound::{ProgressReporter, RepositoryScanner};
use crate::shared::error::WebindexError;
use crate::shared::Result;
use crate::webindex::domain::{Distribution, PackageRecord, ReportMetadata};
use crate::webindex::services::{parse_index, summarize};

/// GenerateWebindexUseCase - Core use case for index generation
///
/// This use case orchestrates the scan-aggregate workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `RS` - RepositoryScanner implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateWebindexUseCase<RS, PR> {
    scanner: RS,
    progress_reporter: PR,
}

impl<RS, PR> GenerateWebindexUseCase<RS, PR>
where
    RS: RepositoryScanner,
    PR: ProgressReporter,
{
    /// Creates a new GenerateWebindexUseCase with injected dependencies
    pub fn new(scanner: RS, progress_reporter: PR) -> Self {
        Self {
            scanner,
            progress_reporter,
        }
    }

    /// Executes the index generation use case
    ///
    /// # Arguments
    /// * `request` - Request containing the repository root and page title
    ///
    /// # Returns
    /// WebindexResponse containing per-distribution summaries and metadata
    pub fn execute(&self, request: WebindexRequest) -> Result<WebindexResponse> {
        self.progress_reporter.report(&format!(
            "📖 Scanning repository: {}",
            request.repository_root.display()
        ));

        let dist_names = self
            .scanner
            .list_distributions(&request.repository_root)?;

        if dist_names.is_empty() {
            // A repository with no distributions is a legitimate state;
            // render a valid but empty document.
            self.progress_reporter
                .report_error("⚠️  No distributions found under dists/");
        }

        let mut distributions = Vec::with_capacity(dist_names.len());
        for dist_name in dist_names {
            distributions.push(self.summarize_distribution(&request, &dist_name)?);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Indexed {} distribution(s)",
            distributions.len()
        ));

        Ok(WebindexResponse::new(
            distributions,
            ReportMetadata::now(request.title),
        ))
    }

    /// Reads and aggregates every per-architecture index of one distribution
    fn summarize_distribution(
        &self,
        request: &WebindexRequest,
        dist_name: &str,
    ) -> Result<Distribution> {
        let archs = self
            .scanner
            .list_architectures(&request.repository_root, dist_name)?;

        let mut records: Vec<PackageRecord> = Vec::new();
        for arch in &archs {
            let content =
                self.scanner
                    .read_package_index(&request.repository_root, dist_name, arch)?;
            let mut parsed = parse_index(&content, arch).map_err(|e| {
                WebindexError::MalformedIndex {
                    path: request
                        .repository_root
                        .join("dists")
                        .join(dist_name)
                        .join("main")
                        .join(format!("binary-{}", arch))
                        .join("Packages"),
                    details: e.to_string(),
                }
            })?;
            records.append(&mut parsed);
        }

        self.progress_reporter.report(&format!(
            "   {}: {} record(s) across {} architecture(s)",
            dist_name,
            records.len(),
            archs.len()
        ));

        Ok(Distribution::new(dist_name, summarize(&records)))
    }
}
