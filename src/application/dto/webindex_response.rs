use crate::webindex::domain::{Distribution, ReportMetadata};

/// WebindexResponse - Internal response DTO from index generation
///
/// This DTO contains the aggregated data produced by the use case,
/// which a formatter adapter then renders into the output document.
#[derive(Debug, Clone)]
pub struct WebindexResponse {
    /// Per-distribution package summaries, in output order
    pub distributions: Vec<Distribution>,
    /// Page metadata (title, tool info, generation timestamp)
    pub metadata: ReportMetadata,
}

impl WebindexResponse {
    pub fn new(distributions: Vec<Distribution>, metadata: ReportMetadata) -> Self {
        Self {
            distributions,
            metadata,
        }
    }
}
