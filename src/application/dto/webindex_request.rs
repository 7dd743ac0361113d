use std::path::PathBuf;

/// WebindexRequest - Internal request DTO for index generation
///
/// This DTO represents the internal request structure used within
/// the application layer.
#[derive(Debug, Clone)]
pub struct WebindexRequest {
    /// Path to the repository root containing dists/ and pool/
    pub repository_root: PathBuf,
    /// Page title for the rendered document
    pub title: String,
}

impl WebindexRequest {
    pub fn new(repository_root: PathBuf, title: String) -> Self {
        Self {
            repository_root,
            title,
        }
    }
}
