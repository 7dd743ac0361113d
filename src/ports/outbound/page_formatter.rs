use crate::shared::Result;
use crate::webindex::domain::{Distribution, ReportMetadata};

/// PageFormatter port for rendering the final document
///
/// This port abstracts the markup generation so the application core
/// stays independent of the concrete output format.
pub trait PageFormatter {
    /// Renders the complete document for the given distributions
    ///
    /// # Arguments
    /// * `distributions` - Per-distribution summaries, in output order
    /// * `metadata` - Page title, tool identity and generation timestamp
    ///
    /// # Returns
    /// The rendered document as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, distributions: &[Distribution], metadata: &ReportMetadata) -> Result<String>;
}
