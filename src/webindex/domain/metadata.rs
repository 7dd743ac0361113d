use chrono::{SecondsFormat, Utc};

/// ReportMetadata value object: page title, generating tool and timestamp.
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    title: String,
    tool_name: String,
    tool_version: String,
    generated_at: String,
}

impl ReportMetadata {
    pub fn new(
        title: String,
        tool_name: String,
        tool_version: String,
        generated_at: String,
    ) -> Self {
        Self {
            title,
            tool_name,
            tool_version,
            generated_at,
        }
    }

    /// Metadata for a run happening now, stamped from the system clock.
    pub fn now(title: String) -> Self {
        Self::new(
            title,
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }
}
