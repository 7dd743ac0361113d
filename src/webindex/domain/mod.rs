pub mod metadata;
pub mod record;
pub mod summary;
pub mod version;

pub use metadata::ReportMetadata;
pub use record::PackageRecord;
pub use summary::{Artifact, Distribution, PackageSummary};
pub use version::DebianVersion;
