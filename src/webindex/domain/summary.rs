/// One binary artifact of a package's newest version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Artifact {
    pub arch: String,
    pub filename: String,
}

impl Artifact {
    pub fn new(arch: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            arch: arch.into(),
            filename: filename.into(),
        }
    }
}

/// Per-package rendering summary, built fresh for every run.
///
/// `newest_version` is the maximum of the package's versions under the
/// Debian total order; `older_versions` keeps the remaining distinct
/// versions in the same descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub name: String,
    pub newest_version: String,
    /// Distinct (arch, filename) pairs at the newest version, sorted
    /// ascending for stable rendering.
    pub newest_artifacts: Vec<Artifact>,
    pub older_versions: Vec<String>,
    /// Directory component of one newest-version artifact. The upstream
    /// repository layout guarantees all newest-version artifacts share a
    /// pool directory; this is assumed, not enforced.
    pub pool_dir: String,
}

/// A distribution (child of dists/) and its package summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub name: String,
    pub packages: Vec<PackageSummary>,
}

impl Distribution {
    pub fn new(name: impl Into<String>, packages: Vec<PackageSummary>) -> Self {
        Self {
            name: name.into(),
            packages,
        }
    }
}
