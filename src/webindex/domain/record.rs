/// One stanza from one per-architecture Packages index.
///
/// `index_arch` is the architecture of the index the stanza was read from
/// (the `binary-<arch>` directory); `arch` is the architecture declared by
/// the stanza itself, which may differ (e.g. `all` packages listed in every
/// architecture index). Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub index_arch: String,
    pub name: String,
    pub version: String,
    pub arch: String,
    pub filename: String,
}

impl PackageRecord {
    pub fn new(
        index_arch: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        arch: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            index_arch: index_arch.into(),
            name: name.into(),
            version: version.into(),
            arch: arch.into(),
            filename: filename.into(),
        }
    }
}
