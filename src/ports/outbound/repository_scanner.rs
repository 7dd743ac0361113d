use crate::shared::Result;
use std::path::Path;

/// RepositoryScanner port for discovering and reading repository indexes
///
/// This port abstracts the directory walking needed to find distributions
/// and per-architecture Packages files under a repository root.
pub trait RepositoryScanner {
    /// Lists the distributions of the repository, sorted ascending
    ///
    /// # Arguments
    /// * `root` - Path to the repository root containing dists/
    ///
    /// # Returns
    /// The distribution names (children of dists/). An empty repository
    /// yields an empty list, which is a legitimate state.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The dists/ directory does not exist
    /// - The directory cannot be listed due to permissions or I/O errors
    fn list_distributions(&self, root: &Path) -> Result<Vec<String>>;

    /// Lists the architectures indexed by a distribution, sorted ascending
    ///
    /// # Arguments
    /// * `root` - Path to the repository root
    /// * `dist` - Distribution name under dists/
    ///
    /// # Returns
    /// Architecture names derived from the `binary-<arch>` directories
    /// under `dists/<dist>/main`, with the prefix stripped.
    ///
    /// # Errors
    /// Returns an error if the distribution's main/ directory cannot be
    /// listed.
    fn list_architectures(&self, root: &Path, dist: &str) -> Result<Vec<String>>;

    /// Reads the Packages index of one (distribution, architecture) pair
    ///
    /// # Arguments
    /// * `root` - Path to the repository root
    /// * `dist` - Distribution name
    /// * `arch` - Architecture name (without the `binary-` prefix)
    ///
    /// # Returns
    /// The raw index content as a string
    ///
    /// # Errors
    /// Returns an error if the Packages file is missing or unreadable.
    fn read_package_index(&self, root: &Path, dist: &str, arch: &str) -> Result<String>;
}
