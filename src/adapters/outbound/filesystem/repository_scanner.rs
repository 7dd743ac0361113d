use crate::ports::outbound::RepositoryScanner;
use crate::shared::error::WebindexError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum index file size for security (100 MB)
const MAX_INDEX_SIZE: u64 = 100 * 1024 * 1024;

/// Prefix of per-architecture index directories under `<dist>/main`.
const BINARY_DIR_PREFIX: &str = "binary-";

/// FileSystemScanner adapter for walking a repository tree
///
/// This adapter implements the RepositoryScanner port against the local
/// filesystem: distributions are the child directories of `dists/`,
/// architectures the `binary-*` directories under `dists/<dist>/main`,
/// and indexes the `Packages` files inside those.
pub struct FileSystemScanner;

impl FileSystemScanner {
    pub fn new() -> Self {
        Self
    }

    /// Sorted names of the child directories of `dir`.
    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Safely read an index file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_index(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| WebindexError::IndexReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(WebindexError::IndexReadError {
                path: path.to_path_buf(),
                details: "Security: index file is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(WebindexError::IndexReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_INDEX_SIZE {
            return Err(WebindexError::IndexReadError {
                path: path.to_path_buf(),
                details: format!(
                    "Security: index file is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_INDEX_SIZE
                ),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            WebindexError::IndexReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn dists_dir(root: &Path) -> PathBuf {
        root.join("dists")
    }
}

impl Default for FileSystemScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryScanner for FileSystemScanner {
    fn list_distributions(&self, root: &Path) -> Result<Vec<String>> {
        let dists = Self::dists_dir(root);

        if !dists.is_dir() {
            return Err(WebindexError::RepositoryNotFound {
                path: dists,
                suggestion: format!(
                    "\"{}\" does not look like a Debian-style repository root.\n   \
                     Please run in the repository root, or specify the correct path with the --path option.",
                    root.display()
                ),
            }
            .into());
        }

        self.list_subdirectories(&dists)
    }

    fn list_architectures(&self, root: &Path, dist: &str) -> Result<Vec<String>> {
        let main_dir = Self::dists_dir(root).join(dist).join("main");

        let archs = self
            .list_subdirectories(&main_dir)?
            .into_iter()
            .filter_map(|name| {
                name.strip_prefix(BINARY_DIR_PREFIX)
                    .map(|arch| arch.to_string())
            })
            .collect();

        Ok(archs)
    }

    fn read_package_index(&self, root: &Path, dist: &str, arch: &str) -> Result<String> {
        let index_path = Self::dists_dir(root)
            .join(dist)
            .join("main")
            .join(format!("{}{}", BINARY_DIR_PREFIX, arch))
            .join("Packages");

        self.safe_read_index(&index_path)
    }
}
