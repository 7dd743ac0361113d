use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// argument mistakes and runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the index page was generated
    Success = 0,
    /// Application error (missing dists/, malformed index, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for index generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Every variant is fatal for the whole run: a silently incomplete index
/// page is worse than a hard failure.
#[derive(Debug, Error)]
pub enum WebindexError {
    #[error("dists/ directory not found: {path}\n\n💡 Hint: {suggestion}")]
    RepositoryNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please point --path at the root of a Debian-style repository")]
    InvalidRepositoryPath { path: PathBuf, reason: String },

    #[error("Malformed Packages index: {path}\nDetails: {details}\n\n💡 Hint: Each stanza must carry Package, Version, Architecture and Filename fields")]
    MalformedIndex { path: PathBuf, details: String },

    #[error("Failed to read Packages index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    IndexReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_repository_not_found_display() {
        let error = WebindexError::RepositoryNotFound {
            path: PathBuf::from("/repo/dists"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("dists/ directory not found"));
        assert!(display.contains("/repo/dists"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_malformed_index_display() {
        let error = WebindexError::MalformedIndex {
            path: PathBuf::from("/repo/dists/stable/main/binary-amd64/Packages"),
            details: "stanza 3 is missing the Version field".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed Packages index"));
        assert!(display.contains("binary-amd64/Packages"));
        assert!(display.contains("missing the Version field"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_index_read_error_display() {
        let error = WebindexError::IndexReadError {
            path: PathBuf::from("/repo/Packages"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read Packages index"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = WebindexError::FileWriteError {
            path: PathBuf::from("/out/index.html"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/out/index.html"));
        assert!(display.contains("Permission denied"));
    }
}
