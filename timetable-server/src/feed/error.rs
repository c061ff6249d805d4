//! Feed parsing error types.

use std::path::PathBuf;

/// Errors that abort parsing of a feed file.
///
/// Every variant is fatal for the whole index build. Individual cells that
/// fail to parse are not errors; they degrade to empty fields.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Configured feed file does not exist
    #[error("feed file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// No `#property` header row before end of input
    #[error("feed file has no #property header row: {}", path.display())]
    MalformedHeader { path: PathBuf },

    /// Reading the file failed for a reason other than absence
    #[error("failed to read feed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content could not be tokenized or is not UTF-8
    #[error("failed to tokenize feed file {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl FeedError {
    /// Path of the feed file the error relates to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FeedError::NotFound { path }
            | FeedError::MalformedHeader { path }
            | FeedError::Io { path, .. }
            | FeedError::Csv { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::NotFound {
            path: PathBuf::from("opendata/missing.csv"),
        };
        assert_eq!(err.to_string(), "feed file not found: opendata/missing.csv");

        let err = FeedError::MalformedHeader {
            path: PathBuf::from("a.csv"),
        };
        assert_eq!(
            err.to_string(),
            "feed file has no #property header row: a.csv"
        );
        assert_eq!(err.path(), std::path::Path::new("a.csv"));
    }
}
