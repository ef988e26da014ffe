use std::path::PathBuf;

/// Errors of the file and config collaborators around the converter.
/// Conversion itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid output name {name:?}: must not be empty or begin with whitespace")]
    InvalidOutputName { name: String },
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
