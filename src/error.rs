//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = FlattenError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum FlattenError {
    /// The root to scan is missing or not a directory.
    #[error("'{}' is not a valid directory", path.display())]
    InvalidRoot { path: PathBuf },

    /// Neither the manifest nor any source file exists under the root.
    #[error("no Cargo.toml or .rs files found in '{}' or its subdirectories", root.display())]
    EmptyDiscovery { root: PathBuf },

    /// A single entry could not be read or decoded.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid exclude glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl FlattenError {
    /// Whether the run must stop with a failure exit code.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::EmptyDiscovery { .. } | Self::FileRead { .. })
    }
}

impl From<figment::Error> for FlattenError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
