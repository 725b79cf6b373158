use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a single translation file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("JSON error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON error in {}: expected a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Parse { path, .. }
            | LoadError::NotAnObject { path }
            | LoadError::Read { path, .. } => path,
        }
    }
}
