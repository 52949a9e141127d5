use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Position inside a single input when an error was raised.
#[derive(Debug, Clone, Copy)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum LineError {
    /// The path could not be opened (missing, permission denied, directory).
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input was opened but reading from it failed.
    #[error("I/O error in {} at {ctx:?}: {source}", display_source(.path.as_deref()))]
    Read {
        path: Option<PathBuf>,
        ctx: IoContext,
        #[source]
        source: io::Error,
    },
}

impl LineError {
    pub fn open_err(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn read_err(path: Option<PathBuf>, source: io::Error, ctx: IoContext) -> Self {
        Self::Read { path, ctx, source }
    }

    /// Path of the input the error refers to, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Open { path, .. } => Some(path),
            Self::Read { path, .. } => path.as_deref(),
        }
    }

    pub fn is_open_failure(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

fn display_source(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("'{}'", p.display()),
        None => "<reader>".to_string(),
    }
}
