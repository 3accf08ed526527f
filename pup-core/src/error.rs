use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Part of the container a short read happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    EntryTable(u64),
    Segment(u64),
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Header => f.write_str("header"),
            Region::EntryTable(i) => write!(f, "entry table[{i}]"),
            Region::Segment(i) => write!(f, "segment[{i}]"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("truncated input: {region} at offset {offset:#x} needs {expected} bytes, got {got}")]
    Truncated {
        region: Region,
        offset: u64,
        expected: u64,
        got: u64,
    },

    #[error("failed to expand {}: {source}", path.display())]
    ArchiveExpansion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory `{name}` not found under {}", root.display())]
    DirectoryNotFound { name: String, root: PathBuf },

    #[error("no entry with id {id:#x} in container")]
    MissingEntry { id: u64 },
}

impl PupError {
    pub fn is_truncated(&self) -> bool {
        matches!(self, PupError::Truncated { .. })
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PupError>;
