#![forbid(unsafe_code)]

pub mod error;

pub mod util {
    pub mod buf;
}

pub mod container {
    pub mod entrytab;
    pub mod header;
    pub mod names;
}

pub mod read {
    pub mod expand;
    pub mod extract;
    pub mod opened;
    pub mod version;
}

pub mod domain;
pub mod list;
pub mod locate;

// Re-exports: stable API surface
pub use error::{PupError, Result};
pub use list::list;
pub use locate::find_dir;
pub use read::extract::{ExtractOptions, Extraction, SegmentFile, extract, extract_and_locate};
pub use read::version::firmware_version;
