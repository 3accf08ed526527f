use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::PupError;

/// What happened when a nested archive was unpacked.
#[derive(Debug)]
pub struct Expansion {
    pub archive: PathBuf,
    pub outcome: std::result::Result<u64, PupError>,
}

impl Expansion {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Unpack every member of the tar at `archive` into `dest`, overwriting
/// existing files. Stops at the first failing member; members already
/// written stay on disk. Never returns an error: failures are recorded in the
/// returned value.
pub fn expand_nested(archive: &Path, dest: &Path) -> Expansion {
    let outcome = unpack_members(archive, dest).map_err(|source| PupError::ArchiveExpansion {
        path: archive.to_path_buf(),
        source,
    });
    match &outcome {
        Ok(n) => info!(archive = %archive.display(), members = n, "expanded nested archive"),
        Err(e) => warn!("{e}"),
    }
    Expansion {
        archive: archive.to_path_buf(),
        outcome,
    }
}

fn unpack_members(archive: &Path, dest: &Path) -> std::io::Result<u64> {
    let f = File::open(archive)?;
    let mut ar = tar::Archive::new(f);
    ar.set_overwrite(true);
    let mut unpacked = 0u64;
    for entry in ar.entries()? {
        let mut entry = entry?;
        // unpack_in refuses paths that would land outside dest
        if entry.unpack_in(dest)? {
            unpacked += 1;
        } else {
            warn!(path = %entry.path()?.display(), "skipped archive member outside destination");
        }
    }
    Ok(unpacked)
}
