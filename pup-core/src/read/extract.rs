use std::fs;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::container::header::Header;
use crate::container::names::{NESTED_ARCHIVE_NAME, TARGET_DIR_NAME, resolve_name};
use crate::error::{PupError, Result};
use crate::locate::find_dir;
use crate::read::expand::{Expansion, expand_nested};
use crate::read::opened::Opened;

#[derive(Clone, Debug)]
pub struct ExtractOptions {
    /// Unpack `update_files.tar` into the destination after writing it
    pub expand_nested: bool,
    /// Directory name searched for once everything is on disk
    pub target_dir: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            expand_nested: true,
            target_dir: TARGET_DIR_NAME.to_string(),
        }
    }
}

/// One entry written to the destination.
#[derive(Clone, Debug)]
pub struct SegmentFile {
    pub index: u64,
    pub id: u64,
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Debug)]
pub struct Extraction {
    pub header: Header,
    pub dest: PathBuf,
    pub target_dir: String,
    pub segments: Vec<SegmentFile>,
    pub expansions: Vec<Expansion>,
    pub located: Option<PathBuf>,
}

impl Extraction {
    /// The located directory, or `DirectoryNotFound` when the search came up
    /// empty.
    pub fn into_located(self) -> Result<PathBuf> {
        self.located.ok_or(PupError::DirectoryNotFound {
            name: self.target_dir,
            root: self.dest,
        })
    }
}

pub fn extract(source: &Path, dest: &Path, opts: Option<&ExtractOptions>) -> Result<Extraction> {
    let opened = Opened::open(source)?;
    extract_opened(opened, dest, opts)
}

/// Extract and return the target directory; the whole caller contract in one
/// call.
pub fn extract_and_locate(
    source: &Path,
    dest: &Path,
    opts: Option<&ExtractOptions>,
) -> Result<PathBuf> {
    extract(source, dest, opts)?.into_located()
}

pub fn extract_from_reader<R: Read + Seek>(
    r: R,
    dest: &Path,
    opts: Option<&ExtractOptions>,
) -> Result<Extraction> {
    let opened = Opened::from_reader(r)?;
    extract_opened(opened, dest, opts)
}

fn extract_opened<R: Read + Seek>(
    mut opened: Opened<R>,
    dest: &Path,
    opts: Option<&ExtractOptions>,
) -> Result<Extraction> {
    let defaults = ExtractOptions::default();
    let opts = opts.unwrap_or(&defaults);

    fs::create_dir_all(dest)?;

    let total = opened.table.len();
    let mut segments = Vec::with_capacity(total);
    let mut expansions = Vec::new();

    for i in 0..total {
        let e = opened.table[i];
        let name = resolve_name(e.id);
        info!(
            index = i,
            total,
            name = %name,
            id = e.id,
            offset = e.data_offset,
            size = e.data_size,
            "extracting entry"
        );

        let data = opened.read_segment(i)?;
        let outp = dest.join(&*name);
        fs::write(&outp, &data)?;

        if opts.expand_nested && name == NESTED_ARCHIVE_NAME {
            expansions.push(expand_nested(&outp, dest));
        }

        segments.push(SegmentFile {
            index: i as u64,
            id: e.id,
            name: name.into_owned(),
            path: outp,
            size: data.len() as u64,
        });
    }

    let located = find_dir(dest, &opts.target_dir);
    match &located {
        Some(p) => info!(path = %p.display(), "found {}", opts.target_dir),
        None => warn!(root = %dest.display(), "{} not found", opts.target_dir),
    }

    Ok(Extraction {
        header: opened.header,
        dest: dest.to_path_buf(),
        target_dir: opts.target_dir.clone(),
        segments,
        expansions,
        located,
    })
}
