use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::info;

use crate::container::entrytab::{EntryRecord, read_table};
use crate::container::header::Header;
use crate::error::{PupError, Region, Result};
use crate::util::buf::read_segment_at;

/// A container with its header and entry table decoded. Segment data is
/// read lazily through the same handle.
pub struct Opened<R> {
    r: R,
    pub header: Header,
    pub table: Vec<EntryRecord>,
}

impl Opened<File> {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PupError::InputNotFound(path.to_path_buf()));
        }
        let f = File::open(path)?;
        Self::from_reader(f)
    }
}

impl<R: Read + Seek> Opened<R> {
    pub fn from_reader(mut r: R) -> Result<Self> {
        let header = Header::read_from(&mut r)?;
        info!(
            magic = %header.magic_display(),
            entries = header.entry_count,
            "container header"
        );
        let table = read_table(&mut r, header.entry_count)?;
        Ok(Self { r, header, table })
    }

    pub fn read_segment(&mut self, index: usize) -> Result<Vec<u8>> {
        let e = *self.table.get(index).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("entry index {index} out of range"),
            )
        })?;
        read_segment_at(
            &mut self.r,
            e.data_offset,
            e.data_size,
            Region::Segment(index as u64),
        )
    }

    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.table.iter().position(|e| e.id == id)
    }
}
