use std::path::Path;

use crate::container::names::{known_name, resolve_name};
use crate::domain::{EntryRow, Listing};
use crate::error::Result;
use crate::read::opened::Opened;

/// Decode header and entry table without writing anything.
pub fn list(source: &Path) -> Result<Listing> {
    let opened = Opened::open(source)?;
    let entries = opened
        .table
        .iter()
        .enumerate()
        .map(|(i, e)| EntryRow {
            index: i as u64,
            id: e.id,
            name: resolve_name(e.id).into_owned(),
            data_offset: e.data_offset,
            data_size: e.data_size,
            known: known_name(e.id).is_some(),
        })
        .collect();
    Ok(Listing {
        magic: opened.header.magic_display(),
        sceuf: opened.header.is_sceuf(),
        entry_count: opened.header.entry_count,
        entries,
    })
}
