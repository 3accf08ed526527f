use serde::Serialize;

/// One line of a container listing.
#[derive(Clone, Debug, Serialize)]
pub struct EntryRow {
    pub index: u64,
    pub id: u64,
    pub name: String,
    pub data_offset: u64,
    pub data_size: u64,
    pub known: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct Listing {
    pub magic: String,
    pub sceuf: bool,
    pub entry_count: u64,
    pub entries: Vec<EntryRow>,
}
