#![allow(dead_code)]

use std::fs::File;
use std::path::Path;

use pup_core::container::entrytab::{EntryRecord, write_table};
use pup_core::container::header::Header;

/// Lay out a container: header, table, then each payload back to back.
pub fn build_pup(entries: &[(u64, Vec<u8>)]) -> Vec<u8> {
    let mut raw = Vec::new();
    Header {
        magic: *b"SCEUF",
        entry_count: entries.len() as u64,
    }
    .write_to(&mut raw)
    .unwrap();

    let mut off = 0x20 + 0x20 * entries.len() as u64;
    let recs: Vec<_> = entries
        .iter()
        .map(|(id, data)| {
            let r = EntryRecord {
                id: *id,
                data_offset: off,
                data_size: data.len() as u64,
            };
            off += data.len() as u64;
            r
        })
        .collect();
    write_table(&mut raw, &recs).unwrap();
    for (_, data) in entries {
        raw.extend_from_slice(data);
    }
    raw
}

pub fn write_pup(path: &Path, entries: &[(u64, Vec<u8>)]) {
    std::fs::write(path, build_pup(entries)).unwrap();
}

/// In-memory tar with the given regular files; parent dirs are implied.
pub fn build_tar(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut b = tar::Builder::new(Vec::new());
    for (name, data) in files {
        let mut h = tar::Header::new_gnu();
        h.set_size(data.len() as u64);
        h.set_mode(0o644);
        h.set_cksum();
        b.append_data(&mut h, name, *data).unwrap();
    }
    b.into_inner().unwrap()
}

pub fn top_level_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn touch(path: &Path) {
    File::create(path).unwrap();
}
