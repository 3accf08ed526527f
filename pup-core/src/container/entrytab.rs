use std::io::{Read, Seek, Write};

use tracing::debug;

use crate::container::header::HEADER_LEN;
use crate::error::{PupError, Region, Result};
use crate::util::buf::read_exact_at;

pub const ENTRY_SIZE: u64 = 0x20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: u64,
    /// Absolute offset into the container
    pub data_offset: u64,
    pub data_size: u64,
}

#[inline]
fn be64(x: &[u8]) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&x[..8]);
    u64::from_be_bytes(b)
}

pub fn write_table(mut w: impl Write, entries: &[EntryRecord]) -> std::io::Result<()> {
    let mut buf = [0u8; ENTRY_SIZE as usize];
    for e in entries {
        // Layout: [0..8]=id, [8..16]=offset, [16..24]=size, [24..32]=reserved
        buf[0..8].copy_from_slice(&e.id.to_be_bytes());
        buf[8..16].copy_from_slice(&e.data_offset.to_be_bytes());
        buf[16..24].copy_from_slice(&e.data_size.to_be_bytes());
        w.write_all(&buf)?;
    }
    Ok(())
}

/// Absolute offset of record `index`.
pub fn record_offset(index: u64) -> Option<u64> {
    index
        .checked_mul(ENTRY_SIZE)
        .and_then(|o| o.checked_add(HEADER_LEN))
}

pub fn read_entry<R: Read + Seek>(r: &mut R, index: u64) -> Result<EntryRecord> {
    let offset = record_offset(index).ok_or(PupError::Truncated {
        region: Region::EntryTable(index),
        offset: u64::MAX,
        expected: ENTRY_SIZE,
        got: 0,
    })?;
    let mut buf = [0u8; ENTRY_SIZE as usize];
    read_exact_at(r, offset, &mut buf, Region::EntryTable(index))?;
    Ok(EntryRecord {
        id: be64(&buf[0..8]),
        data_offset: be64(&buf[8..16]),
        data_size: be64(&buf[16..24]),
    })
}

/// Read `count` records in table order, one seek per record. A count larger
/// than the table fails on the first missing record.
pub fn read_table<R: Read + Seek>(r: &mut R, count: u64) -> Result<Vec<EntryRecord>> {
    let mut out = Vec::new();
    for i in 0..count {
        let e = read_entry(r, i)?;
        debug!(
            index = i,
            id = e.id,
            offset = e.data_offset,
            size = e.data_size,
            "entry record"
        );
        out.push(e);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn container(entries: &[EntryRecord], declared: u64) -> Vec<u8> {
        let mut raw = vec![0u8; HEADER_LEN as usize];
        raw[24..32].copy_from_slice(&declared.to_be_bytes());
        write_table(&mut raw, entries).unwrap();
        raw
    }

    #[test]
    fn reads_records_in_table_order() {
        let entries = [
            EntryRecord {
                id: 0x300,
                data_offset: 0x1000,
                data_size: 42,
            },
            EntryRecord {
                id: 0x100,
                data_offset: 0x80,
                data_size: 5,
            },
        ];
        let raw = container(&entries, 2);
        let got = read_table(&mut Cursor::new(raw), 2).unwrap();
        assert_eq!(got, entries);
    }

    #[test]
    fn reserved_tail_is_ignored() {
        let mut raw = container(
            &[EntryRecord {
                id: 1,
                data_offset: 2,
                data_size: 3,
            }],
            1,
        );
        raw[32 + 24..32 + 32].fill(0xFF);
        let got = read_entry(&mut Cursor::new(raw), 0).unwrap();
        assert_eq!((got.id, got.data_offset, got.data_size), (1, 2, 3));
    }

    #[test]
    fn zero_count_is_empty() {
        let raw = container(&[], 0);
        assert!(read_table(&mut Cursor::new(raw), 0).unwrap().is_empty());
    }

    #[test]
    fn count_beyond_table_is_truncated() {
        let raw = container(
            &[EntryRecord {
                id: 1,
                data_offset: 0,
                data_size: 0,
            }],
            2,
        );
        let err = read_table(&mut Cursor::new(raw), 2).unwrap_err();
        assert!(matches!(
            err,
            PupError::Truncated {
                region: Region::EntryTable(1),
                offset: 0x40,
                ..
            }
        ));
    }

    #[test]
    fn overflowing_index_is_truncated() {
        let err = read_entry(&mut Cursor::new(Vec::new()), u64::MAX).unwrap_err();
        assert!(err.is_truncated());
    }
}
