use std::io::{Read, Seek, Write};

use crate::error::{Region, Result};
use crate::util::buf::read_exact_at;

pub const HEADER_LEN: u64 = 0x20;
pub const MAGIC_LEN: usize = 5;
/// Conventional tag of retail packages. Surfaced, never enforced.
pub const SCEUF: &[u8; MAGIC_LEN] = b"SCEUF";

const COUNT_OFF: usize = 0x18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Opaque format tag, bytes 0..5
    pub magic: [u8; MAGIC_LEN],
    /// Number of records in the entry table
    pub entry_count: u64,
}

impl Header {
    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        let mut buf = [0u8; HEADER_LEN as usize];
        buf[..MAGIC_LEN].copy_from_slice(&self.magic);
        buf[COUNT_OFF..].copy_from_slice(&self.entry_count.to_be_bytes());
        w.write_all(&buf)
    }

    pub fn read_from<R: Read + Seek>(r: &mut R) -> Result<Self> {
        let mut buf = [0u8; HEADER_LEN as usize];
        read_exact_at(r, 0, &mut buf, Region::Header)?;
        Ok(Self::decode(&buf))
    }

    fn decode(buf: &[u8; HEADER_LEN as usize]) -> Self {
        let mut magic = [0u8; MAGIC_LEN];
        magic.copy_from_slice(&buf[..MAGIC_LEN]);
        let mut count = [0u8; 8];
        count.copy_from_slice(&buf[COUNT_OFF..]);
        Self {
            magic,
            entry_count: u64::from_be_bytes(count),
        }
    }

    pub fn is_sceuf(&self) -> bool {
        &self.magic == SCEUF
    }

    /// Magic as printable text, for logs and listings.
    pub fn magic_display(&self) -> String {
        if self.magic.iter().all(|b| b.is_ascii_graphic()) {
            String::from_utf8_lossy(&self.magic).into_owned()
        } else {
            format!("0x{}", hex::encode(self.magic))
        }
    }
}
