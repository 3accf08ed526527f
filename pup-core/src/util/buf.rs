use std::io::{self, Read, Seek, SeekFrom};

use crate::error::{PupError, Region, Result};

/// Fill `buf` as far as the reader allows; returns how many bytes landed.
pub fn read_up_to<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Seek to an absolute offset taken from the container. Offsets the OS
/// refuses (>= 2^63 on most platforms) count as a zero-byte read.
fn seek_to<R: Seek>(r: &mut R, offset: u64, expected: u64, region: Region) -> Result<()> {
    match r.seek(SeekFrom::Start(offset)) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::InvalidInput => Err(PupError::Truncated {
            region,
            offset,
            expected,
            got: 0,
        }),
        Err(e) => Err(e.into()),
    }
}

/// Seek to `offset` and read exactly `buf.len()` bytes, reporting a short
/// read as `Truncated` for `region`.
pub fn read_exact_at<R: Read + Seek>(
    r: &mut R,
    offset: u64,
    buf: &mut [u8],
    region: Region,
) -> Result<()> {
    seek_to(r, offset, buf.len() as u64, region)?;
    let got = read_up_to(r, buf)?;
    if got < buf.len() {
        return Err(PupError::Truncated {
            region,
            offset,
            expected: buf.len() as u64,
            got: got as u64,
        });
    }
    Ok(())
}

// Cap on the up-front allocation for a segment; sizes come straight from the
// table and are not trusted.
const PREALLOC_CAP: u64 = 1 << 20;

/// Seek to `offset` and read `len` bytes into a fresh buffer.
pub fn read_segment_at<R: Read + Seek>(
    r: &mut R,
    offset: u64,
    len: u64,
    region: Region,
) -> Result<Vec<u8>> {
    seek_to(r, offset, len, region)?;
    let mut out = Vec::with_capacity(len.min(PREALLOC_CAP) as usize);
    let got = r.by_ref().take(len).read_to_end(&mut out)? as u64;
    if got < len {
        return Err(PupError::Truncated {
            region,
            offset,
            expected: len,
            got,
        });
    }
    Ok(out)
}
