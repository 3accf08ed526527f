use std::io::{Read, Seek};
use std::path::Path;

use crate::container::names::VERSION_TXT;
use crate::error::{PupError, Result};
use crate::read::opened::Opened;

/// First line of the `version.txt` segment, e.g. "4.92".
pub fn firmware_version(source: &Path) -> Result<String> {
    let mut opened = Opened::open(source)?;
    version_of(&mut opened)
}

pub fn version_of<R: Read + Seek>(opened: &mut Opened<R>) -> Result<String> {
    let idx = opened
        .position_of(VERSION_TXT)
        .ok_or(PupError::MissingEntry { id: VERSION_TXT })?;
    let data = opened.read_segment(idx)?;
    let text = String::from_utf8_lossy(&data);
    Ok(text.lines().next().unwrap_or("").trim().to_string())
}
