use std::path::PathBuf;

use pup_core::{ExtractOptions, PupError, Result, extract, firmware_version, list};
use tracing::{info, warn};

/// Prefix of the single machine-readable line printed on success.
pub const RESULT_PREFIX: &str = "DEV_FLASH_PATH:";

pub fn handle_extract(pup: PathBuf, dest: PathBuf, no_expand: bool) -> Result<()> {
    if !pup.exists() {
        return Err(PupError::InputNotFound(pup));
    }
    let opts = ExtractOptions {
        expand_nested: !no_expand,
        ..Default::default()
    };
    let ex = extract(&pup, &dest, Some(&opts))?;
    for e in ex.expansions.iter().filter(|e| !e.succeeded()) {
        warn!(archive = %e.archive.display(), "nested archive left partially expanded");
    }
    info!(
        entries = ex.segments.len(),
        dest = %dest.display(),
        "extraction finished"
    );
    let located = ex.into_located()?;
    println!("{RESULT_PREFIX}{}", located.display());
    Ok(())
}

pub fn handle_list(pup: PathBuf, json: bool) -> Result<()> {
    let listing = list(&pup)?;
    if json {
        let s = serde_json::to_string_pretty(&listing)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        println!("{s}");
        return Ok(());
    }
    println!(
        "magic={}{}  entries={}",
        listing.magic,
        if listing.sceuf { "" } else { " (unrecognized)" },
        listing.entry_count
    );
    for r in &listing.entries {
        println!(
            "#{:<3} id={:<#8x} off={:<#12x} size={:<12} {}",
            r.index, r.id, r.data_offset, r.data_size, r.name
        );
    }
    Ok(())
}

pub fn handle_version(pup: PathBuf) -> Result<()> {
    println!("{}", firmware_version(&pup)?);
    Ok(())
}
