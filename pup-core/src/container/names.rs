//! Entry id to output filename mapping.

use std::borrow::Cow;

pub const VERSION_TXT: u64 = 0x100;

/// Segment that is itself a tar archive and gets expanded after writing.
pub const NESTED_ARCHIVE_NAME: &str = "update_files.tar";

/// Directory the extraction is ultimately looking for.
pub const TARGET_DIR_NAME: &str = "dev_flash";

static KNOWN: [(u64, &str); 14] = [
    (0x100, "version.txt"),
    (0x101, "license.xml"),
    (0x102, "promo_flags.txt"),
    (0x103, "update_flags.txt"),
    (0x200, "ps3swu.self"),
    (0x201, "vsh.tar"),
    (0x202, "dots.txt"),
    (0x300, "update_files.tar"),
    (0x301, "spkg_hdr.tar"),
    (0x400, "ps3swu2.self"),
    (0x500, "sdk_version.txt"),
    (0x501, "spkg.tar"),
    (0x600, "ps3swu3.self"),
    (0x601, "ps3swu4.self"),
];

pub fn known_name(id: u64) -> Option<&'static str> {
    KNOWN.iter().find(|(k, _)| *k == id).map(|(_, n)| *n)
}

pub fn resolve_name(id: u64) -> Cow<'static, str> {
    match known_name(id) {
        Some(n) => Cow::Borrowed(n),
        None => Cow::Owned(format!("segment_{id:x}.bin")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mapped_ids_resolve() {
        assert_eq!(resolve_name(0x100), "version.txt");
        assert_eq!(resolve_name(0x300), NESTED_ARCHIVE_NAME);
        assert_eq!(resolve_name(0x601), "ps3swu4.self");
    }

    #[test]
    fn unknown_ids_get_hex_names() {
        assert_eq!(resolve_name(0x9999), "segment_9999.bin");
        assert_eq!(resolve_name(0xABCDEF), "segment_abcdef.bin");
        assert_eq!(resolve_name(0), "segment_0.bin");
    }

    #[test]
    fn mapped_names_are_unique() {
        let names: HashSet<_> = KNOWN.iter().map(|(_, n)| *n).collect();
        let ids: HashSet<_> = KNOWN.iter().map(|(i, _)| *i).collect();
        assert_eq!(names.len(), KNOWN.len());
        assert_eq!(ids.len(), KNOWN.len());
    }

    #[test]
    fn synthesized_names_never_shadow_the_archive() {
        assert_eq!(known_name(0x300), Some(NESTED_ARCHIVE_NAME));
        assert!(KNOWN.iter().all(|(_, n)| !n.starts_with("segment_")));
    }
}
