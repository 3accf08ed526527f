mod common;

use common::write_pup;
use pup_core::{PupError, firmware_version, list};

#[test]
fn listing_reports_names_without_writing() {
    let td = tempfile::tempdir().unwrap();
    let pup = td.path().join("p.pup");
    write_pup(
        &pup,
        &[(0x100, b"4.92".to_vec()), (0xdead, vec![0; 3])],
    );
    let listing = list(&pup).unwrap();
    assert_eq!(listing.magic, "SCEUF");
    assert!(listing.sceuf);
    assert_eq!(listing.entry_count, 2);
    assert_eq!(listing.entries[0].name, "version.txt");
    assert!(listing.entries[0].known);
    assert_eq!(listing.entries[1].name, "segment_dead.bin");
    assert!(!listing.entries[1].known);
    assert_eq!(listing.entries[1].data_offset, 0x20 + 2 * 0x20 + 4);
    assert_eq!(std::fs::read_dir(td.path()).unwrap().count(), 1);
}

#[test]
fn version_from_file() {
    let td = tempfile::tempdir().unwrap();
    let pup = td.path().join("p.pup");
    write_pup(&pup, &[(0x100, b"4.92\n".to_vec())]);
    assert_eq!(firmware_version(&pup).unwrap(), "4.92");
}

#[test]
fn list_missing_input() {
    let td = tempfile::tempdir().unwrap();
    let err = list(&td.path().join("missing.pup")).unwrap_err();
    assert!(matches!(err, PupError::InputNotFound(_)));
}
