//! Tests for entry scanning, skipping and decompression

use std::io::Read;

use super::*;
use crate::Error;
use crate::app::services::archive::{CompressionMethod, ZipStream, stream_entry};

fn read_entry(archive: &[u8], name: &str) -> crate::Result<String> {
    stream_entry(archive, name, |mut entry| {
        let mut text = String::new();
        entry.read_to_string(&mut text)?;
        Ok(text)
    })
}

#[test]
fn test_reads_stored_and_deflated_entries() {
    let archive = ZipBuilder::new()
        .stored("readme.txt", b"GeoNames dump\n")
        .deflated("cities500.txt", b"1\tAndorra\n2\tFrance\n")
        .finish();

    assert_eq!(read_entry(&archive, "readme.txt").unwrap(), "GeoNames dump\n");
    assert_eq!(
        read_entry(&archive, "cities500.txt").unwrap(),
        "1\tAndorra\n2\tFrance\n"
    );
}

#[test]
fn test_skips_streamed_entries_before_target() {
    let archive = ZipBuilder::new()
        .streamed("first.txt", "noise\n".repeat(500).as_bytes(), true)
        .streamed("second.txt", b"more noise", false)
        .streamed("target.txt", b"payload\n", true)
        .finish();

    assert_eq!(read_entry(&archive, "target.txt").unwrap(), "payload\n");
}

#[test]
fn test_skips_sized_entry_with_trailing_descriptor() {
    let archive = ZipBuilder::new()
        .sized_with_descriptor("readme.txt", "header notes\n".repeat(40).as_bytes())
        .deflated("target.txt", b"payload\n")
        .finish();

    assert_eq!(read_entry(&archive, "target.txt").unwrap(), "payload\n");

    let names = ZipStream::new(archive.as_slice()).entries().unwrap();
    assert_eq!(names, vec!["readme.txt", "target.txt"]);
}

#[test]
fn test_missing_entry() {
    let archive = ZipBuilder::new()
        .deflated("a.txt", b"a")
        .deflated("b.txt", b"b")
        .finish();

    match read_entry(&archive, "c.txt") {
        Err(Error::EntryNotFound { name }) => assert_eq!(name, "c.txt"),
        other => panic!("expected entry not found, got {:?}", other),
    }

    let no_directory = ZipBuilder::new().deflated("a.txt", b"a").truncated();
    assert!(matches!(
        read_entry(&no_directory, "c.txt"),
        Err(Error::EntryNotFound { .. })
    ));
}

#[test]
fn test_entry_names_compare_exactly() {
    let archive = ZipBuilder::new().deflated("dump/cities500.txt", b"x").finish();

    assert!(read_entry(&archive, "cities500.txt").is_err());
    assert_eq!(read_entry(&archive, "dump/cities500.txt").unwrap(), "x");
}

#[test]
fn test_entries_lists_names_in_order() {
    let archive = ZipBuilder::new()
        .stored("readme.txt", b"r")
        .streamed("allCountries.txt", b"data", true)
        .raw("other.bin", 12, b"BZh9....", 0)
        .finish();

    let names = ZipStream::new(archive.as_slice()).entries().unwrap();
    assert_eq!(names, vec!["readme.txt", "allCountries.txt", "other.bin"]);
}

#[test]
fn test_next_entry_exposes_headers() {
    let archive = ZipBuilder::new()
        .deflated("a.txt", b"hello")
        .streamed("b.txt", b"world", true)
        .finish();
    let mut zip = ZipStream::new(archive.as_slice());

    let first = zip.next_entry().unwrap().unwrap().clone();
    assert_eq!(first.name, "a.txt");
    assert_eq!(first.method, CompressionMethod::Deflated);
    assert_eq!(first.uncompressed_size, 5);
    assert_eq!(first.crc32, crc32(b"hello"));

    let second = zip.next_entry().unwrap().unwrap().clone();
    assert!(second.has_data_descriptor());

    assert!(zip.next_entry().unwrap().is_none());
    assert_eq!(zip.entries_seen(), 2);
}

#[test]
fn test_unsupported_method_skipped_but_not_opened() {
    let archive = ZipBuilder::new()
        .raw("shapes.bz2", 12, b"not really bzip2", 0)
        .deflated("shapes_all_low.txt", b"geoNameId\tgeoJSON\n")
        .finish();

    assert_eq!(
        read_entry(&archive, "shapes_all_low.txt").unwrap(),
        "geoNameId\tgeoJSON\n"
    );
    assert!(matches!(
        read_entry(&archive, "shapes.bz2"),
        Err(Error::UnsupportedArchive { .. })
    ));
}

#[test]
fn test_crc_mismatch_is_invalid_data() {
    let archive = ZipBuilder::new()
        .raw("bad.txt", 0, b"tampered", crc32(b"original"))
        .finish();

    let err = stream_entry(archive.as_slice(), "bad.txt", |mut entry| {
        let mut text = String::new();
        entry.read_to_string(&mut text)?;
        Ok(text)
    })
    .unwrap_err();

    match err {
        Error::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_consumer_may_stop_early() {
    let body = "line\n".repeat(10_000);
    let archive = ZipBuilder::new().deflated("big.txt", body.as_bytes()).finish();

    let first = stream_entry(archive.as_slice(), "big.txt", |mut entry| {
        let mut buf = [0u8; 5];
        entry.read_exact(&mut buf)?;
        Ok(buf)
    })
    .unwrap();

    assert_eq!(&first, b"line\n");
}

#[test]
fn test_truncated_entry_is_an_error() {
    let mut archive = ZipBuilder::new()
        .stored("a.txt", b"0123456789")
        .deflated("b.txt", b"b")
        .finish();
    archive.truncate(40);

    assert!(matches!(read_entry(&archive, "b.txt"), Err(Error::Io { .. })));
}

#[test]
fn test_garbage_is_not_an_archive() {
    let result = read_entry(b"geonameid\tname\n", "cities500.txt");
    assert!(matches!(result, Err(Error::UnsupportedArchive { .. })));
}
