// tests/file_ops_tests.rs
mod common;

use std::fs;
use std::path::{Path, PathBuf};

use aircraft_cipher::crypto::container_len;
use aircraft_cipher::file_ops::*;
use aircraft_cipher::{decrypt_to_vec, CoreError};
use tempfile::tempdir;

#[test]
fn test_encrypt_file_and_decrypt_file_roundtrip() {
    common::setup();
    let dir = tempdir().unwrap();
    let plain = dir.path().join("c172.xml");
    let enc = dir.path().join("c172.bin");
    let dec = dir.path().join("c172-restored.xml");

    let xml = b"<?xml version=\"1.0\"?>\n<fdm_config name=\"c172\" version=\"2.0\"/>\n";
    fs::write(&plain, xml).unwrap();

    let size1 = encrypt_file(&plain, &enc).unwrap();
    let size2 = decrypt_file(&enc, &dec).unwrap();

    assert_eq!(size1, xml.len() as u64);
    assert_eq!(size1, size2);
    assert_eq!(fs::read(&enc).unwrap().len(), container_len(xml.len()));
    assert_eq!(fs::read(&dec).unwrap(), xml);
}

#[test]
fn test_encrypted_file_decrypts_in_memory() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("empty.xml");
    let enc = dir.path().join("empty.bin");
    fs::write(&plain, b"").unwrap();

    assert_eq!(encrypt_file(&plain, &enc).unwrap(), 0);

    let container = fs::read(&enc).unwrap();
    assert_eq!(container.len(), 32);
    assert!(decrypt_to_vec(&container).unwrap().expose_secret().is_empty());
}

#[test]
fn test_encrypt_file_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let result = encrypt_file(dir.path().join("missing.xml"), dir.path().join("out.bin"));
    assert!(matches!(result, Err(CoreError::Io(_))));
    assert!(!dir.path().join("out.bin").exists());
}

#[test]
fn test_encrypt_file_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plane.xml");
    fs::write(&plain, b"<aircraft/>").unwrap();

    let result = encrypt_file(&plain, dir.path().join("no-such-dir").join("plane.bin"));
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn test_decrypt_file_rejects_short_container() {
    let dir = tempdir().unwrap();
    let enc = dir.path().join("short.bin");
    let out = dir.path().join("short.xml");
    fs::write(&enc, [0u8; 16]).unwrap();

    let result = decrypt_file(&enc, &out);
    assert!(matches!(result, Err(CoreError::TooShort { len: 16, min: 17 })));
    assert!(!out.exists());
}

#[test]
fn test_default_output_path() {
    assert_eq!(default_output_path(Path::new("plane.xml")), PathBuf::from("plane.bin"));
    assert_eq!(
        default_output_path(Path::new("aircraft/c172/c172.xml")),
        PathBuf::from("aircraft/c172/c172.bin")
    );
    assert_eq!(default_output_path(Path::new("plane")), PathBuf::from("plane.bin"));
    assert_eq!(default_output_path(Path::new("plane.XML")), PathBuf::from("plane.XML.bin"));
    assert_eq!(
        default_output_path(Path::new("plane.xml.bak")),
        PathBuf::from("plane.xml.bak.bin")
    );
    assert_eq!(
        default_output_path(Path::new("engines.xml/turbine")),
        PathBuf::from("engines.xml/turbine.bin")
    );
}

#[test]
fn test_default_output_path_with_custom_extensions() {
    assert_eq!(
        default_output_path_with(Path::new("plane.bin"), "bin", "xml"),
        PathBuf::from("plane.xml")
    );
    assert_eq!(
        default_output_path_with(Path::new("plane.dat"), "bin", "xml"),
        PathBuf::from("plane.dat.xml")
    );
}

#[test]
fn test_locate_container_prefers_bin_then_enc() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plane.xml");
    let bin = dir.path().join("plane.bin");
    let enc = dir.path().join("plane.xml.enc");

    assert_eq!(locate_container(&plain), None);

    fs::write(&enc, b"x").unwrap();
    assert_eq!(locate_container(&plain), Some(enc.clone()));

    fs::write(&bin, b"x").unwrap();
    assert_eq!(locate_container(&plain), Some(bin));
}

#[test]
fn test_locate_container_ignores_directories() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plane.xml");
    fs::create_dir(dir.path().join("plane.bin")).unwrap();

    assert_eq!(locate_container(&plain), None);
}
