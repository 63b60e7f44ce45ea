//! Disk fixtures for the server tests.
//!
//! Each test file compiles this module separately, so helpers unused by one
//! file are expected.
#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Materialize a file tree under `root`. Paths ending in `/` become empty
/// directories; parents are created as needed.
pub fn write_tree(root: &Path, entries: &[(&str, &[u8])]) {
    fs::create_dir_all(root).expect("create root");
    for (name, data) in entries {
        let path = root.join(name);
        if name.ends_with('/') {
            fs::create_dir_all(&path).expect("create dir");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent");
            }
            fs::write(&path, data).expect("write file");
        }
    }
}

/// Write a zip archive with the given `(name, bytes)` entries.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("create zip");
    let mut zip = ZipWriter::new(file);
    let options =
        FileOptions::<()>::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).expect("add directory");
        } else {
            zip.start_file(*name, options).expect("start file");
            zip.write_all(data).expect("write entry");
        }
    }

    zip.finish().expect("finish zip");
}
