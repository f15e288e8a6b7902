// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixtures shared by the integration test suites.

use std::fs;
use std::path::Path;

use geotext::testing::StaticTypeConfig;
use geotext::types::Category;
use geotext::Index;

/// The type ids used across fixtures: 1 = POI, 2 = Location, 3 = Region,
/// 4 = Other (explicit, even though Other is also the fallback), 0 = ignored.
pub fn standard_type_config() -> StaticTypeConfig {
    StaticTypeConfig::new()
        .insert(1, Category::Poi)
        .insert(2, Category::Location)
        .insert(3, Category::Region)
        .insert(4, Category::Other)
        .ignore(0)
}

pub struct ObjectFiles {
    pub nodes: Vec<u8>,
    pub ways: Vec<u8>,
    pub areas: Vec<u8>,
}

pub fn write_object_files(dir: &Path, files: &ObjectFiles) {
    fs::write(dir.join("nodes.dat"), &files.nodes).unwrap();
    fs::write(dir.join("ways.dat"), &files.ways).unwrap();
    fs::write(dir.join("areas.dat"), &files.areas).unwrap();
}

pub fn empty_u32() -> Vec<u8> {
    0u32.to_le_bytes().to_vec()
}

/// Build a standard index from `files` into a fresh temp directory and open
/// it. Returns the temp dir (kept alive by the caller) and the opened index.
pub fn build_and_open(files: &ObjectFiles) -> (tempfile::TempDir, tempfile::TempDir, Index) {
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    write_object_files(src.path(), files);
    geotext::build::run_build(src.path(), dest.path(), &standard_type_config()).unwrap();
    let index = Index::open(dest.path()).unwrap();
    (src, dest, index)
}
