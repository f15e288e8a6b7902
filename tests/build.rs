// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end build scenarios.

mod common;

use std::fs;

use common::{build_and_open, empty_u32, standard_type_config, write_object_files, ObjectFiles};
use geotext::error::Error;
use geotext::search::{search, SearchFlags};
use geotext::testing::DatBuilder;
use geotext::types::Kind;
use geotext::Index;

#[test]
fn build_empty_produces_openable_index() {
    let files = ObjectFiles {
        nodes: empty_u32(),
        ways: empty_u32(),
        areas: empty_u32(),
    };
    let (_src, dest, index) = build_and_open(&files);
    assert!(index.warnings().is_empty());
    for filename in ["textpoi.dat", "textloc.dat", "textregion.dat", "textother.dat"] {
        assert!(dest.path().join(filename).exists());
    }
    let result = search(&index, "anything", SearchFlags::ALL).unwrap();
    assert!(result.is_empty());
}

#[test]
fn single_poi_node_is_found_by_prefix() {
    let files = ObjectFiles {
        nodes: DatBuilder::new().node(1, "Cafe Luna", "").build(),
        ways: empty_u32(),
        areas: empty_u32(),
    };
    let (_src, _dest, index) = build_and_open(&files);
    let result = search(&index, "Cafe", SearchFlags::ALL).unwrap();
    assert_eq!(result.len(), 1);
    let refs = &result["Cafe Luna"];
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].kind, Kind::Node);
}

#[test]
fn cross_category_disambiguation() {
    // Same text, different object kinds resolving to different categories.
    let files = ObjectFiles {
        nodes: DatBuilder::new().node(1, "Riverside", "").build(),
        ways: empty_u32(),
        areas: DatBuilder::new().area(&[(3, "Riverside", "")]).build(),
    };
    let (_src, _dest, index) = build_and_open(&files);

    let poi_only = search(
        &index,
        "Riverside",
        SearchFlags {
            poi: true,
            location: false,
            region: false,
            other: false,
        },
    )
    .unwrap();
    assert_eq!(poi_only["Riverside"][0].kind, Kind::Node);

    let region_only = search(
        &index,
        "Riverside",
        SearchFlags {
            poi: false,
            location: false,
            region: true,
            other: false,
        },
    )
    .unwrap();
    assert_eq!(region_only["Riverside"][0].kind, Kind::Area);
}

#[test]
fn area_rings_with_the_same_name_in_different_categories_build_without_panicking() {
    // Two rings of one area, same name, routed to different categories: both
    // produce the identical encoded key (same text, same kind, same area
    // offset) but land in different category keysets. This must not be
    // mistaken for a routing bug during build.
    let files = ObjectFiles {
        nodes: empty_u32(),
        ways: empty_u32(),
        areas: DatBuilder::new()
            .area(&[(1, "Park", ""), (3, "Park", "")])
            .build(),
    };
    let (_src, _dest, index) = build_and_open(&files);

    let poi_only = search(
        &index,
        "Park",
        SearchFlags {
            poi: true,
            location: false,
            region: false,
            other: false,
        },
    )
    .unwrap();
    assert_eq!(poi_only["Park"][0].kind, Kind::Area);

    let region_only = search(
        &index,
        "Park",
        SearchFlags {
            poi: false,
            location: false,
            region: true,
            other: false,
        },
    )
    .unwrap();
    assert_eq!(region_only["Park"][0].kind, Kind::Area);
}

#[test]
fn way_ref_name_is_searchable() {
    let files = ObjectFiles {
        nodes: empty_u32(),
        ways: DatBuilder::new().way(2, "Autobahn", "", "A7").build(),
        areas: empty_u32(),
    };
    let (_src, _dest, index) = build_and_open(&files);
    let result = search(&index, "A7", SearchFlags::ALL).unwrap();
    assert_eq!(result["A7"][0].kind, Kind::Way);
}

#[test]
fn large_offsets_bump_the_offset_width() {
    // Pad ways.dat with an overlong ref_name so the way record (and thus the
    // file) is well past the 256-byte mark before the name we care about,
    // forcing width above 1 byte.
    let padding = "x".repeat(300);
    let files = ObjectFiles {
        nodes: empty_u32(),
        ways: DatBuilder::new()
            .way(2, &padding, "", "")
            .way(2, "Farpoint Road", "", "")
            .build(),
        areas: empty_u32(),
    };
    let (_src, dest_dir, index) = build_and_open(&files);
    assert!(index.width() > 1);
    drop(dest_dir);
}

#[test]
fn one_corrupted_category_file_downgrades_to_a_warning() {
    let files = ObjectFiles {
        nodes: DatBuilder::new().node(1, "Cafe Luna", "").build(),
        ways: empty_u32(),
        areas: empty_u32(),
    };
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    write_object_files(src.path(), &files);
    geotext::build::run_build(src.path(), dest.path(), &standard_type_config()).unwrap();

    // Corrupt one category file with garbage bytes.
    fs::write(dest.path().join("textregion.dat"), b"not a trie").unwrap();

    let index = Index::open(dest.path()).unwrap();
    assert_eq!(index.warnings().len(), 1);
    assert!(index.warnings()[0].contains("textregion.dat"));

    // The remaining categories still work.
    let result = search(&index, "Cafe", SearchFlags::ALL).unwrap();
    assert_eq!(result.len(), 1);
}

#[test]
fn all_categories_corrupted_is_fatal() {
    let files = ObjectFiles {
        nodes: empty_u32(),
        ways: empty_u32(),
        areas: empty_u32(),
    };
    let src = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    write_object_files(src.path(), &files);
    geotext::build::run_build(src.path(), dest.path(), &standard_type_config()).unwrap();

    for filename in ["textpoi.dat", "textloc.dat", "textregion.dat", "textother.dat"] {
        fs::write(dest.path().join(filename), b"garbage").unwrap();
    }

    let result = Index::open(dest.path());
    assert!(matches!(result, Err(Error::NoCategoriesAvailable)));
}
