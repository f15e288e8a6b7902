// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Driving a full import: read object records, plan the offset width, build
//! keysets, and write the four category tries.

pub mod keyset;
pub mod trie;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::objects::{read_areas, read_nodes, read_ways};
use crate::types::{Category, TypeConfig};
use crate::width::plan_width;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Build a complete text index from `<src_dir>/{nodes,ways,areas}.dat` into
/// `dest_dir`, which must already exist.
///
/// Returns the offset width chosen for this build.
pub fn run_build(src_dir: &Path, dest_dir: &Path, type_config: &dyn TypeConfig) -> Result<u8> {
    let nodes_bytes = fs::read(src_dir.join("nodes.dat"))?;
    let ways_bytes = fs::read(src_dir.join("ways.dat"))?;
    let areas_bytes = fs::read(src_dir.join("areas.dat"))?;

    let width = plan_width(
        nodes_bytes.len() as u64,
        ways_bytes.len() as u64,
        areas_bytes.len() as u64,
    );

    let read_bar = new_bar(3, "Reading object files");
    let nodes = read_nodes(&nodes_bytes)?;
    tick(&read_bar);
    let ways = read_ways(&ways_bytes)?;
    tick(&read_bar);
    let areas = read_areas(&areas_bytes)?;
    tick(&read_bar);
    finish(&read_bar, "object files read");

    let mut keysets = keyset::Keysets::new();
    keyset::add_nodes(&mut keysets, &nodes, type_config, width)?;
    keyset::add_ways(&mut keysets, &ways, type_config, width)?;
    keyset::add_areas(&mut keysets, &areas, type_config, width)?;

    let by_category: Vec<(Category, &[Vec<u8>])> = Category::ALL
        .iter()
        .map(|&category| (category, keysets.get(category).as_slice()))
        .collect();
    crate::contracts::check_categories_disjoint(&by_category);

    let write_bar = new_bar(4, "Writing category tries");
    trie::build_all(&keysets, dest_dir, width)?;
    finish(&write_bar, "tries written");

    Ok(width)
}

#[cfg(feature = "progress")]
fn new_bar(len: u64, message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message(message);
    bar
}

#[cfg(not(feature = "progress"))]
fn new_bar(_len: u64, _message: &'static str) {}

#[cfg(feature = "progress")]
fn tick(bar: &ProgressBar) {
    bar.inc(1);
}

#[cfg(not(feature = "progress"))]
fn tick(_bar: &()) {}

#[cfg(feature = "progress")]
fn finish(bar: &ProgressBar, message: &'static str) {
    bar.finish_with_message(message);
}

#[cfg(not(feature = "progress"))]
fn finish(_bar: &(), _message: &'static str) {}
