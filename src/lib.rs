// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `geotext` builds and queries prefix-search text indexes over offline map
//! objects — the text-search subsystem of a larger offline map toolkit.
//!
//! An import pipeline ([`build`]) reads named map objects (nodes, ways,
//! areas) and sorts their name fields into four category tries: POI,
//! Location, Region, and Other. At query time, [`index::Index::open`] loads
//! a built index and [`search::search`] resolves a text prefix back to the
//! typed object references it belongs to.
//!
//! This crate has no opinion on what a "node" or "way" really is beyond the
//! handful of fields it needs to index names — geometry, tags, routing, and
//! rendering all live elsewhere in the toolkit. See [`types::TypeConfig`]
//! for the one piece of toolkit-specific knowledge this crate depends on.

pub mod build;
pub mod cli;
pub mod codec;
pub mod contracts;
pub mod error;
pub mod index;
pub mod objects;
pub mod search;
pub mod types;
pub mod width;

pub mod testing;

pub use error::{Error, Result};
pub use index::Index;
pub use search::{search, SearchFlags};
pub use types::{Category, Kind, ObjectRef, TypeConfig, TypeHint};
