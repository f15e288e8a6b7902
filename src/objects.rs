// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Minimal reader for the `nodes.dat` / `ways.dat` / `areas.dat` record
//! layout that a text-index build reads from.
//!
//! A full map toolkit owns the real `Node`/`Way`/`Area` types, with all the
//! geometry and tags this crate has no business touching (Non-goal). What
//! follows is a stand-in record shape, specified only to the depth C2/C3
//! need: each kind's file is a little-endian `u32` record count followed by
//! that many records, back to back. A record's offset is its byte position
//! in the file, counted from the start of the file (so the first record
//! sits right after the 4-byte count header).

use std::io;

use crate::error::{Error, Result};
use crate::types::Kind;

fn unexpected_eof(what: &'static str) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("truncated while reading {what}"),
    ))
}

/// A byte cursor over an in-memory `.dat` file.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    fn offset(&self) -> u64 {
        self.pos as u64
    }

    fn read_u32(&mut self, what: &'static str) -> Result<u32> {
        let end = self.pos + 4;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or_else(|| unexpected_eof(what))?;
        self.pos = end;
        Ok(u32::from_le_bytes(slice.try_into().unwrap()))
    }

    fn read_string(&mut self, what: &'static str) -> Result<String> {
        let len = self.read_u32(what)? as usize;
        let end = self.pos + len;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or_else(|| unexpected_eof(what))?;
        self.pos = end;
        String::from_utf8(slice.to_vec())
            .map_err(|_| unexpected_eof(what))
    }
}

/// A single indexable ring within an area: its own type, but no offset of
/// its own — rings share their parent area's file offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    pub type_id: u32,
    pub name: String,
    pub name_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub offset: u64,
    pub type_id: u32,
    pub name: String,
    pub name_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WayRecord {
    pub offset: u64,
    pub type_id: u32,
    pub name: String,
    pub name_alt: String,
    pub ref_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaRecord {
    pub offset: u64,
    pub rings: Vec<Ring>,
}

/// The kind-tagged name fields one object offers to the keyset builder.
pub trait Nameable {
    fn kind() -> Kind;
    fn offset(&self) -> u64;
    /// All non-empty name fields to index for this object, in no particular
    /// order (the keyset builder treats them as an unordered set of texts).
    fn names(&self) -> Vec<&str>;
    fn type_id_for_category(&self) -> Vec<u32>;
}

impl Nameable for NodeRecord {
    fn kind() -> Kind {
        Kind::Node
    }
    fn offset(&self) -> u64 {
        self.offset
    }
    fn names(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.name_alt.as_str()]
    }
    fn type_id_for_category(&self) -> Vec<u32> {
        vec![self.type_id]
    }
}

impl Nameable for WayRecord {
    fn kind() -> Kind {
        Kind::Way
    }
    fn offset(&self) -> u64 {
        self.offset
    }
    fn names(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.name_alt.as_str(),
            self.ref_name.as_str(),
        ]
    }
    fn type_id_for_category(&self) -> Vec<u32> {
        vec![self.type_id]
    }
}

fn read_node(cursor: &mut Cursor<'_>) -> Result<NodeRecord> {
    let offset = cursor.offset();
    let type_id = cursor.read_u32("node type_id")?;
    let name = cursor.read_string("node name")?;
    let name_alt = cursor.read_string("node name_alt")?;
    Ok(NodeRecord {
        offset,
        type_id,
        name,
        name_alt,
    })
}

fn read_way(cursor: &mut Cursor<'_>) -> Result<WayRecord> {
    let offset = cursor.offset();
    let type_id = cursor.read_u32("way type_id")?;
    let name = cursor.read_string("way name")?;
    let name_alt = cursor.read_string("way name_alt")?;
    let ref_name = cursor.read_string("way ref_name")?;
    Ok(WayRecord {
        offset,
        type_id,
        name,
        name_alt,
        ref_name,
    })
}

fn read_ring(cursor: &mut Cursor<'_>) -> Result<Ring> {
    let type_id = cursor.read_u32("ring type_id")?;
    let name = cursor.read_string("ring name")?;
    let name_alt = cursor.read_string("ring name_alt")?;
    Ok(Ring {
        type_id,
        name,
        name_alt,
    })
}

fn read_area(cursor: &mut Cursor<'_>) -> Result<AreaRecord> {
    let offset = cursor.offset();
    let ring_count = cursor.read_u32("area ring_count")?;
    let mut rings = Vec::with_capacity(ring_count as usize);
    for _ in 0..ring_count {
        rings.push(read_ring(cursor)?);
    }
    Ok(AreaRecord { offset, rings })
}

/// Parse `nodes.dat` bytes into its records.
pub fn read_nodes(bytes: &[u8]) -> Result<Vec<NodeRecord>> {
    let mut cursor = Cursor::new(bytes);
    let count = cursor.read_u32("node count")?;
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(read_node(&mut cursor)?);
    }
    Ok(records)
}

/// Parse `ways.dat` bytes into its records.
pub fn read_ways(bytes: &[u8]) -> Result<Vec<WayRecord>> {
    let mut cursor = Cursor::new(bytes);
    let count = cursor.read_u32("way count")?;
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(read_way(&mut cursor)?);
    }
    Ok(records)
}

/// Parse `areas.dat` bytes into its records.
pub fn read_areas(bytes: &[u8]) -> Result<Vec<AreaRecord>> {
    let mut cursor = Cursor::new(bytes);
    let count = cursor.read_u32("area count")?;
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(read_area(&mut cursor)?);
    }
    Ok(records)
}
