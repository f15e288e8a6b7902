// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composing and decomposing a trie key from `(text, kind, offset)`.
//!
//! A key is `text_bytes ∥ kind_marker ∥ offset_bytes_be`, where the offset is
//! written most-significant-byte first in exactly `width` bytes. MSB-first
//! maximizes prefix sharing in the trie: offsets from the same import run
//! tend to share their high-order bytes, so putting those bytes closest to
//! the kind marker gives siblings a longer common prefix.
//!
//! `encode` then `decode` is the identity for any non-empty text free of the
//! control bytes `{0x01, 0x02, 0x03, 0x04}` — see the codec round-trip
//! property test for the proptest that checks this.

use crate::error::{CorruptReason, Error, Result};
use crate::types::Kind;

/// The reserved sentinel prefix byte (ASCII `EOT`). A key starting with this
/// byte is never a real object key — producer names are guaranteed free of
/// control bytes `0x01..=0x04`.
pub const SENTINEL_PREFIX: u8 = 0x04;

/// Smallest and largest legal offset width.
pub const MIN_WIDTH: u8 = 1;
pub const MAX_WIDTH: u8 = 8;

/// Build the sentinel key `0x04 ∥ ASCII(width)`.
pub fn sentinel_key(width: u8) -> Vec<u8> {
    let mut key = vec![SENTINEL_PREFIX];
    key.extend_from_slice(width.to_string().as_bytes());
    key
}

/// Parse a sentinel key's payload (everything after the leading `0x04`) back
/// into a width. Returns `None` if the payload isn't a plain decimal integer
/// in `[MIN_WIDTH, MAX_WIDTH]`.
pub fn parse_sentinel_payload(payload: &[u8]) -> Option<u8> {
    let text = std::str::from_utf8(payload).ok()?;
    let width: u8 = text.parse().ok()?;
    if (MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        Some(width)
    } else {
        None
    }
}

/// Encode `(text, kind, offset)` into a trie key of exactly
/// `text.len() + 1 + width as usize` bytes.
///
/// # Errors
/// Returns [`Error::EmptyText`] if `text` is empty.
pub fn encode(text: &str, kind: Kind, offset: u64, width: u8) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(Error::EmptyText);
    }
    let width_usize = width as usize;
    let mut key = Vec::with_capacity(text.len() + 1 + width_usize);
    key.extend_from_slice(text.as_bytes());
    key.push(kind.marker());
    // MSB first: byte i (from the marker) holds bits [8*(width-1-i) .. 8*(width-i)).
    for i in 0..width_usize {
        let shift = 8 * (width_usize - 1 - i);
        key.push(((offset >> shift) & 0xff) as u8);
    }
    crate::contracts::check_encoded_key_len(&key, width);
    Ok(key)
}

/// Decode a trie key back into `(text, kind, offset)`.
///
/// # Errors
/// - [`Error::IndexCorrupt`] with [`CorruptReason::Truncated`] if `key` is
///   shorter than `width + 2` bytes.
/// - [`Error::IndexCorrupt`] with [`CorruptReason::BadKind`] if the byte
///   preceding the offset isn't a valid kind marker.
pub fn decode(key: &[u8], width: u8) -> Result<(&str, Kind, u64)> {
    let width = width as usize;
    if key.len() < width + 2 {
        return Err(Error::IndexCorrupt(CorruptReason::Truncated));
    }
    let split = key.len() - width;
    let kind_byte = key[split - 1];
    let kind = Kind::from_marker(kind_byte)
        .ok_or(Error::IndexCorrupt(CorruptReason::BadKind(kind_byte)))?;

    let mut offset: u64 = 0;
    for &byte in &key[split..] {
        offset = (offset << 8) | byte as u64;
    }

    let text_bytes = &key[..split - 1];
    let text = std::str::from_utf8(text_bytes)
        .map_err(|_| Error::IndexCorrupt(CorruptReason::Truncated))?;
    Ok((text, kind, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_basic() {
        let key = encode("Alpha", Kind::Node, 4, 1).unwrap();
        assert_eq!(key, b"Alpha\x01\x04");
        let (text, kind, offset) = decode(&key, 1).unwrap();
        assert_eq!(text, "Alpha");
        assert_eq!(kind, Kind::Node);
        assert_eq!(offset, 4);
    }

    #[test]
    fn empty_text_rejected() {
        assert!(matches!(
            encode("", Kind::Node, 0, 1),
            Err(Error::EmptyText)
        ));
    }

    #[test]
    fn msb_first_layout() {
        // offset 300000 = 0x0493E0, width 3 -> bytes [0x04, 0x93, 0xE0]
        let key = encode("E40", Kind::Way, 300_000, 3).unwrap();
        assert_eq!(&key[key.len() - 3..], &[0x04, 0x93, 0xE0]);
        let (text, kind, offset) = decode(&key, 3).unwrap();
        assert_eq!(text, "E40");
        assert_eq!(kind, Kind::Way);
        assert_eq!(offset, 300_000);
    }

    #[test]
    fn truncated_key_is_corrupt() {
        let short = b"x";
        assert!(matches!(
            decode(short, 4),
            Err(Error::IndexCorrupt(CorruptReason::Truncated))
        ));
    }

    #[test]
    fn bad_kind_marker_is_corrupt() {
        let mut key = b"abc".to_vec();
        key.push(0x09); // invalid kind marker
        key.push(0x01); // offset byte, width=1
        assert!(matches!(
            decode(&key, 1),
            Err(Error::IndexCorrupt(CorruptReason::BadKind(0x09)))
        ));
    }

    #[test]
    fn sentinel_round_trip() {
        let key = sentinel_key(3);
        assert_eq!(key, b"\x043");
        assert_eq!(parse_sentinel_payload(&key[1..]), Some(3));
    }

    #[test]
    fn sentinel_rejects_out_of_range() {
        assert_eq!(parse_sentinel_payload(b"0"), None);
        assert_eq!(parse_sentinel_payload(b"9"), None);
        assert_eq!(parse_sentinel_payload(b"abc"), None);
    }
}
