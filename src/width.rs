// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Choosing how many offset bytes a build's keys need.
//!
//! Every key in all four category tries shares one offset width `W`, fixed
//! once per build and recorded in the sentinel key.
//! `W` is chosen so that the largest offset among nodes, ways, and areas
//! still fits, keeping keys as short as possible without truncating any
//! object's offset.

use crate::codec::{MAX_WIDTH, MIN_WIDTH};

/// Smallest number of bytes needed to represent `value` in a big-endian
/// unsigned encoding, with `0` needing `1` byte rather than `0`.
fn min_bytes(value: u64) -> u8 {
    if value == 0 {
        return 1;
    }
    let bits_used = 64 - value.leading_zeros();
    ((bits_used + 7) / 8) as u8
}

/// Plan the offset width for a build from each kind's largest offset.
///
/// `nodes_len`, `ways_len`, `areas_len` are each the largest byte offset that
/// will be encoded for that kind (not a record count) — callers typically
/// pass the size in bytes of the corresponding `.dat` file. The result is
/// clamped to `[MIN_WIDTH, MAX_WIDTH]` and is `MIN_WIDTH` when all three
/// inputs are zero.
pub fn plan_width(nodes_len: u64, ways_len: u64, areas_len: u64) -> u8 {
    let width = min_bytes(nodes_len)
        .max(min_bytes(ways_len))
        .max(min_bytes(areas_len));
    let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
    crate::contracts::check_width_in_range(width);
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_gives_minimum_width() {
        assert_eq!(plan_width(0, 0, 0), 1);
    }

    #[test]
    fn picks_the_largest_requirement() {
        assert_eq!(plan_width(0, 0, 300_000), 3);
        assert_eq!(plan_width(255, 0, 0), 1);
        assert_eq!(plan_width(256, 0, 0), 2);
    }

    #[test]
    fn clamps_to_eight() {
        assert_eq!(plan_width(u64::MAX, 0, 0), 8);
    }

    #[test]
    fn min_bytes_boundaries() {
        assert_eq!(min_bytes(0), 1);
        assert_eq!(min_bytes(255), 1);
        assert_eq!(min_bytes(256), 2);
        assert_eq!(min_bytes(65_535), 2);
        assert_eq!(min_bytes(65_536), 3);
        assert_eq!(min_bytes(u64::MAX), 8);
    }
}
