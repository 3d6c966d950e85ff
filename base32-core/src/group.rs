// File:    group.rs
// Author:  apezoo
// Date:    2025-07-24
//
// Description: Bit packing for a single Base32 group (up to 5 bytes <-> up to 8 symbol values), shared by encoder and decoder.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The group codec.
//!
//! Up to five bytes are packed big-endian into a 40-bit accumulator, which
//! is then cut into eight 5-bit fields, most significant field first. A
//! partial group only yields the fields its bits actually reach:
//!
//! | bytes | symbols |
//! |-------|---------|
//! | 1     | 2       |
//! | 2     | 4       |
//! | 3     | 5       |
//! | 4     | 7       |
//! | 5     | 8       |
//!
//! Everything here works on 5-bit *values*; mapping values to characters is
//! the alphabet's job.

use crate::error::FormatError;

/// Bytes in a full group.
pub const GROUP_BYTES: usize = 5;
/// Symbols in a full group.
pub const GROUP_SYMBOLS: usize = 8;

const VALUE_MASK: u64 = 0x1f;

// Right shift of each 5-bit field within the 40-bit accumulator.
const FIELD_SHIFTS: [u32; GROUP_SYMBOLS] = [35, 30, 25, 20, 15, 10, 5, 0];

// Indexed by byte count.
const SYMBOLS_FOR_BYTES: [usize; GROUP_BYTES + 1] = [0, 2, 4, 5, 7, 8];

// Indexed by symbol count; `None` marks lengths no byte count produces.
const BYTES_FOR_SYMBOLS: [Option<usize>; GROUP_SYMBOLS + 1] = [
    None,
    None,
    Some(1),
    None,
    Some(2),
    Some(3),
    None,
    Some(4),
    Some(5),
];

/// Number of symbols an unpadded group of `bytes` bytes encodes to.
///
/// Returns `None` outside `1..=5`.
#[must_use]
pub const fn symbols_for_bytes(bytes: usize) -> Option<usize> {
    match bytes {
        1..=GROUP_BYTES => Some(SYMBOLS_FOR_BYTES[bytes]),
        _ => None,
    }
}

/// Number of bytes a group of `symbols` symbol values decodes to.
///
/// Returns `None` for any count other than 2, 4, 5, 7 or 8.
#[must_use]
pub fn bytes_for_symbols(symbols: usize) -> Option<usize> {
    BYTES_FOR_SYMBOLS.get(symbols).copied().flatten()
}

/// Encoded length of `bytes` input bytes.
///
/// With padding this is `ceil(bytes / 5) * 8`; without it the final group
/// is shortened per the partial-group table.
#[must_use]
pub const fn encoded_len(bytes: usize, padded: bool) -> usize {
    let full = bytes / GROUP_BYTES * GROUP_SYMBOLS;
    let rem = bytes % GROUP_BYTES;
    if rem == 0 {
        full
    } else if padded {
        full + GROUP_SYMBOLS
    } else {
        full + SYMBOLS_FOR_BYTES[rem]
    }
}

/// Upper bound on the bytes `symbols` symbols can decode to:
/// `ceil(symbols / 8) * 5`.
#[must_use]
pub const fn decoded_len_upper_bound(symbols: usize) -> usize {
    symbols.div_ceil(GROUP_SYMBOLS) * GROUP_BYTES
}

/// Packs up to five bytes into symbol values.
///
/// Writes `symbols_for_bytes(bytes.len())` values to the front of `values`
/// and returns that count. An empty slice yields zero values.
///
/// # Panics
///
/// Panics if `bytes` is longer than a group.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_group(bytes: &[u8], values: &mut [u8; GROUP_SYMBOLS]) -> usize {
    assert!(
        bytes.len() <= GROUP_BYTES,
        "a group holds at most {GROUP_BYTES} bytes, got {}",
        bytes.len()
    );
    let Some(count) = symbols_for_bytes(bytes.len()) else {
        return 0;
    };

    // Right-align the 40-bit group in a u64, missing bytes stay zero.
    let mut block = [0u8; 8];
    block[3..3 + bytes.len()].copy_from_slice(bytes);
    let acc = u64::from_be_bytes(block);

    for (value, shift) in values.iter_mut().zip(FIELD_SHIFTS).take(count) {
        *value = ((acc >> shift) & VALUE_MASK) as u8;
    }
    count
}

/// Unpacks symbol values into bytes.
///
/// Writes `bytes_for_symbols(values.len())` bytes to the front of `out` and
/// returns that count. Only the low five bits of each value are used.
///
/// # Errors
///
/// Returns [`FormatError::InvalidTrailingGroup`] if `values.len()` is not
/// 2, 4, 5, 7 or 8.
pub fn decode_group(values: &[u8], out: &mut [u8; GROUP_BYTES]) -> Result<usize, FormatError> {
    let count = bytes_for_symbols(values.len())
        .ok_or(FormatError::InvalidTrailingGroup {
            count: values.len(),
        })?;

    let acc = values
        .iter()
        .zip(FIELD_SHIFTS)
        .fold(0u64, |acc, (&value, shift)| {
            acc | ((u64::from(value) & VALUE_MASK) << shift)
        });

    let block = acc.to_be_bytes();
    out[..count].copy_from_slice(&block[3..3 + count]);
    Ok(count)
}

/// Whether the bits of a decodable group that fall past its last whole
/// byte are all zero, as they are in anything [`encode_group`] produced.
///
/// Returns `false` for symbol counts that do not decode.
#[must_use]
pub fn is_canonical(values: &[u8]) -> bool {
    let Some(bytes) = bytes_for_symbols(values.len()) else {
        return false;
    };
    let unused_bits = values.len() * 5 - bytes * 8;
    values
        .last()
        .is_some_and(|&last| last & ((1u8 << unused_bits) - 1) == 0)
}
