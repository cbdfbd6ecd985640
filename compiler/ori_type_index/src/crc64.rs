//! CRC-64/XZ checksum, evaluable at compile time.
//!
//! Reduces a type's canonical name to the 64-bit value wrapped by
//! [`TypeId`](crate::TypeId). Every function here is a `const fn`, so a name
//! known at compile time checksums to a constant, and the runtime path runs
//! the very same body.
//!
//! # Parameters (CRC-64/XZ)
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Polynomial | 0x42F0E1EBA9EA3693 (ECMA-182), reflected 0xC96C5795D7870F42 |
//! | Init | 0xFFFFFFFFFFFFFFFF |
//! | RefIn | true |
//! | RefOut | true |
//! | XorOut | 0xFFFFFFFFFFFFFFFF |
//!
//! Init and XorOut cancel on empty input, so `crc64(b"") == 0`.
//!
//! # Test Vector
//!
//! ```
//! use ori_type_index::crc64;
//!
//! // Standard check value: "123456789" -> 0x995DC9BBDF1939FA
//! assert_eq!(crc64(b"123456789"), 0x995D_C9BB_DF19_39FA);
//! ```
//!
//! Type ids are only meaningful within one build, but they are only
//! meaningful at all if every id in that build uses these exact parameters.

/// Reflected ECMA-182 polynomial.
pub const POLY: u64 = 0xC96C_5795_D787_0F42;

/// Initial accumulator value.
const INIT: u64 = u64::MAX;

/// Final XOR mask.
const XOR_OUT: u64 = u64::MAX;

/// Precomputed lookup table, one entry per byte value.
const CRC_TABLE: [u64; 256] = {
    let mut table = [0u64; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u64;
        let mut bit = 0;
        while bit < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// Running CRC-64/XZ accumulator.
///
/// Threaded by value so it stays usable in `const` contexts:
///
/// ```
/// use ori_type_index::{crc64, Crc64};
///
/// const SPLIT: u64 = Crc64::new().update(b"N::").update(b"Foo<int>").finish();
/// assert_eq!(SPLIT, crc64(b"N::Foo<int>"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Crc64 {
    state: u64,
}

impl Crc64 {
    /// Start a fresh checksum.
    #[inline]
    pub const fn new() -> Self {
        Crc64 { state: INIT }
    }

    /// Feed `data` into the accumulator.
    #[inline]
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "only the low byte selects the table entry"
    )]
    pub const fn update(self, data: &[u8]) -> Self {
        let mut crc = self.state;
        let mut i = 0;
        while i < data.len() {
            let index = (crc as u8) ^ data[i];
            crc = CRC_TABLE[index as usize] ^ (crc >> 8);
            i += 1;
        }
        Crc64 { state: crc }
    }

    /// Apply the final XOR and return the checksum.
    #[inline]
    pub const fn finish(self) -> u64 {
        self.state ^ XOR_OUT
    }
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate the CRC-64/XZ checksum of `data`.
#[inline]
pub const fn crc64(data: &[u8]) -> u64 {
    Crc64::new().update(data).finish()
}
