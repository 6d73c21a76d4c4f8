//! Table of algorithm codes: which codes exist, their canonical digest
//! lengths, and their names.
//!
//! Codes are partitioned into fixed single-purpose codes and two contiguous
//! family ranges (blake2b, blake2s) where the offset inside the range encodes
//! the output size: `code - MIN + 1` bytes. The tables are immutable for the
//! process lifetime; adding a code never renumbers an existing one.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// SHA-1, 20-byte digest.
pub const SHA1: u64 = 0x11;
/// SHA-2 256, 32-byte digest.
pub const SHA2_256: u64 = 0x12;
/// SHA-2 512, 64-byte digest.
pub const SHA2_512: u64 = 0x13;
/// SHA-3 512, 64-byte digest.
pub const SHA3: u64 = 0x14;
/// SHAKE-128 extendable-output function, 32-byte default output.
pub const SHAKE_128: u64 = 0x18;
/// SHAKE-256 extendable-output function, 64-byte default output.
pub const SHAKE_256: u64 = 0x19;
/// Keccak-224, 28-byte digest.
pub const KECCAK_224: u64 = 0x1a;
/// Keccak-256, 32-byte digest.
pub const KECCAK_256: u64 = 0x1b;
/// Keccak-384, 48-byte digest.
pub const KECCAK_384: u64 = 0x1c;
/// Keccak-512, 64-byte digest.
pub const KECCAK_512: u64 = 0x1d;
/// Murmur3 x86 32-bit, 4-byte little-endian output. Not cryptographic.
pub const MURMUR3: u64 = 0x22;
/// SHA-256 applied twice, 32-byte digest.
pub const DBL_SHA2_256: u64 = 0x56;

/// First code of the blake2b family (1-byte output).
pub const BLAKE2B_MIN: u64 = 0xb201;
/// Last code of the blake2b family (64-byte output).
pub const BLAKE2B_MAX: u64 = 0xb240;
/// First code of the blake2s family (1-byte output).
pub const BLAKE2S_MIN: u64 = 0xb241;
/// Last code of the blake2s family (32-byte output).
pub const BLAKE2S_MAX: u64 = 0xb260;

static FIXED_CODES: &[(u64, &str, usize)] = &[
    (SHA1, "sha1", 20),
    (SHA2_256, "sha2-256", 32),
    (SHA2_512, "sha2-512", 64),
    (SHA3, "sha3", 64),
    (SHAKE_128, "shake-128", 32),
    (SHAKE_256, "shake-256", 64),
    (KECCAK_224, "keccak-224", 28),
    (KECCAK_256, "keccak-256", 32),
    (KECCAK_384, "keccak-384", 48),
    (KECCAK_512, "keccak-512", 64),
    (MURMUR3, "murmur3", 4),
    (DBL_SHA2_256, "dbl-sha2-256", 32),
];

// code -> name, covering fixed codes and every code of both family ranges.
static CODE_NAMES: Lazy<HashMap<u64, String>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for &(code, name, _) in FIXED_CODES {
        m.insert(code, name.to_string());
    }
    for code in BLAKE2B_MIN..=BLAKE2B_MAX {
        m.insert(code, format!("blake2b-{}", 8 * (code - BLAKE2B_MIN + 1)));
    }
    for code in BLAKE2S_MIN..=BLAKE2S_MAX {
        m.insert(code, format!("blake2s-{}", 8 * (code - BLAKE2S_MIN + 1)));
    }
    m
});

// name -> code, the inverse of CODE_NAMES.
static NAME_CODES: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    CODE_NAMES
        .iter()
        .map(|(&code, name)| (name.as_str(), code))
        .collect()
});

static DEFAULT_LENGTHS: Lazy<HashMap<u64, usize>> = Lazy::new(|| {
    FIXED_CODES
        .iter()
        .map(|&(code, _, length)| (code, length))
        .collect()
});

/// valid_code reports whether `code` is a known fixed code or lies inside a
/// family range, bounds included.
pub fn valid_code(code: u64) -> bool {
    CODE_NAMES.contains_key(&code)
}

/// default_length returns the canonical digest length in bytes for `code`,
/// or `None` for unknown codes. Family codes derive their length from their
/// offset inside the range.
pub fn default_length(code: u64) -> Option<usize> {
    if let Some(size) = family_output_size(code) {
        return Some(size);
    }
    DEFAULT_LENGTHS.get(&code).copied()
}

/// family_output_size returns the output size implied by a family code's
/// offset within its range, or `None` if `code` belongs to no family.
pub fn family_output_size(code: u64) -> Option<usize> {
    if is_blake2b(code) {
        Some((code - BLAKE2B_MIN + 1) as usize)
    } else if is_blake2s(code) {
        Some((code - BLAKE2S_MIN + 1) as usize)
    } else {
        None
    }
}

/// is_blake2b reports whether `code` lies in the blake2b family range.
pub fn is_blake2b(code: u64) -> bool {
    (BLAKE2B_MIN..=BLAKE2B_MAX).contains(&code)
}

/// is_blake2s reports whether `code` lies in the blake2s family range.
pub fn is_blake2s(code: u64) -> bool {
    (BLAKE2S_MIN..=BLAKE2S_MAX).contains(&code)
}

/// code_name returns the human-readable name for `code`, or `None` for
/// unknown codes. Family names carry the output size in bits, e.g.
/// `blake2b-256`.
pub fn code_name(code: u64) -> Option<&'static str> {
    CODE_NAMES.get(&code).map(String::as_str)
}

/// code_for_name returns the code registered under `name`, if any.
pub fn code_for_name(name: &str) -> Option<u64> {
    NAME_CODES.get(name).copied()
}
