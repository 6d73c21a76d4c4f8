//! The self-describing identifier type and its wire codec.
//!
//! The wire format is `<varint code><varint length><length digest bytes>`,
//! with both integers in unsigned little-endian base-128 (low seven bits of
//! each byte are data, a set high bit means another byte follows). Decoding
//! is all-or-nothing: a buffer either parses completely or yields an error,
//! never a partially filled result.

use crate::error::Error;
use crate::registry;

/// An encoded multihash: algorithm code, digest length, and the digest bytes
/// in one self-describing byte sequence. Immutable once created; compare,
/// hash, or ship it as an opaque value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multihash(Vec<u8>);

impl Multihash {
    /// from_bytes validates `buf` as a complete encoded multihash and wraps
    /// it without re-encoding.
    pub fn from_bytes(buf: Vec<u8>) -> Result<Multihash, Error> {
        decode(&buf)?;
        Ok(Multihash(buf))
    }

    /// from_hex parses a hex string produced by [`Multihash::hex_string`].
    pub fn from_hex(s: &str) -> Result<Multihash, Error> {
        Multihash::from_bytes(hex::decode(s)?)
    }

    /// as_bytes returns the encoded wire form.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// into_bytes unwraps the encoded wire form.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// hex_string renders the encoded wire form as lowercase hex.
    pub fn hex_string(&self) -> String {
        hex::encode(&self.0)
    }

    /// decode parses this multihash back into its fields.
    pub fn decode(&self) -> Result<Decoded, Error> {
        decode(&self.0)
    }
}

impl std::fmt::Display for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex_string())
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The parsed form of an encoded multihash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Algorithm code.
    pub code: u64,
    /// Registered name of the algorithm.
    pub name: &'static str,
    /// Digest length in bytes, as declared on the wire.
    pub length: usize,
    /// The digest bytes.
    pub digest: Vec<u8>,
}

/// encode packages `digest` with its algorithm `code` and `length` into the
/// wire form. `digest.len()` must equal `length`. The code is not checked
/// against the registry here; producing identifiers from raw data goes
/// through [`crate::sum::sum`], which is.
pub fn encode(digest: &[u8], code: u64, length: usize) -> Result<Multihash, Error> {
    if digest.len() != length {
        return Err(Error::InconsistentLength {
            declared: length,
            actual: digest.len(),
        });
    }

    let mut buf = Vec::with_capacity(uvarint_len(code) + uvarint_len(length as u64) + length);
    write_uvarint(&mut buf, code);
    write_uvarint(&mut buf, length as u64);
    buf.extend_from_slice(digest);
    Ok(Multihash(buf))
}

/// decode parses `buf` as an encoded multihash: the code varint, the length
/// varint, then exactly `length` digest bytes. The code must satisfy the
/// registry validity rule, and no bytes may remain after the digest.
pub fn decode(buf: &[u8]) -> Result<Decoded, Error> {
    let (code, n) = read_uvarint(buf)?;
    let rest = &buf[n..];
    let (length, m) = read_uvarint(rest)?;
    let digest = &rest[m..];

    let name = registry::code_name(code).ok_or(Error::InvalidCode(code))?;
    if (digest.len() as u64) < length {
        return Err(Error::Truncated {
            needed: length,
            remaining: digest.len(),
        });
    }
    if (digest.len() as u64) > length {
        return Err(Error::TrailingData(digest.len() - length as usize));
    }

    Ok(Decoded {
        code,
        name,
        length: length as usize,
        digest: digest.to_vec(),
    })
}

fn write_uvarint(buf: &mut Vec<u8>, mut v: u64) {
    while v >= 0x80 {
        buf.push(v as u8 | 0x80);
        v >>= 7;
    }
    buf.push(v as u8);
}

fn uvarint_len(v: u64) -> usize {
    // bits / 7, rounded up; a zero value still takes one byte
    (64 - v.max(1).leading_zeros() as usize + 6) / 7
}

// Returns the value and the number of bytes consumed. Accepts at most ten
// bytes; the tenth may only carry the top bit of a u64.
fn read_uvarint(buf: &[u8]) -> Result<(u64, usize), Error> {
    let mut x: u64 = 0;
    let mut s: u32 = 0;
    for (i, &b) in buf.iter().enumerate() {
        if i >= 10 || (i == 9 && b > 1) {
            return Err(Error::MalformedVarint);
        }
        if b < 0x80 {
            return Ok((x | (u64::from(b) << s), i + 1));
        }
        x |= u64::from(b & 0x7f) << s;
        s += 7;
    }
    // ran out of bytes with the continuation bit still set
    Err(Error::MalformedVarint)
}
