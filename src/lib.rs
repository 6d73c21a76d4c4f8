#![warn(missing_docs)]
//! Self-describing cryptographic hash digests.
//!
//! A multihash packages a digest together with the algorithm that produced
//! it and the digest's length, so the resulting byte sequence can be
//! interpreted without out-of-band context:
//!
//! ```text
//! <varint algorithm code><varint digest length><digest bytes>
//! ```
//!
//! Content-addressed stores and peer-to-peer systems pass these around as
//! opaque, comparable references to content. Every operation here is a pure
//! function of its inputs; the code tables are fixed for the process
//! lifetime, so calls may run concurrently without coordination.
//!
//! # Example
//! ```
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mh = multihash::sum("hello world".as_bytes(), multihash::SHA2_256, None)?;
//!   println!("Result: {}", mh.hex_string());
//!
//!   let dec = multihash::decode(mh.as_bytes())?;
//!   println!("Algorithm: {} ({} bytes)", dec.name, dec.length);
//!
//!   Ok(())
//! }
//! ```

/// `error` is the error taxonomy shared by every operation in the crate.
pub mod error;
/// `iface` declares the boundary traits for collaborators that consume
/// encoded multihashes.
pub mod iface;
/// `multihash` is the self-describing identifier type and its wire codec.
pub mod multihash;
/// `registry` is the table of algorithm codes, default lengths, and names.
pub mod registry;
/// `sum` computes digests and packages them as multihashes.
pub mod sum;

pub use error::Error;
pub use multihash::{decode, encode, Decoded, Multihash};
pub use registry::{
    code_for_name, code_name, default_length, family_output_size, valid_code, BLAKE2B_MAX,
    BLAKE2B_MIN, BLAKE2S_MAX, BLAKE2S_MIN, DBL_SHA2_256, KECCAK_224, KECCAK_256, KECCAK_384,
    KECCAK_512, MURMUR3, SHA1, SHA2_256, SHA2_512, SHA3, SHAKE_128, SHAKE_256,
};
pub use sum::sum;
