//! Digest computation: dispatch a request to the right hash primitive,
//! enforce the supported lengths, and package the result as a multihash.

use blake2::{Blake2bVar, Blake2sVar};
use byteorder::{ByteOrder, LittleEndian};
use digest::{Digest, ExtendableOutput, Update, VariableOutput, XofReader};
use murmur3::murmur3_32;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use sha3::{Keccak224, Keccak256, Keccak384, Keccak512, Sha3_512, Shake128, Shake256};
use std::io::Cursor;

use crate::error::Error;
use crate::multihash::{encode, Multihash};
use crate::registry;

/// sum computes the digest of `data` under the algorithm identified by
/// `code` and returns it encoded as a multihash. `length` selects the digest
/// length in bytes; `None` means the code's default. Shorter lengths
/// truncate the digest to its leading bytes; a length beyond what the
/// algorithm produces is an error, never padded.
///
/// Each call is independent: the same inputs always produce the same bytes.
pub fn sum(data: &[u8], code: u64, length: Option<usize>) -> Result<Multihash, Error> {
    if !registry::valid_code(code) {
        return Err(Error::InvalidCode(code));
    }

    let length = match length {
        Some(n) => n,
        None => registry::default_length(code).ok_or(Error::NoDefaultLength(code))?,
    };

    // murmur3's 4-byte output is its whole identity; no other length fits
    if code == registry::MURMUR3 && length != 4 {
        return Err(Error::UnsupportedLength { code, length });
    }

    let digest = match code {
        c if registry::is_blake2s(c) => sum_blake2s(data, c)?,
        c if registry::is_blake2b(c) => sum_blake2b(data, c)?,
        registry::SHA1 => sum_fixed::<Sha1>(data),
        registry::SHA2_256 => sum_fixed::<Sha256>(data),
        registry::SHA2_512 => sum_fixed::<Sha512>(data),
        registry::SHA3 => sum_fixed::<Sha3_512>(data),
        registry::KECCAK_224 => sum_fixed::<Keccak224>(data),
        registry::KECCAK_256 => sum_fixed::<Keccak256>(data),
        registry::KECCAK_384 => sum_fixed::<Keccak384>(data),
        registry::KECCAK_512 => sum_fixed::<Keccak512>(data),
        registry::SHAKE_128 => sum_xof(Shake128::default(), data, 32),
        registry::SHAKE_256 => sum_xof(Shake256::default(), data, 64),
        registry::DBL_SHA2_256 => sum_fixed::<Sha256>(&sum_fixed::<Sha256>(data)),
        registry::MURMUR3 => sum_murmur3(data)?,
        _ => return Err(Error::InvalidCode(code)),
    };

    if length > digest.len() {
        return Err(Error::UnsupportedLength { code, length });
    }
    encode(&digest[..length], code, length)
}

fn sum_fixed<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

fn sum_xof<X: Update + ExtendableOutput>(mut hasher: X, data: &[u8], size: usize) -> Vec<u8> {
    hasher.update(data);
    let mut out = vec![0u8; size];
    hasher.finalize_xof().read(&mut out);
    out
}

fn sum_blake2b(data: &[u8], code: u64) -> Result<Vec<u8>, Error> {
    let size = registry::family_output_size(code).ok_or(Error::InvalidCode(code))?;
    match size {
        32 | 48 | 64 => {}
        _ => return Err(Error::UnsupportedLength { code, length: size }),
    }
    let mut hasher = Blake2bVar::new(size).map_err(|e| Error::Primitive(e.to_string()))?;
    hasher.update(data);
    let mut out = vec![0u8; size];
    hasher
        .finalize_variable(&mut out)
        .map_err(|e| Error::Primitive(e.to_string()))?;
    Ok(out)
}

fn sum_blake2s(data: &[u8], code: u64) -> Result<Vec<u8>, Error> {
    let size = registry::family_output_size(code).ok_or(Error::InvalidCode(code))?;
    if size != 32 {
        return Err(Error::UnsupportedLength { code, length: size });
    }
    let mut hasher = Blake2sVar::new(size).map_err(|e| Error::Primitive(e.to_string()))?;
    hasher.update(data);
    let mut out = vec![0u8; size];
    hasher
        .finalize_variable(&mut out)
        .map_err(|e| Error::Primitive(e.to_string()))?;
    Ok(out)
}

fn sum_murmur3(data: &[u8]) -> Result<Vec<u8>, Error> {
    let n = murmur3_32(&mut Cursor::new(data), 0).map_err(|e| Error::Primitive(e.to_string()))?;
    let mut out = vec![0u8; 4];
    LittleEndian::write_u32(&mut out, n);
    Ok(out)
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::multihash::decode;
    use crate::registry::*;

    struct TestElement {
        code: u64,
        input: &'static str,
        // hex of the full encoded multihash at the default length
        output: &'static str,
    }

    static TEST_VECTOR: &[TestElement] = &[
        TestElement {
            code: SHA1,
            input: "",
            output: "1114da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        TestElement {
            code: SHA1,
            input: "foo",
            output: "11140beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33",
        },
        TestElement {
            code: SHA2_256,
            input: "",
            output: "1220e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        TestElement {
            code: SHA2_256,
            input: "foo",
            output: "12202c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae",
        },
        TestElement {
            code: SHA2_512,
            input: "foo",
            output: "1340f7fbba6e0636f890e56fbbf3283e524c6fa3204ae298382d624741d0dc6638326e282c41be5e4254d8820772c5518a2c5a8c0c7f7eda19594a7eb539453e1ed7",
        },
        TestElement {
            code: SHA3,
            input: "",
            output: "1440a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
        },
        TestElement {
            code: SHAKE_128,
            input: "",
            output: "18207f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
        },
        TestElement {
            code: SHAKE_256,
            input: "",
            output: "194046b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762fd75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
        },
        TestElement {
            code: KECCAK_256,
            input: "",
            output: "1b20c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        },
        TestElement {
            code: KECCAK_512,
            input: "",
            output: "1d400eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e",
        },
        TestElement {
            code: MURMUR3,
            input: "",
            output: "220400000000",
        },
        TestElement {
            code: DBL_SHA2_256,
            input: "",
            output: "56205df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456",
        },
        TestElement {
            code: BLAKE2B_MIN + 31,
            input: "",
            output: "a0e402200e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8",
        },
        TestElement {
            code: BLAKE2B_MAX,
            input: "",
            output: "c0e40240786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
        },
        TestElement {
            code: BLAKE2S_MAX,
            input: "",
            output: "e0e4022069217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9",
        },
    ];

    #[test]
    fn test_vector() {
        TEST_VECTOR.iter().enumerate().for_each(|(i, element)| {
            let mh = sum(element.input.as_bytes(), element.code, None).unwrap();
            assert_eq!(
                mh.hex_string(),
                element.output,
                "test vector element mismatched on index {}! got {}, want {}",
                i,
                mh.hex_string(),
                element.output
            );
        })
    }

    #[test]
    fn double_sha2_256_of_empty_input() {
        // regression baseline: sha2-256 applied twice over nothing
        let mh = sum(&[], DBL_SHA2_256, None).unwrap();
        let dec = decode(mh.as_bytes()).unwrap();
        assert_eq!(dec.length, 32);
        assert_eq!(
            hex::encode(&dec.digest),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn default_lengths_hold_for_every_fixed_code() {
        for code in [
            SHA1,
            SHA2_256,
            SHA2_512,
            SHA3,
            SHAKE_128,
            SHAKE_256,
            KECCAK_224,
            KECCAK_256,
            KECCAK_384,
            KECCAK_512,
            MURMUR3,
            DBL_SHA2_256,
        ] {
            for data in [&b""[..], &b"some data"[..]] {
                let mh = sum(data, code, None).unwrap();
                let dec = decode(mh.as_bytes()).unwrap();
                assert_eq!(
                    Some(dec.length),
                    default_length(code),
                    "wrong digest length for code {:#x}",
                    code
                );
            }
        }
    }

    #[test]
    fn family_lengths_derive_from_code() {
        for (code, want) in [
            (BLAKE2B_MIN + 31, 32),
            (BLAKE2B_MIN + 47, 48),
            (BLAKE2B_MAX, 64),
            (BLAKE2S_MAX, 32),
        ] {
            let mh = sum(b"family", code, None).unwrap();
            let dec = decode(mh.as_bytes()).unwrap();
            assert_eq!(dec.code, code);
            assert_eq!(dec.length, want);
        }
    }

    #[test]
    fn unimplemented_family_sizes_fail() {
        // blake2b-128 and blake2s-8 are inside the ranges but not computable
        assert_eq!(
            sum(b"x", BLAKE2B_MIN + 15, None),
            Err(Error::UnsupportedLength {
                code: BLAKE2B_MIN + 15,
                length: 16
            })
        );
        assert_eq!(
            sum(b"x", BLAKE2S_MIN, None),
            Err(Error::UnsupportedLength {
                code: BLAKE2S_MIN,
                length: 1
            })
        );
    }

    #[test]
    fn invalid_codes_fail() {
        assert_eq!(sum(b"x", 0x05, None), Err(Error::InvalidCode(0x05)));
        assert_eq!(sum(b"x", 0x15, None), Err(Error::InvalidCode(0x15)));
        assert_eq!(sum(b"x", 0xb261, None), Err(Error::InvalidCode(0xb261)));
    }

    #[test]
    fn truncation_takes_leading_bytes() {
        let full = decode(sum(b"truncate me", SHA2_512, None).unwrap().as_bytes())
            .unwrap()
            .digest;
        let short = decode(sum(b"truncate me", SHA2_512, Some(20)).unwrap().as_bytes()).unwrap();
        assert_eq!(short.length, 20);
        assert_eq!(short.digest, &full[..20]);
    }

    #[test]
    fn family_codes_truncate_too() {
        let full = decode(sum(b"abc", BLAKE2B_MIN + 31, None).unwrap().as_bytes())
            .unwrap()
            .digest;
        let short = decode(sum(b"abc", BLAKE2B_MIN + 31, Some(16)).unwrap().as_bytes()).unwrap();
        assert_eq!(short.digest, &full[..16]);
    }

    #[test]
    fn over_long_requests_fail() {
        assert_eq!(
            sum(b"x", SHA2_256, Some(33)),
            Err(Error::UnsupportedLength {
                code: SHA2_256,
                length: 33
            })
        );
        assert_eq!(
            sum(b"x", SHA1, Some(21)),
            Err(Error::UnsupportedLength {
                code: SHA1,
                length: 21
            })
        );
    }

    #[test]
    fn murmur3_accepts_only_four_bytes() {
        assert!(sum(b"x", MURMUR3, Some(4)).is_ok());
        assert_eq!(
            sum(b"x", MURMUR3, Some(2)),
            Err(Error::UnsupportedLength {
                code: MURMUR3,
                length: 2
            })
        );
    }

    #[test]
    fn zero_length_is_an_empty_digest() {
        let dec = decode(sum(b"x", SHA2_256, Some(0)).unwrap().as_bytes()).unwrap();
        assert_eq!(dec.length, 0);
        assert!(dec.digest.is_empty());
    }

    #[test]
    fn deterministic() {
        let a = sum(b"same input", SHA2_256, None).unwrap();
        let b = sum(b"same input", SHA2_256, None).unwrap();
        assert_eq!(a, b);

        let c = sum(b"same input", BLAKE2B_MAX, None).unwrap();
        let d = sum(b"same input", BLAKE2B_MAX, None).unwrap();
        assert_eq!(c, d);
    }
}
