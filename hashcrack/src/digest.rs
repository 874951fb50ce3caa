use std::fmt;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::DigestError;

/// Turns candidate bytes into the lowercase hex text stored in hash files.
pub trait Digester {
    fn digest(&self, bytes: &[u8]) -> Result<String, DigestError>;

    /// Number of hex characters every digest produced by this function has.
    fn hex_len(&self) -> usize;
}

/// Unsalted digest functions found in leaked password dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
        }
    }

    /// Returns true if `line` has the shape of one of this algorithm's digests.
    pub fn looks_like_digest(self, line: &str) -> bool {
        line.len() == self.hex_len()
            && line.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Digester for Algorithm {
    fn digest(&self, bytes: &[u8]) -> Result<String, DigestError> {
        let hex = match self {
            Algorithm::Md5 => hex::encode(Md5::digest(bytes)),
            Algorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
            Algorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        };
        Ok(hex)
    }

    #[inline]
    fn hex_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha256 => 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_md5_hello() {
        let digest = Algorithm::Md5.digest(b"hello").unwrap();
        assert_eq!(digest, "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_md5_raw_bytes() {
        // Matches the raw output of the hasher, rendered lowercase.
        let raw = hex!("5d41402abc4b2a76b9719d911017c592");
        assert_eq!(Md5::digest(b"hello").as_slice(), &raw);
        assert_eq!(Algorithm::Md5.digest(b"hello").unwrap(), hex::encode(raw));
    }

    #[test]
    fn test_md5_empty() {
        let digest = Algorithm::Md5.digest(b"").unwrap();
        assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_sha1_password123() {
        let digest = Algorithm::Sha1.digest(b"password123").unwrap();
        assert_eq!(digest, "cbfdac6008f9cab4083784cbd1874f76618d2a97");
    }

    #[test]
    fn test_sha256_abc() {
        let digest = Algorithm::Sha256.digest(b"abc").unwrap();
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hex_len_matches_output() {
        for algorithm in [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256] {
            let digest = algorithm.digest(b"x").unwrap();
            assert_eq!(digest.len(), algorithm.hex_len(), "{algorithm}");
            assert!(algorithm.looks_like_digest(&digest));
        }
    }

    #[test]
    fn test_looks_like_digest() {
        assert!(Algorithm::Md5.looks_like_digest("5d41402abc4b2a76b9719d911017c592"));
        // uppercase is a different string, so it can never match
        assert!(!Algorithm::Md5.looks_like_digest("5D41402ABC4B2A76B9719D911017C592"));
        assert!(!Algorithm::Md5.looks_like_digest("5d41402abc4b2a76"));
        assert!(!Algorithm::Sha1.looks_like_digest("5d41402abc4b2a76b9719d911017c592"));
    }
}
