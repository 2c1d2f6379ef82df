use crate::codec::bytes_to_hex;
use crate::error::{BytecastError, Result};
use serde::{Serialize, Serializer};
use sha2::Sha256;
use sha3::Sha3_256;
use std::fmt;

pub const DIGEST_SIZE: usize = 32;

/// Hash algorithm options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha3,
    Blake3,
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = BytecastError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha3" | "sha3-256" => Ok(Self::Sha3),
            "blake3" => Ok(Self::Blake3),
            _ => Err(BytecastError::UnsupportedAlgorithm(format!("hash: {}", s))),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha256 => "SHA-256",
            Self::Sha3 => "SHA3-256",
            Self::Blake3 => "BLAKE3",
        };
        f.write_str(name)
    }
}

/// A 32-byte content digest, only ever compared for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub fn compute(data: &[u8], algorithm: DigestAlgorithm) -> Self {
        let bytes = match algorithm {
            DigestAlgorithm::Sha256 => hash_with::<Sha256>(data),
            DigestAlgorithm::Sha3 => hash_with::<Sha3_256>(data),
            DigestAlgorithm::Blake3 => *blake3::hash(data).as_bytes(),
        };
        Self(bytes)
    }

    pub fn sha256(data: &[u8]) -> Self {
        Self::compute(data, DigestAlgorithm::Sha256)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }
}

fn hash_with<D: digest::Digest>(data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    out.copy_from_slice(&D::digest(data));
    out
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            Digest::sha256(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            Digest::sha256(b"").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha3_known_vector() {
        assert_eq!(
            Digest::compute(b"abc", DigestAlgorithm::Sha3).to_hex(),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn test_algorithms_differ() {
        let data = b"same data";
        let sha2 = Digest::compute(data, DigestAlgorithm::Sha256);
        let sha3 = Digest::compute(data, DigestAlgorithm::Sha3);
        let blake = Digest::compute(data, DigestAlgorithm::Blake3);
        assert_ne!(sha2, sha3);
        assert_ne!(sha2, blake);
        assert_eq!(blake, Digest::compute(data, DigestAlgorithm::Blake3));
    }

    #[test]
    fn test_single_bit_changes_digest() {
        let mut data = b"verify me".to_vec();
        let before = Digest::sha256(&data);
        data[0] ^= 0x01;
        assert_ne!(before, Digest::sha256(&data));
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("SHA256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert_eq!("sha3".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha3);
        assert_eq!("blake3".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Blake3);
        assert!("md5".parse::<DigestAlgorithm>().is_err());
    }
}
