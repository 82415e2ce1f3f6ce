// seal38/src/bytes.rs

//! Hashing, base 58 and hexadecimal helpers over plain bytes and strings.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::Error;

/// Number of bytes of a public key compressed.
pub const NBBY_PUBC: usize = 33;

/// Number of bytes of a public key uncompressed.
pub const NBBY_PUBU: usize = 65;

/// Number of checksum bytes appended by base 58 check.
const NBBY_CHECK: usize = 4;

/// Version byte of p2pkh addresses in main net.
const PRE_P2PKH: u8 = 0x00;

/// Functions to manipulate data in form of arbitrary number of bytes [u8].
pub trait BytesManipulation {
    /// Encode informed data in base 58 check.
    fn encode_base58ck(&self) -> String;

    /// Sha256 and ripemd160 in sequence.
    fn hash160(&self) -> [u8; 20];

    /// Receives bytes and return 32 bytes of a dual sha256 hash.
    fn hash256(&self) -> [u8; 32];

    /// Receives bytes and return string of hexadecimal characters.
    fn hex_string(&self) -> String;

    /// Create a p2pkh address according to inserted self public key bytes.
    fn p2pkh(&self) -> Result<String, Error>;
}

/// Functions to manipulate strings.
pub trait StringManipulation {
    /// Decode informed base 58 check string into bytes (payload only).
    fn decode_base58ck(&self) -> Result<Vec<u8>, Error>;

    /// Transform string of hexadecimal characters into a vector of bytes.
    fn hex_bytes(&self) -> Result<Vec<u8>, Error>;

    /// Test if an string of arbitrary length contains only hexadecimal chars.
    fn is_hex(&self) -> bool;
}

impl BytesManipulation for [u8] {
    #[inline]
    fn encode_base58ck(&self) -> String {
        let mut decoded = Vec::with_capacity(self.len() + NBBY_CHECK);
        decoded.extend_from_slice(self);
        decoded.extend_from_slice(&self.hash256()[..NBBY_CHECK]);
        bs58::encode(decoded).into_string()
    }

    #[inline]
    fn hash160(&self) -> [u8; 20] {
        Ripemd160::digest(Sha256::digest(self)).into()
    }

    #[inline]
    fn hash256(&self) -> [u8; 32] {
        Sha256::digest(Sha256::digest(self)).into()
    }

    #[inline]
    fn hex_string(&self) -> String {
        self.iter().map(|byte| format!("{:02x}", byte)).collect()
    }

    #[inline]
    fn p2pkh(&self) -> Result<String, Error> {
        if self.len() != NBBY_PUBC && self.len() != NBBY_PUBU {
            return Err(Error::NbPubB);
        }
        let mut address_bytes = vec![PRE_P2PKH];
        address_bytes.extend_from_slice(&self.hash160());
        Ok(address_bytes.encode_base58ck())
    }
}

impl StringManipulation for str {
    #[inline]
    fn decode_base58ck(&self) -> Result<Vec<u8>, Error> {
        let raw = bs58::decode(self).into_vec().map_err(|_| Error::Base58)?;
        if raw.len() < NBBY_CHECK {
            return Err(Error::Check);
        }
        let (payload, check) = raw.split_at(raw.len() - NBBY_CHECK);
        if check == &payload.hash256()[..NBBY_CHECK] {
            Ok(payload.to_vec())
        } else { Err(Error::Check) }
    }

    #[inline]
    fn hex_bytes(&self) -> Result<Vec<u8>, Error> {
        if self.len() % 2 != 0 || !self.is_hex() {
            return Err(Error::HexStr);
        }
        (0..self.len())
            .step_by(2)
            .map(|idx| {
                u8::from_str_radix(&self[idx..idx + 2], 16)
                    .map_err(|_| Error::HexStr)
            })
            .collect()
    }

    #[inline]
    fn is_hex(&self) -> bool {
        self.chars().all(|c| c.is_ascii_hexdigit())
    }
}
