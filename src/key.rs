// seal38/src/key.rs

//! Textual representations of secret keys (hexadecimal and wif, compressed
//! or not) and the public data derived from them.

use std::fmt;

use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::bytes::{BytesManipulation, StringManipulation};
use crate::Error;

/// Number of characters in hexadecimal secret key.
pub const LEN_HEX: usize = 64;

/// Number of characters in hexadecimal compressed secret key.
pub const LEN_HEX_C: usize = 66;

/// Number of characters in wif compressed secret key.
pub const LEN_WIF_C: usize = 52;

/// Number of characters in wif uncompressed secret key.
pub const LEN_WIF_U: usize = 51;

/// Number of bytes (payload only) contained in a decoded wif compressed key.
const NBBY_WIFC: usize = 34;

/// Number of bytes (payload only) contained in a decoded wif uncompressed key.
const NBBY_WIFU: usize = 33;

/// Suffix appended to the secret of a compressed key (hexadecimal or wif).
const SUF_C: u8 = 0x01;

/// Suffix of an hexadecimal compressed secret key.
const SUF_HEX_C: &str = "01";

/// First two possible characters of wif compressed.
pub const PRE_WIF_C: &str = "KL";

/// First byte of all wif encoded secret keys.
const PRE_WIF_B: u8 = 0x80;

/// First character of wif uncompressed.
pub const PRE_WIF_U: &str = "5";

/// Representations of a secret key understood by this crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyFormat {
    /// 64 hexadecimal characters.
    Hex,
    /// 64 hexadecimal characters followed by '01'.
    HexCompressed,
    /// Base 58 check of '0x80' and the secret.
    Wif,
    /// Base 58 check of '0x80', the secret and '0x01'.
    WifCompressed
}

impl KeyFormat {
    /// Select a format by encoding and compression.
    pub fn new(wif: bool, compress: bool) -> Self {
        match (wif, compress) {
            (false, false) => KeyFormat::Hex,
            (false, true) => KeyFormat::HexCompressed,
            (true, false) => KeyFormat::Wif,
            (true, true) => KeyFormat::WifCompressed
        }
    }

    /// Public key derived from keys in this format is compressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self, KeyFormat::HexCompressed | KeyFormat::WifCompressed)
    }

    /// Format is one of the wif variants.
    pub fn is_wif(&self) -> bool {
        matches!(self, KeyFormat::Wif | KeyFormat::WifCompressed)
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyFormat::Hex => "hex",
            KeyFormat::HexCompressed => "hex_compressed",
            KeyFormat::Wif => "wif",
            KeyFormat::WifCompressed => "wif_compressed"
        })
    }
}

/// Functions to manipulate private keys (32 bytes).
pub trait PrivateKeyManipulation {
    /// Address (p2pkh) of the public key of target secret.
    fn address(&self, compress: bool) -> Result<String, Error>;

    /// Generate secp256k1 point based on target secret key.
    fn public(&self, compress: bool) -> Result<Vec<u8>, Error>;

    /// Encode the secret in the requested textual format.
    fn to_format(&self, format: KeyFormat) -> String;

    /// Generate a representation of secret key in wif format.
    fn wif(&self, compress: bool) -> String;
}

/// Functions to read textual secret keys.
pub trait KeyStringManipulation {
    /// Parse hexadecimal or wif secret key into bytes and its format.
    fn decode_key(&self) -> Result<([u8; 32], KeyFormat), Error>;

    /// Decode a secret key encoded in base 58 returning bytes and compression.
    fn decode_wif(&self) -> Result<([u8; 32], bool), Error>;
}

impl PrivateKeyManipulation for [u8; 32] {
    #[inline]
    fn address(&self, compress: bool) -> Result<String, Error> {
        self.public(compress)?.p2pkh()
    }

    #[inline]
    fn public(&self, compress: bool) -> Result<Vec<u8>, Error> {
        let secp_pub = PublicKey::from_secret_key(
            &Secp256k1::new(),
            &SecretKey::from_slice(self).map_err(|_| Error::SecEnt)?
        );

        if compress {
            Ok(secp_pub.serialize().to_vec())
        } else {
            Ok(secp_pub.serialize_uncompressed().to_vec())
        }
    }

    #[inline]
    fn to_format(&self, format: KeyFormat) -> String {
        match format {
            KeyFormat::Hex => self.hex_string(),
            KeyFormat::HexCompressed => self.hex_string() + SUF_HEX_C,
            KeyFormat::Wif => self.wif(false),
            KeyFormat::WifCompressed => self.wif(true)
        }
    }

    #[inline]
    fn wif(&self, compress: bool) -> String {
        let mut decoded = vec![PRE_WIF_B];
        decoded.extend_from_slice(self);
        if compress { decoded.push(SUF_C); }
        decoded.encode_base58ck()
    }
}

impl KeyStringManipulation for str {
    fn decode_key(&self) -> Result<([u8; 32], KeyFormat), Error> {
        if self.is_hex() && (self.len() == LEN_HEX || self.len() == LEN_HEX_C) {
            if self.len() == LEN_HEX_C && !self.ends_with(SUF_HEX_C) {
                return Err(Error::HexKey);
            }
            let mut prvk = [0x00; 32];
            prvk.copy_from_slice(&self[..LEN_HEX].hex_bytes()?);
            let format = KeyFormat::new(false, self.len() == LEN_HEX_C);
            return Ok((prvk, format));
        }
        if self.len() == LEN_WIF_C || self.len() == LEN_WIF_U {
            let (prvk, compress) = self.decode_wif().map_err(|_| Error::Prvk)?;
            return Ok((prvk, KeyFormat::new(true, compress)));
        }
        Err(Error::Prvk)
    }

    #[inline]
    fn decode_wif(&self) -> Result<([u8; 32], bool), Error> {
        if (!self.is_char_boundary(1) || !PRE_WIF_C.contains(&self[..1]) ||
            self.len() != LEN_WIF_C) && (!self.starts_with(PRE_WIF_U) ||
            self.len() != LEN_WIF_U) {
            return Err(Error::WifKey);
        }
        let raw_bytes = self.decode_base58ck()?;

        if (raw_bytes.len() != NBBY_WIFC && raw_bytes.len() != NBBY_WIFU) ||
            raw_bytes[0] != PRE_WIF_B ||
            (raw_bytes.len() == NBBY_WIFC && raw_bytes[NBBY_WIFC - 1] != SUF_C) {
            return Err(Error::WifKey)
        }

        let mut result = [0x00; 32];
        result.copy_from_slice(&raw_bytes[1..33]);

        Ok((result, raw_bytes.len() == NBBY_WIFC))
    }
}

/// Detect in which textual format a secret key is written.
pub fn detect_format(key: &str) -> Result<KeyFormat, Error> {
    let (_, format) = key.decode_key()?;
    tracing::trace!(%format, "secret key format detected");
    Ok(format)
}

/// Rewrite a secret key in the target format.
///
/// Converting a key that is already in `target` returns the same string.
pub fn convert(key: &str, target: KeyFormat) -> Result<String, Error> {
    let (prvk, _) = key.decode_key()?;
    Ok(prvk.to_format(target))
}
