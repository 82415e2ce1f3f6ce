// seal38/src/bip38.rs

//! Non ec multiply encryption of bitcoin private keys (bip-0038).
//!
//! The 43 decoded bytes of an encrypted key are laid out as:
//!
//! | bytes  | content                                              |
//! |--------|------------------------------------------------------|
//! | 0..2   | prefix `0x01 0x42`                                   |
//! | 2      | flag, `0xe0` compressed or `0xc0` uncompressed       |
//! | 3..7   | address hash, also the scrypt salt                   |
//! | 7..23  | first half of the secret, masked and aes encrypted   |
//! | 23..39 | second half of the secret, masked and aes encrypted  |
//! | 39..43 | first four bytes of a double sha256 of bytes 0..39   |

use aes::Aes256;
use aes::cipher::{
    BlockDecrypt,
    BlockEncrypt,
    generic_array::GenericArray,
    KeyInit
};
use scrypt::Params;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::bytes::{BytesManipulation, StringManipulation};
use crate::key::{KeyFormat, KeyStringManipulation, PrivateKeyManipulation};
use crate::Error;

/// Number of characters of an encrypted private key.
pub const LEN_EKEY: usize = 58;

/// Number of bytes of the address hash.
const NBBY_HASH: usize = 4;

/// Number of bytes of an encrypted private key without its checksum.
const NBBY_PAYLOAD: usize = 39;

/// Number of bytes produced by scrypt (two halves of 32 bytes).
const NBBY_SCRYPT: usize = 64;

/// Flag byte of encrypted keys whose address uses a compressed public key.
const FLAG_C: u8 = 0xe0;

/// Flag byte of encrypted keys whose address uses an uncompressed public key.
const FLAG_U: u8 = 0xc0;

/// Prefix of all private keys encrypted with bip-0038 standard.
pub const PRE_EKEY: &str = "6P";

/// Prefix of all ec encrypted keys.
const PRE_EC: [u8; 2] = [0x01, 0x43];

/// Prefix of all non ec encrypted keys.
const PRE_NON_EC: [u8; 2] = [0x01, 0x42];

/// Base two logarithm of the scrypt cost (16384).
const SCRYPT_LOG_N: u8 = 14;

/// Scrypt block size.
const SCRYPT_R: u32 = 8;

/// Scrypt parallelization.
const SCRYPT_P: u32 = 8;

/// Encryption of raw private keys.
pub trait Encrypt38 {
    /// Encrypt private key, compression selects the address used as salt.
    fn encrypt(&self, pass: &str, compress: bool) -> Result<String, Error>;
}

/// Decryption of encrypted private keys.
pub trait Decrypt38 {
    /// Decrypt encrypted private key (non-ec), returning secret and compression.
    fn decrypt(&self, pass: &str) -> Result<([u8; 32], bool), Error>;
}

/// First bytes of the double sha256 of the address of the secret.
fn address_hash(prvk: &[u8; 32], compress: bool) -> Result<[u8; NBBY_HASH], Error> {
    let mut result = [0x00; NBBY_HASH];
    result.copy_from_slice(
        &prvk.address(compress)?.as_bytes().hash256()[..NBBY_HASH]
    );
    Ok(result)
}

/// Decode the base 58 string and return the payload without checksum.
///
/// Fails before any key stretching is done.
fn decode_payload(ekey: &str) -> Result<[u8; NBBY_PAYLOAD], Error> {
    let raw = ekey.decode_base58ck().map_err(|_| Error::EncKey)?;
    if raw.len() != NBBY_PAYLOAD {
        return Err(Error::EncKey);
    }
    let mut payload = [0x00; NBBY_PAYLOAD];
    payload.copy_from_slice(&raw);

    if payload[..2] == PRE_EC {
        return Err(Error::EcMode);
    } else if payload[..2] != PRE_NON_EC {
        return Err(Error::EncKey);
    }
    Ok(payload)
}

/// Stretch the nfc normalized passphrase into 64 bytes.
fn scrypt_key(pass: &str, salt: &[u8]) -> Result<Zeroizing<[u8; NBBY_SCRYPT]>, Error> {
    let pass = Zeroizing::new(pass.nfc().collect::<String>());
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, NBBY_SCRYPT)
        .map_err(|_| Error::ScryptP)?;
    let mut key = Zeroizing::new([0x00; NBBY_SCRYPT]);

    scrypt::scrypt(pass.as_bytes(), salt, &params, &mut key[..])
        .map_err(|_| Error::ScryptF)?;

    Ok(key)
}

impl Encrypt38 for [u8; 32] {
    fn encrypt(&self, pass: &str, compress: bool) -> Result<String, Error> {
        let salt = address_hash(self, compress)?;
        let scrypt_key = scrypt_key(pass, &salt)?;
        let (half1, half2) = scrypt_key.split_at(32);

        let mut masked = Zeroizing::new([0x00; 32]);
        for ((byte, secret), mask) in masked.iter_mut().zip(self).zip(half1) {
            *byte = secret ^ mask;
        }

        let cipher = Aes256::new(GenericArray::from_slice(half2));
        let mut part1 = GenericArray::clone_from_slice(&masked[..16]);
        let mut part2 = GenericArray::clone_from_slice(&masked[16..]);

        cipher.encrypt_block(&mut part1);
        cipher.encrypt_block(&mut part2);

        let mut buffer = [0x00; NBBY_PAYLOAD];
        buffer[..2].copy_from_slice(&PRE_NON_EC);
        buffer[2] = if compress { FLAG_C } else { FLAG_U };
        buffer[3..7].copy_from_slice(&salt);
        buffer[7..23].copy_from_slice(&part1);
        buffer[23..].copy_from_slice(&part2);

        Ok(buffer.encode_base58ck())
    }
}

impl Decrypt38 for str {
    fn decrypt(&self, pass: &str) -> Result<([u8; 32], bool), Error> {
        let eprvk = decode_payload(self)?;
        let compress = match eprvk[2] {
            FLAG_C => true,
            FLAG_U => false,
            _ => return Err(Error::EncKey)
        };
        tracing::debug!(compress, "encrypted key accepted, stretching passphrase");

        let scrypt_key = scrypt_key(pass, &eprvk[3..7])?;
        let (half1, half2) = scrypt_key.split_at(32);

        // both halves are decrypted in place, the candidate is wiped on drop
        let cipher = Aes256::new(GenericArray::from_slice(half2));
        let mut prvk = Zeroizing::new([0x00; 32]);
        prvk.copy_from_slice(&eprvk[7..]);

        let (part1, part2) = prvk.split_at_mut(16);
        cipher.decrypt_block(GenericArray::from_mut_slice(part1));
        cipher.decrypt_block(GenericArray::from_mut_slice(part2));

        for (byte, mask) in prvk.iter_mut().zip(half1) {
            *byte ^= mask;
        }

        // a wrong passphrase can still land outside of the curve order
        let checksum = address_hash(&prvk, compress).map_err(|err| match err {
            Error::SecEnt => Error::Passwd,
            other => other
        })?;

        if checksum != eprvk[3..7] {
            tracing::debug!("address hash mismatch");
            return Err(Error::Passwd);
        }

        Ok((*prvk, compress))
    }
}

/// Encrypt an hexadecimal or wif private key with the passphrase.
///
/// Compression is taken from the format of the key: plain hexadecimal and
/// uncompressed wif give an uncompressed address.
pub fn encrypt(prvk: &str, pass: &str) -> Result<String, Error> {
    let (secret, format) = prvk.decode_key()?;
    tracing::debug!(%format, "encrypting private key");
    secret.encrypt(pass, format.is_compressed())
}

/// Decrypt an encrypted private key, answering in wif or hexadecimal.
///
/// The compressed variant of the chosen format is used when the flag byte
/// of the encrypted key says so.
pub fn decrypt(ekey: &str, pass: &str, wif: bool) -> Result<String, Error> {
    let (prvk, compress) = ekey.decrypt(pass)?;
    Ok(prvk.to_format(KeyFormat::new(wif, compress)))
}
