// seal38/src/error.rs

//! Errors of the 'seal38' project.

use thiserror::Error;

/// Exit status used for failures caused by the arguments themselves.
const STATUS_USAGE: i32 = 2;

/// Exit status used when the passphrase does not open the encrypted key.
const STATUS_PASSWD: i32 = 3;

/// Errors of 'seal38' project.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq, PartialOrd)]
pub enum Error {
    /// If an invalid base 58 string is processed.
    #[error("invalid base58 string")]
    Base58,
    /// Invalid checksum was found.
    #[error("invalid checksum")]
    Check,
    /// Encrypted private key made with elliptic curve multiplication.
    #[error("ec multiplied encrypted keys are not supported")]
    EcMode,
    /// Found invalid encrypted private key (length, checksum, prefix or flag).
    #[error("invalid encrypted private key")]
    EncKey,
    /// Flag 'c' invalid in the context (only plain hexadecimal keys take it).
    #[error("invalid flag 'c' in this context")]
    FlagC,
    /// Found invalid hexadecimal representation of an secret key.
    #[error("invalid hexadecimal private key")]
    HexKey,
    /// Found invalid hexadecimal value represented in string.
    #[error("invalid hexadecimal string")]
    HexStr,
    /// Invalid number of public key bytes.
    #[error("invalid number of public bytes")]
    NbPubB,
    /// Error while parsing the arguments.
    #[error("fatal problem while parsing arguments")]
    Parser,
    /// Found invalid passphrase.
    #[error("invalid passphrase")]
    Passwd,
    /// Input is not valid hexadecimal or wif private key.
    #[error("invalid hexadecimal or wif private key")]
    Prvk,
    /// Trowed if an error occurs when using scrypt function.
    #[error("failure on scrypt function")]
    ScryptF,
    /// Trowed if an invalid scrypt Param is inserted.
    #[error("invalid scrypt parameter")]
    ScryptP,
    /// Invalid secret entropy found (zero or above the curve order).
    #[error("invalid secret entropy")]
    SecEnt,
    /// Invalid wif secret key.
    #[error("invalid wif secret key")]
    WifKey
}

impl Error {
    /// Status code returned to the shell when the error ends the program.
    pub fn status(&self) -> i32 {
        match self {
            Error::FlagC | Error::Parser => STATUS_USAGE,
            Error::Passwd => STATUS_PASSWD,
            _ => 1
        }
    }
}
