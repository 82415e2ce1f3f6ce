// seal38/src/lib.rs

//! Library of the 'seal38' project.
//!
//! Encrypt and decrypt bitcoin private keys with a passphrase following
//! bip-0038 (non ec multiply mode).
//!
//! ```no_run
//! let ekey = seal38::encrypt(
//!     "cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5",
//!     "TestingOneTwoThree"
//! ).unwrap();
//! assert_eq!(ekey, "6PRVWUbkzzsbcVac2qwfssoUJAN1Xhrg6bNk8J7Nzm5H7kxEbn2Nh2ZoGg");
//! ```

pub mod bip38;
pub mod bytes;
pub mod cli;
pub mod error;
pub mod key;

pub use bip38::{decrypt, encrypt, Decrypt38, Encrypt38};
pub use error::Error;
pub use key::{convert, detect_format, KeyFormat};
