// seal38/src/cli.rs

//! Command line interface of the project.

use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};

use crate::bip38::{Decrypt38, Encrypt38, LEN_EKEY, PRE_EKEY};
use crate::bytes::{BytesManipulation, StringManipulation};
use crate::key::{
    KeyFormat,
    KeyStringManipulation,
    PrivateKeyManipulation,
    LEN_HEX,
    LEN_HEX_C,
    LEN_WIF_C,
    LEN_WIF_U,
    PRE_WIF_C,
    PRE_WIF_U
};
use crate::Error;

/// Information to user.
const ABOUT: &str =
"Insert encrypted, hexadecimal or wif private key and passphrase to decrypt or
encrypt accordingly. Only the non ec multiply mode of bip-0038 is supported.";

/// Default string used to separate resulting information.
pub const SEP_DEFAULT: &str = " | ";

/// Decrypt target key and describe the result (hex, address, public, wif).
pub fn show_decrypt(
    ekey: &str,
    pass: &str,
    separator: &str
) -> Result<String, Error> {
    let (prvk, compress) = ekey.decrypt(pass)?;
    let pubk = prvk.public(compress)?;
    Ok(format!(
        "{}\n{}{}{}{}{}",
        prvk.hex_string(),
        pubk.p2pkh()?,
        separator,
        pubk.hex_string(),
        separator,
        prvk.wif(compress)
    ))
}

/// Encrypt target key and describe the result (address, public, encrypted).
///
/// Compression follows the format of the key. Only plain hexadecimal keys,
/// uncompressed by default, accept 'compress' to ask for the compressed
/// address.
pub fn show_encrypt(
    prvk: &str,
    pass: &str,
    compress: bool,
    separator: &str
) -> Result<String, Error> {
    let (secret, format) = prvk.decode_key()?;
    let compress = match format {
        KeyFormat::Hex => compress,
        _ if compress => return Err(Error::FlagC),
        _ => format.is_compressed()
    };
    let eprvk = secret.encrypt(pass, compress)?;
    let pubk = secret.public(compress)?;
    Ok(format!(
        "{}{}{}{}{}",
        pubk.p2pkh()?,
        separator,
        pubk.hex_string(),
        separator,
        eprvk
    ))
}

/// Treat arguments informed by user and act accordingly.
pub fn handle_arguments(matches: &ArgMatches) -> Result<(), Error> {
    let compress = matches.get_flag("compressed");
    let separator = matches
        .get_one::<String>("separator")
        .map(String::as_str)
        .unwrap_or(SEP_DEFAULT);
    let pass = matches.get_one::<String>("passphrase").ok_or(Error::Parser)?;
    let prv = matches.get_one::<String>("PRIVATE_KEY").ok_or(Error::Parser)?;

    let report = if prv.starts_with(PRE_EKEY) {
        if compress { return Err(Error::FlagC); }
        show_decrypt(prv, pass, separator)?
    } else {
        show_encrypt(prv, pass, compress, separator)?
    };
    println!("{}", report);
    Ok(())
}

/// Create the default clap command for the project.
pub fn init_clap() -> Command {
    Command::new("seal38")
        .about(ABOUT)
        .arg(
            Arg::new("separator")
                .help("Use specific character (or string) to separate results")
                .short('s')
                .value_name("SEPARATOR")
        ).arg(
            Arg::new("passphrase")
                .help("Used to encrypt and decrypt the private key (required)")
                .required(true)
                .short('p')
                .value_name("PASSPHRASE")
        ).arg(
            Arg::new("PRIVATE_KEY")
                .help("Hexadecimal, wif or encrypted private key")
                .required(true)
                .value_parser(validate_prvk)
        ).arg(
            Arg::new("compressed")
                .help("Encrypt 64 hexadecimal characters with compressed address")
                .long("compressed")
                .short('c')
                .action(ArgAction::SetTrue)
        ).version(crate_version!())
}

/// Validate if provided string is one of the types of private keys supported.
fn validate_prvk(prvk: &str) -> Result<String, String> {
    if (prvk.len() == LEN_EKEY && prvk.starts_with(PRE_EKEY)) ||
        ((prvk.len() == LEN_HEX || prvk.len() == LEN_HEX_C) && prvk.is_hex()) ||
        (prvk.is_char_boundary(1) &&
        (prvk.len() == LEN_WIF_C && PRE_WIF_C.contains(&prvk[..1]) ||
         prvk.len() == LEN_WIF_U && prvk.starts_with(PRE_WIF_U))) {
        Ok(prvk.to_string())
    } else {
        Err(Error::Prvk.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// First test vector of bip-0038, encrypted.
    const TV_ENCRYPTED: &str =
        "6PRVWUbkzzsbcVac2qwfssoUJAN1Xhrg6bNk8J7Nzm5H7kxEbn2Nh2ZoGg";

    /// First test vector of bip-0038 encrypted with compressed address.
    const TV_ENCRYPTED_C: &str =
        "6PYNKZ1EAgYgmQfmNVamxyXVWHzK5s6DGhwP4J5o44cvXdoY7sRzhtpUeo";

    /// First test vector of bip-0038, secret.
    const TV_HEX: &str =
        "cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5";

    /// First test vector of bip-0038, passphrase.
    const TV_PASS: &str = "TestingOneTwoThree";

    /// First test vector of bip-0038, wif.
    const TV_WIF: &str = "5KN7MzqK5wt2TP1fQCYyHBtDrXdJuXbUzm4A9rKAteGu3Qi5CVR";

    /// First test vector of bip-0038, uncompressed address.
    const TV_ADDRESS: &str = "1Jq6MksXQVWzrznvZzxkV6oY57oWXD9TXB";

    /// WIF compressed secret key with all bytes '0x11'.
    const WIC_1: &str = "KwntMbt59tTsj8xqpqYqRRWufyjGunvhSyeMo3NTYpFYzZbXJ5Hp";

    #[test]
    fn test_handle_arguments() {
        assert!(
            handle_arguments(
                &init_clap().get_matches_from(
                    vec!["", TV_ENCRYPTED, "-p", TV_PASS]
                )
            ).is_ok()
        );
        assert!(
            handle_arguments(
                &init_clap().get_matches_from(
                    vec!["", TV_HEX, "-cp", TV_PASS]
                )
            ).is_ok()
        );
        assert_eq!(
            handle_arguments(
                &init_clap().get_matches_from(
                    vec!["", TV_ENCRYPTED, "-cp", TV_PASS]
                )
            ).unwrap_err(),
            Error::FlagC
        );
        assert_eq!(
            handle_arguments(
                &init_clap().get_matches_from(
                    vec!["", TV_WIF, "-cp", TV_PASS]
                )
            ).unwrap_err(),
            Error::FlagC
        );
        assert_eq!(
            handle_arguments(
                &init_clap().get_matches_from(
                    vec!["", TV_ENCRYPTED, "-p", "wrong"]
                )
            ).unwrap_err(),
            Error::Passwd
        );
    }

    #[test]
    fn test_init_clap() {
        assert!(
            init_clap().try_get_matches_from(
                vec!["", TV_ENCRYPTED, "-p", TV_PASS]
            ).is_ok()
        );
        assert!(
            init_clap().try_get_matches_from(
                vec!["", TV_WIF, "-p", TV_PASS, "-s", ","]
            ).is_ok()
        );
        assert!(init_clap().try_get_matches_from(vec![""]).is_err());
        assert!(init_clap().try_get_matches_from(vec!["", "don't"]).is_err());
        assert!(
            init_clap().try_get_matches_from(vec!["", "-p", TV_PASS]).is_err()
        );
        assert!(
            init_clap().try_get_matches_from(
                vec!["", "something_wrong", "-p", TV_PASS]
            ).is_err()
        );
        assert!(
            init_clap().try_get_matches_from(
                vec!["", &TV_ENCRYPTED[..LEN_EKEY - 1], "-p", TV_PASS]
            ).is_err()
        );
    }

    /// Hexadecimal public key of an hexadecimal secret.
    fn public_hex(prvk: &str, compress: bool) -> String {
        let mut secret = [0x00; 32];
        secret.copy_from_slice(&prvk.hex_bytes().unwrap());
        secret.public(compress).unwrap().hex_string()
    }

    #[test]
    fn test_show_decrypt() {
        assert_eq!(
            show_decrypt(TV_ENCRYPTED, TV_PASS, SEP_DEFAULT).unwrap(),
            format!(
                "{}\n{} | {} | {}",
                TV_HEX,
                TV_ADDRESS,
                public_hex(TV_HEX, false),
                TV_WIF
            )
        );
    }

    #[test]
    fn test_show_encrypt() {
        assert_eq!(
            show_encrypt(TV_WIF, "pass", true, SEP_DEFAULT).unwrap_err(),
            Error::FlagC
        );
        assert_eq!(
            show_encrypt(&[TV_HEX, "01"].concat(), "pass", true, SEP_DEFAULT)
                .unwrap_err(),
            Error::FlagC
        );
        assert_eq!(
            show_encrypt(TV_HEX, TV_PASS, false, ",").unwrap(),
            format!("{},{},{}", TV_ADDRESS, public_hex(TV_HEX, false), TV_ENCRYPTED)
        );
        assert!(
            show_encrypt(TV_HEX, TV_PASS, true, SEP_DEFAULT)
                .unwrap()
                .ends_with(TV_ENCRYPTED_C)
        );
        assert!(
            show_encrypt(WIC_1, "pass", false, SEP_DEFAULT)
                .unwrap()
                .starts_with("1Q1pE5vPGEEMqRcVRMbtBK842Y6Pzo6nK9 | 03")
        );
    }

    #[test]
    fn test_show_encrypt_matches_library() {
        for prvk in [TV_HEX, TV_WIF] {
            assert_eq!(
                show_encrypt(prvk, TV_PASS, false, SEP_DEFAULT)
                    .unwrap()
                    .rsplit(SEP_DEFAULT)
                    .next()
                    .unwrap(),
                crate::encrypt(prvk, TV_PASS).unwrap()
            );
        }
    }

    #[test]
    fn test_validate_prvk() {
        assert!(validate_prvk(WIC_1).is_ok());
        assert!(validate_prvk(TV_WIF).is_ok());
        assert!(validate_prvk(TV_HEX).is_ok());
        assert!(validate_prvk(&[TV_HEX, "01"].concat()).is_ok());
        assert!(validate_prvk(TV_ENCRYPTED).is_ok());
        assert!(validate_prvk(&WIC_1[1..]).is_err());
        assert!(validate_prvk(&TV_WIF[..LEN_WIF_U - 1]).is_err());
        assert!(validate_prvk(&["b"; 63].concat()).is_err());
        assert!(validate_prvk(&["x"; 64].concat()).is_err());
        assert!(validate_prvk(&TV_ENCRYPTED[1..]).is_err());
        assert!(validate_prvk(&[TV_ENCRYPTED, "3"].concat()).is_err());
        assert!(validate_prvk("everything else").is_err());
    }
}
