//! SDES crypto attribute (RFC 4568)
//!
//! Format: a=crypto:<tag> <crypto-suite> <key-params> [<session-params>]
//!
//! Key params use the `inline` method:
//! `inline:<key||salt>[|<lifetime>][|<MKI>:<length>]`

use crate::sdp::attributes::common::{leading_int, tail_from};
use crate::sdp::parser::{match_prefix, media_then_session};
use crate::types::sdp::{CryptoKeyParams, CryptoParameters};

/// Parses a crypto line; key params are kept as raw text
pub fn parse_crypto_line(line: &str) -> CryptoParameters {
    let mut parts = tail_from(line, 9).split(' ');

    CryptoParameters {
        tag: parts.next().and_then(leading_int),
        crypto_suite: parts.next().unwrap_or_default().to_string(),
        key_params: parts.next().unwrap_or_default().to_string(),
        session_params: parts.map(str::to_string).collect(),
    }
}

/// Writes a crypto line
pub fn write_crypto_line(params: &CryptoParameters) -> String {
    let tag = params.tag.map(|tag| tag.to_string()).unwrap_or_default();
    let session_params = if params.session_params.is_empty() {
        String::new()
    } else {
        format!(" {}", params.session_params.join(" "))
    };

    format!(
        "a=crypto:{} {} {}{}\r\n",
        tag, params.crypto_suite, params.key_params, session_params
    )
}

/// Parses `inline:` key params; any other key method gives `None`.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::attributes::parse_crypto_key_params;
///
/// let key = parse_crypto_key_params("inline:d0RmdmcmVCspeEc3QGZiNWpVLFJhQX1cfHAwJSoj|2^20|1:32").unwrap();
/// assert_eq!(key.key_method, "inline");
/// assert_eq!(key.life_time.as_deref(), Some("2^20"));
/// assert_eq!(key.mki_value.as_deref(), Some("1"));
/// assert_eq!(key.mki_length.as_deref(), Some("32"));
/// ```
pub fn parse_crypto_key_params(key_params: &str) -> Option<CryptoKeyParams> {
    let value = key_params.strip_prefix("inline:")?;
    let mut parts = value.split('|');

    let key_salt = parts.next().unwrap_or_default().to_string();
    let life_time = parts.next().map(str::to_string);
    let (mki_value, mki_length) = match parts.next().filter(|mki| !mki.is_empty()) {
        Some(mki) => {
            let mut mki = mki.splitn(2, ':');
            (
                mki.next().map(str::to_string),
                mki.next().map(str::to_string),
            )
        }
        None => (None, None),
    };

    Some(CryptoKeyParams {
        key_method: "inline".to_string(),
        key_salt,
        life_time,
        mki_value,
        mki_length,
    })
}

/// Writes key params; the MKI is only written when both value and length are set
pub fn write_crypto_key_params(key_params: &CryptoKeyParams) -> String {
    let mut out = format!("{}:{}", key_params.key_method, key_params.key_salt);
    if let Some(life_time) = key_params.life_time.as_deref().filter(|lt| !lt.is_empty()) {
        out.push('|');
        out.push_str(life_time);
    }
    if let (Some(value), Some(length)) = (&key_params.mki_value, &key_params.mki_length) {
        out.push_str(&format!("|{}:{}", value, length));
    }
    out
}

/// All crypto lines of a media section, inheriting session-level ones
pub fn get_crypto_parameters(media_section: &str, session_part: &str) -> Vec<CryptoParameters> {
    let text = media_then_session(media_section, session_part);
    match_prefix(&text, "a=crypto:")
        .into_iter()
        .map(parse_crypto_line)
        .collect()
}
