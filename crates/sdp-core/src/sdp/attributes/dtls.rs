//! SDP DTLS Attribute Parsers
//!
//! Certificate fingerprints (RFC 8122) and the `a=setup` role attribute
//! (RFC 4145) as used by DTLS-SRTP.
//!
//! Format: a=fingerprint:<hash-function> <fingerprint>

use crate::sdp::attributes::common::tail_from;
use crate::sdp::parser::{match_prefix, media_then_session};
use crate::types::sdp::{DtlsParameters, DtlsRole, DtlsSetup, Fingerprint};

/// Parses a fingerprint line; the algorithm is lower-cased and the digest
/// upper-cased
pub fn parse_fingerprint(line: &str) -> Fingerprint {
    let mut parts = tail_from(line, 14).split(' ');
    Fingerprint {
        algorithm: parts.next().unwrap_or_default().to_lowercase(),
        value: parts.next().unwrap_or_default().to_uppercase(),
    }
}

/// Collects the DTLS parameters of a media section.
///
/// Fingerprints are read from the media section followed by the session
/// part, so session-level fingerprints are inherited. The role is always
/// `auto`.
pub fn get_dtls_parameters(media_section: &str, session_part: &str) -> DtlsParameters {
    let text = media_then_session(media_section, session_part);
    let fingerprints = match_prefix(&text, "a=fingerprint:")
        .into_iter()
        .map(parse_fingerprint)
        .collect();

    DtlsParameters {
        role: DtlsRole::Auto,
        fingerprints,
    }
}

/// Writes `a=setup:<setup>` followed by one fingerprint line per entry
pub fn write_dtls_parameters(params: &DtlsParameters, setup: DtlsSetup) -> String {
    let mut sdp = format!("a=setup:{}\r\n", setup);
    for fingerprint in &params.fingerprints {
        sdp.push_str(&format!(
            "a=fingerprint:{} {}\r\n",
            fingerprint.algorithm, fingerprint.value
        ));
    }
    sdp
}
