//! SDP Format Parameters (fmtp) Attribute Parser
//!
//! Format: a=fmtp:<format> <format specific parameters>
//!
//! Parameters are a `;` separated list of `key=value` or bare `key` entries.
//! Values are kept as text; no codec-specific interpretation happens here.

use crate::sdp::attributes::common::after_first_space;
use crate::types::sdp::{FmtpParameters, RtpCodecParameters};

/// Parses the parameter list of an fmtp line.
///
/// Keys and values are trimmed and empty keys skipped. A key without `=`
/// maps to `None`; a repeated key replaces the earlier value in place.
pub fn parse_fmtp(line: &str) -> FmtpParameters {
    let mut parameters = FmtpParameters::new();

    for entry in after_first_space(line).split(';') {
        let (key, value) = match entry.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value.trim().to_string())),
            None => (entry.trim(), None),
        };
        if key.is_empty() {
            continue;
        }
        parameters.insert(key, value);
    }

    parameters
}

/// Writes the fmtp line of a codec, or nothing if it has no parameters
pub fn write_fmtp(codec: &RtpCodecParameters) -> String {
    if codec.parameters.is_empty() {
        return String::new();
    }

    let parameters: Vec<String> = codec
        .parameters
        .iter()
        .map(|(key, value)| match value {
            Some(value) => format!("{}={}", key, value),
            None => key.to_string(),
        })
        .collect();

    format!(
        "a=fmtp:{} {}\r\n",
        codec.effective_payload_type().unwrap_or_default(),
        parameters.join(";")
    )
}
