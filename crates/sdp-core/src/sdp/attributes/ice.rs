//! SDP ICE Attribute Parsers
//!
//! Implements parsers for ICE-related attributes as defined in RFC 8839:
//! ice-ufrag, ice-pwd, ice-lite and ice-options.

use crate::sdp::attributes::common::tail_from;
use crate::sdp::parser::{first_match, match_prefix, media_then_session};
use crate::types::sdp::IceParameters;

/// ICE credentials of a media section, inheriting session-level values.
///
/// Returns `None` unless both an `a=ice-ufrag:` and an `a=ice-pwd:` line are
/// found. Empty values are kept as they are.
pub fn get_ice_parameters(media_section: &str, session_part: &str) -> Option<IceParameters> {
    let text = media_then_session(media_section, session_part);
    let ufrag = first_match(&text, "a=ice-ufrag:").map(|line| tail_from(line, 12))?;
    let pwd = first_match(&text, "a=ice-pwd:").map(|line| tail_from(line, 10))?;

    Some(IceParameters {
        username_fragment: ufrag.to_string(),
        password: pwd.to_string(),
        ice_lite: !match_prefix(&text, "a=ice-lite").is_empty(),
    })
}

/// Writes the ice-ufrag and ice-pwd lines, plus `a=ice-lite` if set
pub fn write_ice_parameters(params: &IceParameters) -> String {
    let mut sdp = format!(
        "a=ice-ufrag:{}\r\na=ice-pwd:{}\r\n",
        params.username_fragment, params.password
    );
    if params.ice_lite {
        sdp.push_str("a=ice-lite\r\n");
    }
    sdp
}

/// Parses ice-options attribute: a=ice-options:<option> ...
pub fn parse_ice_options(line: &str) -> Vec<String> {
    tail_from(line, 14).split(' ').map(str::to_string).collect()
}
