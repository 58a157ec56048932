//! SDP MSID Attribute Parser
//!
//! Implements the media stream lookup of RFC 8830.
//! Format: a=msid:<stream identifier> [<track identifier>]
//!
//! Plan-B descriptions carry the same pair as a source attribute instead:
//! `a=ssrc:<id> msid:<stream> <track>`.

use crate::sdp::attributes::common::tail_from;
use crate::sdp::attributes::ssrc::parse_ssrc_media;
use crate::sdp::parser::match_prefix;
use crate::types::sdp::MediaStreamId;

fn split_msid(value: &str) -> MediaStreamId {
    let mut parts = value.split(' ');
    MediaStreamId {
        stream: parts.next().unwrap_or_default().to_string(),
        track: parts.next().map(str::to_string),
    }
}

/// Media stream id of a section.
///
/// Uses the `a=msid:` line when the section has exactly one, otherwise the
/// first `msid` source attribute.
pub fn parse_msid(media_section: &str) -> Option<MediaStreamId> {
    let lines = match_prefix(media_section, "a=msid:");
    if let [line] = lines.as_slice() {
        return Some(split_msid(tail_from(line, 7)));
    }

    match_prefix(media_section, "a=ssrc:")
        .into_iter()
        .map(parse_ssrc_media)
        .find(|attr| attr.attribute == "msid")
        .map(|attr| split_msid(attr.value.as_deref().unwrap_or_default()))
}
