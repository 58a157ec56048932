//! SDP SSRC Attribute Parsers
//!
//! Implements parsers for SSRC-related attributes as defined in RFC 5576.
//! Formats:
//! - a=ssrc:<ssrc-id> <attribute>[:<value>]
//! - a=ssrc-group:<semantics> <ssrc-id> ...

use tracing::debug;

use crate::sdp::attributes::common::{leading_int, tail_from};
use crate::types::sdp::{SsrcGroup, SsrcMediaAttribute};

/// Parses a source attribute line.
///
/// The line is split at the first space, and the remainder at its first
/// colon to separate the attribute name from the optional value.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::attributes::parse_ssrc_media;
///
/// let attr = parse_ssrc_media("a=ssrc:1234 cname:user@example.com");
/// assert_eq!(attr.ssrc, Some(1234));
/// assert_eq!(attr.attribute, "cname");
/// assert_eq!(attr.value.as_deref(), Some("user@example.com"));
/// ```
pub fn parse_ssrc_media(line: &str) -> SsrcMediaAttribute {
    let value = tail_from(line, 7);
    let (ssrc, rest) = match value.split_once(' ') {
        Some((ssrc, rest)) => (ssrc, rest),
        None => (value, ""),
    };

    let (attribute, value) = match rest.split_once(':') {
        Some((attribute, value)) => (attribute.to_string(), Some(value.to_string())),
        None => (rest.to_string(), None),
    };

    SsrcMediaAttribute {
        ssrc: leading_int(ssrc),
        attribute,
        value,
    }
}

/// Parses a source group line.
///
/// Ids keep their position in the group; one that is not a number is `None`.
pub fn parse_ssrc_group(line: &str) -> SsrcGroup {
    let mut parts = tail_from(line, 13).split(' ');
    let semantics = parts.next().unwrap_or_default().to_string();

    let ssrcs: Vec<Option<u32>> = parts.map(leading_int).collect();
    if ssrcs.iter().any(Option::is_none) {
        debug!("Unparseable ssrc in {} group: {}", semantics, line);
    }

    SsrcGroup { semantics, ssrcs }
}
