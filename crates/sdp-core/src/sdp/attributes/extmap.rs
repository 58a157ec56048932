//! SDP Extmap Attribute Parser
//!
//! Implements parser for extmap attributes as defined in RFC 8285.
//! Format: a=extmap:<value>["/"<direction>] <URI> <extensionattributes>

use tracing::debug;

use crate::sdp::attributes::common::{leading_int, tail_from};
use crate::types::sdp::{HeaderExtension, MediaDirection};

/// Parses an extmap line.
///
/// A missing direction means `sendrecv`; an unknown direction token is
/// logged and also read as `sendrecv`. Anything after the URI is kept in
/// `attributes`.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::attributes::parse_extmap;
/// use sdp_core::types::MediaDirection;
///
/// let ext = parse_extmap("a=extmap:2/recvonly urn:ietf:params:rtp-hdrext:toffset");
/// assert_eq!(ext.id, Some(2));
/// assert_eq!(ext.direction, MediaDirection::RecvOnly);
/// assert_eq!(ext.uri, "urn:ietf:params:rtp-hdrext:toffset");
/// ```
pub fn parse_extmap(line: &str) -> HeaderExtension {
    let mut parts = tail_from(line, 9).split(' ');
    let id_and_direction = parts.next().unwrap_or_default();
    let uri = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");

    let (id, direction) = match id_and_direction.split_once('/') {
        Some((id, direction)) => {
            let direction = direction.parse::<MediaDirection>().unwrap_or_else(|_| {
                debug!("Unknown extmap direction {:?}, using sendrecv", direction);
                MediaDirection::SendRecv
            });
            (id, direction)
        }
        None => (id_and_direction, MediaDirection::SendRecv),
    };

    HeaderExtension {
        id: leading_int(id),
        preferred_id: None,
        direction,
        uri,
        attributes: (!rest.is_empty()).then_some(rest),
    }
}

/// Writes an extmap line, omitting the default `sendrecv` direction
pub fn write_extmap(extension: &HeaderExtension) -> String {
    let id = extension.effective_id().unwrap_or_default();
    let direction = match extension.direction {
        MediaDirection::SendRecv => String::new(),
        other => format!("/{}", other),
    };
    let attributes = match &extension.attributes {
        Some(attributes) if !attributes.is_empty() => format!(" {}", attributes),
        _ => String::new(),
    };

    format!(
        "a=extmap:{}{} {}{}\r\n",
        id, direction, extension.uri, attributes
    )
}
