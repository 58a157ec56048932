//! Media section helpers
//!
//! Positional parsing of the `m=` line and the small per-section lookups
//! (kind, rejection, direction, mid) that the composite algorithms build on.
//!
//! Format: `m=<media> <port> <proto> <fmt> ...`

use crate::sdp::attributes::common::{leading_int, tail_from};
use crate::sdp::parser::{first_match, split_lines};
use crate::types::sdp::{MediaDirection, MLine};

/// Parse the `m=` line that opens a media section.
///
/// `fmt` keeps every token after the protocol joined with single spaces, so
/// SCTP sections with non-numeric format fields survive. Returns `None` if
/// the section does not start with an `m=` line.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::media::parse_mline;
///
/// let mline = parse_mline("m=audio 9 UDP/TLS/RTP/SAVPF 111 0 8\r\n").unwrap();
/// assert_eq!(mline.kind, "audio");
/// assert_eq!(mline.port, Some(9));
/// assert_eq!(mline.fmt, "111 0 8");
/// ```
pub fn parse_mline(media_section: &str) -> Option<MLine> {
    let first = split_lines(media_section).into_iter().next()?;
    let rest = first.strip_prefix("m=")?;
    let mut parts = rest.split(' ');

    let kind = parts.next().unwrap_or_default().to_string();
    let port = parts.next().and_then(leading_int);
    let protocol = parts.next().unwrap_or_default().to_string();
    let fmt = parts.collect::<Vec<_>>().join(" ");

    Some(MLine {
        kind,
        port,
        protocol,
        fmt,
    })
}

/// Media kind of a section ("audio", "video", "application")
pub fn get_kind(media_section: &str) -> &str {
    let first = split_lines(media_section).into_iter().next().unwrap_or_default();
    tail_from(first.split(' ').next().unwrap_or_default(), 2)
}

/// A section is rejected when its m-line port is `0`
pub fn is_rejected(media_section: &str) -> bool {
    media_section.split(' ').nth(1) == Some("0")
}

fn find_direction(blob: &str) -> Option<MediaDirection> {
    split_lines(blob).into_iter().find_map(|line| {
        line.strip_prefix("a=")
            .and_then(|token| token.parse::<MediaDirection>().ok())
    })
}

/// Direction of a media section.
///
/// The first direction attribute in the section wins; without one the
/// session part is searched, and `sendrecv` is assumed if neither has any.
pub fn get_direction(media_section: &str, session_part: Option<&str>) -> MediaDirection {
    find_direction(media_section)
        .or_else(|| session_part.and_then(find_direction))
        .unwrap_or_default()
}

/// Value of the first `a=mid:` line of a section
pub fn get_mid(media_section: &str) -> Option<&str> {
    first_match(media_section, "a=mid:").map(|line| tail_from(line, 6))
}
