//! SDP SCTP Attribute Parsers
//!
//! Data channel transport description. Two generations of syntax exist:
//!
//! - RFC 8841: `m=application 9 UDP/DTLS/SCTP webrtc-datachannel` with
//!   `a=sctp-port:<port>`
//! - draft-ietf-mmusic-sctp-sdp-05: `m=application 9 DTLS/SCTP <port>` with
//!   `a=sctpmap:<port> <protocol> <streams>`
//!
//! Both may carry `a=max-message-size:<bytes>`.

use crate::sdp::attributes::common::{leading_int, tail_from};
use crate::sdp::media::parse_mline;
use crate::sdp::parser::{first_match, match_prefix};
use crate::types::sdp::{MLine, SctpParameters};

/// Maximum message size assumed when a section does not declare one
pub const DEFAULT_MAX_MESSAGE_SIZE: u64 = 65536;

/// Stream count written in legacy `a=sctpmap` lines
const SCTPMAP_STREAMS: u32 = 65535;

/// Parses the SCTP parameters of an application section.
///
/// `a=sctp-port` is preferred, with the protocol taken from the m-line
/// format field; `a=sctpmap` is the fallback. Returns `None` if neither is
/// present.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::attributes::parse_sctp_description;
///
/// let section = "m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\na=sctp-port:5000\r\n";
/// let sctp = parse_sctp_description(section).unwrap();
/// assert_eq!(sctp.port, Some(5000));
/// assert_eq!(sctp.protocol, "webrtc-datachannel");
/// assert_eq!(sctp.max_message_size, 65536);
/// ```
pub fn parse_sctp_description(media_section: &str) -> Option<SctpParameters> {
    let max_message_size = first_match(media_section, "a=max-message-size:")
        .and_then(|line| leading_int(tail_from(line, 19)))
        .unwrap_or(DEFAULT_MAX_MESSAGE_SIZE);

    if let Some(line) = first_match(media_section, "a=sctp-port:") {
        let protocol = parse_mline(media_section)
            .map(|mline| mline.fmt)
            .unwrap_or_default();
        return Some(SctpParameters {
            port: leading_int(tail_from(line, 12)),
            protocol,
            max_message_size,
        });
    }

    let line = match_prefix(media_section, "a=sctpmap:").into_iter().next()?;
    let mut parts = tail_from(line, 10).split(' ');
    Some(SctpParameters {
        port: parts.next().and_then(leading_int),
        protocol: parts.next().unwrap_or_default().to_string(),
        max_message_size,
    })
}

/// Writes an application section head for the given m-line and SCTP
/// parameters.
///
/// Any protocol other than the legacy `DTLS/SCTP` uses the `a=sctp-port`
/// form. `a=max-message-size` is always written.
pub fn write_sctp_description(media: &MLine, sctp: &SctpParameters) -> String {
    let port = sctp.port.map(|port| port.to_string()).unwrap_or_default();

    let mut sdp = if media.protocol != "DTLS/SCTP" {
        format!(
            "m={} 9 {} {}\r\nc=IN IP4 0.0.0.0\r\na=sctp-port:{}\r\n",
            media.kind, media.protocol, sctp.protocol, port
        )
    } else {
        format!(
            "m={} 9 {} {}\r\nc=IN IP4 0.0.0.0\r\na=sctpmap:{} {} {}\r\n",
            media.kind, media.protocol, port, port, sctp.protocol, SCTPMAP_STREAMS
        )
    };

    sdp.push_str(&format!("a=max-message-size:{}\r\n", sctp.max_message_size));
    sdp
}
