//! SDP Rtpmap Attribute Parser
//!
//! Implements parser for rtpmap attributes as defined in RFC 8866.
//! Format: a=rtpmap:<payload type> <encoding name>/<clock rate>[/<encoding parameters>]

use tracing::debug;

use crate::sdp::attributes::common::{leading_int, tail_from};
use crate::types::sdp::RtpCodecParameters;

/// Parses an rtpmap line into a codec with empty parameters and feedback.
///
/// A missing or unparseable channel count gives 1.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::attributes::parse_rtp_map;
///
/// let codec = parse_rtp_map("a=rtpmap:111 opus/48000/2");
/// assert_eq!(codec.payload_type, Some(111));
/// assert_eq!(codec.name, "opus");
/// assert_eq!(codec.clock_rate, Some(48000));
/// assert_eq!(codec.channels, 2);
/// ```
pub fn parse_rtp_map(line: &str) -> RtpCodecParameters {
    let value = tail_from(line, 9);
    let (payload_type, encoding) = value.split_once(' ').unwrap_or((value, ""));
    let encoding = encoding.split(' ').next().unwrap_or_default();
    let parts: Vec<&str> = encoding.split('/').collect();

    let channels = match parts.get(2) {
        Some(count) if parts.len() == 3 => leading_int(count).unwrap_or_else(|| {
            debug!("Unparseable channel count {:?} in rtpmap, assuming 1", count);
            1
        }),
        _ => 1,
    };

    RtpCodecParameters {
        payload_type: leading_int(payload_type),
        name: parts[0].to_string(),
        clock_rate: parts.get(1).and_then(|rate| leading_int(rate)),
        channels,
        ..Default::default()
    }
}

/// Writes an rtpmap line; the channel count is omitted when it is 1
pub fn write_rtp_map(codec: &RtpCodecParameters) -> String {
    let payload_type = codec.effective_payload_type().unwrap_or_default();
    let clock_rate = codec
        .clock_rate
        .map(|rate| rate.to_string())
        .unwrap_or_default();
    let channels = if codec.channels != 1 {
        format!("/{}", codec.channels)
    } else {
        String::new()
    };

    format!(
        "a=rtpmap:{} {}/{}{}\r\n",
        payload_type, codec.name, clock_rate, channels
    )
}
