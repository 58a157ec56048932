//! SDP RTCP Attribute Parsers
//!
//! Implements parsers for RTCP-related attributes as defined in RFC 5761,
//! RFC 5506 and RFC 4585: rtcp-fb lines and the rtcp-mux / rtcp-rsize
//! flags combined with the cname of the first ssrc.

use crate::sdp::attributes::common::after_first_space;
use crate::sdp::attributes::ssrc::parse_ssrc_media;
use crate::sdp::parser::match_prefix;
use crate::types::sdp::{RtcpFeedback, RtcpParameters, RtpCodecParameters};

/// Parses rtcp-fb attribute: a=rtcp-fb:<payload type> <feedback type> [<parameters>]
pub fn parse_rtcp_fb(line: &str) -> RtcpFeedback {
    let mut parts = after_first_space(line).split(' ');
    let feedback_type = parts.next().unwrap_or_default().to_string();
    let parameter = parts.collect::<Vec<_>>().join(" ");

    RtcpFeedback {
        feedback_type,
        parameter,
    }
}

/// Writes one rtcp-fb line per feedback entry of a codec
pub fn write_rtcp_fb(codec: &RtpCodecParameters) -> String {
    let payload_type = codec.effective_payload_type().unwrap_or_default();

    codec
        .rtcp_feedback
        .iter()
        .map(|fb| {
            if fb.parameter.is_empty() {
                format!("a=rtcp-fb:{} {}\r\n", payload_type, fb.feedback_type)
            } else {
                format!(
                    "a=rtcp-fb:{} {} {}\r\n",
                    payload_type, fb.feedback_type, fb.parameter
                )
            }
        })
        .collect()
}

/// Parses the RTCP parameters of a media section.
///
/// `cname` and `ssrc` come from the first `a=ssrc:<id> cname:` line.
pub fn parse_rtcp_parameters(media_section: &str) -> RtcpParameters {
    let cname = match_prefix(media_section, "a=ssrc:")
        .into_iter()
        .map(parse_ssrc_media)
        .find(|attr| attr.attribute == "cname");

    let reduced_size = !match_prefix(media_section, "a=rtcp-rsize").is_empty();
    let mux = !match_prefix(media_section, "a=rtcp-mux").is_empty();

    let (cname, ssrc) = match cname {
        Some(attr) => (attr.value, attr.ssrc),
        None => (None, None),
    };

    RtcpParameters {
        cname,
        ssrc,
        reduced_size,
        compound: !reduced_size,
        mux,
    }
}

/// Writes `a=rtcp-rsize`, `a=rtcp-mux` and the `a=ssrc:<ssrc> cname:` line.
///
/// The ssrc line is only written when both ssrc and cname are known.
pub fn write_rtcp_parameters(params: &RtcpParameters) -> String {
    let mut sdp = String::new();
    if params.reduced_size {
        sdp.push_str("a=rtcp-rsize\r\n");
    }
    if params.mux {
        sdp.push_str("a=rtcp-mux\r\n");
    }
    if let (Some(ssrc), Some(cname)) = (params.ssrc, &params.cname) {
        sdp.push_str(&format!("a=ssrc:{} cname:{}\r\n", ssrc, cname));
    }
    sdp
}
