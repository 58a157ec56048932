//! RTP parameter extraction and serialization
//!
//! Composite algorithms that cross-reference rtpmap, fmtp, rtcp-fb, extmap,
//! ssrc and bandwidth lines of a media section by payload type and ssrc.

use tracing::{debug, warn};

use crate::sdp::attributes::common::leading_int;
use crate::sdp::attributes::{
    parse_extmap, parse_fmtp, parse_rtcp_fb, parse_rtp_map, parse_ssrc_group, parse_ssrc_media,
    write_extmap, write_fmtp, write_rtcp_fb, write_rtp_map,
};
use crate::sdp::media::parse_mline;
use crate::sdp::parser::{first_match, match_prefix};
use crate::sdp::session::parse_bandwidth;
use crate::types::sdp::{
    FecMechanism, FecParameters, RtpEncodingParameters, RtpParameters, RtxParameters,
};

/// Transport profile written when the capabilities do not name one
pub const DEFAULT_RTP_PROFILE: &str = "UDP/TLS/RTP/SAVPF";

/// Builds the RTP parameters of a media section.
///
/// Every payload type of the m-line with an rtpmap line becomes a codec,
/// carrying its first fmtp line and all of its rtcp-fb lines. Wildcard
/// `a=rtcp-fb:*` entries are appended to every codec that does not already
/// list them. RED and ULPFEC codecs are recorded in `fec_mechanisms`.
pub fn parse_rtp_parameters(media_section: &str) -> RtpParameters {
    let mut description = RtpParameters::default();

    if let Some(mline) = parse_mline(media_section) {
        if !mline.protocol.is_empty() {
            description.profile = Some(mline.protocol.clone());
        }

        for payload_type in mline.formats() {
            let Some(rtpmap) = first_match(media_section, &format!("a=rtpmap:{} ", payload_type))
            else {
                continue;
            };

            let mut codec = parse_rtp_map(rtpmap);
            if let Some(fmtp) = first_match(media_section, &format!("a=fmtp:{} ", payload_type)) {
                codec.parameters = parse_fmtp(fmtp);
            }
            codec.rtcp_feedback = match_prefix(media_section, &format!("a=rtcp-fb:{} ", payload_type))
                .into_iter()
                .map(parse_rtcp_fb)
                .collect();

            let name = codec.name.to_uppercase();
            if name == "RED" || name == "ULPFEC" {
                description.fec_mechanisms.push(name);
            }
            description.codecs.push(codec);
        }
    }

    description.header_extensions = match_prefix(media_section, "a=extmap:")
        .into_iter()
        .map(parse_extmap)
        .collect();

    let wildcard: Vec<_> = match_prefix(media_section, "a=rtcp-fb:* ")
        .into_iter()
        .map(parse_rtcp_fb)
        .collect();
    for codec in &mut description.codecs {
        for fb in &wildcard {
            if !codec.rtcp_feedback.contains(fb) {
                codec.rtcp_feedback.push(fb.clone());
            }
        }
    }

    description
}

/// Writes a media section head from RTP capabilities.
///
/// The m-line port is `9` when there are codecs and `0` otherwise. Codec
/// blocks follow in input order, then header extensions, then
/// `a=maxptime` with the largest maxptime any codec declares.
pub fn write_rtp_description(kind: &str, caps: &RtpParameters) -> String {
    let port = if caps.codecs.is_empty() { 0 } else { 9 };
    let profile = caps
        .profile
        .as_deref()
        .filter(|profile| !profile.is_empty())
        .unwrap_or(DEFAULT_RTP_PROFILE);

    let mut mline = format!("m={} {} {}", kind, port, profile);
    for codec in &caps.codecs {
        mline.push(' ');
        if let Some(payload_type) = codec.effective_payload_type() {
            mline.push_str(&payload_type.to_string());
        }
    }

    let mut sdp = format!("{}\r\nc=IN IP4 0.0.0.0\r\na=rtcp:9 IN IP4 0.0.0.0\r\n", mline);

    for codec in &caps.codecs {
        sdp.push_str(&write_rtp_map(codec));
        sdp.push_str(&write_fmtp(codec));
        sdp.push_str(&write_rtcp_fb(codec));
    }

    for extension in &caps.header_extensions {
        sdp.push_str(&write_extmap(extension));
    }

    let maxptime = caps
        .codecs
        .iter()
        .filter_map(|codec| codec.maxptime)
        .max()
        .unwrap_or(0);
    if maxptime > 0 {
        sdp.push_str(&format!("a=maxptime:{}\r\n", maxptime));
    }

    sdp
}

/// Derives the RTP encodings of a media section.
///
/// The ssrc of the first `cname` source attribute is the primary ssrc. If
/// the first FID group starts with it, the group's second ssrc is used for
/// retransmission. Each RTX codec with an `apt` parameter yields one
/// encoding, followed by a FEC copy when RED was negotiated. Without RTX a
/// single encoding for the primary ssrc is produced. The first `b=` line
/// sets `max_bitrate` on every encoding.
pub fn parse_rtp_encoding_parameters(media_section: &str) -> Vec<RtpEncodingParameters> {
    let description = parse_rtp_parameters(media_section);
    let has_red = description.fec_mechanisms.iter().any(|m| m == "RED");
    let has_ulpfec = description.fec_mechanisms.iter().any(|m| m == "ULPFEC");

    let primary_ssrc = match_prefix(media_section, "a=ssrc:")
        .into_iter()
        .map(parse_ssrc_media)
        .find(|attr| attr.attribute == "cname")
        .and_then(|attr| attr.ssrc);

    let flows: Vec<_> = match_prefix(media_section, "a=ssrc-group:FID")
        .into_iter()
        .map(parse_ssrc_group)
        .collect();
    if flows.len() > 1 {
        warn!(
            "{} FID groups in media section, only the first is used",
            flows.len()
        );
    }

    let secondary_ssrc = flows.first().and_then(|flow| match flow.ssrcs.as_slice() {
        [first, second, ..] if primary_ssrc.is_some() && *first == primary_ssrc => *second,
        [first, ..] => {
            debug!(
                "FID group starts with ssrc {:?} but the cname ssrc is {:?}",
                first, primary_ssrc
            );
            None
        }
        [] => None,
    });

    let mut encodings = Vec::new();
    for codec in &description.codecs {
        if !codec.name.eq_ignore_ascii_case("rtx") {
            continue;
        }
        let apt = match codec.parameters.get("apt") {
            Some(Some(apt)) if !apt.is_empty() => apt,
            _ => continue,
        };

        let mut encoding = RtpEncodingParameters {
            ssrc: primary_ssrc,
            codec_payload_type: leading_int(apt),
            ..Default::default()
        };
        if let (Some(_), Some(secondary)) = (primary_ssrc, secondary_ssrc) {
            encoding.rtx = Some(RtxParameters { ssrc: secondary });
        }

        if has_red {
            let mut fec = encoding.clone();
            fec.fec = Some(FecParameters {
                ssrc: primary_ssrc,
                mechanism: if has_ulpfec {
                    FecMechanism::RedUlpfec
                } else {
                    FecMechanism::Red
                },
            });
            encodings.push(encoding);
            encodings.push(fec);
        } else {
            encodings.push(encoding);
        }
    }

    if encodings.is_empty() {
        if let Some(ssrc) = primary_ssrc {
            encodings.push(RtpEncodingParameters {
                ssrc: Some(ssrc),
                ..Default::default()
            });
        }
    }

    if let Some(line) = first_match(media_section, "b=") {
        let max_bitrate = parse_bandwidth(line).and_then(|bandwidth| bandwidth.max_bitrate());
        for encoding in &mut encodings {
            encoding.max_bitrate = max_bitrate;
        }
    }

    encodings
}
