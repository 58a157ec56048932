// Tests for RTP, RTCP and encoding parameter extraction

use sdp_core::sdp::attributes::{parse_rtcp_parameters, write_rtcp_parameters};
use sdp_core::sdp::parser::get_media_sections;
use sdp_core::sdp::rtp_parameters::{
    parse_rtp_encoding_parameters, parse_rtp_parameters, write_rtp_description,
};
use sdp_core::types::{
    FecMechanism, FecParameters, RtcpFeedback, RtpCodecParameters, RtpEncodingParameters,
    RtpParameters, RtxParameters,
};
use sdp_core::{SessionConfig, SessionContext};

use crate::common::{init_tracing, OFFER};

#[test]
fn test_fec_rtx_construction() {
    init_tracing();
    let video = &get_media_sections(OFFER)[1];
    let encodings = parse_rtp_encoding_parameters(video);

    let base = RtpEncodingParameters {
        ssrc: Some(1111),
        codec_payload_type: Some(100),
        rtx: Some(RtxParameters { ssrc: 2222 }),
        max_bitrate: Some(934_000),
        ..Default::default()
    };
    let with_fec = RtpEncodingParameters {
        fec: Some(FecParameters {
            ssrc: Some(1111),
            mechanism: FecMechanism::Red,
        }),
        ..base.clone()
    };
    assert_eq!(encodings, vec![base, with_fec]);
}

#[test]
fn test_rtp_parameters_from_offer() {
    let audio = &get_media_sections(OFFER)[0];
    let params = parse_rtp_parameters(audio);

    assert_eq!(params.codecs.len(), 2);
    let opus = &params.codecs[0];
    assert_eq!(opus.name, "opus");
    assert_eq!(opus.channels, 2);
    assert_eq!(opus.parameters.get("useinbandfec"), Some(&Some("1".to_string())));
    assert_eq!(opus.rtcp_feedback, vec![RtcpFeedback::new("transport-cc", "")]);

    let pcmu = &params.codecs[1];
    assert_eq!(pcmu.payload_type, Some(0));
    assert!(pcmu.parameters.is_empty());
    assert!(params.fec_mechanisms.is_empty());
}

#[test]
fn test_audio_encoding_without_bandwidth() {
    let audio = &get_media_sections(OFFER)[0];
    let encodings = parse_rtp_encoding_parameters(audio);
    assert_eq!(
        encodings,
        vec![RtpEncodingParameters {
            ssrc: Some(3510681183),
            ..Default::default()
        }]
    );
}

#[test]
fn test_additional_fid_groups_are_ignored() {
    init_tracing();
    let section = "m=video 9 UDP/TLS/RTP/SAVPF 96 97\r\n\
        a=rtpmap:96 VP8/90000\r\n\
        a=rtpmap:97 rtx/90000\r\n\
        a=fmtp:97 apt=96\r\n\
        a=ssrc-group:FID 10 11\r\n\
        a=ssrc-group:FID 20 21\r\n\
        a=ssrc:10 cname:c\r\n\
        a=ssrc:11 cname:c\r\n\
        a=ssrc:20 cname:c\r\n\
        a=ssrc:21 cname:c\r\n";
    let encodings = parse_rtp_encoding_parameters(section);
    assert_eq!(encodings.len(), 1);
    assert_eq!(encodings[0].ssrc, Some(10));
    assert_eq!(encodings[0].rtx, Some(RtxParameters { ssrc: 11 }));
}

#[test]
fn test_rtcp_parameters_idempotence() {
    let sections = get_media_sections(OFFER);
    for section in &sections[..2] {
        let params = parse_rtcp_parameters(section);
        let reparsed = parse_rtcp_parameters(&write_rtcp_parameters(&params));
        assert_eq!(reparsed, params);
    }

    let video = parse_rtcp_parameters(&sections[1]);
    assert!(video.reduced_size);
    assert!(!video.compound);
    assert!(video.mux);
    assert_eq!(video.ssrc, Some(1111));
}

#[test]
fn test_context_rtcp_parameters() {
    let context = SessionContext::new(SessionConfig::default().with_cname("fixed"));
    let params = context.rtcp_parameters(5, false, true);
    let written = write_rtcp_parameters(&params);
    assert_eq!(written, "a=rtcp-mux\r\na=ssrc:5 cname:fixed\r\n");
    assert_eq!(parse_rtcp_parameters(&written), params);
}

#[test]
fn test_description_round_trip() {
    let mut vp8 = RtpCodecParameters::new(96, "VP8", 90000);
    vp8.rtcp_feedback.push(RtcpFeedback::new("nack", "pli"));
    let mut rtx = RtpCodecParameters::new(97, "rtx", 90000);
    rtx.parameters.insert("apt", Some("96".to_string()));

    let caps = RtpParameters {
        profile: Some("UDP/TLS/RTP/SAVPF".to_string()),
        codecs: vec![vp8, rtx],
        ..Default::default()
    };
    let sdp = write_rtp_description("video", &caps);
    assert!(sdp.starts_with("m=video 9 UDP/TLS/RTP/SAVPF 96 97\r\n"));
    assert_eq!(parse_rtp_parameters(&sdp), caps);
}

#[test]
fn test_preferred_payload_type_overrides() {
    let mut opus = RtpCodecParameters::new(111, "opus", 48000);
    opus.channels = 2;
    opus.preferred_payload_type = Some(109);
    opus.rtcp_feedback.push(RtcpFeedback::new("transport-cc", ""));

    let caps = RtpParameters {
        codecs: vec![opus],
        ..Default::default()
    };
    let sdp = write_rtp_description("audio", &caps);
    assert!(sdp.contains("m=audio 9 UDP/TLS/RTP/SAVPF 109\r\n"));
    assert!(sdp.contains("a=rtpmap:109 opus/48000/2\r\n"));
    assert!(sdp.contains("a=rtcp-fb:109 transport-cc\r\n"));
    assert!(!sdp.contains("111"));
}
