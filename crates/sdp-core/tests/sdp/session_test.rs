// Tests for session-level handling, configuration and JSON output

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use sdp_core::identifier::{generate_identifier_with, generate_session_id_with};
use sdp_core::sdp::attributes::parse_candidate;
use sdp_core::sdp::parser::{get_description, split_sections};
use sdp_core::sdp::rtp_parameters::{parse_rtp_encoding_parameters, parse_rtp_parameters};
use sdp_core::sdp::session::{
    is_valid_sdp, parse_bandwidth, parse_oline, validate_sdp, write_session_boilerplate,
};
use sdp_core::types::{Bandwidth, SctpParameters};
use sdp_core::{Error, SessionConfig, SessionContext, SessionDescription};

use crate::common::OFFER;

#[test]
fn test_validity_examples() {
    assert!(is_valid_sdp("v=0\r\no=- 1 2 IN IP4 0.0.0.0\r\ns=-\r\nt=0 0\r\n"));
    assert!(!is_valid_sdp("not sdp at all"));
    assert!(is_valid_sdp(OFFER));
    assert!(validate_sdp(OFFER).is_ok());
}

#[test]
fn test_line_endings_are_tolerated() {
    let unix = OFFER.replace("\r\n", "\n");
    assert!(is_valid_sdp(&unix));

    let desc: SessionDescription = unix.parse().unwrap();
    assert_eq!(desc.media_sections().len(), 3);
    for section in desc.media_sections() {
        assert!(section.ends_with("\r\n"));
    }
    assert_eq!(
        parse_rtp_parameters(&desc.media_sections()[0]),
        parse_rtp_parameters(&split_sections(OFFER)[1])
    );
}

#[test]
fn test_non_sdp_splits_to_session_only() {
    let sections = split_sections("hello world");
    assert_eq!(sections, vec!["hello world\r\n".to_string()]);
    assert!(matches!(
        "hello world".parse::<SessionDescription>(),
        Err(Error::InvalidLine { line: 1, .. })
    ));
}

#[test]
fn test_origin_and_boilerplate() {
    let origin = parse_oline(&get_description(OFFER)).unwrap();
    assert_eq!(origin.username, "-");
    assert_eq!(origin.session_id, "4611731400430051336");
    assert_eq!(origin.session_version, Some(2));
    assert_eq!(origin.address, "127.0.0.1");

    let generated = write_session_boilerplate(None, None, None);
    assert!(is_valid_sdp(&generated));
    let origin = parse_oline(&generated).unwrap();
    assert_eq!(origin.username, "thisisadapterortc");
    assert_eq!(origin.session_id.len(), 21);
}

#[test]
fn test_bandwidth_conversion() {
    let bandwidth = parse_bandwidth("b=AS:1000").unwrap();
    assert_eq!(bandwidth, Bandwidth::As(Some(1000)));
    assert_eq!(bandwidth.max_bitrate(), Some(934_000));

    let section = "m=video 9 RTP/AVPF 96\r\nb=CT:1000\r\na=rtpmap:96 VP8/90000\r\na=ssrc:1 cname:x\r\n";
    let encodings = parse_rtp_encoding_parameters(section);
    assert_eq!(encodings.len(), 1);
    assert_eq!(encodings[0].max_bitrate, None);
}

#[test]
fn test_seeded_identifiers() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    assert_eq!(generate_identifier_with(&mut a), generate_identifier_with(&mut b));
    assert_eq!(generate_session_id_with(&mut a), generate_session_id_with(&mut b));

    let context = SessionContext::with_rng(SessionConfig::default(), &mut StdRng::seed_from_u64(7));
    let again = SessionContext::with_rng(SessionConfig::default(), &mut StdRng::seed_from_u64(7));
    assert_eq!(context.cname(), again.cname());
    assert_eq!(context.write_session_boilerplate(), again.write_session_boilerplate());
}

#[test]
fn test_context_from_json_config() {
    let config = SessionConfig::from_json(
        r#"{"sessionUser": "gateway", "sessionId": "1234567", "cname": "endpoint-1"}"#,
    )
    .unwrap();
    let context = SessionContext::new(config);
    assert_eq!(context.cname(), "endpoint-1");
    assert_eq!(
        context.write_session_boilerplate(),
        "v=0\r\no=gateway 1234567 2 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n"
    );

    assert!(matches!(SessionConfig::from_json("[1, 2]"), Err(Error::Config(_))));
}

#[test]
fn test_json_field_names() {
    let candidate =
        parse_candidate("candidate:1 1 udp 100 10.0.0.1 5000 typ srflx raddr 10.0.0.2 rport 6000 ufrag u1")
            .unwrap();
    let value = serde_json::to_value(&candidate).unwrap();
    assert_eq!(value["component"], json!("rtp"));
    assert_eq!(value["type"], json!("srflx"));
    assert_eq!(value["relatedAddress"], json!("10.0.0.2"));
    assert_eq!(value["relatedPort"], json!(6000));
    assert_eq!(value["usernameFragment"], json!("u1"));
    assert!(value.get("tcpType").is_none());

    let video = &split_sections(OFFER)[2];
    let params = parse_rtp_parameters(video);
    let value = serde_json::to_value(&params.codecs[0]).unwrap();
    assert_eq!(value["payloadType"], json!(100));
    assert_eq!(value["clockRate"], json!(90000));
    assert_eq!(value["channels"], json!(1));
    assert_eq!(value["rtcpFeedback"][0], json!({"type": "nack", "parameter": ""}));

    let encodings = parse_rtp_encoding_parameters(video);
    let value = serde_json::to_value(&encodings[1]).unwrap();
    assert_eq!(value["codecPayloadType"], json!(100));
    assert_eq!(value["maxBitrate"], json!(934000));
    assert_eq!(value["fec"], json!({"ssrc": 1111, "mechanism": "red"}));
}

#[test]
fn test_json_defaults_on_input() {
    let sctp: SctpParameters =
        serde_json::from_value(json!({"port": 5000, "protocol": "webrtc-datachannel"})).unwrap();
    assert_eq!(sctp.max_message_size, 65536);

    let codec: sdp_core::RtpCodecParameters = serde_json::from_value(json!({
        "payloadType": 0,
        "name": "PCMU",
        "clockRate": 8000,
        "numChannels": 1
    }))
    .unwrap();
    assert_eq!(codec.channels, 1);
    assert!(codec.parameters.is_empty());
}
