// Tests for attribute parsers against a full offer

use sdp_core::sdp::attributes::{
    get_crypto_parameters, get_dtls_parameters, get_ice_parameters, parse_candidate,
    parse_crypto_key_params, parse_crypto_line, parse_extmap, parse_msid, parse_sctp_description,
    write_candidate, write_crypto_key_params, write_crypto_line, write_sctp_description,
};
use sdp_core::sdp::media::{get_direction, get_kind, get_mid, parse_mline};
use sdp_core::sdp::parser::{get_description, get_media_sections, match_prefix};
use sdp_core::types::{CandidateComponent, CandidateType, MediaDirection};

use crate::common::OFFER;

#[test]
fn test_candidate_from_offer() {
    let audio = &get_media_sections(OFFER)[0];
    let line = match_prefix(audio, "a=candidate:")[0];
    let candidate = parse_candidate(line).unwrap();

    assert_eq!(candidate.foundation, "842163049");
    assert_eq!(candidate.component, CandidateComponent::Rtp);
    assert_eq!(candidate.candidate_type, CandidateType::Srflx);
    assert_eq!(candidate.related_address.as_deref(), Some("10.0.0.2"));
    assert_eq!(candidate.related_port, Some(46154));
    assert_eq!(candidate.ufrag(), Some("EsAw"));
    let keys: Vec<&str> = candidate.extensions.keys().collect();
    assert_eq!(keys, vec!["generation", "network-cost"]);

    let written = write_candidate(&candidate);
    assert_eq!(
        written,
        "candidate:842163049 1 UDP 1677729535 203.0.113.7 46154 typ srflx raddr 10.0.0.2 \
         rport 46154 ufrag EsAw generation 0 network-cost 999"
    );
    assert_eq!(parse_candidate(&written), Some(candidate));
}

#[test]
fn test_component_symmetry() {
    for (component, token) in [
        (CandidateComponent::Rtp, "1"),
        (CandidateComponent::Rtcp, "2"),
        (CandidateComponent::Other("42".to_string()), "42"),
    ] {
        let mut candidate = parse_candidate("candidate:f 1 udp 1 10.0.0.1 9 typ host").unwrap();
        candidate.component = component.clone();

        let written = write_candidate(&candidate);
        assert_eq!(written.split(' ').nth(1), Some(token));
        assert_eq!(parse_candidate(&written).unwrap().component, component);
    }
}

#[test]
fn test_ice_fallback_inheritance() {
    let session = get_description(OFFER);
    let sections = get_media_sections(OFFER);

    // Audio carries no credentials of its own
    let audio = get_ice_parameters(&sections[0], &session).unwrap();
    assert_eq!(audio.username_fragment, "EsAw");
    assert_eq!(audio.password, "bP+XJMM09aR8AiX1jdukzR6Y");

    let video = get_ice_parameters(&sections[1], &session).unwrap();
    assert_eq!(video.username_fragment, "Vid0");

    assert!(get_ice_parameters(&sections[0], "v=0\r\n").is_none());
}

#[test]
fn test_dtls_fallback_inheritance() {
    let session = get_description(OFFER);
    let sections = get_media_sections(OFFER);
    let dtls = get_dtls_parameters(&sections[2], &session);
    assert_eq!(dtls.fingerprints.len(), 1);
    assert_eq!(dtls.fingerprints[0].algorithm, "sha-256");
    assert_eq!(dtls.fingerprints[0].value, "D7:3A:B5:9C:11:22:33:44");
}

#[test]
fn test_media_helpers() {
    let session = get_description(OFFER);
    let sections = get_media_sections(OFFER);
    assert_eq!(sections.len(), 3);

    let kinds: Vec<&str> = sections.iter().map(|s| get_kind(s)).collect();
    assert_eq!(kinds, vec!["audio", "video", "application"]);

    let mids: Vec<Option<&str>> = sections.iter().map(|s| get_mid(s)).collect();
    assert_eq!(mids, vec![Some("0"), Some("1"), Some("2")]);

    assert_eq!(get_direction(&sections[0], Some(&session)), MediaDirection::SendRecv);
    assert_eq!(get_direction(&sections[1], Some(&session)), MediaDirection::SendOnly);
    assert_eq!(get_direction(&sections[2], Some(&session)), MediaDirection::SendRecv);

    let msid = parse_msid(&sections[0]).unwrap();
    assert_eq!(msid.stream, "stream0");
    assert_eq!(msid.track.as_deref(), Some("audio0"));
    assert!(parse_msid(&sections[1]).is_none());

    let ext = parse_extmap(match_prefix(&sections[0], "a=extmap:")[0]);
    assert_eq!(ext.uri, "urn:ietf:params:rtp-hdrext:ssrc-audio-level");
}

#[test]
fn test_sctp_from_offer() {
    let data = &get_media_sections(OFFER)[2];
    let sctp = parse_sctp_description(data).unwrap();
    assert_eq!(sctp.port, Some(5000));
    assert_eq!(sctp.protocol, "webrtc-datachannel");
    assert_eq!(sctp.max_message_size, 262144);

    let mline = parse_mline(data).unwrap();
    let written = write_sctp_description(&mline, &sctp);
    assert_eq!(parse_sctp_description(&written), Some(sctp));
}

#[test]
fn test_crypto_round_trip() {
    let line = "a=crypto:1 AES_CM_128_HMAC_SHA1_80 inline:WVNfX19zZW1jdGwgKCkgewkyMjA7fQp9CnVubGVz|2^20|1:4";
    let media = format!("m=audio 49170 RTP/SAVP 0\r\n{}\r\n", line);

    let params = get_crypto_parameters(&media, "v=0\r\n");
    assert_eq!(params.len(), 1);
    assert_eq!(params[0], parse_crypto_line(line));
    assert_eq!(write_crypto_line(&params[0]), format!("{}\r\n", line));

    let key = parse_crypto_key_params(&params[0].key_params).unwrap();
    assert_eq!(key.mki_value.as_deref(), Some("1"));
    assert_eq!(key.mki_length.as_deref(), Some("4"));
    assert_eq!(write_crypto_key_params(&key), params[0].key_params);
}
