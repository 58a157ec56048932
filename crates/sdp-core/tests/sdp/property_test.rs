// Property tests for the candidate and rtpmap writers

use proptest::prelude::*;

use sdp_core::sdp::attributes::{parse_candidate, parse_rtp_map, write_candidate, write_rtp_map};
use sdp_core::types::{AttributeMap, Candidate, CandidateComponent, CandidateType, RtpCodecParameters};

fn component() -> impl Strategy<Value = CandidateComponent> {
    prop_oneof![
        Just(CandidateComponent::Rtp),
        Just(CandidateComponent::Rtcp),
        (3u16..1000).prop_map(|n| CandidateComponent::Other(n.to_string())),
    ]
}

fn candidate_type() -> impl Strategy<Value = CandidateType> {
    prop::sample::select(vec![
        CandidateType::Host,
        CandidateType::Srflx,
        CandidateType::Prflx,
        CandidateType::Relay,
    ])
}

fn ipv4() -> impl Strategy<Value = String> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d))
}

prop_compose! {
    fn candidate()(
        foundation in "[a-zA-Z0-9+/]{1,32}",
        component in component(),
        protocol in prop::sample::select(vec!["udp", "tcp"]),
        priority in any::<u32>(),
        address in ipv4(),
        port in any::<u16>(),
        candidate_type in candidate_type(),
        related in proptest::option::of((ipv4(), any::<u16>())),
        tcp_type in proptest::option::of(prop::sample::select(vec!["active", "passive", "so"])),
        username_fragment in proptest::option::of("[a-zA-Z0-9]{4,8}"),
        generation in proptest::option::of(0u8..10),
    ) -> Candidate {
        // Only combinations the writer emits are generated
        let related = related.filter(|_| candidate_type != CandidateType::Host);
        let tcp_type = tcp_type.filter(|_| protocol == "tcp").map(str::to_string);
        let extensions: AttributeMap<String> = generation
            .map(|g| ("generation", g.to_string()))
            .into_iter()
            .collect();

        Candidate {
            foundation,
            component,
            protocol: protocol.to_string(),
            priority: Some(priority),
            address,
            port: Some(port),
            candidate_type,
            related_address: related.as_ref().map(|(address, _)| address.clone()),
            related_port: related.map(|(_, port)| port),
            tcp_type,
            username_fragment,
            extensions,
        }
    }
}

proptest! {
    /// Every field the writer emits survives a parse.
    #[test]
    fn candidate_round_trip(candidate in candidate()) {
        let written = write_candidate(&candidate);
        prop_assert!(written.starts_with("candidate:"));
        prop_assert!(!written.ends_with("\r\n"));

        let parsed = parse_candidate(&written);
        prop_assert_eq!(parsed.as_ref(), Some(&candidate), "written: {}", written);

        let with_prefix = parse_candidate(&format!("a={}", written));
        prop_assert_eq!(with_prefix, parsed);
    }

    /// Payload type, name, clock rate and channel count survive a parse,
    /// including the omitted channel count of 1.
    #[test]
    fn rtpmap_round_trip(
        payload_type in 0u8..128,
        name in "[A-Za-z][A-Za-z0-9-]{0,11}",
        clock_rate in 1u32..=192_000,
        channels in 1u32..=8,
    ) {
        let mut codec = RtpCodecParameters::new(payload_type, name.clone(), clock_rate);
        codec.channels = channels;

        let written = write_rtp_map(&codec);
        prop_assert!(written.ends_with("\r\n"));
        prop_assert_eq!(written.matches('/').count(), if channels == 1 { 1 } else { 2 });

        let parsed = parse_rtp_map(written.trim_end());
        prop_assert_eq!(parsed.payload_type, Some(payload_type));
        prop_assert_eq!(&parsed.name, &name);
        prop_assert_eq!(parsed.clock_rate, Some(clock_rate));
        prop_assert_eq!(parsed.channels, channels);
        prop_assert_eq!(parsed.num_channels(), channels);
    }
}
