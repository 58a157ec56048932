//! SDP ICE Candidate Attribute Parser
//!
//! Implements parsing and serialization of ICE candidates as defined in
//! RFC 8839.
//!
//! Format: `a=candidate:<foundation> <component-id> <transport> <priority>
//! <connection-address> <port> typ <cand-type> [raddr <rel-addr>]
//! [rport <rel-port>] *(<extension-att-name> <extension-att-value>)`

use crate::sdp::attributes::common::{leading_int, tail_from};
use crate::types::sdp::{AttributeMap, Candidate, CandidateComponent, CandidateType};

/// Parses a candidate line, with or without its `a=` prefix.
///
/// Trailing key/value pairs are read as a flat alternating list. `raddr`,
/// `rport`, `tcptype` and `ufrag` fill dedicated fields; any other key is
/// kept in `extensions` unless already seen. Returns `None` if fewer than
/// eight positional tokens are present.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::attributes::parse_candidate;
/// use sdp_core::types::{CandidateComponent, CandidateType};
///
/// let c = parse_candidate("a=candidate:1 1 UDP 2130706431 192.168.1.1 5000 typ host").unwrap();
/// assert_eq!(c.component, CandidateComponent::Rtp);
/// assert_eq!(c.protocol, "udp");
/// assert_eq!(c.candidate_type, CandidateType::Host);
/// ```
pub fn parse_candidate(line: &str) -> Option<Candidate> {
    let value = if line.starts_with("a=candidate:") {
        tail_from(line, 12)
    } else {
        tail_from(line, 10)
    };

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() < 8 {
        return None;
    }

    let mut candidate = Candidate {
        foundation: parts[0].to_string(),
        component: CandidateComponent::from_wire(parts[1]),
        protocol: parts[2].to_lowercase(),
        priority: leading_int(parts[3]),
        address: parts[4].to_string(),
        port: leading_int(parts[5]),
        // parts[6] is the literal "typ"
        candidate_type: CandidateType::from(parts[7]),
        related_address: None,
        related_port: None,
        tcp_type: None,
        username_fragment: None,
        extensions: AttributeMap::new(),
    };

    for pair in parts[8..].chunks(2) {
        let key = pair[0];
        let value = pair.get(1).copied().unwrap_or_default();
        match key {
            "raddr" => candidate.related_address = Some(value.to_string()),
            "rport" => candidate.related_port = leading_int(value),
            "tcptype" => candidate.tcp_type = Some(value.to_string()),
            "ufrag" => candidate.username_fragment = Some(value.to_string()),
            _ => {
                candidate.extensions.insert_if_absent(key, value.to_string());
            }
        }
    }

    Some(candidate)
}

/// Writes a candidate as `candidate:...`, without `a=` prefix or line ending.
///
/// The transport is written upper-cased. `raddr`/`rport` are only written for
/// non-host candidates that carry both, `tcptype` only for TCP candidates.
/// Missing numeric fields are written as `0`.
pub fn write_candidate(candidate: &Candidate) -> String {
    let mut parts: Vec<String> = vec![
        candidate.foundation.clone(),
        candidate.component.wire_token().to_string(),
        candidate.protocol.to_uppercase(),
        candidate.priority.unwrap_or(0).to_string(),
        candidate.address.clone(),
        candidate.port.unwrap_or(0).to_string(),
        "typ".to_string(),
        candidate.candidate_type.as_str().to_string(),
    ];

    if candidate.candidate_type != CandidateType::Host {
        if let (Some(address), Some(port)) = (&candidate.related_address, candidate.related_port) {
            parts.push("raddr".to_string());
            parts.push(address.clone());
            parts.push("rport".to_string());
            parts.push(port.to_string());
        }
    }

    if let Some(tcp_type) = &candidate.tcp_type {
        if candidate.protocol.eq_ignore_ascii_case("tcp") {
            parts.push("tcptype".to_string());
            parts.push(tcp_type.clone());
        }
    }

    if let Some(ufrag) = &candidate.username_fragment {
        parts.push("ufrag".to_string());
        parts.push(ufrag.clone());
    }

    for (key, value) in candidate.extensions.iter() {
        parts.push(key.to_string());
        parts.push(value.clone());
    }

    format!("candidate:{}", parts.join(" "))
}
