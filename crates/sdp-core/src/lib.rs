//! Permissive SDP codec for WebRTC
//!
//! This crate parses and writes the textual Session Description Protocol as
//! exchanged by WebRTC endpoints, and rebuilds RTP, RTCP, ICE, DTLS and SDES
//! parameters from it. It does not implement the protocols themselves.

// Declare modules
pub mod config;
pub mod error;
pub mod identifier;
pub mod sdp;
pub mod types;

// Re-export key public items
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use sdp::{SessionContext, SessionDescription};
pub use types::sdp::{
    Candidate,
    CandidateComponent,
    CandidateType,
    HeaderExtension,
    MediaDirection,
    RtcpParameters,
    RtpCodecParameters,
    RtpEncodingParameters,
    RtpParameters,
};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::error::{Error, Result};
    pub use crate::identifier::{generate_identifier, generate_session_id};
    pub use crate::sdp::attributes::{
        get_crypto_parameters, get_dtls_parameters, get_ice_parameters, parse_candidate,
        parse_crypto_key_params, parse_crypto_line, parse_extmap, parse_fingerprint, parse_fmtp,
        parse_ice_options, parse_msid, parse_rtcp_fb, parse_rtcp_parameters, parse_rtp_map,
        parse_sctp_description, parse_ssrc_group, parse_ssrc_media, write_candidate,
        write_crypto_key_params, write_crypto_line, write_dtls_parameters, write_extmap,
        write_fmtp, write_ice_parameters, write_rtcp_fb, write_rtcp_parameters, write_rtp_map,
        write_sctp_description,
    };
    pub use crate::sdp::media::{get_direction, get_kind, get_mid, is_rejected, parse_mline};
    pub use crate::sdp::parser::{
        get_description, get_media_sections, match_prefix, split_lines, split_sections,
    };
    pub use crate::sdp::rtp_parameters::{
        parse_rtp_encoding_parameters, parse_rtp_parameters, write_rtp_description,
    };
    pub use crate::sdp::session::{
        is_valid_sdp, parse_bandwidth, parse_oline, validate_sdp, write_bandwidth,
        write_session_boilerplate, SessionContext, SessionDescription,
    };
    pub use crate::types::sdp::*;
}
