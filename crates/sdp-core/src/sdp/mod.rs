/*! Session Description Protocol (SDP) codec

This module converts between SDP text as used by WebRTC
([RFC 8866](https://tools.ietf.org/html/rfc8866) plus the ICE, DTLS-SRTP,
RTP/RTCP, SDES and SCTP extensions) and the typed records in
[`crate::types::sdp`].

# Overview

The SDP module consists of:

- **Parser**: splits a description into lines, the session part and media sections
- **Attributes**: one parser and writer per attribute grammar
- **Media**: m-line parsing and per-section lookups (kind, direction, mid)
- **Session**: origin line, preamble, bandwidth, validation and the session context
- **RTP parameters**: composite extraction of codecs, encodings and feedback

Parsing is permissive. Attribute parsers return `None` or empty collections
instead of failing, and numeric fields that do not parse are kept as `None`.
Only [`validate_sdp`](session::validate_sdp) and
[`SessionDescription`](session::SessionDescription) reject input.

# Example

```rust
use sdp_core::sdp::parser::get_media_sections;
use sdp_core::sdp::rtp_parameters::parse_rtp_encoding_parameters;

let offer = "v=0\r\n\
    o=- 1 2 IN IP4 127.0.0.1\r\n\
    s=-\r\n\
    t=0 0\r\n\
    m=video 9 UDP/TLS/RTP/SAVPF 96\r\n\
    b=TIAS:500000\r\n\
    a=rtpmap:96 VP8/90000\r\n\
    a=ssrc:1234 cname:abc\r\n";

let video = &get_media_sections(offer)[0];
let encodings = parse_rtp_encoding_parameters(video);
assert_eq!(encodings[0].ssrc, Some(1234));
assert_eq!(encodings[0].max_bitrate, Some(500000));
```

Session-level attributes are inherited by media sections: lookups such as
[`get_ice_parameters`](attributes::get_ice_parameters) search the media
section first and the session part second.
*/

pub mod attributes;
pub mod media;
pub mod parser;
pub mod rtp_parameters;
pub mod session;

pub use media::{get_direction, get_kind, get_mid, is_rejected, parse_mline};
pub use parser::{get_description, get_media_sections, match_prefix, split_lines, split_sections};
pub use rtp_parameters::{parse_rtp_encoding_parameters, parse_rtp_parameters, write_rtp_description};
pub use session::{is_valid_sdp, validate_sdp, SessionContext, SessionDescription};
