//! SDP Attribute Parsers
//!
//! One module per attribute grammar. Parsers take a single line found with
//! [`match_prefix`](crate::sdp::parser::match_prefix) and never fail: fields
//! that do not parse come back as `None`. Writers produce `\r\n` terminated
//! lines.

// Media attribute modules
pub mod rtpmap;
pub mod fmtp;
pub mod extmap;

// Transport modules
pub mod candidate;
pub mod ice;
pub mod dtls;
pub mod crypto;

// Identification modules
pub mod ssrc;
pub mod msid;

// RTCP-related
pub mod rtcp;

// Data channel
pub mod sctp;

// Common utilities
pub mod common;

// Publicly expose all attribute parsers
pub use rtpmap::*;
pub use fmtp::*;
pub use extmap::*;
pub use candidate::*;
pub use ice::*;
pub use dtls::*;
pub use crypto::*;
pub use ssrc::*;
pub use msid::*;
pub use rtcp::*;
pub use sctp::*;
