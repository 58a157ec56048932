//! Session-level SDP handling
//!
//! Origin line, session preamble, bandwidth lines, structural validation and
//! the per-endpoint [`SessionContext`]. [`SessionDescription`] ties a
//! validated blob to the lookups that need its session part.

pub mod bandwidth;
pub mod context;
pub mod description;
pub mod origin;
pub mod validation;

pub use bandwidth::{parse_bandwidth, write_bandwidth};
pub use context::SessionContext;
pub use description::SessionDescription;
pub use origin::{parse_oline, write_session_boilerplate};
pub use validation::{is_valid_sdp, validate_sdp};
