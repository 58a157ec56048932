// SDP Origin (o=) line parsing and session boilerplate
//
// Format: o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>

use crate::identifier::generate_session_id;
use crate::sdp::attributes::common::leading_int;
use crate::sdp::parser::first_match;
use crate::types::sdp::OLine;

/// Session version used when none is given
pub const DEFAULT_SESSION_VERSION: u64 = 2;

/// Username used in generated `o=` lines when none is given
pub const DEFAULT_SESSION_USER: &str = "thisisadapterortc";

/// Parse the first `o=` line of a blob.
///
/// Missing positional tokens become empty strings. The session version is
/// read from its leading digits and is `None` when there are none. Returns `None` only if there is no `o=` line.
pub fn parse_oline(blob: &str) -> Option<OLine> {
    let line = first_match(blob, "o=")?;
    let mut parts = line[2..].split(' ');
    let mut next = || parts.next().unwrap_or_default().to_string();

    let username = next();
    let session_id = next();
    let session_version = leading_int(&next());
    Some(OLine {
        username,
        session_id,
        session_version,
        net_type: next(),
        address_type: next(),
        address: next(),
    })
}

/// Write the fixed session preamble (`v=`, `o=`, `s=`, `t=`).
///
/// A session id is generated when `session_id` is `None` or empty. The
/// session version defaults to 2 and the username to `thisisadapterortc`.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::session::write_session_boilerplate;
///
/// let sdp = write_session_boilerplate(Some("123"), Some(7), Some("alice"));
/// assert_eq!(sdp, "v=0\r\no=alice 123 7 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n");
/// ```
pub fn write_session_boilerplate(
    session_id: Option<&str>,
    session_version: Option<u64>,
    session_user: Option<&str>,
) -> String {
    let session_id = match session_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => generate_session_id(),
    };
    let version = session_version.unwrap_or(DEFAULT_SESSION_VERSION);
    let user = match session_user {
        Some(user) if !user.is_empty() => user,
        _ => DEFAULT_SESSION_USER,
    };

    format!(
        "v=0\r\no={} {} {} IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n",
        user, session_id, version
    )
}
