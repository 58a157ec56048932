// Structural SDP validation
//
// Only the `<type>=<value>` shape of every line is checked; attribute
// contents are never inspected.

use crate::error::{Error, Result};
use crate::sdp::parser::{parse_line_type, split_lines};

/// Check that a blob is non-empty and every line looks like `<char>=<value>`.
///
/// Returns the first offending line (1-based) otherwise.
pub fn validate_sdp(blob: &str) -> Result<()> {
    if blob.is_empty() {
        return Err(Error::EmptyDescription);
    }

    for (index, line) in split_lines(blob).into_iter().enumerate() {
        if parse_line_type(line).is_err() {
            return Err(Error::InvalidLine {
                line: index + 1,
                content: line.to_string(),
            });
        }
    }

    Ok(())
}

/// Boolean form of [`validate_sdp`]
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::session::is_valid_sdp;
///
/// assert!(is_valid_sdp("v=0\r\no=- 1 2 IN IP4 0.0.0.0\r\ns=-\r\nt=0 0\r\n"));
/// assert!(!is_valid_sdp("not sdp at all"));
/// ```
pub fn is_valid_sdp(blob: &str) -> bool {
    validate_sdp(blob).is_ok()
}
