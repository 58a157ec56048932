//! SDP line and section splitting
//!
//! Every SDP line has the format `<type>=<value>` where type is a single
//! character. A description consists of a session-level part followed by
//! zero or more media sections, each starting with an `m=` line:
//!
//! ```text
//! v=0                          \
//! o=- 4611731400430051336 2 IN IP4 127.0.0.1   > session part
//! s=-                          /
//! m=audio 9 UDP/TLS/RTP/SAVPF 111    \
//! a=rtpmap:111 opus/48000/2           > media section 0
//! m=video 9 UDP/TLS/RTP/SAVPF 96     \
//! a=rtpmap:96 VP8/90000               > media section 1
//! ```
//!
//! Splitting never fails. Input may use `\n` or `\r\n` line endings; the
//! sections returned are always `\r\n` terminated.

use nom::{
    character::complete::{anychar, char, not_line_ending},
    sequence::terminated,
    IResult,
};

/// Split a blob into trimmed lines.
///
/// The blob is trimmed first, so leading and trailing blank lines vanish,
/// but blank lines in the middle are kept as empty strings.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::parser::split_lines;
///
/// let lines = split_lines("v=0\r\ns=-\n t=0 0 \r\n");
/// assert_eq!(lines, vec!["v=0", "s=-", "t=0 0"]);
/// ```
pub fn split_lines(blob: &str) -> Vec<&str> {
    blob.trim().split('\n').map(str::trim).collect()
}

/// Split a blob into its session part and media sections.
///
/// Splits on the literal `\nm=`, restores the `m=` prefix on every part but
/// the first, trims each part and terminates it with `\r\n`. The first
/// element is always the session part.
pub fn split_sections(blob: &str) -> Vec<String> {
    blob.split("\nm=")
        .enumerate()
        .map(|(index, part)| {
            if index > 0 {
                format!("m={}\r\n", part.trim())
            } else {
                format!("{}\r\n", part.trim())
            }
        })
        .collect()
}

/// The session-level part of a blob (everything before the first `m=` line)
pub fn get_description(blob: &str) -> String {
    split_sections(blob).swap_remove(0)
}

/// The media sections of a blob, in order of appearance
pub fn get_media_sections(blob: &str) -> Vec<String> {
    split_sections(blob).into_iter().skip(1).collect()
}

/// All lines of `blob` starting with `prefix`, in order.
///
/// This is the lookup primitive behind every attribute extractor; callers
/// that need a single value take the first match.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::parser::match_prefix;
///
/// let section = "m=audio 9 UDP/TLS/RTP/SAVPF 0 8\r\na=rtpmap:0 PCMU/8000\r\na=rtpmap:8 PCMA/8000\r\n";
/// assert_eq!(match_prefix(section, "a=rtpmap:"), vec!["a=rtpmap:0 PCMU/8000", "a=rtpmap:8 PCMA/8000"]);
/// assert!(match_prefix(section, "a=fmtp:").is_empty());
/// ```
pub fn match_prefix<'a>(blob: &'a str, prefix: &str) -> Vec<&'a str> {
    split_lines(blob)
        .into_iter()
        .filter(|line| line.starts_with(prefix))
        .collect()
}

/// First line of `blob` starting with `prefix`
pub fn first_match<'a>(blob: &'a str, prefix: &str) -> Option<&'a str> {
    split_lines(blob)
        .into_iter()
        .find(|line| line.starts_with(prefix))
}

/// Media section text followed by the session part.
///
/// Lookups over the result find media-level attributes first and fall back
/// to session-level ones.
pub(crate) fn media_then_session(media_section: &str, session_part: &str) -> String {
    let mut text = String::with_capacity(media_section.len() + session_part.len());
    text.push_str(media_section);
    text.push_str(session_part);
    text
}

/// Parse the `<type>=` prefix of a line, leaving the value untouched
pub fn parse_line_type(input: &str) -> IResult<&str, char> {
    terminated(anychar, char('='))(input)
}

/// Parse an SDP line into its type character and value.
///
/// The value is returned untrimmed up to the line ending.
///
/// # Examples
///
/// ```
/// use sdp_core::sdp::parser::parse_sdp_line;
///
/// let (_, (key, value)) = parse_sdp_line("a=rtpmap:96 VP8/90000").unwrap();
/// assert_eq!(key, 'a');
/// assert_eq!(value, "rtpmap:96 VP8/90000");
/// ```
pub fn parse_sdp_line(input: &str) -> IResult<&str, (char, &str)> {
    let (input, key) = parse_line_type(input)?;
    let (input, value) = not_line_ending(input)?;

    let input = input.trim_start_matches(['\r', '\n']);

    Ok((input, (key, value)))
}
