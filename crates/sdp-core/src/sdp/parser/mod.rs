//! SDP text splitting
//!
//! Low-level helpers that cut a description into lines and sections. All
//! attribute parsers are built on [`match_prefix`].

pub mod line_parser;

pub use line_parser::{
    first_match, get_description, get_media_sections, match_prefix, parse_line_type,
    parse_sdp_line, split_lines, split_sections,
};

pub(crate) use line_parser::media_then_session;
