//! Media section handling
//!
//! Parsing of the `m=` line and section-level lookups.

pub mod description;

pub use description::{get_direction, get_kind, get_mid, is_rejected, parse_mline};
