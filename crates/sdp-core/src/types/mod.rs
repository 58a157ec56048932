//! Typed SDP records

pub mod sdp;

pub use sdp::*;
