//! Owned, validated session description
//!
//! [`SessionDescription`] keeps the session part and the media sections of
//! a blob that passed [`validate_sdp`], and offers the per-section lookups
//! that need both. Every stored line is `\r\n` terminated whatever the
//! input used.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::sdp::attributes::{get_crypto_parameters, get_dtls_parameters, get_ice_parameters};
use crate::sdp::media::get_direction;
use crate::sdp::parser::{split_lines, split_sections};
use crate::sdp::session::origin::parse_oline;
use crate::sdp::session::validation::validate_sdp;
use crate::types::sdp::{CryptoParameters, DtlsParameters, IceParameters, MediaDirection, OLine};

/// A session description split into its session part and media sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescription {
    session: String,
    media: Vec<String>,
}

impl SessionDescription {
    /// Session-level lines, `\r\n` terminated
    pub fn session_part(&self) -> &str {
        &self.session
    }

    /// Media sections in order of appearance
    pub fn media_sections(&self) -> &[String] {
        &self.media
    }

    pub fn media_section(&self, index: usize) -> Option<&str> {
        self.media.get(index).map(String::as_str)
    }

    pub fn origin(&self) -> Option<OLine> {
        parse_oline(&self.session)
    }

    /// ICE credentials of a media section, inheriting session-level values
    pub fn ice_parameters(&self, index: usize) -> Option<IceParameters> {
        get_ice_parameters(self.media_section(index)?, &self.session)
    }

    pub fn dtls_parameters(&self, index: usize) -> Option<DtlsParameters> {
        Some(get_dtls_parameters(self.media_section(index)?, &self.session))
    }

    pub fn crypto_parameters(&self, index: usize) -> Vec<CryptoParameters> {
        self.media_section(index)
            .map(|media| get_crypto_parameters(media, &self.session))
            .unwrap_or_default()
    }

    pub fn direction(&self, index: usize) -> Option<MediaDirection> {
        Some(get_direction(self.media_section(index)?, Some(&self.session)))
    }
}

impl FromStr for SessionDescription {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate_sdp(s)?;

        let mut sections = split_sections(s).into_iter().map(|section| crlf_lines(&section));
        let session = sections.next().unwrap_or_default();
        Ok(Self {
            session,
            media: sections.collect(),
        })
    }
}

fn crlf_lines(section: &str) -> String {
    split_lines(section)
        .into_iter()
        .map(|line| format!("{}\r\n", line))
        .collect()
}

impl fmt::Display for SessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.session)?;
        for media in &self.media {
            f.write_str(media)?;
        }
        Ok(())
    }
}
