//! Per-endpoint session state
//!
//! A [`SessionContext`] fixes the random values a local endpoint reuses for
//! every description it writes: the RTCP CNAME and the `o=` session id.
//! Both are drawn once at construction, from the configuration if set or
//! from the supplied random source otherwise.

use rand::Rng;
use tracing::trace;

use crate::config::SessionConfig;
use crate::identifier::{generate_identifier_with, generate_session_id_with};
use crate::sdp::session::origin::write_session_boilerplate;
use crate::types::sdp::RtcpParameters;

/// Immutable identifiers of a local session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    config: SessionConfig,
    cname: String,
    session_id: String,
}

impl SessionContext {
    /// Build a context using the thread-local random generator
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Build a context drawing missing identifiers from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: SessionConfig, rng: &mut R) -> Self {
        let cname = match &config.cname {
            Some(cname) => cname.clone(),
            None => generate_identifier_with(rng),
        };
        let session_id = match &config.session_id {
            Some(id) => id.clone(),
            None => generate_session_id_with(rng),
        };
        trace!("Session context created: cname={} session_id={}", cname, session_id);

        Self {
            config,
            cname,
            session_id,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// RTCP canonical name shared by all local streams
    pub fn cname(&self) -> &str {
        &self.cname
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Session preamble carrying this context's id, version and user
    pub fn write_session_boilerplate(&self) -> String {
        write_session_boilerplate(
            Some(&self.session_id),
            Some(self.config.session_version),
            Some(&self.config.session_user),
        )
    }

    /// RTCP parameters for a local stream, tagged with this context's CNAME
    pub fn rtcp_parameters(&self, ssrc: u32, reduced_size: bool, mux: bool) -> RtcpParameters {
        RtcpParameters {
            cname: Some(self.cname.clone()),
            ssrc: Some(ssrc),
            reduced_size,
            compound: !reduced_size,
            mux,
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
