//! Session configuration
//!
//! Values that describe the local endpoint when generating descriptions. All
//! fields have defaults, so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sdp::session::origin::{DEFAULT_SESSION_USER, DEFAULT_SESSION_VERSION};

/// Configuration for a [`SessionContext`](crate::sdp::session::SessionContext)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Username written in the `o=` line
    pub session_user: String,
    /// Session version written in the `o=` line
    pub session_version: u64,
    /// Fixed session id; generated when absent
    pub session_id: Option<String>,
    /// Fixed RTCP CNAME; generated when absent
    pub cname: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_user: DEFAULT_SESSION_USER.to_string(),
            session_version: DEFAULT_SESSION_VERSION,
            session_id: None,
            cname: None,
        }
    }
}

impl SessionConfig {
    /// Decode a configuration from JSON, filling in defaults
    ///
    /// # Examples
    ///
    /// ```
    /// use sdp_core::config::SessionConfig;
    ///
    /// let config = SessionConfig::from_json(r#"{"cname": "fixed-cname"}"#).unwrap();
    /// assert_eq!(config.cname.as_deref(), Some("fixed-cname"));
    /// assert_eq!(config.session_version, 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_cname(mut self, cname: impl Into<String>) -> Self {
        self.cname = Some(cname.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_session_user(mut self, user: impl Into<String>) -> Self {
        self.session_user = user.into();
        self
    }
}
