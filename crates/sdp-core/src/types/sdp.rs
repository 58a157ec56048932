//! Typed records produced by the SDP codec.
//!
//! Every record here is a plain value: parsers build a fresh one per call and
//! writers only borrow them. Records derive serde with camelCase field names,
//! so their JSON form matches the object shapes WebRTC tooling expects
//! (`payloadType`, `usernameFragment`, `maxBitrate`, ...).
//!
//! Numeric fields that come straight off the wire are `Option`s: a field that
//! is present but does not parse is `None`, never an error.
//!
//! # References
//! - [RFC 8866: Session Description Protocol](https://tools.ietf.org/html/rfc8866)
//! - [RFC 8839: ICE SDP attributes](https://tools.ietf.org/html/rfc8839)
//! - [RFC 5576: Source-Specific Media Attributes](https://tools.ietf.org/html/rfc5576)
//! - [RFC 8841: SCTP over DTLS in SDP](https://tools.ietf.org/html/rfc8841)

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// SDP Media Direction attribute (e.g., sendrecv, sendonly)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDirection {
    #[default]
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
}

impl MediaDirection {
    /// The attribute token, without the `a=` prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaDirection::SendRecv => "sendrecv",
            MediaDirection::SendOnly => "sendonly",
            MediaDirection::RecvOnly => "recvonly",
            MediaDirection::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MediaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sendrecv" => Ok(MediaDirection::SendRecv),
            "sendonly" => Ok(MediaDirection::SendOnly),
            "recvonly" => Ok(MediaDirection::RecvOnly),
            "inactive" => Ok(MediaDirection::Inactive),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}

/// Insertion-ordered string map.
///
/// Used for fmtp parameters and candidate extensions, where the order of
/// the wire representation must survive a parse/write cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for AttributeMap<V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> AttributeMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Inserts a value, replacing an existing entry in place.
    ///
    /// Returns the previous value for the key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Inserts only when the key is not present yet (first occurrence wins).
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AttributeMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for AttributeMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for AttributeMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
            type Value = AttributeMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of SDP attribute parameters")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut map = AttributeMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

/// Format parameters of a codec (a=fmtp). A key without `=` maps to `None`.
pub type FmtpParameters = AttributeMap<Option<String>>;

/// Parsed media line (m=)
///
/// Format: `m=<media> <port> <proto> <fmt> ...`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MLine {
    /// Media kind ("audio", "video", "application", ...)
    pub kind: String,
    /// Transport port, `None` if not numeric
    pub port: Option<u16>,
    /// Transport protocol (e.g., "UDP/TLS/RTP/SAVPF")
    pub protocol: String,
    /// Remaining tokens joined with single spaces
    pub fmt: String,
}

impl MLine {
    /// The individual format tokens (payload types for RTP media)
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.fmt.split(' ').filter(|s| !s.is_empty())
    }
}

/// Parsed origin line (o=)
///
/// Format: `o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OLine {
    pub username: String,
    /// Session id, kept as text since it commonly exceeds 64 bits
    pub session_id: String,
    pub session_version: Option<u64>,
    pub net_type: String,
    pub address_type: String,
    pub address: String,
}

/// ICE candidate component.
///
/// On the wire `1` is RTP and `2` is RTCP; any other token is carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CandidateComponent {
    Rtp,
    Rtcp,
    Other(String),
}

impl CandidateComponent {
    /// Map a wire token (`1`, `2`, ...) to a component
    pub fn from_wire(token: &str) -> Self {
        match token {
            "1" => CandidateComponent::Rtp,
            "2" => CandidateComponent::Rtcp,
            other => CandidateComponent::Other(other.to_string()),
        }
    }

    /// The token written into a candidate line
    pub fn wire_token(&self) -> &str {
        match self {
            CandidateComponent::Rtp => "1",
            CandidateComponent::Rtcp => "2",
            CandidateComponent::Other(raw) => raw,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CandidateComponent::Rtp => "rtp",
            CandidateComponent::Rtcp => "rtcp",
            CandidateComponent::Other(raw) => raw,
        }
    }
}

impl From<String> for CandidateComponent {
    fn from(s: String) -> Self {
        match s.as_str() {
            "rtp" => CandidateComponent::Rtp,
            "rtcp" => CandidateComponent::Rtcp,
            _ => CandidateComponent::Other(s),
        }
    }
}

impl From<CandidateComponent> for String {
    fn from(c: CandidateComponent) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for CandidateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ICE candidate type (`typ` field)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CandidateType {
    Host,
    Srflx,
    Prflx,
    Relay,
    Other(String),
}

impl CandidateType {
    pub fn as_str(&self) -> &str {
        match self {
            CandidateType::Host => "host",
            CandidateType::Srflx => "srflx",
            CandidateType::Prflx => "prflx",
            CandidateType::Relay => "relay",
            CandidateType::Other(raw) => raw,
        }
    }
}

impl From<&str> for CandidateType {
    fn from(s: &str) -> Self {
        match s {
            "host" => CandidateType::Host,
            "srflx" => CandidateType::Srflx,
            "prflx" => CandidateType::Prflx,
            "relay" => CandidateType::Relay,
            other => CandidateType::Other(other.to_string()),
        }
    }
}

impl From<String> for CandidateType {
    fn from(s: String) -> Self {
        CandidateType::from(s.as_str())
    }
}

impl From<CandidateType> for String {
    fn from(t: CandidateType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a parsed ICE Candidate attribute (RFC 5245 / 8445 / 8839).
///
/// Format: `a=candidate:<foundation> <component-id> <transport> <priority>
/// <connection-address> <port> typ <candidate-type>
/// [raddr <related-address>] [rport <related-port>] [...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Unique identifier for this candidate
    pub foundation: String,
    /// Component (RTP, RTCP or a raw token)
    pub component: CandidateComponent,
    /// Transport protocol, lower-cased ("udp", "tcp")
    pub protocol: String,
    /// Candidate priority
    pub priority: Option<u32>,
    /// Connection address (IP or FQDN)
    pub address: String,
    /// Port number
    pub port: Option<u16>,
    /// Candidate type
    #[serde(rename = "type")]
    pub candidate_type: CandidateType,
    /// Related address for reflexive/relay candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_address: Option<String>,
    /// Related port for reflexive/relay candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_port: Option<u16>,
    /// TCP candidate type (active, passive, so)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_type: Option<String>,
    /// ICE username fragment carried in the `ufrag` extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_fragment: Option<String>,
    /// Other trailing key/value pairs; first occurrence of a key wins
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub extensions: AttributeMap<String>,
}

impl Candidate {
    /// Legacy name for [`Candidate::address`]
    pub fn ip(&self) -> &str {
        &self.address
    }

    /// Legacy name for [`Candidate::username_fragment`]
    pub fn ufrag(&self) -> Option<&str> {
        self.username_fragment.as_deref()
    }
}

/// A single RTCP feedback entry (a=rtcp-fb)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtcpFeedback {
    /// Feedback type ("nack", "ccm", "goog-remb", ...)
    #[serde(rename = "type")]
    pub feedback_type: String,
    /// Feedback parameter ("pli", "fir", ...), empty if none
    #[serde(default)]
    pub parameter: String,
}

impl RtcpFeedback {
    pub fn new(feedback_type: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            feedback_type: feedback_type.into(),
            parameter: parameter.into(),
        }
    }
}

fn default_channels() -> u32 {
    1
}

/// RTP codec parameters assembled from rtpmap, fmtp and rtcp-fb lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpCodecParameters {
    /// RTP payload type
    pub payload_type: Option<u8>,
    /// Overrides `payload_type` when writing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_payload_type: Option<u8>,
    /// Encoding name (e.g., "opus", "VP8", "rtx")
    pub name: String,
    /// Clock rate in Hertz
    pub clock_rate: Option<u32>,
    /// Channel count, 1 unless the rtpmap says otherwise
    #[serde(default = "default_channels", alias = "numChannels")]
    pub channels: u32,
    #[serde(default)]
    pub parameters: FmtpParameters,
    #[serde(default)]
    pub rtcp_feedback: Vec<RtcpFeedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxptime: Option<u32>,
}

impl Default for RtpCodecParameters {
    fn default() -> Self {
        Self {
            payload_type: None,
            preferred_payload_type: None,
            name: String::new(),
            clock_rate: None,
            channels: default_channels(),
            parameters: FmtpParameters::new(),
            rtcp_feedback: Vec::new(),
            maxptime: None,
        }
    }
}

impl RtpCodecParameters {
    pub fn new(payload_type: u8, name: impl Into<String>, clock_rate: u32) -> Self {
        Self {
            payload_type: Some(payload_type),
            name: name.into(),
            clock_rate: Some(clock_rate),
            ..Default::default()
        }
    }

    /// Legacy name for [`RtpCodecParameters::channels`]
    pub fn num_channels(&self) -> u32 {
        self.channels
    }

    /// The payload type used when serializing
    pub fn effective_payload_type(&self) -> Option<u8> {
        self.preferred_payload_type.or(self.payload_type)
    }
}

/// RTP header extension (a=extmap)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderExtension {
    pub id: Option<u16>,
    /// Overrides `id` when writing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_id: Option<u16>,
    #[serde(default)]
    pub direction: MediaDirection,
    pub uri: String,
    /// Extension attributes following the URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
}

impl HeaderExtension {
    pub fn new(id: u16, uri: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// The extension id used when serializing
    pub fn effective_id(&self) -> Option<u16> {
        self.preferred_id.or(self.id)
    }
}

/// RTP capabilities of one media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpParameters {
    /// Transport profile from the m-line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default)]
    pub codecs: Vec<RtpCodecParameters>,
    #[serde(default)]
    pub header_extensions: Vec<HeaderExtension>,
    /// Upper-cased FEC codec names found ("RED", "ULPFEC")
    #[serde(default)]
    pub fec_mechanisms: Vec<String>,
}

/// Represents a parsed SSRC attribute (RFC 5576).
///
/// Format: `a=ssrc:<ssrc-id> <attribute>[:<value>]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsrcMediaAttribute {
    pub ssrc: Option<u32>,
    pub attribute: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Parsed `a=ssrc-group:<semantics> <ssrc> ...`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsrcGroup {
    /// Grouping semantics ("FID", "SIM", "FEC-FR", ...)
    pub semantics: String,
    /// Group members in order, `None` where an id is not a number
    pub ssrcs: Vec<Option<u32>>,
}

/// Certificate fingerprint (a=fingerprint)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingerprint {
    /// Hash function, lower-cased ("sha-256")
    pub algorithm: String,
    /// Colon-separated hex digest, upper-cased
    pub value: String,
}

/// DTLS role advertised in parameter bundles; extracted parameters are always `auto`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DtlsRole {
    #[default]
    Auto,
}

/// Value of the `a=setup` attribute (RFC 4145)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DtlsSetup {
    Active,
    Passive,
    Actpass,
    Holdconn,
}

impl DtlsSetup {
    pub fn as_str(&self) -> &'static str {
        match self {
            DtlsSetup::Active => "active",
            DtlsSetup::Passive => "passive",
            DtlsSetup::Actpass => "actpass",
            DtlsSetup::Holdconn => "holdconn",
        }
    }
}

impl fmt::Display for DtlsSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DTLS parameters of a media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DtlsParameters {
    pub role: DtlsRole,
    pub fingerprints: Vec<Fingerprint>,
}

/// ICE credentials of a media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceParameters {
    pub username_fragment: String,
    pub password: String,
    #[serde(default)]
    pub ice_lite: bool,
}

/// SDES crypto attribute (a=crypto, RFC 4568)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoParameters {
    pub tag: Option<u32>,
    pub crypto_suite: String,
    /// Raw key parameters, see [`CryptoKeyParams`] for the parsed form
    pub key_params: String,
    #[serde(default)]
    pub session_params: Vec<String>,
}

/// Parsed `inline:` key parameters of an SDES crypto attribute
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoKeyParams {
    pub key_method: String,
    pub key_salt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mki_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mki_length: Option<String>,
}

fn default_max_message_size() -> u64 {
    crate::sdp::attributes::sctp::DEFAULT_MAX_MESSAGE_SIZE
}

/// SCTP data channel transport parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SctpParameters {
    pub port: Option<u16>,
    /// Application protocol ("webrtc-datachannel")
    pub protocol: String,
    #[serde(default = "default_max_message_size")]
    pub max_message_size: u64,
}

/// Media stream and track identifiers (a=msid)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStreamId {
    pub stream: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
}

/// Retransmission stream of an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtxParameters {
    pub ssrc: u32,
}

/// Forward error correction scheme of an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FecMechanism {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "red+ulpfec")]
    RedUlpfec,
}

impl FecMechanism {
    pub fn as_str(&self) -> &'static str {
        match self {
            FecMechanism::Red => "red",
            FecMechanism::RedUlpfec => "red+ulpfec",
        }
    }
}

impl fmt::Display for FecMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// FEC stream of an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FecParameters {
    pub ssrc: Option<u32>,
    pub mechanism: FecMechanism,
}

/// One RTP media flow derived from a media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpEncodingParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssrc: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec_payload_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtx: Option<RtxParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec: Option<FecParameters>,
    /// Bits per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<u64>,
}

/// RTCP parameters of a media section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtcpParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssrc: Option<u32>,
    pub reduced_size: bool,
    pub compound: bool,
    pub mux: bool,
}

/// Bandwidth line (b=)
///
/// Format: `b=<bwtype>:<bandwidth>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bandwidth {
    /// Transport Independent Application Specific, bits per second (RFC 3890)
    Tias(Option<u64>),
    /// Application Specific, kilobits per second
    As(Option<u64>),
    /// Any other modifier (CT, RR, RS, X-...)
    Other { modifier: String, value: Option<u64> },
}
