// SDP Bandwidth (b=) line parsing
//
// Functions for parsing the b= line and converting it to an RTP encoding
// bitrate.

use tracing::debug;

use crate::sdp::attributes::common::leading_int;
use crate::types::sdp::Bandwidth;

/// Per-packet overhead JSEP subtracts when turning `b=AS` into TIAS:
/// 50 packets/s * 40 bytes of IP/UDP/RTP headers * 8 bits
pub const AS_OVERHEAD_BPS: u64 = 50 * 40 * 8;

/// Parse a bandwidth line (`b=<bwtype>:<bandwidth>`).
///
/// Accepts the line with or without its `b=` prefix. Returns `None` when
/// there is no `:` separator; a non-numeric value is kept as `None` inside
/// the returned variant.
pub fn parse_bandwidth(line: &str) -> Option<Bandwidth> {
    let value = line.strip_prefix("b=").unwrap_or(line);
    let (modifier, amount) = value.split_once(':')?;
    let amount = leading_int::<u64>(amount);

    Some(match modifier {
        "TIAS" => Bandwidth::Tias(amount),
        "AS" => Bandwidth::As(amount),
        other => Bandwidth::Other {
            modifier: other.to_string(),
            value: amount,
        },
    })
}

/// Write a bandwidth line, or nothing if the value is unknown
pub fn write_bandwidth(bandwidth: &Bandwidth) -> String {
    let (modifier, value) = match bandwidth {
        Bandwidth::Tias(value) => ("TIAS", value),
        Bandwidth::As(value) => ("AS", value),
        Bandwidth::Other { modifier, value } => (modifier.as_str(), value),
    };
    match value {
        Some(value) => format!("b={}:{}\r\n", modifier, value),
        None => String::new(),
    }
}

impl Bandwidth {
    /// Maximum bitrate in bits per second for RTP encodings.
    ///
    /// `TIAS` is used as is. `AS` (kilobits per second) goes through the
    /// JSEP conversion `AS * 1000 * 0.95 - 50 * 40 * 8`, evaluated in
    /// integers; values too small to cover the overhead give `None`. Other
    /// modifiers give `None`.
    pub fn max_bitrate(&self) -> Option<u64> {
        match self {
            Bandwidth::Tias(value) => *value,
            Bandwidth::As(value) => value
                .and_then(|kbps| kbps.checked_mul(950))
                .and_then(|bps| bps.checked_sub(AS_OVERHEAD_BPS)),
            Bandwidth::Other { modifier, .. } => {
                debug!("Ignoring b={} for encoding bitrate", modifier);
                None
            }
        }
    }
}
