//! Random identifiers for sessions and RTCP CNAMEs
//!
//! RFC 8866 only asks for session ids that are likely unique, so a
//! non-cryptographic generator is enough. Every generator has a `_with`
//! variant that takes the random source explicitly; the plain variants use
//! the thread-local generator.

use rand::Rng;

/// Length of identifiers from [`generate_identifier`]
pub const IDENTIFIER_LEN: usize = 10;

/// Number of digits in ids from [`generate_session_id`]
pub const SESSION_ID_LEN: usize = 21;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a 10 character `[0-9a-z]` identifier (CNAMEs, stream ids)
pub fn generate_identifier() -> String {
    generate_identifier_with(&mut rand::thread_rng())
}

/// Like [`generate_identifier`], drawing from `rng`
pub fn generate_identifier_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..IDENTIFIER_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect()
}

/// Generate a 21 digit numeric session id for the `o=` line
pub fn generate_session_id() -> String {
    generate_session_id_with(&mut rand::thread_rng())
}

/// Like [`generate_session_id`], drawing from `rng`
pub fn generate_session_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(SESSION_ID_LEN);
    // No leading zero
    id.push(char::from(b'1' + rng.gen_range(0..9u8)));
    for _ in 1..SESSION_ID_LEN {
        id.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    id
}
