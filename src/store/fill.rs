//! Miss-Fill Generator Module
//!
//! Produces the random string stored when a read misses the cache.

use rand::Rng;

/// Characters a generated fill value is drawn from.
const CHARSET: &[u8] = b"0123456789\
                         ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz";

/// Default length of a generated fill value.
pub const DEFAULT_FILL_LEN: usize = 8;

// == Random String ==
/// Generates a random alphanumeric string of the given length.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
