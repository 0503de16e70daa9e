//! Short URL generation.
//!
//! Codes are drawn from a caller-supplied random source so tests can inject a
//! seeded or fixed generator. Generated codes are not checked against the
//! history: collisions are possible and accepted.

use rand::Rng;

/// Domain every generated short URL lives under.
pub const SHORT_DOMAIN: &str = "https://short.ly/";

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 7;

/// Alphabet codes are drawn from (62 symbols).
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 7-character alphanumeric code.
///
/// Each character is chosen independently and uniformly from [`CHARSET`].
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generates a full short URL: [`SHORT_DOMAIN`] followed by a fresh code.
///
/// # Examples
///
/// ```ignore
/// let url = generate_short_url(&mut rand::rng());
/// assert!(url.starts_with("https://short.ly/"));
/// assert_eq!(url.len(), "https://short.ly/".len() + 7);
/// ```
pub fn generate_short_url<R: Rng>(rng: &mut R) -> String {
    format!("{SHORT_DOMAIN}{}", generate_code(rng))
}
