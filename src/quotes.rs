//! Yoda quotes shown after a successful conversion

use ring::rand::{SecureRandom, SystemRandom};

pub const YODA_QUOTES: [&str; 10] = [
    "Converted, your condition has been. Hmmmm.",
    "Strong with the Force, this code is.",
    "Do or do not. There is no try.",
    "The path to cleaner code, Yoda conditions are.",
    "Judge me by my syntax, do you?",
    "Much to learn, you still have.",
    "Patience you must have, young coder.",
    "In a dark place we find ourselves, and a little more syntax guides us.",
    "Truly wonderful, the mind of a coder is.",
    "The greatest teacher, failure is.",
];

/// Pick one of [`YODA_QUOTES`] uniformly at random
pub fn random_quote() -> &'static str {
    match uniform_index(&SystemRandom::new(), YODA_QUOTES.len()) {
        Some(index) => YODA_QUOTES[index],
        None => {
            log::warn!("System randomness unavailable, using the first quote");
            YODA_QUOTES[0]
        }
    }
}

/// Uniform index in `0..len`. Draws that fall in the incomplete top range
/// of `u64` are rejected so every index is equally likely.
fn uniform_index(rng: &impl SecureRandom, len: usize) -> Option<usize> {
    let len = len as u64;
    if len == 0 {
        return None;
    }
    let zone = u64::MAX - u64::MAX % len;

    loop {
        let mut bytes = [0u8; 8];
        rng.fill(&mut bytes).ok()?;

        let value = u64::from_le_bytes(bytes);
        if value < zone {
            return Some((value % len) as usize);
        }
    }
}
