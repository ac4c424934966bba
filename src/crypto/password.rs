//! Random password generation.

use rand::Rng;

/// Characters a generated password is drawn from: ASCII letters, digits,
/// and punctuation.
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generate a random password of the requested length.
///
/// Usable anywhere a user-supplied password is accepted.
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
