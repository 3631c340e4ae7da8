//! Short code generation.
//!
//! Codes are six characters drawn uniformly, with replacement, from the 62
//! ASCII letters and digits. That gives 62^6 (about 5.7 * 10^10) possible codes.
//! The generator does not check uniqueness; see
//! [`crate::application::services::LinkService`] for collision handling.

use rand::Rng;

/// Alphabet for generated codes.
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Uses the thread-local generator from `rand`, seeded from the OS. Codes are
/// not meant to resist enumeration.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_charset_has_62_unique_characters() {
        let unique: HashSet<_> = CHARSET.iter().collect();
        assert_eq!(CHARSET.len(), 62);
        assert_eq!(unique.len(), 62);
        assert!(CHARSET.iter().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_uses_charset() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(code.bytes().all(|b| CHARSET.contains(&b)), "bad code {code}");
        }
    }

    #[test]
    fn test_generate_code_varies() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 1000 draws from 62^6 codes collide with probability well under 1e-4.
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_generate_code_covers_all_character_classes() {
        let joined: String = (0..500).map(|_| generate_code()).collect();

        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }
}
