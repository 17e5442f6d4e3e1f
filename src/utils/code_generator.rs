//! Short code generation.

use rand::Rng;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a 6-character short code sampled uniformly from `[A-Za-z0-9]`.
///
/// Codes are not guaranteed unique; uniqueness is enforced by the caller
/// via an existence check (see
/// [`crate::application::services::UrlService::create_short_url`]).
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 62^6 possible codes; 1000 draws colliding would be astronomically
        // unlikely with a uniform sampler.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_full_alphabet_classes() {
        let mut has_upper = false;
        let mut has_lower = false;
        let mut has_digit = false;

        for _ in 0..1000 {
            for c in generate_code().chars() {
                has_upper |= c.is_ascii_uppercase();
                has_lower |= c.is_ascii_lowercase();
                has_digit |= c.is_ascii_digit();
            }
        }

        assert!(has_upper);
        assert!(has_lower);
        assert!(has_digit);
    }
}
