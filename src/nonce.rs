use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;

const NONCE_BYTES: usize = 32;

/// Characters that must never appear in a generated nonce.
pub const RESERVED: &[char] = &[
    '=', '!', '¡', '+', '?', '¿', '.', ':', ',', ';', '}', '{', ']', '[', '*', '¨', '~', '`',
];

/// Generate a fresh `oauth_nonce` from the thread-local CSPRNG.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a nonce drawing every random value from `rng`.
///
/// 32 random bytes are base64-encoded, then each reserved character is
/// replaced by a random uppercase ASCII letter.
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    rng.fill(&mut bytes[..]);
    STANDARD
        .encode(bytes)
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) {
                char::from(rng.gen_range(b'A'..=b'Z'))
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_nonce_has_no_reserved_chars() {
        for _ in 0..1000 {
            let nonce = generate();
            assert!(!nonce.is_empty());
            assert!(
                !nonce.contains(RESERVED),
                "nonce contains a reserved character: {}",
                nonce
            );
        }
    }

    #[test]
    fn test_nonce_length() {
        // base64 of 32 bytes, replacements keep the length
        assert_eq!(generate().len(), 44);
    }

    #[test]
    fn test_nonce_seeded_is_reproducible() {
        let a = generate_with(&mut StdRng::seed_from_u64(7));
        let b = generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        // the trailing padding character is always replaced
        assert!(a.ends_with(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_nonce_is_unique() {
        let nonces = (0..256).map(|_| generate()).collect::<HashSet<_>>();
        assert_eq!(nonces.len(), 256);
    }
}
