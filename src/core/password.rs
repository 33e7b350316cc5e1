//! Random password generation.

use rand::rngs::OsRng;
use rand::Rng;
use zeroize::Zeroizing;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const GROUPS: usize = 3;
const GROUP_LEN: usize = 4;

/// Generate a password of three dash-separated groups of four ASCII
/// letters or digits (`xxxx-xxxx-xxxx`), drawn from the OS RNG.
pub fn generate() -> Zeroizing<String> {
    let mut rng = OsRng;
    let mut out = Zeroizing::new(String::with_capacity(GROUPS * (GROUP_LEN + 1)));
    for group in 0..GROUPS {
        if group > 0 {
            out.push('-');
        }
        for _ in 0..GROUP_LEN {
            let index = rng.gen_range(0..ALPHABET.len());
            out.push(ALPHABET[index] as char);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_shape() {
        let password = generate();
        assert_eq!(password.len(), 14);
        let groups: Vec<&str> = password.split('-').collect();
        assert_eq!(groups.len(), 3);
        for group in groups {
            assert_eq!(group.len(), 4);
            assert!(group.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generated_passwords_differ() {
        assert_ne!(*generate(), *generate());
    }
}
