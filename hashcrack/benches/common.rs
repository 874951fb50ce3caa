use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generates `count` dictionary-like candidates, almost none of which crack.
///
/// Lengths fall between 6 and 20 characters, where most leaked passwords
/// sit, so per-word hashing cost matches a real wordlist. About a quarter get
/// a trailing digit run (`summer2019`). The seed is fixed so every run hashes
/// the same words.
pub fn generate_random_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(6..=20);
            let digits = if rng.gen_bool(0.25) { rng.gen_range(1..=4) } else { 0 };
            let mut word: String = (0..length - digits)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect();
            word.extend((0..digits).map(|_| char::from(b'0' + rng.gen_range(0..10u8))));
            word
        })
        .collect()
}

/// Joins words into a newline-terminated file body.
pub fn to_lines<S: AsRef<str>>(items: &[S]) -> Vec<u8> {
    let mut out = Vec::new();
    for item in items {
        out.extend_from_slice(item.as_ref().as_bytes());
        out.push(b'\n');
    }
    out
}
