use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hibp_range_client::hash::{HEX_CHARS, SUFFIX_LEN};

const ALL_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generates a specified number of random passwords with uniform distribution.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_passwords(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(8..=64);
            (0..length)
                .map(|_| ALL_CHARS[rng.gen_range(0..ALL_CHARS.len())] as char)
                .collect()
        })
        .collect()
}

/// Builds a CRLF range body with `lines` random suffixes, sized like the
/// busiest prefixes served by the live API. `needle`, if given, is placed last.
pub fn generate_range_body(lines: usize, needle: Option<&str>) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    let mut body = String::with_capacity(lines * (SUFFIX_LEN + 10));

    for _ in 0..lines {
        for _ in 0..SUFFIX_LEN {
            body.push(HEX_CHARS[rng.gen_range(0..16)] as char);
        }
        body.push(':');
        body.push_str(&rng.gen_range(1..100_000u32).to_string());
        body.push_str("\r\n");
    }

    if let Some(needle) = needle {
        body.push_str(needle);
        body.push_str(":42\r\n");
    }

    body
}
