use std::sync::OnceLock;

use regex::Regex;

/// Shortest abbreviated commit id accepted as a candidate.
pub const MIN_HASH_TOKEN_LEN: usize = 7;
/// Length of a full SHA-1 commit id.
pub const MAX_HASH_TOKEN_LEN: usize = 40;

// Word boundaries are ASCII-only so that `_` and digits count as word
// characters while non-ASCII letters do not.
const HASH_TOKEN_PATTERN: &str = r"(?i)(?-u:\b)[a-f0-9]{7,40}(?-u:\b)";

fn hash_token_regex() -> &'static Regex {
    static HASH_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    HASH_TOKEN_REGEX
        .get_or_init(|| Regex::new(HASH_TOKEN_PATTERN).expect("hash token pattern compiles"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A hash-like token found in free-form text, with its byte offset.
pub struct HashCandidate {
    pub token: String,
    pub offset: usize,
}

/// Extract every word-bounded hex token of 7..=40 characters, left to right.
///
/// Matches are case-insensitive and never de-duplicated: a token repeated in
/// the body is returned once per occurrence.
pub fn extract_hash_candidates(body: &str) -> Vec<HashCandidate> {
    hash_token_regex()
        .find_iter(body)
        .map(|found| HashCandidate {
            token: found.as_str().to_string(),
            offset: found.start(),
        })
        .collect()
}
