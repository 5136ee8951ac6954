#![no_main]

use labeler_github::commit_hash::{MAX_HASH_TOKEN_LEN, MIN_HASH_TOKEN_LEN};
use labeler_github::extract_hash_candidates;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);
    let mut previous_end = 0;
    for candidate in extract_hash_candidates(&body) {
        let len = candidate.token.len();
        assert!((MIN_HASH_TOKEN_LEN..=MAX_HASH_TOKEN_LEN).contains(&len));
        assert!(candidate.token.bytes().all(|byte| byte.is_ascii_hexdigit()));
        assert!(candidate.offset >= previous_end);
        assert_eq!(&body[candidate.offset..candidate.offset + len], candidate.token);
        previous_end = candidate.offset + len;
    }
});
