/// GitHub answers `404` for unknown refs and `422` for malformed or
/// unresolvable commit ids.
pub fn is_missing_commit_status(status: u16) -> bool {
    matches!(status, 404 | 422)
}

pub fn truncate_for_error(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

/// Join an `issue_url` from a pull request payload with the labels endpoint.
pub fn issue_labels_url(issue_url: &str) -> String {
    format!("{}/labels", issue_url.trim_end_matches('/'))
}
