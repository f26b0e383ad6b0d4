use std::collections::HashSet;

/// Pulls candidate addresses out of an uploaded file.
///
/// Each line contributes the text before its first comma, trimmed. Only
/// non-empty values containing an `@` are kept, and repeats are dropped so the
/// first occurrence decides the position. Quoting is not interpreted: a
/// quoted first column containing a comma is cut at that comma.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD before splitting.
///
/// # Examples
/// ```
/// use email_list_checker::extract::extract_candidates;
///
/// let emails = extract_candidates(b"a@b.com,1\nbad-email,2\na@b.com,3\n");
/// assert_eq!(emails, vec!["a@b.com"]);
/// ```
pub fn extract_candidates(content: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(content);
    let mut seen = HashSet::new();

    text.split('\n')
        .map(first_field)
        .filter(|field| !field.is_empty() && field.contains('@'))
        .filter(|field| seen.insert(*field))
        .map(str::to_owned)
        .collect()
}

fn first_field(line: &str) -> &str {
    match line.split_once(',') {
        Some((field, _)) => field.trim(),
        None => line.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_removed_first_occurrence_kept() {
        let emails = extract_candidates(b"a@b.com,1\nbad-email,2\na@b.com,3\n");
        assert_eq!(emails, vec!["a@b.com"]);

        let emails = extract_candidates(b"z@b.com\na@b.com\nz@b.com\nm@b.com\n");
        assert_eq!(emails, vec!["z@b.com", "a@b.com", "m@b.com"]);
    }

    #[test]
    fn test_lines_without_at_are_dropped() {
        // "bad-email" has no '@' and never becomes a candidate
        let emails = extract_candidates(b"bad-email,2\nnot-an-email\n");
        assert!(emails.is_empty());
    }

    #[test]
    fn test_at_only_in_later_columns_is_ignored() {
        let emails = extract_candidates(b"name,user@example.com\n");
        assert!(emails.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_candidates(b"").is_empty());
        assert!(extract_candidates(b"\n\n\n").is_empty());
        assert!(extract_candidates(b"   ,x\n").is_empty());
    }

    #[test]
    fn test_trims_whitespace_and_carriage_returns() {
        let emails = extract_candidates(b"  user@example.com  ,x\r\nother@example.com\r\n");
        assert_eq!(emails, vec!["user@example.com", "other@example.com"]);
    }

    #[test]
    fn test_line_without_comma_is_single_field() {
        let emails = extract_candidates(b"user@example.com");
        assert_eq!(emails, vec!["user@example.com"]);
    }

    #[test]
    fn test_no_case_folding() {
        let emails = extract_candidates(b"User@Example.com\nuser@example.com\n");
        assert_eq!(emails, vec!["User@Example.com", "user@example.com"]);
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        let emails = extract_candidates(b"\"user@example.com, x\",1\n");
        assert_eq!(emails, vec!["\"user@example.com"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let emails = extract_candidates(b"us\xffer@example.com\n");
        assert_eq!(emails, vec!["us\u{FFFD}er@example.com"]);
    }

    #[test]
    fn test_header_row_without_at_is_skipped() {
        let emails = extract_candidates(b"email,name\nuser@example.com,User\n");
        assert_eq!(emails, vec!["user@example.com"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let content = b"c@x.com,1\na@x.com\nc@x.com\n  b@x.com \n";
        let first = extract_candidates(content);
        let second = extract_candidates(content);
        assert_eq!(first, second);
        assert_eq!(first, vec!["c@x.com", "a@x.com", "b@x.com"]);
    }
}
