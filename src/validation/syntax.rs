use regex::Regex;
use std::sync::LazyLock;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

// dot-atom local part, hostname labels, alphabetic TLD
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    ))
    .expect("email pattern is a valid regex")
});

/// Checks whether `email` is a syntactically plausible address.
///
/// The whole string must match: a dot-atom local part, an `@`, and a
/// hostname whose last label is alphabetic. RFC 5321 length limits apply
/// (254 bytes overall, 64 for the local part).
///
/// # Examples
/// ```
/// use email_list_checker::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("user@localhost"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }

    match email.split_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_LEN => EMAIL_RE.is_match(email),
        _ => false,
    }
}
