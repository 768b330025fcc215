use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// True if pw is ≥8 chars, has at least one uppercase and one special char
pub fn is_valid_password(pw: &str) -> bool {
    pw.len() >= 8 && UPPER_RE.is_match(pw) && SPECIAL_RE.is_match(pw)
}
