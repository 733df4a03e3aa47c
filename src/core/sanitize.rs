// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;` once decoded) and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// True for non-empty text made only of letters (header cells like `Total`).
/// Spaces, digits and punctuation all disqualify.
pub fn is_alphabetic_label(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}
