//! Action name normalization.
//!
//! Plugin operations and request identifiers arrive in whatever case their
//! authors chose (`MuteForegroundApp`, `toggleMute`, `open-app`). Every
//! identifier is folded to a single lowercase, `_`-separated form before it
//! is registered or looked up.

/// Separator placed between words.
pub const SEPARATOR: char = '_';

/// Normalizes an identifier into a canonical action identifier.
///
/// A separator is inserted before an uppercase letter when
///
/// - the previous character is a lowercase letter or a digit (`toggleMute`
///   → `toggle_mute`), or
/// - the previous character is uppercase and the next one is lowercase,
///   i.e. a capitalized word starts after an acronym (`HTTPServer` →
///   `http_server`).
///
/// Hyphens become separators, and no separator is inserted right after an
/// existing one. The output contains no uppercase letters and no hyphens,
/// so normalizing it again returns it unchanged.
pub fn normalize(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            out.push(SEPARATOR);
            continue;
        }

        if has_lowercase_form(c) && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let after_separator = prev == SEPARATOR || prev == '-';

            let word_start = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (has_lowercase_form(prev) && next.is_some_and(char::is_lowercase));

            if word_start && !after_separator {
                out.push(SEPARATOR);
            }
        }

        out.extend(c.to_lowercase());
    }

    out
}

/// Uppercase letters without a distinct lowercase mapping (`𝐀`) pass
/// through unchanged, so they never start a word.
fn has_lowercase_form(c: char) -> bool {
    c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}

/// Returns whether `identifier` is already in canonical form.
pub fn is_normalized(identifier: &str) -> bool {
    normalize(identifier) == identifier
}
