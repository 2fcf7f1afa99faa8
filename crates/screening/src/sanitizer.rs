//! Output sanitizer for generated replies
//!
//! Generated text goes to Arabic-speaking users; Latin punctuation is folded
//! to its Arabic counterpart and anything outside the Arabic blocks and
//! whitespace is dropped. Running the sanitizer twice changes nothing.

/// Sanitize a generated reply before it reaches the user
pub fn sanitize_reply(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ',' => out.push('،'),
            ';' => out.push('؛'),
            '?' => out.push('؟'),
            '(' | ')' => {}
            c if c.is_whitespace() => out.push(c),
            c @ '\u{0600}'..='\u{06FF}' | c @ '\u{0750}'..='\u{077F}' => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}
