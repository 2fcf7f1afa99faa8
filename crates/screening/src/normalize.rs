//! Arabic text normalization
//!
//! Matching is done on a normalized form so hamza variants, alif maqsura and
//! diacritics never decide whether a symptom is seen. The same function is
//! applied to the static tables at build time and to user input at match
//! time, keeping both sides in one canonical space.

/// Normalize Arabic text for lexical matching
///
/// Folds hamza-carrying alif forms to bare alif, alif maqsura to ya, strips
/// tashkeel and tatweel, and lowercases any Latin letters mixed in.
pub fn normalize_arabic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'أ' | 'إ' | 'آ' | 'ٱ' => out.push('ا'),
            'ى' => out.push('ي'),
            // Tashkeel marks and tatweel carry no lexical content
            '\u{064B}'..='\u{0652}' | 'ـ' => {}
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}
