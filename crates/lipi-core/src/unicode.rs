//! Code point classification for the supported script blocks.

use std::fmt::Write;

pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Devanagari Extended (U+A8E0..U+A8FF). Accepted as Devanagari-source
/// input but never mapped.
pub fn is_devanagari_extended(c: char) -> bool {
    ('\u{A8E0}'..='\u{A8FF}').contains(&c)
}

pub fn is_masaram_gondi(c: char) -> bool {
    ('\u{11D00}'..='\u{11D5F}').contains(&c)
}

pub fn is_gunjala_gondi(c: char) -> bool {
    ('\u{11D60}'..='\u{11DAF}').contains(&c)
}

pub fn is_ol_chiki(c: char) -> bool {
    ('\u{1C50}'..='\u{1C7F}').contains(&c)
}

/// Name of the block `c` belongs to, if it is one of ours.
pub fn script_of(c: char) -> Option<&'static str> {
    if is_devanagari(c) || is_devanagari_extended(c) {
        Some("Devanagari")
    } else if is_masaram_gondi(c) {
        Some("Masaram Gondi")
    } else if is_gunjala_gondi(c) {
        Some("Gunjala Gondi")
    } else if is_ol_chiki(c) {
        Some("Ol Chiki")
    } else {
        None
    }
}

/// Space-separated `U+XXXX` code points. Supplementary-plane chars keep
/// all their hex digits (`U+11D0C`).
pub fn format_codepoints(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "U+{:04X}", c as u32);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_classification() {
        assert!(is_devanagari('क'));
        assert!(!is_devanagari('a'));
        assert!(is_devanagari_extended('\u{A8F2}'));
        assert!(is_masaram_gondi('\u{11D0C}'));
        assert!(!is_masaram_gondi('\u{11D71}'));
        assert!(is_gunjala_gondi('\u{11D71}'));
        assert!(is_ol_chiki('\u{1C60}'));
        assert!(!is_ol_chiki('\u{1C4F}'));
    }

    #[test]
    fn test_script_of() {
        assert_eq!(script_of('क'), Some("Devanagari"));
        assert_eq!(script_of('\u{11D44}'), Some("Masaram Gondi"));
        assert_eq!(script_of('\u{11D97}'), Some("Gunjala Gondi"));
        assert_eq!(script_of('\u{1C5A}'), Some("Ol Chiki"));
        assert_eq!(script_of(' '), None);
    }

    #[test]
    fn test_format_codepoints() {
        assert_eq!(format_codepoints(""), "");
        assert_eq!(format_codepoints("\u{11D0C}\u{11D44}"), "U+11D0C U+11D44");
        assert_eq!(format_codepoints("क "), "U+0915 U+0020");
    }
}
