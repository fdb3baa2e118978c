// src/unicode.rs
//! Character classes shared by the routing engine and the built-in segmenters.
//!
//! Two kinds of helpers live here:
//! * **pattern fragments** – the control-character class and the
//!   Script_Extensions classes that the composite router is assembled from;
//! * **predicates** – cheap `const fn` range checks for kana and Han used by the
//!   Japanese and Chinese segmenters, where pulling a regex per character would
//!   be wasteful.

use std::collections::BTreeSet;

/// Control characters that always form their own token inside the Default
/// branch.
///
/// C0 controls and DEL, minus the five that are also `White_Space`
/// (`\t`, `\n`, `\x0B`, `\x0C`, `\r`). Versioned together with the crate: a
/// change here changes tokenization.
pub const CONTROL_CLASS: &str = r"\x00-\x08\x0E-\x1F\x7F";

#[inline(always)]
pub const fn is_control_token(c: char) -> bool {
    matches!(c as u32, 0x00..=0x08 | 0x0E..=0x1F | 0x7F)
}

/// `\p{scx=..}` atom for one script identifier.
#[inline]
pub fn scx_atom(script: &str) -> String {
    format!(r"\p{{scx={script}}}")
}

/// Character class accepting one code point whose Script_Extensions contain
/// ANY of `scripts`.
///
/// Script_Extensions rather than Script: `、` (U+3001) is `Common` by Script
/// but carries Han, Hiragana and Katakana in its extensions, so it stays inside
/// a Japanese run instead of breaking it.
pub fn script_set_class<S: AsRef<str>>(scripts: &[S]) -> String {
    let mut class = String::with_capacity(2 + scripts.len() * 16);
    class.push('[');
    for s in scripts {
        class.push_str(&scx_atom(s.as_ref()));
    }
    class.push(']');
    class
}

/// Negated class: one code point that belongs to NONE of `scripts`.
///
/// An empty set excludes nothing and degenerates to "any code point".
pub fn excluded_scripts_class<S: AsRef<str>>(scripts: &[S]) -> String {
    if scripts.is_empty() {
        return "(?s:.)".to_owned();
    }
    let mut class = String::with_capacity(3 + scripts.len() * 16);
    class.push_str("[^");
    for s in scripts {
        class.push_str(&scx_atom(s.as_ref()));
    }
    class.push(']');
    class
}

/// Sorted, de-duplicated union of script identifiers.
pub fn script_union<'a, I>(scripts: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    scripts
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Script identifiers are spliced into the router verbatim, so only the
/// characters that occur in Unicode script names and aliases are allowed.
#[inline]
pub fn is_valid_script_ident(script: &str) -> bool {
    !script.is_empty()
        && script
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b' ' | b'-'))
}

// Hiragana block (includes the combining voiced sound marks U+3099..U+309C).
#[inline(always)]
pub const fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F | 0x1B000..=0x1B0FF)
}

// Katakana + phonetic extensions + halfwidth forms.
#[inline(always)]
pub const fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x30A0..=0x30FA  | // Katakana (up to the middle dot)
        0x30FD..=0x30FF  | // iteration marks + digraph koto
        0x31F0..=0x31FF  | // Phonetic Extensions
        0xFF66..=0xFF9D    // Halfwidth Katakana
    )
}

// Unified Han blocks + extensions A–I + compatibility block.
#[inline(always)]
pub const fn is_cjk_unified_ideograph(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF   | // Unified
        0x3400..=0x4DBF   | // Ext A
        0x20000..=0x2A6DF | // Ext B
        0x2A700..=0x2B73F | // Ext C
        0x2B740..=0x2B81F | // Ext D
        0x2B820..=0x2CEAF | // Ext E
        0x2CEB0..=0x2EBEF | // Ext F
        0x30000..=0x3134F | // Ext G
        0x31350..=0x323AF | // Ext H
        0x2EBF0..=0x2EE5F | // Ext I
        0xF900..=0xFAFF   | // Compatibility
        0x2F00..=0x2FDF     // Kangxi radicals
    )
}

/// Marks that continue whatever kana/Han run precedes them:
/// prolonged sound mark, kana iteration marks, ideographic iteration mark.
#[inline(always)]
pub const fn is_run_continuation(c: char) -> bool {
    matches!(c as u32, 0x30FC | 0xFF70 | 0x309D | 0x309E | 0x30FD | 0x30FE | 0x3005 | 0x303B)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_tokens_exclude_whitespace_controls() {
        for c in ['\0', '\x01', '\x08', '\x0E', '\x1B', '\x1F', '\x7F'] {
            assert!(is_control_token(c), "missed U+{:04X}", c as u32);
        }
        for c in ['\t', '\n', '\x0B', '\x0C', '\r', ' ', 'a', '\u{85}'] {
            assert!(!is_control_token(c), "U+{:04X} is not a control token", c as u32);
        }
    }

    #[test]
    fn control_class_agrees_with_predicate() {
        let re = regex::Regex::new(&format!("^[{CONTROL_CLASS}]$")).unwrap();
        for cp in 0u32..0x100 {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(
                re.is_match(c.encode_utf8(&mut [0; 4])),
                is_control_token(c),
                "U+{cp:04X}"
            );
        }
    }

    #[test]
    fn script_set_class_is_a_union() {
        assert_eq!(script_set_class(&["Han"]), r"[\p{scx=Han}]");
        assert_eq!(
            script_set_class(&["Han", "Hiragana", "Katakana"]),
            r"[\p{scx=Han}\p{scx=Hiragana}\p{scx=Katakana}]"
        );
    }

    #[test]
    fn script_set_class_uses_extensions() {
        let re = regex::Regex::new(&format!("^{}+$", script_set_class(&["Hiragana"]))).unwrap();
        assert!(re.is_match("ひらがな"));
        // U+3001 is Common by Script, Hiragana by Script_Extensions.
        assert!(re.is_match("、"));
        assert!(!re.is_match("a"));
    }

    #[test]
    fn excluded_class_without_scripts_matches_everything() {
        let class = excluded_scripts_class::<&str>(&[]);
        let re = regex::Regex::new(&format!("^{class}+$")).unwrap();
        assert!(re.is_match("a\n東\x01"));
    }

    #[test]
    fn excluded_class_rejects_claimed_scripts() {
        let re = regex::Regex::new(&format!("^{}$", excluded_scripts_class(&["Han", "Thai"])))
            .unwrap();
        assert!(re.is_match("a"));
        assert!(re.is_match("1"));
        assert!(re.is_match("\u{05D0}"));
        assert!(!re.is_match("東"));
        assert!(!re.is_match("ก"));
    }

    #[test]
    fn union_is_sorted_and_unique() {
        assert_eq!(
            script_union(["Han", "Thai", "Han", "Hiragana"]),
            vec!["Han", "Hiragana", "Thai"]
        );
    }

    #[test]
    fn script_idents() {
        assert!(is_valid_script_ident("Han"));
        assert!(is_valid_script_ident("Old_Italic"));
        assert!(!is_valid_script_ident(""));
        assert!(!is_valid_script_ident("Han}|(.*"));
    }

    #[test]
    fn kana_and_han_predicates() {
        assert!(is_hiragana('か'));
        assert!(is_hiragana('\u{3099}'));
        assert!(is_katakana('カ'));
        assert!(is_katakana('ｶ'));
        assert!(!is_katakana('・'));
        assert!(is_cjk_unified_ideograph('漢'));
        assert!(!is_cjk_unified_ideograph('か'));
        assert!(is_run_continuation('ー'));
        assert!(is_run_continuation('々'));
    }
}
