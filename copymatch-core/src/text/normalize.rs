//! Token normalization
//!
//! Compatibility decomposition, full case folding and punctuation removal,
//! so that ligatures, long s, sharp s and typographic quotes do not hide
//! otherwise identical words.

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// Which normalization steps to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizationOptions {
    /// Apply Unicode NFKD (expands ligatures and compatibility forms)
    pub unicode_compat: bool,
    /// Fold case, including expansions plain lowercasing misses
    pub case_fold: bool,
    /// Drop every character in a Unicode punctuation category, and soft hyphens
    pub strip_punctuation: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            unicode_compat: true,
            case_fold: true,
            strip_punctuation: true,
        }
    }
}

impl NormalizationOptions {
    /// Leave raw words untouched
    pub fn none() -> Self {
        Self {
            unicode_compat: false,
            case_fold: false,
            strip_punctuation: false,
        }
    }
}

/// Normalize a raw word with every step enabled
///
/// ```
/// use copymatch_core::text::normalize;
///
/// assert_eq!(normalize("Straße"), "strasse");
/// assert_eq!(normalize("‘hello’"), "hello");
/// ```
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, &NormalizationOptions::default())
}

/// Soft hyphen: an invisible line-break hint, category Cf rather than P*
const SOFT_HYPHEN: char = '\u{AD}';

/// Normalize a raw word with the given steps
pub fn normalize_with(raw: &str, options: &NormalizationOptions) -> String {
    let decomposed: String = if options.unicode_compat {
        raw.nfkd().collect()
    } else {
        raw.to_string()
    };

    let mut out = String::with_capacity(decomposed.len());
    for c in decomposed.chars() {
        if options.strip_punctuation && (c.is_punctuation() || c == SOFT_HYPHEN) {
            continue;
        }
        if options.case_fold {
            fold_char(c, &mut out);
        } else {
            out.push(c);
        }
    }
    out
}

fn fold_char(c: char, out: &mut String) {
    match c {
        'ß' | 'ẞ' => out.push_str("ss"),
        'ſ' => out.push('s'),
        'ς' => out.push('σ'),
        'ﬀ' => out.push_str("ff"),
        'ﬁ' => out.push_str("fi"),
        'ﬂ' => out.push_str("fl"),
        'ﬃ' => out.push_str("ffi"),
        'ﬄ' => out.push_str("ffl"),
        'ﬅ' | 'ﬆ' => out.push_str("st"),
        _ => out.extend(c.to_lowercase()),
    }
}
