//! Skater Name Matching
//!
//! Result sheets spell names inconsistently ("HANYU Yuzuru", "Yuzuru Hanyu",
//! "Zoé Dupré-Martin" vs "Zoe Dupre Martin"). Matching works on a folded
//! form and ignores word order.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a name to lowercase ASCII-ish tokens separated by single spaces.
///
/// Idempotent: folding an already folded name returns it unchanged.
pub fn normalize_name(name: &str) -> String {
    let lowered: String = name.nfkd().collect::<String>().to_lowercase();
    let folded: String = lowered
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when both names fold to the same set of words, in any order
pub fn compare_names(a: &str, b: &str) -> bool {
    name_tokens(a) == name_tokens(b)
}

fn name_tokens(name: &str) -> Vec<String> {
    let mut tokens: Vec<String> = normalize_name(name).split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect();
    tokens.sort();
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "HANYU Yuzuru",
        "  Zoé   Dupré-Martin ",
        "Mao O'Neil",
        "Ṣẹ̀gun Àjàyí",
        "Ekaterina GORDEEVA",
        "İlkay Şahin",
        "ﬁona ﬂores",
        "",
    ];

    #[test]
    fn test_normalize_strips_diacritics_and_punctuation() {
        assert_eq!(normalize_name("  Zoé   Dupré-Martin "), "zoe dupre martin");
        assert_eq!(normalize_name("Mao O'Neil"), "mao o neil");
        assert_eq!(normalize_name("ﬁona"), "fiona");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for sample in SAMPLES {
            let once = normalize_name(sample);
            assert_eq!(normalize_name(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_compare_ignores_order_and_case() {
        assert!(compare_names("HANYU Yuzuru", "Yuzuru Hanyu"));
        assert!(compare_names("Zoé Dupré-Martin", "zoe dupre martin"));
        assert!(!compare_names("Yuzuru Hanyu", "Yuzuru Hanyuu"));
        assert!(!compare_names("Anna Ivanova", "Anna Anna Ivanova"));
    }

    #[test]
    fn test_compare_is_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(compare_names(a, b), compare_names(b, a), "{a:?} vs {b:?}");
            }
        }
    }
}
