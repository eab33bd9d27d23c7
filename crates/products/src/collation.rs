//! Title ordering.
//!
//! A root-locale approximation of locale-aware comparison, pinned so results
//! do not depend on the host's locale tables:
//!
//! 1. primary: letters compared without accents or case (`é` == `e` == `E`)
//! 2. secondary: accents distinguish (`e` < `é`)
//! 3. tertiary: lowercase before uppercase at the first case difference
//!
//! Titles equal on all three levels compare `Equal`; stable sorts keep their
//! input order.
//!
//! Everything that is not a letter (spaces, digits, punctuation) compares by
//! code point: `" " < "," < "-" < "0" < "a"`. Unlike ICU root collation,
//! punctuation is not reordered, so `"a,b"` sorts before `"a-b"`.

use core::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two titles for ascending display order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary(a, b))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return x.cmp(&y),
        }
    }
    a.nfd().count().cmp(&b.nfd().count())
}
