//! Script boundary spacing
//!
//! Inserts a single ASCII space wherever a Japanese character touches a Latin
//! letter. Runs in two ordered passes, Japanese→Latin first and Latin→Japanese
//! on the output of the first. A pass only matches the exact pair it looks for,
//! so the second character of a match can never start another match of the
//! same pass and interior same-script runs stay intact.

use crate::classify::{classify, CharacterClass};
use std::borrow::Cow;

/// Insert boundary spaces between Japanese and Latin runs.
///
/// Returns [`Cow::Borrowed`] when `text` needs no change.
///
/// ```
/// use jaspace_core::insert_boundary_spaces;
///
/// assert_eq!(insert_boundary_spaces("FOV値のfar"), "FOV 値の far");
/// assert_eq!(insert_boundary_spaces("256個"), "256個");
/// ```
pub fn insert_boundary_spaces(text: &str) -> Cow<'_, str> {
    let japanese_latin = space_pairs(text, CharacterClass::Japanese, CharacterClass::Latin);
    let latin_japanese = match space_pairs(
        &japanese_latin,
        CharacterClass::Latin,
        CharacterClass::Japanese,
    ) {
        Cow::Owned(spaced) => Some(spaced),
        Cow::Borrowed(_) => None,
    };

    match latin_japanese {
        Some(spaced) => Cow::Owned(spaced),
        None => japanese_latin,
    }
}

/// One pass: put a space between every `first` character directly followed by
/// a `second` character.
fn space_pairs(text: &str, first: CharacterClass, second: CharacterClass) -> Cow<'_, str> {
    let mut out: Option<String> = None;
    let mut prev = CharacterClass::Other;

    for (idx, ch) in text.char_indices() {
        let class = classify(ch);
        if prev == first && class == second {
            let buf = out.get_or_insert_with(|| {
                let mut buf = String::with_capacity(text.len() + 8);
                buf.push_str(&text[..idx]);
                buf
            });
            buf.push(' ');
        }
        if let Some(buf) = out.as_mut() {
            buf.push(ch);
        }
        prev = class;
    }

    match out {
        Some(spaced) => Cow::Owned(spaced),
        None => Cow::Borrowed(text),
    }
}
