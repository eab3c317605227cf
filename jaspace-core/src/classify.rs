//! Character classification for script boundary detection
//!
//! Only two scripts matter when deciding where a space belongs:
//! - **Japanese**: hiragana, katakana, the prolonged sound mark, the iteration
//!   mark 々 and CJK unified ideographs
//! - **Latin**: ASCII letters
//!
//! Digits are deliberately `Other`, so `256個` and `フェーズ2` never gain a space.

/// Script class of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// Hiragana, katakana, ー, 々 or a CJK unified ideograph
    Japanese,
    /// ASCII letter `a-z` / `A-Z`
    Latin,
    /// Anything else (digits, punctuation, whitespace, other scripts)
    Other,
}

/// Hiragana ぁ..ん
const HIRAGANA: (char, char) = ('\u{3041}', '\u{3093}');
/// Katakana ァ..ヶ
const KATAKANA: (char, char) = ('\u{30A1}', '\u{30F6}');
/// CJK Unified Ideographs
const CJK_UNIFIED: (char, char) = ('\u{4E00}', '\u{9FFF}');
/// ー
const PROLONGED_SOUND_MARK: char = '\u{30FC}';
/// 々
const ITERATION_MARK: char = '\u{3005}';

fn in_range(ch: char, (lo, hi): (char, char)) -> bool {
    (lo..=hi).contains(&ch)
}

/// Classify a character into its script class
pub fn classify(ch: char) -> CharacterClass {
    if ch.is_ascii_alphabetic() {
        CharacterClass::Latin
    } else if in_range(ch, HIRAGANA)
        || in_range(ch, KATAKANA)
        || in_range(ch, CJK_UNIFIED)
        || ch == PROLONGED_SOUND_MARK
        || ch == ITERATION_MARK
    {
        CharacterClass::Japanese
    } else {
        CharacterClass::Other
    }
}

impl CharacterClass {
    /// Classify a character; same as [`classify`]
    pub fn of(ch: char) -> Self {
        classify(ch)
    }

    /// Whether `self` followed directly by `next` forms a script boundary
    pub fn is_boundary_with(self, next: CharacterClass) -> bool {
        matches!(
            (self, next),
            (CharacterClass::Japanese, CharacterClass::Latin)
                | (CharacterClass::Latin, CharacterClass::Japanese)
        )
    }
}
