//! Phonetic features to IPA symbols
//!
//! A fixed table of pulmonic consonants and vowels. The phoneme panel lets the
//! user pick features and shows the closest IPA symbol; the reverse lookup fills
//! the feature pickers from a typed symbol.
//!
//! Distance between two consonants: place steps + 4 for a different manner +
//! 1 for different voicing. Between two vowels: height steps + backness steps +
//! 1 for different rounding. Ties go to the earlier table entry.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Place {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Postalveolar,
    Retroflex,
    Palatal,
    Velar,
    Uvular,
    Pharyngeal,
    Glottal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Manner {
    Plosive,
    Nasal,
    Trill,
    Tap,
    Fricative,
    LateralFricative,
    Approximant,
    LateralApproximant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Height {
    Close,
    NearClose,
    CloseMid,
    Mid,
    OpenMid,
    NearOpen,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Backness {
    Front,
    Central,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConsonantFeatures {
    pub place: Place,
    pub manner: Manner,
    pub voiced: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VowelFeatures {
    pub height: Height,
    pub backness: Backness,
    pub rounded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhoneFeatures {
    Consonant(ConsonantFeatures),
    Vowel(VowelFeatures),
}

const fn c(symbol: &'static str, place: Place, manner: Manner, voiced: bool) -> (&'static str, ConsonantFeatures) {
    (symbol, ConsonantFeatures { place, manner, voiced })
}

const fn v(symbol: &'static str, height: Height, backness: Backness, rounded: bool) -> (&'static str, VowelFeatures) {
    (symbol, VowelFeatures { height, backness, rounded })
}

use Backness::{Back, Central, Front};
use Height::{Close, CloseMid, Mid, NearClose, NearOpen, Open, OpenMid};
use Manner::{Approximant, Fricative, LateralApproximant, LateralFricative, Nasal, Plosive, Tap, Trill};
use Place::{Alveolar, Bilabial, Dental, Glottal, Labiodental, Palatal, Pharyngeal, Postalveolar, Retroflex, Uvular, Velar};

pub const CONSONANTS: &[(&str, ConsonantFeatures)] = &[
    c("p", Bilabial, Plosive, false),
    c("b", Bilabial, Plosive, true),
    c("t", Alveolar, Plosive, false),
    c("d", Alveolar, Plosive, true),
    c("ʈ", Retroflex, Plosive, false),
    c("ɖ", Retroflex, Plosive, true),
    c("c", Palatal, Plosive, false),
    c("ɟ", Palatal, Plosive, true),
    c("k", Velar, Plosive, false),
    c("g", Velar, Plosive, true),
    c("q", Uvular, Plosive, false),
    c("ɢ", Uvular, Plosive, true),
    c("ʔ", Glottal, Plosive, false),
    c("m", Bilabial, Nasal, true),
    c("ɱ", Labiodental, Nasal, true),
    c("n", Alveolar, Nasal, true),
    c("ɳ", Retroflex, Nasal, true),
    c("ɲ", Palatal, Nasal, true),
    c("ŋ", Velar, Nasal, true),
    c("ɴ", Uvular, Nasal, true),
    c("ʙ", Bilabial, Trill, true),
    c("r", Alveolar, Trill, true),
    c("ʀ", Uvular, Trill, true),
    c("ⱱ", Labiodental, Tap, true),
    c("ɾ", Alveolar, Tap, true),
    c("ɽ", Retroflex, Tap, true),
    c("ɸ", Bilabial, Fricative, false),
    c("β", Bilabial, Fricative, true),
    c("f", Labiodental, Fricative, false),
    c("v", Labiodental, Fricative, true),
    c("θ", Dental, Fricative, false),
    c("ð", Dental, Fricative, true),
    c("s", Alveolar, Fricative, false),
    c("z", Alveolar, Fricative, true),
    c("ʃ", Postalveolar, Fricative, false),
    c("ʒ", Postalveolar, Fricative, true),
    c("ʂ", Retroflex, Fricative, false),
    c("ʐ", Retroflex, Fricative, true),
    c("ç", Palatal, Fricative, false),
    c("ʝ", Palatal, Fricative, true),
    c("x", Velar, Fricative, false),
    c("ɣ", Velar, Fricative, true),
    c("χ", Uvular, Fricative, false),
    c("ʁ", Uvular, Fricative, true),
    c("ħ", Pharyngeal, Fricative, false),
    c("ʕ", Pharyngeal, Fricative, true),
    c("h", Glottal, Fricative, false),
    c("ɦ", Glottal, Fricative, true),
    c("ɬ", Alveolar, LateralFricative, false),
    c("ɮ", Alveolar, LateralFricative, true),
    c("ʋ", Labiodental, Approximant, true),
    c("ɹ", Alveolar, Approximant, true),
    c("ɻ", Retroflex, Approximant, true),
    c("j", Palatal, Approximant, true),
    c("ɰ", Velar, Approximant, true),
    c("l", Alveolar, LateralApproximant, true),
    c("ɭ", Retroflex, LateralApproximant, true),
    c("ʎ", Palatal, LateralApproximant, true),
    c("ʟ", Velar, LateralApproximant, true),
];

pub const VOWELS: &[(&str, VowelFeatures)] = &[
    v("i", Close, Front, false),
    v("y", Close, Front, true),
    v("ɨ", Close, Central, false),
    v("ʉ", Close, Central, true),
    v("ɯ", Close, Back, false),
    v("u", Close, Back, true),
    v("ɪ", NearClose, Front, false),
    v("ʏ", NearClose, Front, true),
    v("ʊ", NearClose, Back, true),
    v("e", CloseMid, Front, false),
    v("ø", CloseMid, Front, true),
    v("ɘ", CloseMid, Central, false),
    v("ɵ", CloseMid, Central, true),
    v("ɤ", CloseMid, Back, false),
    v("o", CloseMid, Back, true),
    v("ə", Mid, Central, false),
    v("ɛ", OpenMid, Front, false),
    v("œ", OpenMid, Front, true),
    v("ɜ", OpenMid, Central, false),
    v("ɞ", OpenMid, Central, true),
    v("ʌ", OpenMid, Back, false),
    v("ɔ", OpenMid, Back, true),
    v("æ", NearOpen, Front, false),
    v("ɐ", NearOpen, Central, false),
    v("a", Open, Front, false),
    v("ɶ", Open, Front, true),
    v("ɑ", Open, Back, false),
    v("ɒ", Open, Back, true),
];

impl ConsonantFeatures {
    pub fn distance(&self, other: &ConsonantFeatures) -> u32 {
        let manner = if self.manner == other.manner { 0 } else { 4 };
        (self.place as u32).abs_diff(other.place as u32) + manner + u32::from(self.voiced != other.voiced)
    }
}

impl VowelFeatures {
    pub fn distance(&self, other: &VowelFeatures) -> u32 {
        let height = (self.height as u32).abs_diff(other.height as u32);
        let backness = (self.backness as u32).abs_diff(other.backness as u32);
        height + backness + u32::from(self.rounded != other.rounded)
    }
}

/// Closest consonant symbol to the given features
pub fn nearest_consonant(features: &ConsonantFeatures) -> &'static str {
    nearest(CONSONANTS, |candidate| candidate.distance(features))
}

/// Closest vowel symbol to the given features
pub fn nearest_vowel(features: &VowelFeatures) -> &'static str {
    nearest(VOWELS, |candidate| candidate.distance(features))
}

pub fn nearest_symbol(features: &PhoneFeatures) -> &'static str {
    match features {
        PhoneFeatures::Consonant(f) => nearest_consonant(f),
        PhoneFeatures::Vowel(f) => nearest_vowel(f),
    }
}

/// Features of a symbol in the table
pub fn features_of(symbol: &str) -> Option<PhoneFeatures> {
    let symbol = symbol.trim();
    if let Some((_, f)) = CONSONANTS.iter().find(|(s, _)| *s == symbol) {
        return Some(PhoneFeatures::Consonant(*f));
    }
    VOWELS.iter().find(|(s, _)| *s == symbol).map(|(_, f)| PhoneFeatures::Vowel(*f))
}

fn nearest<F>(table: &[(&'static str, F)], distance: impl Fn(&F) -> u32) -> &'static str {
    let mut best = table[0].0;
    let mut best_distance = u32::MAX;
    for (symbol, features) in table {
        let d = distance(features);
        if d < best_distance {
            best = *symbol;
            best_distance = d;
            if d == 0 {
                break;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_consonant() {
        let f = ConsonantFeatures {
            place: Velar,
            manner: Nasal,
            voiced: true,
        };
        assert_eq!(nearest_consonant(&f), "ŋ");
    }

    #[test]
    fn test_missing_cell_falls_back_to_nearest() {
        // no voiced glottal plosive in the table: the voiceless one is closest
        let f = ConsonantFeatures {
            place: Glottal,
            manner: Plosive,
            voiced: true,
        };
        assert_eq!(nearest_consonant(&f), "ʔ");

        // no voiceless nasals: same place voiced nasal wins over other manners
        let f = ConsonantFeatures {
            place: Bilabial,
            manner: Nasal,
            voiced: false,
        };
        assert_eq!(nearest_consonant(&f), "m");
    }

    #[test]
    fn test_vowel_lookup() {
        let f = VowelFeatures {
            height: CloseMid,
            backness: Back,
            rounded: true,
        };
        assert_eq!(nearest_vowel(&f), "o");

        // no near-close central vowel: ties go to the first candidate in table order
        let f = VowelFeatures {
            height: NearClose,
            backness: Central,
            rounded: false,
        };
        assert_eq!(nearest_vowel(&f), "ɨ");
    }

    #[test]
    fn test_features_round_trip() {
        for (symbol, _) in CONSONANTS {
            let features = features_of(symbol).unwrap();
            assert_eq!(nearest_symbol(&features), *symbol);
        }
        for (symbol, _) in VOWELS {
            let features = features_of(symbol).unwrap();
            assert_eq!(nearest_symbol(&features), *symbol);
        }
        assert_eq!(features_of("☃"), None);
    }
}
