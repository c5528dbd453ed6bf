use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

/// The ten fingers, in slot order from the left pinky to the right pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    LeftThumb,
    RightThumb,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
}

pub const FINGER_COUNT: usize = 10;

impl Finger {
    pub const ALL: [Finger; FINGER_COUNT] = [
        Finger::LeftPinky,
        Finger::LeftRing,
        Finger::LeftMiddle,
        Finger::LeftIndex,
        Finger::LeftThumb,
        Finger::RightThumb,
        Finger::RightIndex,
        Finger::RightMiddle,
        Finger::RightRing,
        Finger::RightPinky,
    ];

    /// Slot in per-finger arrays (0..10).
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Thumbs sit on the shared space bar and belong to neither hand.
    pub fn hand(self) -> Option<Hand> {
        match self {
            Finger::LeftPinky | Finger::LeftRing | Finger::LeftMiddle | Finger::LeftIndex => {
                Some(Hand::Left)
            }
            Finger::RightIndex | Finger::RightMiddle | Finger::RightRing | Finger::RightPinky => {
                Some(Hand::Right)
            }
            Finger::LeftThumb | Finger::RightThumb => None,
        }
    }

    /// True only when both fingers belong to a hand and the hands differ.
    pub fn alternates_with(self, other: Finger) -> bool {
        match (self.hand(), other.hand()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }
}

/// One finger's share of the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    pub finger: Finger,
    /// Resting key; its coordinate seeds the finger's start position.
    pub home: char,
    pub keys: &'static str,
}

const fn cluster(finger: Finger, home: char, keys: &'static str) -> Cluster {
    Cluster { finger, home, keys }
}

// Six letter clusters as in the reference program, with `r` on the left
// index finger and the space bar on the right thumb.
const CLASSIC: &[Cluster] = &[
    cluster(Finger::LeftPinky, 'a', "qaz"),
    cluster(Finger::LeftRing, 's', "xews"),
    cluster(Finger::LeftIndex, 'f', "rtfgcvd"),
    cluster(Finger::RightThumb, ' ', " "),
    cluster(Finger::RightIndex, 'j', "bhnyjm"),
    cluster(Finger::RightMiddle, 'k', "uik"),
    cluster(Finger::RightRing, 'l', "lop"),
];

const TOUCH: &[Cluster] = &[
    cluster(Finger::LeftPinky, 'a', "qaz"),
    cluster(Finger::LeftRing, 's', "wsx"),
    cluster(Finger::LeftMiddle, 'd', "edc"),
    cluster(Finger::LeftIndex, 'f', "rfvtgb"),
    cluster(Finger::RightThumb, ' ', " "),
    cluster(Finger::RightIndex, 'j', "yhnujm"),
    cluster(Finger::RightMiddle, 'k', "ik,"),
    cluster(Finger::RightRing, 'l', "ol."),
    cluster(Finger::RightPinky, ';', "p;/"),
];

/// Named finger-to-key assignments.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Fingering {
    #[default]
    Classic,
    Touch,
}

impl Fingering {
    pub fn clusters(&self) -> &'static [Cluster] {
        match self {
            Self::Classic => CLASSIC,
            Self::Touch => TOUCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn slots_follow_declaration_order() {
        for (i, f) in Finger::ALL.iter().enumerate() {
            assert_eq!(f.slot(), i);
        }
        assert_eq!(Finger::iter().count(), FINGER_COUNT);
    }

    #[test]
    fn thumbs_never_alternate() {
        assert!(Finger::LeftIndex.alternates_with(Finger::RightIndex));
        assert!(!Finger::LeftIndex.alternates_with(Finger::LeftPinky));
        assert!(!Finger::RightThumb.alternates_with(Finger::LeftIndex));
        assert!(!Finger::RightIndex.alternates_with(Finger::LeftThumb));
    }

    #[test]
    fn every_table_is_disjoint_and_homes_are_members() {
        for fingering in Fingering::iter() {
            let mut seen = HashSet::new();
            for c in fingering.clusters() {
                assert!(c.keys.contains(c.home), "{fingering}: {c:?}");
                for k in c.keys.chars() {
                    assert!(seen.insert(k), "{fingering}: '{k}' assigned twice");
                }
            }
        }
    }

    #[test]
    fn classic_covers_the_alphabet() {
        let keys: String = Fingering::Classic
            .clusters()
            .iter()
            .map(|c| c.keys)
            .collect();
        for ch in 'a'..='z' {
            assert!(keys.contains(ch), "missing {ch}");
        }
    }

    #[test]
    fn fingering_parses_from_snake_case() {
        assert_eq!(Fingering::from_str("touch").unwrap(), Fingering::Touch);
        assert_eq!(Fingering::Classic.to_string(), "classic");
        assert!(Fingering::from_str("dvorak").is_err());
    }
}
