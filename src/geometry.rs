use crate::error::{Missing, PfResult, PhraseForgeError};
use crate::layouts::{Finger, Fingering, FINGER_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Physical coordinate of every key, as read from the coordinate CSV.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct KeyPositions {
    map: HashMap<char, Point>,
}

impl KeyPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same key replace earlier ones.
    pub fn insert(&mut self, key: char, pos: Point) {
        self.map.insert(key, pos);
    }

    pub fn get(&self, key: char) -> Option<Point> {
        self.map.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(char, Point)> for KeyPositions {
    fn from_iter<I: IntoIterator<Item = (char, Point)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Immutable key → finger and key → coordinate lookups.
#[derive(Debug, Clone)]
pub struct KeyLayout {
    fingering: Fingering,
    fingers: HashMap<char, Finger>,
    positions: KeyPositions,
    homes: [Option<Point>; FINGER_COUNT],
}

impl KeyLayout {
    pub fn new(fingering: Fingering, positions: KeyPositions) -> PfResult<Self> {
        let mut fingers = HashMap::new();
        let mut homes = [None; FINGER_COUNT];

        for cluster in fingering.clusters() {
            for key in cluster.keys.chars() {
                if let Some(prev) = fingers.insert(key, cluster.finger) {
                    return Err(PhraseForgeError::Config(format!(
                        "key {:?} assigned to both {} and {}",
                        key, prev, cluster.finger
                    )));
                }
            }

            let home = positions
                .get(cluster.home)
                .ok_or(PhraseForgeError::MissingKey {
                    key: cluster.home,
                    missing: Missing::Position,
                })?;
            homes[cluster.finger.slot()] = Some(home);
        }

        Ok(Self {
            fingering,
            fingers,
            positions,
            homes,
        })
    }

    pub fn fingering(&self) -> Fingering {
        self.fingering
    }

    pub fn finger_of(&self, key: char) -> PfResult<Finger> {
        self.fingers
            .get(&key)
            .copied()
            .ok_or(PhraseForgeError::MissingKey {
                key,
                missing: Missing::Finger,
            })
    }

    pub fn position_of(&self, key: char) -> PfResult<Point> {
        self.positions.get(key).ok_or(PhraseForgeError::MissingKey {
            key,
            missing: Missing::Position,
        })
    }

    /// `None` for fingers that own no keys in this fingering.
    pub fn home_of(&self, finger: Finger) -> Option<Point> {
        self.homes[finger.slot()]
    }

    pub fn can_type(&self, key: char) -> bool {
        self.fingers.contains_key(&key) && self.positions.get(key).is_some()
    }

    pub fn can_type_word(&self, word: &str) -> bool {
        word.chars().all(|c| self.can_type(c))
    }

    /// Resting positions of all ten fingers. Fingers without a home rest
    /// at the origin; no key maps to them so the value is never read.
    pub fn home_positions(&self) -> [Point; FINGER_COUNT] {
        self.homes.map(|h| h.unwrap_or_default())
    }
}
