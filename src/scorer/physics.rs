use crate::geometry::{KeyLayout, Point};
use crate::layouts::{Finger, FINGER_COUNT};

/// Where each finger currently rests, plus the finger that typed last.
/// Lives for exactly one evaluation.
#[derive(Debug, Clone)]
pub struct FingerState {
    positions: [Point; FINGER_COUNT],
    last: Option<Finger>,
}

/// Outcome of a single keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub finger: Finger,
    pub travel: f64,
    pub alternated: bool,
}

impl FingerState {
    pub fn at_home(layout: &KeyLayout) -> Self {
        Self {
            positions: layout.home_positions(),
            last: None,
        }
    }

    pub fn position(&self, finger: Finger) -> Point {
        self.positions[finger.slot()]
    }

    pub fn last(&self) -> Option<Finger> {
        self.last
    }

    /// Moves `finger` onto `target`; no other finger moves.
    pub fn press(&mut self, finger: Finger, target: Point) -> Stroke {
        let slot = finger.slot();
        let travel = target.distance(&self.positions[slot]);
        let alternated = self.last.is_some_and(|prev| prev.alternates_with(finger));

        self.positions[slot] = target;
        self.last = Some(finger);

        Stroke {
            finger,
            travel,
            alternated,
        }
    }
}
