use crate::layouts::FINGER_COUNT;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDetails {
    // Top-line Score
    pub total: f64,

    // Components
    pub travel: f64,
    pub alternation_cost: f64,

    // Counters
    pub keystrokes: usize,
    pub alternations: usize,
    pub skipped: usize,

    pub per_finger_travel: [f64; FINGER_COUNT],
}
