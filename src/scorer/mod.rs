pub mod loader;
pub mod physics;
pub mod types;

use self::physics::{FingerState, Stroke};
pub use self::types::ScoreDetails;
use crate::config::{ScoringParams, UnmappedPolicy};
use crate::error::PfResult;
use crate::geometry::KeyLayout;
use std::sync::Arc;

/// Typing-effort model: finger travel plus a penalty for switching hands.
#[derive(Debug, Clone)]
pub struct Scorer {
    layout: Arc<KeyLayout>,
    alternation_penalty: f64,
    unmapped: UnmappedPolicy,
}

impl Scorer {
    /// Fails when the penalty is negative or not finite.
    pub fn new(layout: Arc<KeyLayout>, params: &ScoringParams) -> PfResult<Self> {
        params.validate()?;
        Ok(Self {
            layout,
            alternation_penalty: params.alternation_penalty,
            unmapped: params.unmapped,
        })
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn alternation_penalty(&self) -> f64 {
        self.alternation_penalty
    }

    pub fn unmapped(&self) -> UnmappedPolicy {
        self.unmapped
    }

    /// Cost of typing `s`, starting with every finger on its home key.
    pub fn score(&self, s: &str) -> PfResult<f64> {
        self.walk(s, |_| {}, || {})
    }

    /// Same walk as [`Scorer::score`], with the cost broken down.
    pub fn score_debug(&self, s: &str) -> PfResult<ScoreDetails> {
        let mut details = ScoreDetails::default();
        let mut skipped = 0;

        let total = self.walk(
            s,
            |stroke| {
                details.keystrokes += 1;
                details.travel += stroke.travel;
                details.per_finger_travel[stroke.finger.slot()] += stroke.travel;
                if stroke.alternated {
                    details.alternations += 1;
                    details.alternation_cost += self.alternation_penalty;
                }
            },
            || skipped += 1,
        )?;

        details.total = total;
        details.skipped = skipped;
        Ok(details)
    }

    fn walk<F, G>(&self, s: &str, mut on_stroke: F, mut on_skip: G) -> PfResult<f64>
    where
        F: FnMut(&Stroke),
        G: FnMut(),
    {
        let layout = &*self.layout;
        let mut state = FingerState::at_home(layout);
        let mut cost = 0.0;

        for c in s.chars() {
            let resolved = layout
                .position_of(c)
                .and_then(|pos| layout.finger_of(c).map(|finger| (finger, pos)));

            let (finger, target) = match (resolved, self.unmapped) {
                (Ok(hit), _) => hit,
                (Err(_), UnmappedPolicy::Skip) => {
                    on_skip();
                    continue;
                }
                (Err(e), UnmappedPolicy::Reject) => return Err(e),
            };

            let stroke = state.press(finger, target);
            cost += stroke.travel;
            if stroke.alternated {
                cost += self.alternation_penalty;
            }
            on_stroke(&stroke);
        }

        Ok(cost)
    }
}
