use crate::error::{PfResult, PhraseForgeError};
use crate::scorer::Scorer;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub phrase: String,
    pub cost: f64,
    /// Position in the generated sequence; breaks ties.
    pub index: usize,
}

/// Cheapest first; among equal costs the earlier candidate wins.
pub fn by_cost(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.cost.total_cmp(&b.cost).then(a.index.cmp(&b.index))
}

/// Keeps the `capacity` best entries seen so far, sorted best first.
#[derive(Debug, Clone)]
pub struct Podium<C> {
    capacity: usize,
    entries: Vec<ScoredCandidate>,
    cmp: C,
}

impl<C> Podium<C>
where
    C: Fn(&ScoredCandidate, &ScoredCandidate) -> Ordering,
{
    pub fn new(capacity: usize, cmp: C) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.min(64)),
            cmp,
        }
    }

    fn admits(&self, entry: &ScoredCandidate) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        self.entries
            .last()
            .is_some_and(|worst| (self.cmp)(entry, worst) == Ordering::Less)
    }

    /// Returns true when `entry` made it onto the podium.
    pub fn offer(&mut self, entry: ScoredCandidate) -> bool {
        if !self.admits(&entry) {
            return false;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        let at = self
            .entries
            .partition_point(|e| (self.cmp)(e, &entry) != Ordering::Greater);
        self.entries.insert(at, entry);
        true
    }

    /// Like [`Podium::offer`], but `phrase` is only called for an entry that
    /// gets in. `cmp` sees an empty phrase while deciding.
    pub fn offer_with<F>(&mut self, cost: f64, index: usize, phrase: F) -> bool
    where
        F: FnOnce() -> String,
    {
        let mut entry = ScoredCandidate {
            phrase: String::new(),
            cost,
            index,
        };
        if !self.admits(&entry) {
            return false;
        }
        entry.phrase = phrase();
        self.offer(entry)
    }

    pub fn merge(mut self, other: Self) -> Self {
        for entry in other.entries {
            self.offer(entry);
        }
        self
    }

    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_sorted_vec(self) -> Vec<ScoredCandidate> {
        self.entries
    }
}

/// Folds scored entries into a podium of `capacity` under `cmp`.
pub fn fold_scored<I, C>(scored: I, capacity: usize, cmp: C) -> Podium<C>
where
    I: IntoIterator<Item = ScoredCandidate>,
    C: Fn(&ScoredCandidate, &ScoredCandidate) -> Ordering,
{
    let mut podium = Podium::new(capacity, cmp);
    for entry in scored {
        podium.offer(entry);
    }
    podium
}

/// Minimum of precomputed `(phrase, cost)` pairs.
pub fn best_of<I, S>(pairs: I) -> PfResult<ScoredCandidate>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let scored = pairs
        .into_iter()
        .enumerate()
        .map(|(index, (phrase, cost))| ScoredCandidate {
            phrase: phrase.into(),
            cost,
            index,
        });
    fold_scored(scored, 1, by_cost)
        .into_sorted_vec()
        .into_iter()
        .next()
        .ok_or(PhraseForgeError::EmptyCandidates)
}

/// The `k` cheapest candidates, best first. Stops at the first scoring error.
pub fn select_top<S: AsRef<str>>(
    candidates: &[S],
    scorer: &Scorer,
    k: usize,
) -> PfResult<Vec<ScoredCandidate>> {
    if k == 0 {
        return Err(PhraseForgeError::Config("top-k must be at least 1".into()));
    }
    if candidates.is_empty() {
        return Err(PhraseForgeError::EmptyCandidates);
    }

    let mut podium = Podium::new(k, by_cost);
    for (index, phrase) in candidates.iter().enumerate() {
        let phrase = phrase.as_ref();
        let cost = scorer.score(phrase)?;
        podium.offer_with(cost, index, || phrase.to_string());
    }
    Ok(podium.into_sorted_vec())
}

pub fn select_best<S: AsRef<str>>(candidates: &[S], scorer: &Scorer) -> PfResult<ScoredCandidate> {
    select_top(candidates, scorer, 1)?
        .into_iter()
        .next()
        .ok_or(PhraseForgeError::EmptyCandidates)
}
