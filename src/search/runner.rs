use crate::config::Config;
use crate::error::{PfResult, PhraseForgeError};
use crate::scorer::Scorer;
use crate::search::generator::{self, WordList};
use crate::search::selector::{by_cost, Podium, ScoredCandidate};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub candidate_count: usize,
    pub words_per_candidate: usize,
    pub top: usize,
    /// 0 = rayon's global pool.
    pub threads: usize,
    pub seed: Option<u64>,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            candidate_count: cfg.search.candidate_count,
            words_per_candidate: cfg.search.words_per_candidate,
            top: cfg.search.top,
            threads: cfg.search.threads,
            seed: None, // Set manually if needed
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best first.
    pub best: Vec<ScoredCandidate>,
    pub evaluated: usize,
    pub elapsed: Duration,
}

pub struct Searcher {
    scorer: Scorer,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(scorer: Scorer, options: SearchOptions) -> Self {
        Self { scorer, options }
    }

    pub fn run(&self, words: &WordList) -> PfResult<SearchOutcome> {
        let opts = &self.options;
        if opts.candidate_count == 0 {
            return Err(PhraseForgeError::Config(
                "--candidate-count must be at least 1".into(),
            ));
        }
        if opts.top == 0 {
            return Err(PhraseForgeError::Config("--top must be at least 1".into()));
        }
        words.ensure_non_empty()?;

        let start = Instant::now();

        // 1. Generate
        let mut rng = match opts.seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        let candidates = generator::generate_from(
            words,
            opts.candidate_count,
            opts.words_per_candidate,
            &mut rng,
        )?;
        debug!(
            "Generated {} candidates in {:.2?}",
            candidates.len(),
            start.elapsed()
        );

        // 2. Score and select
        let best = if opts.threads == 0 {
            self.score_parallel(&candidates)?
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(opts.threads)
                .build()
                .map_err(|e| PhraseForgeError::Config(format!("thread pool: {}", e)))?;
            pool.install(|| self.score_parallel(&candidates))?
        };

        let elapsed = start.elapsed();
        info!(
            "🏁 Evaluated {} candidates in {:.2?} ({:.0}/s)",
            candidates.len(),
            elapsed,
            candidates.len() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );

        Ok(SearchOutcome {
            best,
            evaluated: candidates.len(),
            elapsed,
        })
    }

    /// Each worker folds into its own podium; the podiums are merged at the end.
    fn score_parallel(&self, candidates: &[String]) -> PfResult<Vec<ScoredCandidate>> {
        let k = self.options.top;
        let podium = candidates
            .par_iter()
            .enumerate()
            .try_fold(
                || Podium::new(k, by_cost),
                |mut podium, (index, phrase)| {
                    let cost = self.scorer.score(phrase)?;
                    podium.offer_with(cost, index, || phrase.clone());
                    Ok::<_, PhraseForgeError>(podium)
                },
            )
            .try_reduce(|| Podium::new(k, by_cost), |a, b| Ok(a.merge(b)))?;

        if podium.is_empty() {
            return Err(PhraseForgeError::EmptyCandidates);
        }
        Ok(podium.into_sorted_vec())
    }
}
