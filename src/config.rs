use crate::error::{PfResult, PhraseForgeError};
use crate::layouts::Fingering;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// What the scorer does with a character that has no finger or position.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Fail the evaluation with `MissingKey`.
    #[default]
    Reject,
    /// Ignore the character: no travel, no penalty, no finger movement.
    Skip,
}

macro_rules! update_if_present {
    ($target:expr, $cli:expr, $matches:expr, $($field:ident),+ $(,)?) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $target.$field = $cli.$field.clone();
            }
        )+
    };
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub scoring: ScoringParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// How many random candidates to try
    #[arg(long, default_value_t = 100_000)]
    pub candidate_count: usize,
    /// Length of each passphrase in words
    #[arg(long, default_value_t = 3)]
    pub words_per_candidate: usize,
    /// Filter threshold on the source word list
    #[arg(long, default_value_t = 6)]
    pub min_word_length: usize,
    /// Number of results to keep
    #[arg(long, default_value_t = 1)]
    pub top: usize,
    /// Drop words the layout cannot type before generating
    #[arg(long, default_value_t = false)]
    pub typeable_only: bool,
    /// Worker threads for scoring (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            candidate_count: 100_000,
            words_per_candidate: 3,
            min_word_length: 6,
            top: 1,
            typeable_only: false,
            threads: 0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Added whenever consecutive keys are typed by opposite hands
    #[arg(long, default_value_t = 0.4)]
    pub alternation_penalty: f64,
    #[arg(long, default_value_t = UnmappedPolicy::Reject)]
    pub unmapped: UnmappedPolicy,
    #[arg(long, default_value_t = Fingering::Classic)]
    pub fingering: Fingering,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            alternation_penalty: 0.4,
            unmapped: UnmappedPolicy::Reject,
            fingering: Fingering::Classic,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PhraseForgeError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.scoring.merge_from_cli(&cli.scoring, matches);
    }

    pub fn validate(&self) -> PfResult<()> {
        if self.search.top == 0 {
            return Err(PhraseForgeError::Config("--top must be at least 1".into()));
        }
        self.scoring.validate()
    }
}

impl SearchParams {
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            candidate_count,
            words_per_candidate,
            min_word_length,
            top,
            typeable_only,
            threads,
        );
    }
}

impl ScoringParams {
    /// `matches` only needs to define the scoring flags.
    pub fn merge_from_cli(&mut self, cli: &ScoringParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, alternation_penalty, unmapped, fingering);
    }

    /// Costs stay non-negative only with a finite, non-negative penalty.
    pub fn validate(&self) -> PfResult<()> {
        let p = self.alternation_penalty;
        if !p.is_finite() || p < 0.0 {
            return Err(PhraseForgeError::Config(format!(
                "--alternation-penalty must be a non-negative number, got {}",
                p
            )));
        }
        Ok(())
    }
}
