use crate::reports::{self, OutputFormat};
use clap::Args;
use phraseforge::config::ScoringParams;
use phraseforge::error::PfResult;
use phraseforge::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub scoring: ScoringParams,

    /// Phrases to score
    #[arg(required = true)]
    pub phrases: Vec<String>,

    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: &ScoreArgs, scorer: &Scorer) -> PfResult<()> {
    let mut results = args
        .phrases
        .iter()
        .map(|p| scorer.score_debug(p).map(|d| (p.clone(), d)))
        .collect::<PfResult<Vec<_>>>()?;

    results.sort_by(|a, b| a.1.total.total_cmp(&b.1.total));
    reports::print_score_report(&results, args.format)
}
