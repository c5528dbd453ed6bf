use crate::reports::{self, OutputFormat};
use clap::Args;
use phraseforge::config::Config;
use phraseforge::error::PfResult;
use phraseforge::scorer::loader::load_word_list;
use phraseforge::scorer::Scorer;
use phraseforge::search::{SearchOptions, Searcher, WordList};
use std::path::Path;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

pub fn run(args: &SearchArgs, config: &Config, scorer: Scorer, words_path: &Path) -> PfResult<()> {
    let mut words = WordList::new(load_word_list(words_path)?, config.search.min_word_length);
    info!(
        "🔎 {} of {} words have at least {} characters",
        words.filtered().len(),
        words.source().len(),
        words.min_len()
    );

    if config.search.typeable_only {
        let dropped = words.retain_typeable(scorer.layout());
        if dropped > 0 {
            warn!(
                "⚠️  Dropped {} words the '{}' fingering cannot type",
                dropped,
                scorer.layout().fingering()
            );
        }
    }

    let mut options = SearchOptions::from(config);
    options.seed = args.seed;
    info!(
        "🎲 Trying {} candidates of {} words",
        options.candidate_count, options.words_per_candidate
    );

    let outcome = Searcher::new(scorer, options).run(&words)?;
    reports::print_search_results(&outcome, args.format)
}
