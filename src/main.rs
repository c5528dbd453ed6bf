use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use phraseforge::config::Config;
use phraseforge::error::PfResult;
use phraseforge::geometry::KeyLayout;
use phraseforge::scorer::loader::load_key_positions;
use phraseforge::scorer::Scorer;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line
    #[arg(global = true, short, long, default_value = "data/words.txt")]
    words: PathBuf,

    /// Key coordinates CSV: <key>,<x>,<y>
    #[arg(global = true, short, long, default_value = "data/key_positions.csv")]
    keys: PathBuf,

    /// JSON run configuration; explicit flags override it
    #[arg(global = true, short, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate random passphrases and keep the easiest to type
    Search(cmd::search::SearchArgs),
    /// Score the given phrases
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, matches: &ArgMatches) -> PfResult<()> {
    info!("🚀 Initializing PhraseForge...");

    // Arguments like --top live inside the subcommand's matches, not the root.
    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(matches);
    let mut config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading configuration from: {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };
    // `score` only defines the scoring flags.
    match &cli.command {
        Commands::Search(args) => config.merge_from_cli(&args.config, sub_matches),
        Commands::Score(args) => config.scoring.merge_from_cli(&args.scoring, sub_matches),
    }
    config.validate()?;

    let positions = load_key_positions(&cli.keys)?;
    let layout = Arc::new(KeyLayout::new(config.scoring.fingering, positions)?);
    info!(
        "🖐️  Fingering '{}', alternation penalty {}, unmapped keys: {}",
        config.scoring.fingering, config.scoring.alternation_penalty, config.scoring.unmapped
    );
    let scorer = Scorer::new(layout, &config.scoring)?;

    match &cli.command {
        Commands::Search(args) => cmd::search::run(args, &config, scorer, &cli.words),
        Commands::Score(args) => cmd::score::run(args, &scorer),
    }
}
