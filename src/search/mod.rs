pub mod generator;
pub mod runner;
pub mod selector;

pub use self::generator::{generate, generate_from, WordList};
pub use self::runner::{SearchOptions, SearchOutcome, Searcher};
pub use self::selector::{best_of, by_cost, select_best, select_top, Podium, ScoredCandidate};
