use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of a key registration was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Finger,
    Position,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Finger => write!(f, "finger"),
            Missing::Position => write!(f, "position"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PhraseForgeError {
    #[error("IO Error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("No {missing} registered for key {key:?}")]
    MissingKey { key: char, missing: Missing },

    #[error("Word list is empty (after filtering to length >= {min_len})")]
    EmptyWordList { min_len: usize },

    #[error("No words to draw candidates from")]
    EmptyWordPool,

    #[error("No candidates to select from")]
    EmptyCandidates,
}

impl PhraseForgeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures while loading or validating configuration inputs.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Csv(_) | Self::Json(_) | Self::Config(_)
        )
    }
}

pub type PfResult<T> = Result<T, PhraseForgeError>;
