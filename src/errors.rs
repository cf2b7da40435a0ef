use thiserror::Error;

/// Configuration problems that abort a single simulation run, never the
/// whole sweep.
#[derive(Debug, Error)]
pub enum ConfigError{
    #[error("invalid target set: {reason}")]
    InvalidTarget{
        reason: String
    },

    #[error("international and domestic filters are mutually exclusive")]
    UnsupportedFilter,
}

/// A [`ConfigError`] tagged with the effort level it surfaced at, so a
/// skipped sweep cell can be reported with full context.
#[derive(Debug, Error)]
#[error("effort {effort}%: {source}")]
pub struct CellError{
    pub effort: usize,
    #[source]
    pub source: ConfigError,
}

#[derive(Debug, Error)]
pub enum BuildError{
    #[error("unable to read network data: {0}")]
    Io(#[from] std::io::Error),

    #[error("no connected component survived the build")]
    EmptyNetwork,
}
