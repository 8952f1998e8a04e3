use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Got invalid ticks_per_second {0}; must be finite and greater than 0")]
    InvalidTicksPerSecond(f64),

    #[error("Got invalid timescale {0}; must be finite")]
    InvalidTimescale(f64),

    #[error("Must specify ticks_per_second")]
    MissingTicksPerSecond,

    #[error("Could not read timer config {}: {}", path.display(), source)]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse timer config: {}", _0)]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
