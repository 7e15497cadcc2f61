use std::io;

/// Every failure a step can hit. The display text is what ends up after `Error: ` in the output.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("{0}")]
    Decode(#[source] reqwest::Error),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error
    },

    #[error("{0}")]
    Storage(String),
}
