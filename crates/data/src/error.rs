use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("{codec} codec error: {reason}")]
    Codec { codec: &'static str, reason: String },

    #[error("decrypt error: {reason}")]
    Decrypt { reason: String },
}

impl DataError {
    pub fn codec<S: ToString>(codec: &'static str, reason: S) -> Self {
        Self::Codec { codec, reason: reason.to_string() }
    }

    pub fn decrypt<S: ToString>(reason: S) -> Self {
        Self::Decrypt { reason: reason.to_string() }
    }
}
