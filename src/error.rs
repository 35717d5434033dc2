use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("hash mismatch: '{left}' ({left_hash}) and '{right}' ({right_hash}) are equal but hash differently")]
    HashMismatch {
        left: String,
        right: String,
        left_hash: u64,
        right_hash: u64,
    },

    /// Allowed by the hashing contract, so this is evidence of a rare
    /// collision rather than proof of a bug.
    #[error("hash collision: '{left}' and '{right}' both hash to {hash}")]
    HashCollision {
        left: String,
        right: String,
        hash: u64,
    },

    #[error("check refers to unknown sample '{0}'")]
    UnknownSample(String),

    #[error("expected {expected} map entries after inserting all samples, found {actual}")]
    EntryCount { expected: usize, actual: usize },

    #[error("entry for key '{key}' holds {actual}, expected the last written value {expected}")]
    StaleValue {
        key: String,
        expected: i64,
        actual: i64,
    },

    #[error("invalid scenario config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
