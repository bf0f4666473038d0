use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be a finite, non-negative number, got {value}")]
    NegativeDistance { key: &'static str, value: f64 },

    #[error("{key} must be greater than zero, got {value}")]
    NonPositiveBucket { key: &'static str, value: f64 },

    #[error("{key} names an unknown vehicle: {value:?}")]
    UnknownVehicle { key: &'static str, value: String },

    #[error("{key} must list at least one ranking criterion")]
    EmptyRankingCriteria { key: &'static str },
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
