use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("metric not found: {0}")]
    MetricNotFound(String),

    #[error("invalid parameters for {metric}: {detail}")]
    InvalidParameters { metric: String, detail: String },

    #[error("no scoring band matched for {metric}: {detail}")]
    NoMatch { metric: String, detail: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("batch input error: {0}")]
    BatchInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// True for failures of a single scoring request, as opposed to
    /// failures of the surrounding invocation (io, malformed config).
    pub fn is_scoring_rejection(&self) -> bool {
        matches!(
            self,
            ScoreError::MetricNotFound(_)
                | ScoreError::InvalidParameters { .. }
                | ScoreError::NoMatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
