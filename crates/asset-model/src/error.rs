use thiserror::Error;

/// The one failure the engine surfaces upward: every coercion is total, so
/// only the job-registry boundary can fail, and only by missing a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("no such job: {0}")]
    JobNotFound(String),
}

pub type Result<T> = std::result::Result<T, AssetError>;
