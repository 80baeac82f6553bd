use thiserror::Error;

/// Error depicting a fixture that doesn't match the report schema, or that can't be encoded
///
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("MalformedFixture: {0}")]
    MalformedFixture(String),
    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
}
