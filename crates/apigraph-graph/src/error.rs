use thiserror::Error;

/// Errors produced at the model load boundary.
///
/// Queries, resolution and projection never fail; only turning raw input
/// into a loaded document can.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The root value is neither an object nor a one-element array of objects.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// The graph expander rejected the input.
    #[error("expansion failed: {0}")]
    Expansion(String),

    /// Input text is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading a model file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
