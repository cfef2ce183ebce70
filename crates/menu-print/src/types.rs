use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuPrintError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    /// Any failure while fetching the inputs of a generation run.
    /// The run is aborted and nothing is written.
    #[error("PDF generation failed: {0}")]
    GenerationFailed(String),
}

pub type Result<T> = std::result::Result<T, MenuPrintError>;
