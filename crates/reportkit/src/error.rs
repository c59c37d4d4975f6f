use thiserror::Error;

/// Failure of one export call.
///
/// Documents are assembled in memory and saved last, so any error leaves no
/// output file behind.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{0}")]
    Xlsx(String),

    #[error("{0}")]
    Pdf(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("job error: {0}")]
    Job(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
