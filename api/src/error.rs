use thiserror::Error;

/// Any failure while fetching a report. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx from the server. `message` is the server's `error` string, verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unreadable report: {0}")]
    Decode(String),
}

/// Failures surfaced by the upload widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select a file")]
    NoFile,
    #[error("Only PDF files are allowed")]
    NotPdf { filename: String },
    /// Non-2xx from the server. `message` is the server's `error` string, verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("An error occurred during upload: {0}")]
    Transport(String),
}

impl UploadError {
    /// True when the upload never left the client.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::NoFile | Self::NotPdf { .. })
    }
}
