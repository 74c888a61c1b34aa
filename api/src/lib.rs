//! Backend contract for Docboard: wire model, endpoint resolution, and the HTTP client.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod model;

pub use client::{validate_upload, ApiClient, UploadFile};
pub use endpoints::{resolve_endpoint, ApiConfig, SchemaFilter};
pub use error::{FetchError, UploadError};
pub use model::{
    classify_response, AggregateReport, ConfidenceMetrics, DocumentRecord, ReportSnapshot,
    SchemaFieldCoverage, SchemaUsage, ScopedReport,
};
