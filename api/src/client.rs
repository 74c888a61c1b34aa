//! HTTP client for the report and upload endpoints.

use reqwest::{multipart, Client, Response};
use serde_json::Value;
use tracing::{info, warn};

use crate::endpoints::{resolve_endpoint, ApiConfig, SchemaFilter, UPLOAD_PATH};
use crate::error::{FetchError, UploadError};
use crate::model::{classify_response, ErrorBody, ReportSnapshot};

const PDF_MIME: &str = "application/pdf";
const GENERIC_UPLOAD_ERROR: &str = "An error occurred during upload";

/// A file picked by the operator, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }
}

/// Client-side guard run before any network call.
pub fn validate_upload(file: Option<&UploadFile>) -> Result<&UploadFile, UploadError> {
    let file = file.ok_or(UploadError::NoFile)?;
    if !file.name.to_lowercase().ends_with(".pdf") {
        return Err(UploadError::NotPdf {
            filename: file.name.clone(),
        });
    }
    Ok(file)
}

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the report for `filter` and classify its shape.
    pub async fn fetch_report(&self, filter: &SchemaFilter) -> Result<ReportSnapshot, FetchError> {
        let url = self.config.url_for(&resolve_endpoint(filter));
        info!(%url, %filter, "fetching report");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = error_message(response)
                .await
                .unwrap_or_else(|| "Failed to fetch report data".to_string());
            warn!(status, %message, "report fetch rejected");
            return Err(FetchError::Status { status, message });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))?;
        let snapshot =
            classify_response(body).map_err(|err| FetchError::Decode(err.to_string()))?;
        info!(
            scoped = snapshot.is_scoped(),
            total = snapshot.total_documents(),
            "report fetched"
        );
        Ok(snapshot)
    }

    /// Submit a PDF as the multipart field `file`; returns the raw success body.
    pub async fn upload(&self, file: Option<&UploadFile>) -> Result<Value, UploadError> {
        let file = validate_upload(file)?;
        let url = self.config.url_for(UPLOAD_PATH);
        info!(%url, filename = %file.name, bytes = file.bytes.len(), "uploading document");

        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(PDF_MIME)
            .map_err(|err| UploadError::Transport(err.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| UploadError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = error_message(response)
                .await
                .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string());
            warn!(status, %message, "upload rejected");
            return Err(UploadError::Rejected { status, message });
        }

        // A 2xx with an unreadable body still means the server accepted the file; the
        // reconciler reports it as malformed.
        Ok(response.json::<Value>().await.unwrap_or(Value::Null))
    }
}

async fn error_message(response: Response) -> Option<String> {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.error)
}
