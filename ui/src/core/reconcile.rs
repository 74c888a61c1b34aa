//! Folding a completed upload into the current report without a re-fetch.

use std::sync::Arc;

use api::{DocumentRecord, ReportSnapshot};
use serde_json::Value;
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{info, warn};
use uuid::Uuid;

use super::store::StoreError;
use super::view_state::{TransitionOutcome, ViewEvent, ViewMachine};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The server accepted the file but its reply carried no usable `document`.
    #[error("upload response is missing its document: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub record: DocumentRecord,
    pub snapshot: Arc<ReportSnapshot>,
    pub outcome: TransitionOutcome,
    /// Server's human-readable success message, if any.
    pub message: Option<String>,
}

/// Build a record from the `document` object of an upload response.
///
/// A missing `classification_id` gets a fresh id and a missing `processed_at` is stamped
/// with the current UTC time.
pub fn document_from_response(body: &Value) -> Result<DocumentRecord, ReconcileError> {
    let payload = match body.get("document") {
        Some(doc @ Value::Object(_)) => doc.clone(),
        Some(Value::Null) | None => {
            return Err(ReconcileError::MalformedResponse(
                "no document in response".to_string(),
            ))
        }
        Some(other) => {
            return Err(ReconcileError::MalformedResponse(format!(
                "document is not an object: {other}"
            )))
        }
    };

    let mut record: DocumentRecord = serde_json::from_value(payload)
        .map_err(|err| ReconcileError::MalformedResponse(err.to_string()))?;

    if record.id.trim().is_empty() {
        record.id = format!("doc-{}", Uuid::new_v4());
    }
    if record.processed_at.trim().is_empty() {
        record.processed_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
    }
    Ok(record)
}

/// Merge the uploaded document into the store, then move the view to the confirmation.
///
/// The store is always updated before the transition fires, so the confirmation view never
/// sees the pre-merge snapshot. On error nothing is mutated.
pub fn reconcile_upload(
    machine: &mut ViewMachine,
    body: &Value,
) -> Result<Reconciled, ReconcileError> {
    let record = document_from_response(body).inspect_err(|err| {
        warn!(error = %err, "upload accepted but response was malformed");
    })?;

    let snapshot = machine
        .store_mut()
        .merge(record.clone())
        .inspect_err(|err| warn!(error = %err, "upload arrived before any report"))?;

    let outcome = machine.dispatch(ViewEvent::UploadCompleted(record.clone()));
    info!(
        id = %record.id,
        total = snapshot.total_documents(),
        "upload merged into report"
    );

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Reconciled {
        record,
        snapshot,
        outcome,
        message,
    })
}
