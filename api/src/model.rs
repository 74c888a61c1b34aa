//! Wire model for report and upload payloads returned by the classification backend.
//!
//! Every collection is `#[serde(default)]` because the backend omits sections it has no data for
//! (a fresh install reports no `field_coverage`, a scoped report has no `schemas_used`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

/// One classified document as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRecord {
    #[serde(rename = "classification_id", default)]
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_title: Option<String>,
    #[serde(default)]
    pub processed_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(
        rename = "fields_count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fields_extracted: Option<u32>,
}

impl DocumentRecord {
    /// Parsed `processed_at`, if it is a recognisable timestamp.
    pub fn processed_at_utc(&self) -> Option<OffsetDateTime> {
        parse_timestamp(&self.processed_at)
    }

    /// Human label for the schema this document was filed under.
    pub fn schema_label(&self) -> &str {
        self.schema_title
            .as_deref()
            .or(self.schema_id.as_deref())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }
}

pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaUsage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldStat {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total: u64,
}

impl FieldStat {
    /// Observed / total, clamped to `[0, 1]`. Zero when the schema has no documents yet.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.count as f64 / self.total as f64).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SchemaFieldCoverage {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_coverage: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SchemaConfidence {
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfidenceMetrics {
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub by_schema: BTreeMap<String, SchemaConfidence>,
}

/// Report covering every schema (`GET /api/reports`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AggregateReport {
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub schemas_used: BTreeMap<String, SchemaUsage>,
    #[serde(default)]
    pub field_coverage: BTreeMap<String, SchemaFieldCoverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_metrics: Option<ConfidenceMetrics>,
    #[serde(rename = "recent_classifications", default)]
    pub recent_documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub document_list: Vec<DocumentRecord>,
}

/// Report restricted to one schema (`GET /api/reports/{schema_id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScopedReport {
    #[serde(default)]
    pub generated_at: String,
    pub schema_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_title: Option<String>,
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub field_coverage: BTreeMap<String, SchemaFieldCoverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_metrics: Option<ConfidenceMetrics>,
    #[serde(rename = "recent_classifications", default)]
    pub recent_documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub document_list: Vec<DocumentRecord>,
}

/// A report snapshot in either of its two shapes.
///
/// The backend never sends a discriminant; use [`classify_response`] to pick the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportSnapshot {
    Aggregate(AggregateReport),
    Scoped(ScopedReport),
}

impl ReportSnapshot {
    pub fn generated_at(&self) -> &str {
        match self {
            Self::Aggregate(report) => &report.generated_at,
            Self::Scoped(report) => &report.generated_at,
        }
    }

    pub fn total_documents(&self) -> u64 {
        match self {
            Self::Aggregate(report) => report.total_documents,
            Self::Scoped(report) => report.total_documents,
        }
    }

    pub fn document_list(&self) -> &[DocumentRecord] {
        match self {
            Self::Aggregate(report) => &report.document_list,
            Self::Scoped(report) => &report.document_list,
        }
    }

    pub fn recent_documents(&self) -> &[DocumentRecord] {
        match self {
            Self::Aggregate(report) => &report.recent_documents,
            Self::Scoped(report) => &report.recent_documents,
        }
    }

    pub fn field_coverage(&self) -> &BTreeMap<String, SchemaFieldCoverage> {
        match self {
            Self::Aggregate(report) => &report.field_coverage,
            Self::Scoped(report) => &report.field_coverage,
        }
    }

    pub fn confidence_metrics(&self) -> Option<&ConfidenceMetrics> {
        match self {
            Self::Aggregate(report) => report.confidence_metrics.as_ref(),
            Self::Scoped(report) => report.confidence_metrics.as_ref(),
        }
    }

    /// Per-schema usage. Empty for scoped reports.
    pub fn schemas_used(&self) -> Option<&BTreeMap<String, SchemaUsage>> {
        match self {
            Self::Aggregate(report) => Some(&report.schemas_used),
            Self::Scoped(_) => None,
        }
    }

    pub fn is_scoped(&self) -> bool {
        matches!(self, Self::Scoped(_))
    }

    /// Mutable access to the fields an upload is allowed to amend.
    fn parts_mut(
        &mut self,
    ) -> (&mut u64, &mut Vec<DocumentRecord>, &mut Vec<DocumentRecord>) {
        match self {
            Self::Aggregate(report) => (
                &mut report.total_documents,
                &mut report.recent_documents,
                &mut report.document_list,
            ),
            Self::Scoped(report) => (
                &mut report.total_documents,
                &mut report.recent_documents,
                &mut report.document_list,
            ),
        }
    }

    /// Copy of this snapshot with `document` prepended and the total bumped by one.
    ///
    /// `schemas_used`, `field_coverage` and `confidence_metrics` are left untouched; they stay
    /// stale until the next full fetch.
    pub fn with_document(&self, document: DocumentRecord, recent_limit: usize) -> Self {
        let mut next = self.clone();
        {
            let (total, recent, list) = next.parts_mut();
            *total = total.saturating_add(1);
            list.insert(0, document.clone());
            recent.insert(0, document);
            recent.truncate(recent_limit);
        }
        next
    }
}

/// Decide which report shape `body` has by looking for `schemas_used`.
pub fn classify_response(body: Value) -> Result<ReportSnapshot, serde_json::Error> {
    if is_aggregate_shape(&body) {
        serde_json::from_value(body).map(ReportSnapshot::Aggregate)
    } else {
        serde_json::from_value(body).map(ReportSnapshot::Scoped)
    }
}

pub fn is_aggregate_shape(body: &Value) -> bool {
    body.as_object()
        .map(|object| object.contains_key("schemas_used"))
        .unwrap_or(false)
}

/// Body returned by `POST /api/upload` on success.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub document: Option<Value>,
}

/// Body returned on any non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Parse RFC 3339, falling back to offset-less ISO-8601 read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    let naive = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    PrimitiveDateTime::parse(raw, naive)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
