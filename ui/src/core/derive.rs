//! Pure projections of a report snapshot into chart- and table-ready shapes.

use std::cmp::Ordering;

use api::model::{FieldStat, UNCATEGORIZED_LABEL};
use api::{DocumentRecord, ReportSnapshot};

/// Colour slot for a chart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBucket {
    /// Index into the schema palette (cycled by the renderer).
    Schema(usize),
    Uncategorized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub label: String,
    pub value: u64,
    pub bucket: ChartBucket,
}

/// Documents counted in the total but attributed to no schema. Never negative.
pub fn uncategorized_count(snapshot: &ReportSnapshot) -> u64 {
    let categorized: u64 = snapshot
        .schemas_used()
        .map(|schemas| schemas.values().map(|usage| usage.count).sum())
        .unwrap_or_else(|| snapshot.total_documents());
    snapshot.total_documents().saturating_sub(categorized)
}

/// One bar per schema (ordered by schema id) plus a trailing "Uncategorized" bar when needed.
///
/// A scoped snapshot yields a single bar for its schema.
pub fn chart_series(snapshot: &ReportSnapshot) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = match snapshot {
        ReportSnapshot::Aggregate(report) => report
            .schemas_used
            .values()
            .enumerate()
            .map(|(index, usage)| ChartEntry {
                label: usage.title.clone(),
                value: usage.count,
                bucket: ChartBucket::Schema(index),
            })
            .collect(),
        ReportSnapshot::Scoped(report) => vec![ChartEntry {
            label: report
                .schema_title
                .clone()
                .unwrap_or_else(|| report.schema_id.clone()),
            value: report.total_documents,
            bucket: ChartBucket::Schema(0),
        }],
    };

    let uncategorized = uncategorized_count(snapshot);
    if uncategorized > 0 {
        entries.push(ChartEntry {
            label: UNCATEGORIZED_LABEL.to_string(),
            value: uncategorized,
            bucket: ChartBucket::Uncategorized,
        });
    }
    entries
}

/// Share of `total` represented by `count`, in percent rounded to one decimal.
pub fn share_percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaUsageRow {
    pub schema_id: String,
    pub title: String,
    pub count: u64,
    pub share_percent: f64,
}

/// Schema usage with shares recomputed against the snapshot's current total.
pub fn schema_usage_rows(snapshot: &ReportSnapshot) -> Vec<SchemaUsageRow> {
    let total = snapshot.total_documents();
    snapshot
        .schemas_used()
        .map(|schemas| {
            schemas
                .iter()
                .map(|(schema_id, usage)| SchemaUsageRow {
                    schema_id: schema_id.clone(),
                    title: usage.title.clone(),
                    count: usage.count,
                    share_percent: share_percent(usage.count, total),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `(schema_id, title)` pairs for the schema filter.
pub fn schema_options(snapshot: &ReportSnapshot) -> Vec<(String, String)> {
    snapshot
        .schemas_used()
        .map(|schemas| {
            schemas
                .iter()
                .map(|(id, usage)| {
                    let title = if usage.title.is_empty() {
                        id.clone()
                    } else {
                        usage.title.clone()
                    };
                    (id.clone(), title)
                })
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::High => "tag tag-high",
            Self::Medium => "tag tag-medium",
            Self::Low => "tag tag-low",
        }
    }
}

/// Bucket a confidence score. Both thresholds are inclusive.
///
/// Absent scores are the caller's problem; this never imputes one.
pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    if confidence >= 0.9 {
        ConfidenceTier::High
    } else if confidence >= 0.7 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unscored: usize,
}

pub fn tier_distribution(documents: &[DocumentRecord]) -> TierCounts {
    documents
        .iter()
        .fold(TierCounts::default(), |mut counts, doc| {
            match doc.confidence.map(confidence_tier) {
                Some(ConfidenceTier::High) => counts.high += 1,
                Some(ConfidenceTier::Medium) => counts.medium += 1,
                Some(ConfidenceTier::Low) => counts.low += 1,
                None => counts.unscored += 1,
            }
            counts
        })
}

/// The `n` most recently processed documents, newest first.
///
/// Stable: documents with equal timestamps keep their input order. Unparseable timestamps sort
/// after every parseable one.
pub fn recent_top_n(documents: &[DocumentRecord], n: usize) -> Vec<DocumentRecord> {
    let mut keyed: Vec<_> = documents
        .iter()
        .map(|doc| (doc.processed_at_utc(), doc))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| newest_first(a, b));
    keyed
        .into_iter()
        .take(n)
        .map(|(_, doc)| doc.clone())
        .collect()
}

fn newest_first<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    // `None < Some`, so reversing puts unparseable stamps last.
    b.cmp(a)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldCoverageRow {
    pub field: String,
    pub observed: u64,
    pub total: u64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaCoverage {
    pub schema_id: String,
    /// Σobserved / Σtotal over the schema's fields, in `[0, 1]`. `None` without opportunities.
    pub overall: Option<f64>,
    pub fields: Vec<FieldCoverageRow>,
}

/// Per-schema field coverage with every ratio recomputed from counts.
///
/// The wire `overall_coverage` is ignored: the backend sends it on a 0-100 scale and it goes
/// stale after a merge.
pub fn field_coverage_rows(snapshot: &ReportSnapshot) -> Vec<SchemaCoverage> {
    snapshot
        .field_coverage()
        .iter()
        .map(|(schema_id, coverage)| SchemaCoverage {
            schema_id: schema_id.clone(),
            overall: overall_ratio(coverage.fields.values()),
            fields: coverage
                .fields
                .iter()
                .map(|(field, stat)| FieldCoverageRow {
                    field: field.clone(),
                    observed: stat.count,
                    total: stat.total,
                    ratio: stat.ratio(),
                })
                .collect(),
        })
        .collect()
}

fn overall_ratio<'a>(stats: impl Iterator<Item = &'a FieldStat>) -> Option<f64> {
    let (observed, total) = stats.fold((0u64, 0u64), |(observed, total), stat| {
        (observed + stat.count, total + stat.total)
    });
    (total > 0).then(|| (observed as f64 / total as f64).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::model::SchemaFieldCoverage;
    use api::{AggregateReport, SchemaUsage, ScopedReport};
    use std::collections::BTreeMap;

    fn usage(title: &str, count: u64) -> SchemaUsage {
        SchemaUsage {
            title: title.into(),
            count,
        }
    }

    fn aggregate(total: u64, schemas: &[(&str, &str, u64)]) -> ReportSnapshot {
        let schemas_used: BTreeMap<_, _> = schemas
            .iter()
            .map(|(id, title, count)| (id.to_string(), usage(title, *count)))
            .collect();
        ReportSnapshot::Aggregate(AggregateReport {
            total_documents: total,
            schemas_used,
            ..Default::default()
        })
    }

    fn doc(id: &str, processed_at: &str, confidence: Option<f64>) -> DocumentRecord {
        DocumentRecord {
            id: id.into(),
            filename: format!("{id}.pdf"),
            schema_id: None,
            schema_title: None,
            processed_at: processed_at.into(),
            confidence,
            fields_extracted: None,
        }
    }

    #[test]
    fn series_appends_uncategorized_remainder() {
        let snapshot = aggregate(10, &[("invoice", "invoice", 6), ("receipt", "receipt", 3)]);
        let series: Vec<_> = chart_series(&snapshot)
            .into_iter()
            .map(|entry| (entry.label, entry.value))
            .collect();
        assert_eq!(
            series,
            vec![
                ("invoice".to_string(), 6),
                ("receipt".to_string(), 3),
                ("Uncategorized".to_string(), 1),
            ]
        );
    }

    #[test]
    fn series_omits_uncategorized_when_fully_attributed() {
        let snapshot = aggregate(5, &[("invoice", "Invoice", 5)]);
        let series = chart_series(&snapshot);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].bucket, ChartBucket::Schema(0));
    }

    #[test]
    fn inconsistent_counts_clamp_to_zero() {
        let snapshot = aggregate(4, &[("invoice", "Invoice", 3), ("receipt", "Receipt", 3)]);
        assert_eq!(uncategorized_count(&snapshot), 0);
        assert!(chart_series(&snapshot)
            .iter()
            .all(|entry| entry.bucket != ChartBucket::Uncategorized));
    }

    #[test]
    fn counts_plus_uncategorized_equal_total() {
        for (total, a, b) in [(0, 0, 0), (7, 2, 2), (9, 9, 0), (12, 1, 10)] {
            let snapshot = aggregate(total, &[("a", "A", a), ("b", "B", b)]);
            let summed: u64 = chart_series(&snapshot).iter().map(|e| e.value).sum();
            assert_eq!(summed, total);
        }
    }

    #[test]
    fn scoped_series_is_single_bar() {
        let snapshot = ReportSnapshot::Scoped(ScopedReport {
            schema_id: "receipt".into(),
            schema_title: Some("Receipt".into()),
            total_documents: 4,
            ..Default::default()
        });
        let series = chart_series(&snapshot);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "Receipt");
        assert_eq!(series[0].value, 4);
    }

    #[test]
    fn shares_are_recomputed_from_counts() {
        let snapshot = aggregate(8, &[("invoice", "Invoice", 2), ("receipt", "Receipt", 6)]);
        let rows = schema_usage_rows(&snapshot);
        assert_eq!(rows[0].share_percent, 25.0);
        assert_eq!(rows[1].share_percent, 75.0);
        assert_eq!(share_percent(1, 3), 33.3);
        assert_eq!(share_percent(3, 0), 0.0);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(confidence_tier(0.95), ConfidenceTier::High);
        assert_eq!(confidence_tier(0.9), ConfidenceTier::High);
        assert_eq!(confidence_tier(0.75), ConfidenceTier::Medium);
        assert_eq!(confidence_tier(0.7), ConfidenceTier::Medium);
        assert_eq!(confidence_tier(0.5), ConfidenceTier::Low);
    }

    #[test]
    fn tier_distribution_keeps_unscored_apart() {
        let docs = vec![
            doc("a", "", Some(0.95)),
            doc("b", "", Some(0.8)),
            doc("c", "", None),
            doc("d", "", Some(0.1)),
        ];
        assert_eq!(
            tier_distribution(&docs),
            TierCounts {
                high: 1,
                medium: 1,
                low: 1,
                unscored: 1
            }
        );
    }

    #[test]
    fn recent_sorts_newest_first_and_truncates() {
        let docs = vec![
            doc("old", "2024-01-01T08:00:00", None),
            doc("newest", "2024-03-01T08:00:00Z", None),
            doc("middle", "2024-02-01T08:00:00.5", None),
        ];
        let ids: Vec<_> = recent_top_n(&docs, 2).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["newest", "middle"]);
        assert_eq!(docs[0].id, "old");
    }

    #[test]
    fn recent_is_stable_on_ties() {
        let docs = vec![
            doc("first", "2024-01-01T08:00:00", None),
            doc("second", "2024-01-01T08:00:00", None),
            doc("third", "2024-01-01T08:00:00", None),
        ];
        let ids: Vec<_> = recent_top_n(&docs, 5).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn recent_is_idempotent_on_sorted_input() {
        let docs = vec![
            doc("c", "2024-03-01T00:00:00", None),
            doc("b", "2024-02-01T00:00:00", None),
            doc("a", "2024-01-01T00:00:00", None),
        ];
        let once = recent_top_n(&docs, 3);
        let twice = recent_top_n(&once, 3);
        assert_eq!(once, docs);
        assert_eq!(twice, once);
    }

    #[test]
    fn unparseable_timestamps_sort_last() {
        let docs = vec![
            doc("garbled", "not a date", None),
            doc("dated", "2020-01-01T00:00:00", None),
        ];
        let ids: Vec<_> = recent_top_n(&docs, 2).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["dated", "garbled"]);
    }

    #[test]
    fn coverage_ratio_ignores_wire_value() {
        let mut fields = BTreeMap::new();
        fields.insert("total".to_string(), FieldStat { count: 3, total: 4 });
        fields.insert("vendor".to_string(), FieldStat { count: 0, total: 0 });
        let mut coverage = BTreeMap::new();
        coverage.insert(
            "invoice".to_string(),
            SchemaFieldCoverage {
                fields,
                overall_coverage: Some(0.5),
            },
        );
        let snapshot = ReportSnapshot::Aggregate(AggregateReport {
            field_coverage: coverage,
            ..Default::default()
        });

        let rows = field_coverage_rows(&snapshot);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].overall, Some(0.75));
        assert_eq!(rows[0].fields[0].ratio, 0.75);
        assert_eq!(rows[0].fields[1].ratio, 0.0);
    }

    #[test]
    fn overall_coverage_is_a_ratio_even_when_wire_sends_percent() {
        let snapshot: ReportSnapshot = api::classify_response(serde_json::json!({
            "schema_id": "invoice",
            "field_coverage": {
                "invoice": {
                    "fields": {
                        "total": { "count": 3, "total": 6, "coverage": 50.0 },
                        "vendor": { "count": 6, "total": 6, "coverage": 100.0 }
                    },
                    "overall_coverage": 50.0
                },
                "empty": { "fields": {}, "overall_coverage": 0.0 }
            }
        }))
        .unwrap();

        let rows = field_coverage_rows(&snapshot);
        let empty = rows.iter().find(|r| r.schema_id == "empty").unwrap();
        let invoice = rows.iter().find(|r| r.schema_id == "invoice").unwrap();
        assert_eq!(empty.overall, None);
        assert_eq!(invoice.overall, Some(0.75));
        assert_eq!(crate::core::format::format_percent(invoice.overall.unwrap()), "75.0%");
    }
}
