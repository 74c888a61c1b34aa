use std::sync::Arc;

use api::ReportSnapshot;
use dioxus::prelude::*;

use crate::core::derive::{schema_usage_rows, tier_distribution, uncategorized_count};
use crate::core::format::{format_confidence, format_timestamp};
use crate::t;

/// Headline numbers for the current snapshot.
#[component]
pub fn ReportOverview(report: Arc<ReportSnapshot>) -> Element {
    let total = report.total_documents();
    let schema_count = schema_usage_rows(&report).len();
    let uncategorized = uncategorized_count(&report);
    let average = format_confidence(report.confidence_metrics().and_then(|m| m.average));
    let median = format_confidence(report.confidence_metrics().and_then(|m| m.median));
    let tiers = tier_distribution(report.document_list());
    let generated = format_timestamp(report.generated_at());

    rsx! {
        section { class: "results-card report-overview",
            div { class: "results-card__header",
                h2 { {t!("overview-title")} }
                if !report.generated_at().is_empty() {
                    span { class: "results-card__meta", {t!("overview-generated", when = generated)} }
                }
            }

            div { class: "results-highlights",
                div { class: "results-highlight",
                    span { class: "results-highlight__label", {t!("overview-total")} }
                    strong { class: "results-highlight__value", "{total}" }
                    if report.is_scoped() {
                        span { class: "results-highlight__meta", {t!("overview-scoped")} }
                    } else {
                        span { class: "results-highlight__meta",
                            {t!("overview-schema-split", schemas = schema_count, uncategorized = uncategorized)}
                        }
                    }
                }
                div { class: "results-highlight",
                    span { class: "results-highlight__label", {t!("overview-average")} }
                    strong { class: "results-highlight__value", "{average}" }
                    span { class: "results-highlight__meta", {t!("overview-median", median = median)} }
                }
                div { class: "results-highlight",
                    span { class: "results-highlight__label", {t!("overview-high-confidence")} }
                    strong { class: "results-highlight__value", "{tiers.high}" }
                    span { class: "results-highlight__meta",
                        {t!(
                            "overview-tier-split",
                            medium = tiers.medium,
                            low = tiers.low,
                            unscored = tiers.unscored
                        )}
                    }
                }
            }
        }
    }
}
