use std::sync::Arc;

use api::ReportSnapshot;
use dioxus::prelude::*;

use crate::core::derive::tier_distribution;
use crate::core::format::{format_confidence, format_percent};
use crate::t;

/// Confidence averages plus the High/Medium/Low split of the document list.
#[component]
pub fn ConfidencePanel(report: Arc<ReportSnapshot>) -> Element {
    let metrics = report.confidence_metrics().cloned().unwrap_or_default();
    let tiers = tier_distribution(report.document_list());
    let titles = report.schemas_used().cloned().unwrap_or_default();

    let per_schema: Vec<(String, String, String, String, String)> = metrics
        .by_schema
        .iter()
        .map(|(id, stats)| {
            let title = titles
                .get(id)
                .map(|usage| usage.title.clone())
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| id.clone());
            (
                title,
                format_percent(stats.average),
                format_percent(stats.median),
                format_percent(stats.min),
                format_percent(stats.max),
            )
        })
        .collect();

    rsx! {
        section { class: "results-card confidence-panel",
            div { class: "results-card__header",
                h2 { {t!("confidence-title")} }
            }

            dl { class: "confidence-panel__summary",
                div {
                    dt { {t!("label-average")} }
                    dd { {format_confidence(metrics.average)} }
                }
                div {
                    dt { {t!("label-median")} }
                    dd { {format_confidence(metrics.median)} }
                }
            }

            ul { class: "confidence-panel__tiers",
                li { span { class: "tag tag-high", {t!("tier-high")} } " {tiers.high}" }
                li { span { class: "tag tag-medium", {t!("tier-medium")} } " {tiers.medium}" }
                li { span { class: "tag tag-low", {t!("tier-low")} } " {tiers.low}" }
                if tiers.unscored > 0 {
                    li { span { class: "tag", {t!("tier-unscored")} } " {tiers.unscored}" }
                }
            }

            if !per_schema.is_empty() {
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("label-schema")} }
                            th { class: "data-table__numeric", {t!("label-avg")} }
                            th { class: "data-table__numeric", {t!("label-median")} }
                            th { class: "data-table__numeric", {t!("label-min")} }
                            th { class: "data-table__numeric", {t!("label-max")} }
                        }
                    }
                    tbody {
                        for (title, avg, median, min, max) in per_schema.into_iter() {
                            tr { key: "{title}",
                                td { "{title}" }
                                td { class: "data-table__numeric", "{avg}" }
                                td { class: "data-table__numeric", "{median}" }
                                td { class: "data-table__numeric", "{min}" }
                                td { class: "data-table__numeric", "{max}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
