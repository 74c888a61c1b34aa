use std::sync::Arc;

use api::ReportSnapshot;
use dioxus::prelude::*;

use crate::core::derive::{confidence_tier, recent_top_n};
use crate::core::format::{format_confidence, format_timestamp};
use crate::core::store::RECENT_LIMIT;
use crate::t;

/// Newest documents, ranked from the full document list rather than the server's recent slice.
#[component]
pub fn RecentDocuments(report: Arc<ReportSnapshot>) -> Element {
    let recent = recent_top_n(report.document_list(), RECENT_LIMIT);
    let shown = recent.len();

    rsx! {
        section { class: "results-card results-list",
            div { class: "results-card__header",
                h2 { {t!("recent-title")} }
                if !recent.is_empty() {
                    span { class: "results-card__meta", {t!("recent-latest", count = shown)} }
                }
            }

            if recent.is_empty() {
                p { class: "results-card__placeholder", {t!("recent-empty")} }
            } else {
                ul { class: "results-list__items",
                    for doc in recent.into_iter() {
                        li { key: "{doc.id}", class: "results-list__item",
                            span { class: "results-list__heading",
                                span { class: "results-list__task", "{doc.filename}" }
                                span { class: "results-list__timestamp", {format_timestamp(&doc.processed_at)} }
                            }
                            div { class: "results-list__metrics",
                                span { class: "results-list__metric",
                                    span { class: "results-list__metric-label", {t!("label-schema")} }
                                    span { class: "results-list__metric-value", {doc.schema_label().to_string()} }
                                }
                                span { class: "results-list__metric",
                                    span { class: "results-list__metric-label", {t!("label-confidence")} }
                                    if let Some(score) = doc.confidence {
                                        span { class: confidence_tier(score).css_class(), {format_confidence(Some(score))} }
                                    } else {
                                        span { class: "results-list__metric-value", {format_confidence(None)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
