use api::DocumentRecord;
use dioxus::prelude::*;

use crate::core::derive::confidence_tier;
use crate::core::format::{format_confidence, format_fields, format_timestamp, NOT_AVAILABLE};
use crate::t;

/// Full document list in server order.
#[component]
pub fn DocumentTable(documents: Vec<DocumentRecord>) -> Element {
    let total = documents.len();

    rsx! {
        section { class: "results-card document-table",
            div { class: "results-card__header",
                h2 { {t!("documents-title")} }
                span { class: "results-card__meta", {t!("documents-total", count = total)} }
            }

            if documents.is_empty() {
                p { class: "results-card__placeholder", {t!("documents-empty")} }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("label-file")} }
                            th { {t!("label-schema")} }
                            th { {t!("label-processed")} }
                            th { class: "data-table__numeric", {t!("label-fields")} }
                            th { {t!("label-confidence")} }
                        }
                    }
                    tbody {
                        for doc in documents.into_iter() {
                            tr { key: "{doc.id}",
                                td { "{doc.filename}" }
                                td { {doc.schema_label().to_string()} }
                                td { {format_timestamp(&doc.processed_at)} }
                                td { class: "data-table__numeric", {format_fields(doc.fields_extracted)} }
                                td {
                                    if let Some(score) = doc.confidence {
                                        span { class: confidence_tier(score).css_class(), {format_confidence(Some(score))} }
                                    } else {
                                        span { class: "tag", "{NOT_AVAILABLE}" }
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
