use std::sync::Arc;

use api::ReportSnapshot;
use dioxus::prelude::*;

use crate::core::derive::schema_usage_rows;
use crate::core::format::format_share;
use crate::t;

#[component]
pub fn SchemaUsageTable(report: Arc<ReportSnapshot>) -> Element {
    let rows = schema_usage_rows(&report);
    let in_use = rows.len();

    rsx! {
        section { class: "results-card schema-usage",
            div { class: "results-card__header",
                h2 { {t!("schemas-title")} }
                span { class: "results-card__meta", {t!("schemas-in-use", count = in_use)} }
            }

            if rows.is_empty() {
                p { class: "results-card__placeholder", {t!("schemas-empty")} }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("label-schema")} }
                            th { class: "data-table__numeric", {t!("label-documents")} }
                            th { class: "data-table__numeric", {t!("label-share")} }
                        }
                    }
                    tbody {
                        for row in rows.into_iter() {
                            tr { key: "{row.schema_id}",
                                td { "{row.title}" }
                                td { class: "data-table__numeric", "{row.count}" }
                                td { class: "data-table__numeric", {format_share(row.share_percent)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
