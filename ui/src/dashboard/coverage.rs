use std::sync::Arc;

use api::ReportSnapshot;
use dioxus::prelude::*;

use crate::core::derive::field_coverage_rows;
use crate::core::format::format_percent;
use crate::t;

#[component]
pub fn FieldCoveragePanel(report: Arc<ReportSnapshot>) -> Element {
    let schemas = field_coverage_rows(&report);

    rsx! {
        section { class: "results-card field-coverage",
            div { class: "results-card__header",
                h2 { {t!("coverage-title")} }
            }

            if schemas.is_empty() {
                p { class: "results-card__placeholder", {t!("coverage-empty")} }
            }

            for schema in schemas.into_iter() {
                div { key: "{schema.schema_id}", class: "field-coverage__schema",
                    h3 { class: "field-coverage__name",
                        "{schema.schema_id}"
                        if let Some(overall) = schema.overall {
                            span { class: "results-card__meta", " " {t!("coverage-overall", percent = format_percent(overall))} }
                        }
                    }
                    ul { class: "field-coverage__fields",
                        for row in schema.fields.into_iter() {
                            li { key: "{row.field}", class: "field-coverage__row",
                                span { class: "field-coverage__label", "{row.field}" }
                                span { class: "field-coverage__bar",
                                    span {
                                        class: "field-coverage__fill",
                                        style: format!("width: {:.1}%", row.ratio * 100.0),
                                    }
                                }
                                span { class: "field-coverage__count", "{row.observed}/{row.total}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
