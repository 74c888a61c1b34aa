use api::DocumentRecord;
use dioxus::prelude::*;

use crate::core::format::{format_confidence, format_fields, format_timestamp};
use crate::core::view_state::AUTO_RETURN_DELAY_MS;
use crate::t;

#[component]
pub fn UploadConfirmation(
    record: DocumentRecord,
    /// Server success message; empty when the reply carried none.
    message: String,
    on_return: EventHandler<()>,
) -> Element {
    let seconds = AUTO_RETURN_DELAY_MS / 1000;

    rsx! {
        section { class: "results-card upload-confirmation",
            div { class: "results-card__header",
                h2 { {t!("confirmation-title")} }
                span { class: "results-card__meta", {t!("confirmation-auto-return", seconds = seconds)} }
            }

            if !message.is_empty() {
                p { class: "upload-confirmation__message", "{message}" }
            }

            dl { class: "results-detail__grid",
                div {
                    dt { class: "results-detail__metric-label", {t!("label-file")} }
                    dd { "{record.filename}" }
                }
                div {
                    dt { class: "results-detail__metric-label", {t!("label-schema")} }
                    dd { {record.schema_label().to_string()} }
                }
                div {
                    dt { class: "results-detail__metric-label", {t!("label-processed")} }
                    dd { {format_timestamp(&record.processed_at)} }
                }
                div {
                    dt { class: "results-detail__metric-label", {t!("label-fields-extracted")} }
                    dd { {format_fields(record.fields_extracted)} }
                }
                div {
                    dt { class: "results-detail__metric-label", {t!("label-confidence")} }
                    dd { {format_confidence(record.confidence)} }
                }
            }

            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| on_return.call(()),
                {t!("confirmation-return")}
            }
        }
    }
}
