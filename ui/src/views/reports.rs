use api::{ReportSnapshot, SchemaFilter};
use dioxus::prelude::*;

use crate::core::view_state::ViewMode;
use crate::dashboard::{
    use_report_controller, ConfidencePanel, DocumentTable, FailedPanel, FieldCoveragePanel,
    LoadingPanel, ReportOverview, SchemaChart,
};
use crate::t;

#[component]
pub fn Reports() -> Element {
    let controller = use_report_controller(SchemaFilter::All);
    let mut filter = use_signal(|| SchemaFilter::All);
    let options = (controller.schema_options)();

    let (mode, snapshot) = {
        let machine = controller.machine.read();
        (machine.mode().clone(), machine.snapshot())
    };

    let on_filter = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            let next = SchemaFilter::from_select_value(&evt.value());
            if next != filter() {
                filter.set(next.clone());
                controller.fetch(next);
            }
        }
    };

    let retry = controller.clone();
    let current = filter().select_value().to_string();
    let all_value = SchemaFilter::ALL_SENTINEL;

    let body = match (mode, snapshot) {
        (ViewMode::Failed { reason }, _) => rsx! {
            FailedPanel {
                reason,
                on_retry: move |_| retry.fetch(filter()),
            }
        },
        (ViewMode::Loading, _) | (_, None) => rsx! { LoadingPanel {} },
        (_, Some(report)) => {
            let scoped_title = match report.as_ref() {
                ReportSnapshot::Scoped(scoped) => Some(
                    scoped
                        .schema_title
                        .clone()
                        .unwrap_or_else(|| scoped.schema_id.clone()),
                ),
                ReportSnapshot::Aggregate(_) => None,
            };
            let documents = report.document_list().to_vec();
            rsx! {
                if let Some(title) = scoped_title {
                    h2 { class: "reports__scope", {t!("reports-scoped", schema = title)} }
                }

                ReportOverview { report: report.clone() }

                div { class: "results__panels",
                    SchemaChart { report: report.clone() }
                    ConfidencePanel { report: report.clone() }
                }

                FieldCoveragePanel { report: report.clone() }
                DocumentTable { documents }
            }
        }
    };

    rsx! {
        section { class: "page page-reports",
            div { class: "results__header",
                h1 { {t!("reports-title")} }
                div { class: "reports__filter",
                    label { r#for: "schema-filter", {t!("reports-filter-label")} }
                    select {
                        id: "schema-filter",
                        value: "{current}",
                        onchange: on_filter,
                        option { value: "{all_value}", {t!("reports-filter-all")} }
                        for (id, title) in options.into_iter() {
                            option { key: "{id}", value: "{id}", "{title}" }
                        }
                    }
                }
            }

            {body}
        }
    }
}
