use api::SchemaFilter;
use dioxus::prelude::*;

use crate::core::view_state::ViewMode;
use crate::dashboard::{
    use_report_controller, ConfidencePanel, FailedPanel, FieldCoveragePanel, LoadingPanel,
    PageEvent, RecentDocuments, ReportOverview, SchemaChart, SchemaUsageTable,
    UploadConfirmation, UploadWidget,
};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let controller = use_report_controller(SchemaFilter::All);
    let (mode, snapshot) = {
        let machine = controller.machine.read();
        (machine.mode().clone(), machine.snapshot())
    };
    let notice = (controller.notice)();
    let upload_message = (controller.upload_message)().unwrap_or_default();

    let retry = controller.clone();
    let uploaded = controller.clone();
    let returned = controller.clone();

    let body = match (mode, snapshot) {
        (ViewMode::Loading, _) => rsx! { LoadingPanel {} },
        (ViewMode::Failed { reason }, _) => rsx! {
            FailedPanel {
                reason,
                on_retry: move |_| retry.fetch(SchemaFilter::All),
            }
        },
        (mode, Some(report)) => {
            let confirming = match mode {
                ViewMode::UploadConfirmation { record } => Some(record),
                _ => None,
            };
            rsx! {
                ReportOverview { report: report.clone() }

                div { class: "results__panels",
                    if let Some(record) = confirming {
                        UploadConfirmation {
                            record,
                            message: upload_message,
                            on_return: move |_| returned.send(PageEvent::ManualReturn),
                        }
                    } else {
                        UploadWidget {
                            on_uploaded: move |body| uploaded.send(PageEvent::UploadAccepted(body)),
                        }
                    }
                    SchemaChart { report: report.clone() }
                }

                div { class: "results__panels",
                    RecentDocuments { report: report.clone() }
                    SchemaUsageTable { report: report.clone() }
                }

                div { class: "results__panels",
                    ConfidencePanel { report: report.clone() }
                    FieldCoveragePanel { report: report.clone() }
                }
            }
        }
        // Loaded always carries a snapshot; render the spinner rather than an empty page.
        (_, None) => rsx! { LoadingPanel {} },
    };

    rsx! {
        section { class: "page page-dashboard",
            div { class: "results__header",
                h1 { {t!("dashboard-title")} }
                p { {t!("dashboard-intro")} }
            }

            if let Some(notice) = notice {
                p { class: "page__notice", role: "status", "{notice}" }
            }

            {body}
        }
    }
}
