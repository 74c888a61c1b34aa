use dioxus::prelude::*;

use crate::t;

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        div { class: "status-panel status-panel--loading", role: "status",
            span { class: "status-panel__spinner", aria_hidden: "true" }
            p { {t!("status-loading")} }
        }
    }
}

/// Shown after a failed fetch. There is no automatic retry.
#[component]
pub fn FailedPanel(reason: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "status-panel status-panel--failed", role: "alert",
            h2 { {t!("status-failed")} }
            p { class: "status-panel__reason", "{reason}" }
            button {
                r#type: "button",
                class: "button button--accent",
                onclick: move |_| on_retry.call(()),
                {t!("status-retry")}
            }
        }
    }
}
