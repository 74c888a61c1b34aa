use api::{validate_upload, ApiClient, UploadFile};
use dioxus::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::format::format_kb;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum UploadPhase {
    Idle,
    Uploading,
    Error(String),
}

/// PDF picker and submit button. Accepted uploads are handed to `on_uploaded` as the raw
/// server body; every failure stays local to the widget.
#[component]
pub fn UploadWidget(on_uploaded: EventHandler<Value>) -> Element {
    let client = try_use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let mut selected = use_signal(|| Option::<UploadFile>::None);
    let mut phase = use_signal(|| UploadPhase::Idle);

    let on_pick = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            selected.set(None);
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => {
                let file = UploadFile::new(name, bytes);
                match validate_upload(Some(&file)) {
                    Ok(_) => phase.set(UploadPhase::Idle),
                    Err(err) => phase.set(UploadPhase::Error(err.to_string())),
                }
                debug!(filename = %file.name, bytes = file.bytes.len(), "file selected");
                selected.set(Some(file));
            }
            None => {
                warn!(filename = %name, "selected file could not be read");
                selected.set(None);
                phase.set(UploadPhase::Error(t!("upload-unreadable")));
            }
        }
    };

    let on_submit = move |_| {
        let client = client.clone();
        async move {
            if phase() == UploadPhase::Uploading {
                return;
            }
            let file = selected();
            phase.set(UploadPhase::Uploading);
            match client.upload(file.as_ref()).await {
                Ok(body) => {
                    selected.set(None);
                    phase.set(UploadPhase::Idle);
                    on_uploaded.call(body);
                }
                Err(err) => {
                    if !err.is_local() {
                        warn!(error = %err, "upload failed");
                    }
                    phase.set(UploadPhase::Error(err.to_string()));
                }
            }
        }
    };

    let busy = phase() == UploadPhase::Uploading;
    let error = match phase() {
        UploadPhase::Error(message) => Some(message),
        _ => None,
    };
    let submit_label = if busy { t!("upload-busy") } else { t!("upload-submit") };

    rsx! {
        section { class: "results-card upload-widget",
            div { class: "results-card__header",
                h2 { {t!("upload-title")} }
            }

            label { class: "upload-widget__picker",
                span { class: "upload-widget__hint", {t!("upload-hint")} }
                input {
                    r#type: "file",
                    accept: ".pdf,application/pdf",
                    disabled: busy,
                    onchange: on_pick,
                }
            }

            if let Some(file) = selected() {
                p { class: "upload-widget__file",
                    span { class: "upload-widget__file-name", "{file.name}" }
                    span { class: "upload-widget__file-size", {format_kb(file.bytes.len())} }
                }
            }

            if let Some(message) = error {
                p { class: "upload-widget__error", role: "alert", "{message}" }
            }

            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy,
                onclick: on_submit,
                "{submit_label}"
            }
        }
    }
}
