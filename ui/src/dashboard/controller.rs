//! Event loop binding the pure view machine to Dioxus signals.
//!
//! Every page event goes through one coroutine channel so transitions apply in dispatch order.
//! Network calls and the auto-return timer run as spawned tasks that post their result back
//! into the same channel.

use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiClient, FetchError, ReportSnapshot, SchemaFilter};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::derive::schema_options;
use crate::core::reconcile::{reconcile_upload, ReconcileError};
use crate::core::sequence::{FetchSequencer, FetchTicket};
use crate::core::timing;
use crate::core::view_state::{TimerArm, TimerToken, TransitionOutcome, ViewEvent, ViewMachine};
use crate::t;

#[derive(Debug)]
pub enum PageEvent {
    Fetch(SchemaFilter),
    FetchResolved {
        ticket: FetchTicket,
        result: Result<ReportSnapshot, FetchError>,
    },
    UploadAccepted(Value),
    AutoReturn(TimerToken),
    ManualReturn,
}

/// Handle returned by [`use_report_controller`].
#[derive(Clone)]
pub struct ReportController {
    pub machine: Signal<ViewMachine>,
    /// Inline notice for uploads the server accepted but that could not be merged.
    pub notice: Signal<Option<String>>,
    /// Server message attached to the last merged upload.
    pub upload_message: Signal<Option<String>>,
    /// Schema choices remembered from the last aggregate report.
    pub schema_options: Signal<Vec<(String, String)>>,
    events: Coroutine<PageEvent>,
}

impl ReportController {
    pub fn send(&self, event: PageEvent) {
        self.events.send(event);
    }

    pub fn fetch(&self, filter: SchemaFilter) {
        self.send(PageEvent::Fetch(filter));
    }
}

type SenderSlot = Rc<RefCell<Option<UnboundedSender<PageEvent>>>>;

/// Page-level controller. Issues the first fetch for `initial` on mount.
pub fn use_report_controller(initial: SchemaFilter) -> ReportController {
    let client = try_use_context::<ApiClient>().unwrap_or_else(ApiClient::from_env);
    let machine = use_signal(ViewMachine::new);
    let notice = use_signal(|| Option::<String>::None);
    let upload_message = use_signal(|| Option::<String>::None);
    let schema_options_signal = use_signal(Vec::<(String, String)>::new);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let events = use_coroutine(move |mut rx: UnboundedReceiver<PageEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let client = client.clone();
        let mut machine = machine;
        let mut notice = notice;
        let mut upload_message = upload_message;
        let mut schema_options_signal = schema_options_signal;
        let mut sequencer = FetchSequencer::new();

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    PageEvent::Fetch(filter) => {
                        let ticket = sequencer.issue();
                        notice.set(None);
                        machine.with_mut(|m| m.dispatch(ViewEvent::FetchStarted));
                        queue_fetch(sender_slot.clone(), client.clone(), filter, ticket);
                    }
                    PageEvent::FetchResolved { ticket, result } => {
                        if !sequencer.is_current(ticket) {
                            debug!(ticket = ticket.value(), "dropping stale report response");
                            continue;
                        }
                        match result {
                            Ok(snapshot) => {
                                if !snapshot.is_scoped() {
                                    schema_options_signal.set(schema_options(&snapshot));
                                }
                                machine.with_mut(|m| m.dispatch(ViewEvent::FetchSucceeded(snapshot)));
                            }
                            Err(err) => {
                                warn!(error = %err, "report fetch failed");
                                machine.with_mut(|m| {
                                    m.dispatch(ViewEvent::FetchFailed(err.to_string()))
                                });
                            }
                        }
                    }
                    PageEvent::UploadAccepted(body) => {
                        match machine.with_mut(|m| reconcile_upload(m, &body)) {
                            Ok(reconciled) => {
                                notice.set(None);
                                upload_message.set(reconciled.message);
                                if let TransitionOutcome::ArmTimer(arm) = reconciled.outcome {
                                    queue_auto_return(sender_slot.clone(), arm);
                                }
                            }
                            Err(err) => {
                                notice.set(Some(upload_notice(&err)));
                            }
                        }
                    }
                    PageEvent::AutoReturn(token) => {
                        machine.with_mut(|m| m.dispatch(ViewEvent::AutoReturnElapsed(token)));
                    }
                    PageEvent::ManualReturn => {
                        machine.with_mut(|m| m.dispatch(ViewEvent::ManualReturn));
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(events.tx());

    use_hook(|| events.send(PageEvent::Fetch(initial)));

    ReportController {
        machine,
        notice,
        upload_message,
        schema_options: schema_options_signal,
        events,
    }
}

fn upload_notice(err: &ReconcileError) -> String {
    match err {
        ReconcileError::MalformedResponse(_) => t!("upload-notice-no-details"),
        ReconcileError::Store(store_err) => t!("upload-notice-store", reason = store_err.to_string()),
    }
}

fn queue_fetch(sender_slot: SenderSlot, client: ApiClient, filter: SchemaFilter, ticket: FetchTicket) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        spawn(async move {
            let result = client.fetch_report(&filter).await;
            let _ = sender.unbounded_send(PageEvent::FetchResolved { ticket, result });
        });
    }
}

fn queue_auto_return(sender_slot: SenderSlot, arm: TimerArm) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        spawn(async move {
            timing::sleep_ms(arm.delay_ms).await;
            let _ = sender.unbounded_send(PageEvent::AutoReturn(arm.token));
        });
    }
}
