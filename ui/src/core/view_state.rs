//! View state machine shared by the dashboard and reports pages.
//!
//! Modes
//! -----
//! `Loading → {Loaded, Failed}`, `Loaded → UploadConfirmation → Loaded`, and `FetchStarted`
//! re-enters `Loading` from anywhere (retry after `Failed`, filter change while `Loaded`).
//!
//! The auto-return timer lives outside this module: entering `UploadConfirmation` hands the
//! caller a [`TimerArm`] to schedule, and the caller later dispatches
//! `AutoReturnElapsed(token)`. Only the token of the most recently armed timer is honoured, so
//! a rearm or a manual return makes any earlier timer a no-op.

use std::sync::Arc;

use api::{DocumentRecord, ReportSnapshot};
use tracing::debug;

use super::store::ReportStore;

/// Delay before the upload confirmation returns to the main view on its own.
pub const AUTO_RETURN_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Request to schedule a single-shot auto-return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerArm {
    pub token: TimerToken,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Loading,
    Failed { reason: String },
    Loaded,
    UploadConfirmation { record: DocumentRecord },
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed { .. } => "failed",
            Self::Loaded => "loaded",
            Self::UploadConfirmation { .. } => "upload-confirmation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    FetchStarted,
    FetchSucceeded(ReportSnapshot),
    FetchFailed(String),
    UploadCompleted(DocumentRecord),
    AutoReturnElapsed(TimerToken),
    ManualReturn,
}

impl ViewEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::FetchStarted => "fetch-started",
            Self::FetchSucceeded(_) => "fetch-succeeded",
            Self::FetchFailed(_) => "fetch-failed",
            Self::UploadCompleted(_) => "upload-completed",
            Self::AutoReturnElapsed(_) => "auto-return-elapsed",
            Self::ManualReturn => "manual-return",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    /// Applied, and the caller must schedule this timer.
    ArmTimer(TimerArm),
    /// Not valid in the current mode (or a stale timer); nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewMachine {
    mode: ViewMode,
    store: ReportStore,
    pending_timer: Option<TimerToken>,
    next_token: u64,
}

impl Default for ViewMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewMachine {
    /// Starts in `Loading`: pages kick off their first fetch on mount.
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Loading,
            store: ReportStore::new(),
            pending_timer: None,
            next_token: 0,
        }
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn snapshot(&self) -> Option<Arc<ReportSnapshot>> {
        self.store.current()
    }

    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    /// Store access for the upload reconciler, which merges before dispatching.
    pub fn store_mut(&mut self) -> &mut ReportStore {
        &mut self.store
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending_timer
    }

    pub fn dispatch(&mut self, event: ViewEvent) -> TransitionOutcome {
        let event_name = event.name();
        let from = self.mode.name();

        let outcome = match event {
            ViewEvent::FetchStarted => {
                self.pending_timer = None;
                self.mode = ViewMode::Loading;
                TransitionOutcome::Applied
            }
            ViewEvent::FetchSucceeded(snapshot) if self.mode == ViewMode::Loading => {
                self.store.replace(snapshot);
                self.mode = ViewMode::Loaded;
                TransitionOutcome::Applied
            }
            ViewEvent::FetchFailed(reason) if self.mode == ViewMode::Loading => {
                self.store.clear();
                self.mode = ViewMode::Failed { reason };
                TransitionOutcome::Applied
            }
            ViewEvent::UploadCompleted(record)
                if self.mode == ViewMode::Loaded || self.is_confirming() =>
            {
                let token = self.arm_timer();
                self.mode = ViewMode::UploadConfirmation { record };
                TransitionOutcome::ArmTimer(TimerArm {
                    token,
                    delay_ms: AUTO_RETURN_DELAY_MS,
                })
            }
            ViewEvent::AutoReturnElapsed(token)
                if self.is_confirming() && self.pending_timer == Some(token) =>
            {
                self.pending_timer = None;
                self.mode = ViewMode::Loaded;
                TransitionOutcome::Applied
            }
            ViewEvent::ManualReturn if self.is_confirming() => {
                self.pending_timer = None;
                self.mode = ViewMode::Loaded;
                TransitionOutcome::Applied
            }
            _ => TransitionOutcome::Ignored,
        };

        match outcome {
            TransitionOutcome::Ignored => {
                debug!(event = event_name, mode = from, "view event ignored");
            }
            _ => {
                debug!(event = event_name, from, to = self.mode.name(), "view transition");
            }
        }
        outcome
    }

    fn is_confirming(&self) -> bool {
        matches!(self.mode, ViewMode::UploadConfirmation { .. })
    }

    fn arm_timer(&mut self) -> TimerToken {
        self.next_token = self.next_token.wrapping_add(1);
        let token = TimerToken(self.next_token);
        self.pending_timer = Some(token);
        token
    }
}
