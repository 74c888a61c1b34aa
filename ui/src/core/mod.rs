//! Platform-agnostic report state: the snapshot store, derivations, upload reconciliation,
//! fetch sequencing, and the view state machine. Nothing in here touches the network or the DOM.

pub mod derive;
pub mod format;
pub mod reconcile;
pub mod sequence;
pub mod store;
pub mod timing;
pub mod view_state;
