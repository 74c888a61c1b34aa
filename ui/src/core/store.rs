//! Holder for the last-known report snapshot.
//!
//! Snapshots are shared as `Arc<ReportSnapshot>` and never mutated in place: `replace` and
//! `merge` always install a fresh value, so anything still holding an older `Arc` keeps a
//! consistent (if stale) view.

use std::sync::Arc;

use api::{DocumentRecord, ReportSnapshot};
use thiserror::Error;

/// Bound on `recent_documents` after a merge.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no report loaded yet")]
    NoSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStore {
    current: Option<Arc<ReportSnapshot>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<ReportSnapshot>> {
        self.current.clone()
    }

    pub fn has_snapshot(&self) -> bool {
        self.current.is_some()
    }

    pub fn replace(&mut self, snapshot: ReportSnapshot) -> Arc<ReportSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.current = Some(snapshot.clone());
        snapshot
    }

    /// Prepend `document` to the current snapshot and install the result.
    pub fn merge(&mut self, document: DocumentRecord) -> Result<Arc<ReportSnapshot>, StoreError> {
        let base = self.current.as_ref().ok_or(StoreError::NoSnapshot)?;
        let next = Arc::new(base.with_document(document, RECENT_LIMIT));
        self.current = Some(next.clone());
        Ok(next)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AggregateReport;

    fn doc(id: &str, processed_at: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.into(),
            filename: format!("{id}.pdf"),
            schema_id: Some("invoice".into()),
            schema_title: Some("Invoice".into()),
            processed_at: processed_at.into(),
            confidence: Some(0.9),
            fields_extracted: Some(8),
        }
    }

    fn snapshot_with(docs: usize, recent: usize) -> ReportSnapshot {
        let list: Vec<_> = (0..docs)
            .map(|i| doc(&format!("old-{i}"), "2024-01-01T00:00:00"))
            .collect();
        ReportSnapshot::Aggregate(AggregateReport {
            total_documents: docs as u64,
            recent_documents: list.iter().take(recent).cloned().collect(),
            document_list: list,
            ..Default::default()
        })
    }

    #[test]
    fn merge_before_replace_fails() {
        let mut store = ReportStore::new();
        assert_eq!(
            store.merge(doc("a", "2024-01-01T00:00:00")),
            Err(StoreError::NoSnapshot)
        );
        assert!(!store.has_snapshot());
    }

    #[test]
    fn sequential_merges_prepend_and_bound_recent() {
        let mut store = ReportStore::new();
        store.replace(snapshot_with(3, 3));

        for i in 0..4 {
            store.merge(doc(&format!("new-{i}"), "2024-02-01T00:00:00")).unwrap();
        }

        let current = store.current().unwrap();
        assert_eq!(current.document_list().len(), 7);
        assert_eq!(current.total_documents(), 7);
        assert_eq!(current.document_list()[0].id, "new-3");
        assert_eq!(current.document_list()[3].id, "new-0");
        assert_eq!(current.recent_documents().len(), RECENT_LIMIT);
        assert_eq!(current.recent_documents()[0].id, "new-3");
    }

    #[test]
    fn recent_grows_until_bound() {
        let mut store = ReportStore::new();
        store.replace(snapshot_with(1, 1));
        store.merge(doc("x", "2024-02-01T00:00:00")).unwrap();
        assert_eq!(store.current().unwrap().recent_documents().len(), 2);
    }

    #[test]
    fn earlier_snapshot_is_not_mutated() {
        let mut store = ReportStore::new();
        let before = store.replace(snapshot_with(2, 2));
        let after = store.merge(doc("fresh", "2024-02-01T00:00:00")).unwrap();

        assert_eq!(before.document_list().len(), 2);
        assert_eq!(before.total_documents(), 2);
        assert_eq!(after.document_list().len(), 3);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn clear_drops_snapshot() {
        let mut store = ReportStore::new();
        store.replace(snapshot_with(1, 1));
        store.clear();
        assert!(store.current().is_none());
    }
}
