//! Ordering guard for overlapping asynchronous mutations.
//!
//! Every store mutation is tagged with a monotonically increasing sequence
//! number before it is sent. When a mutation completes, its result is applied
//! to local state only if no newer mutation for the same row completed in the
//! meantime; a slow response from an older edit can no longer overwrite a
//! newer one.

use std::collections::HashMap;

use newsdesk_api::ContentKind;

/// Issues mutation tickets and records which sequence number last completed
/// per row.
#[derive(Debug, Default)]
pub struct MutationClock {
    next_seq: u64,
    completed: HashMap<(ContentKind, String), u64>,
}

/// Proof that a mutation was started, carrying its place in the sequence.
#[derive(Debug, Clone)]
pub struct MutationTicket {
    kind: ContentKind,
    id: String,
    seq: u64,
}

impl MutationClock {
    /// Take a ticket for a mutation of the given row. Call before awaiting
    /// the store.
    pub fn begin(&mut self, kind: ContentKind, id: &str) -> MutationTicket {
        self.next_seq += 1;
        MutationTicket {
            kind,
            id: id.to_string(),
            seq: self.next_seq,
        }
    }

    /// Record a completed mutation. Returns false when a newer mutation for
    /// the same row already completed, in which case the caller must discard
    /// the result.
    pub fn admit(&mut self, ticket: &MutationTicket) -> bool {
        let key = (ticket.kind, ticket.id.clone());
        match self.completed.get(&key) {
            Some(&seq) if seq > ticket.seq => false,
            _ => {
                self.completed.insert(key, ticket.seq);
                true
            }
        }
    }

    /// Forget a row entirely, e.g. after it has been deleted.
    pub fn retire(&mut self, kind: ContentKind, id: &str) {
        self.completed.remove(&(kind, id.to_string()));
    }
}
