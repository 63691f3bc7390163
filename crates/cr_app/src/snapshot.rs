//! Per-request display state.
//!
//! The page holds one `ViewState` per tool. Each user action begins a new
//! request, which invalidates interest in any still-running one; a resolution
//! is installed only when its ticket is still current. Snapshots are whole
//! values replaced atomically, never field-by-field merges, so a stale
//! in-flight request can never interleave with a newer action's result.

/// What one finished action left behind: either the rendered result or the
/// single display string for a classified failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    Ready(T),
    Failed(String),
}

/// Proof of having started a request; resolutions must present it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug)]
pub struct ViewState<T> {
    next_seq: u64,
    active: Option<u64>,
    snapshot: Option<Outcome<T>>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            next_seq: 0,
            active: None,
            snapshot: None,
        }
    }

    /// Start a new request. Any request still in flight becomes stale; the
    /// last snapshot stays visible while the new request runs.
    pub fn begin(&mut self) -> RequestTicket {
        self.next_seq += 1;
        self.active = Some(self.next_seq);
        RequestTicket(self.next_seq)
    }

    /// Install the outcome for `ticket`. Returns `false` without touching the
    /// snapshot when a newer request has been begun since (last-writer-wins).
    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Outcome<T>) -> bool {
        if self.active != Some(ticket.0) {
            return false;
        }
        self.active = None;
        self.snapshot = Some(outcome);
        true
    }

    pub fn in_flight(&self) -> bool {
        self.active.is_some()
    }

    pub fn snapshot(&self) -> Option<&Outcome<T>> {
        self.snapshot.as_ref()
    }
}
