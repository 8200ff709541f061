//! Per-path debouncing of filesystem events.
//!
//! Editors emit several events per save (truncate, write, rename). Events for
//! the same path are merged until the path has been quiet for the debounce
//! window.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Kind of change to a watched file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChangeKind {
    Created,
    Modified,
    Removed,
}

impl ChangeKind {
    /// Merge a later change into an earlier one.
    ///
    /// Returns `None` when the two cancel out (created, then removed).
    fn then(self, later: Self) -> Option<Self> {
        use ChangeKind::{Created, Modified, Removed};

        match (self, later) {
            (Created, Removed) => None,
            (Created, _) | (Modified, Created) => Some(Created),
            (Removed, Created) => Some(Modified),
            (Removed, _) | (Modified, Removed) => Some(Removed),
            (Modified, Modified) => Some(Modified),
        }
    }
}

/// A debounced change ready to be handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Change {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

struct Pending {
    kind: ChangeKind,
    deadline: Instant,
}

/// Thread-safe change debouncer.
pub(crate) struct ChangeDebouncer {
    pending: Mutex<HashMap<PathBuf, Pending>>,
    window: Duration,
}

impl ChangeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            window,
        }
    }

    /// Record a change, restarting the path's quiet window.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn record(&self, path: PathBuf, kind: ChangeKind) {
        let mut pending = self.pending.lock().unwrap();
        let deadline = Instant::now() + self.window;

        let merged = match pending.remove(&path) {
            Some(existing) => existing.kind.then(kind),
            None => Some(kind),
        };
        if let Some(kind) = merged {
            pending.insert(path, Pending { kind, deadline });
        }
    }

    /// Take every change whose quiet window has elapsed.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn drain_ready(&self) -> Vec<Change> {
        let mut pending = self.pending.lock().unwrap();
        let now = Instant::now();

        let (ready, waiting): (HashMap<_, _>, HashMap<_, _>) = std::mem::take(&mut *pending)
            .into_iter()
            .partition(|(_, p)| p.deadline <= now);
        *pending = waiting;

        let mut changes: Vec<Change> = ready
            .into_iter()
            .map(|(path, p)| Change { path, kind: p.kind })
            .collect();
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}
