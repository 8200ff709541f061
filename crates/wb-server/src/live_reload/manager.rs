//! Live reload manager.
//!
//! Watches the context directory, invalidates the site for changed documents
//! and broadcasts reload events to WebSocket clients.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Serialize;
use tokio::sync::{broadcast, mpsc};

use wb_site::Site;
use wb_storage::{Category, doc_for_source, doc_href};

use super::debouncer::{Change, ChangeDebouncer, ChangeKind};

/// Event sent to connected WebSocket clients when a document changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct ReloadEvent {
    /// Event type (always "reload").
    #[serde(rename = "type")]
    event_type: &'static str,
    /// URL of the changed document.
    path: String,
    /// Whether the document set changed, so every page's sidebar is stale.
    structural: bool,
}

impl ReloadEvent {
    fn reload(path: String, structural: bool) -> Self {
        Self {
            event_type: "reload",
            path,
            structural,
        }
    }
}

const DEBOUNCE: Duration = Duration::from_millis(100);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Manages file watching and broadcasting reload events.
pub(crate) struct LiveReloadManager {
    context_dir: PathBuf,
    patterns: Vec<glob::Pattern>,
    site: Arc<Site>,
    broadcaster: broadcast::Sender<ReloadEvent>,
    watcher: Option<RecommendedWatcher>,
}

impl LiveReloadManager {
    /// Create a manager for `context_dir`.
    ///
    /// Invalid glob patterns are logged and skipped.
    #[must_use]
    pub(crate) fn new(
        context_dir: PathBuf,
        watch_patterns: &[String],
        site: Arc<Site>,
        broadcaster: broadcast::Sender<ReloadEvent>,
    ) -> Self {
        let patterns = watch_patterns
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(pattern = %p, error = %e, "Ignoring invalid watch pattern");
                    None
                }
            })
            .collect();

        Self {
            context_dir,
            patterns,
            site,
            broadcaster,
            watcher: None,
        }
    }

    /// Start watching.
    ///
    /// Spawns one task that feeds raw events into the debouncer and one that
    /// handles settled changes. Must be called inside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the file watcher cannot be created.
    pub(crate) fn start(&mut self) -> Result<(), notify::Error> {
        let (tx, mut rx) = mpsc::channel::<Event>(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                // The notify callback runs on its own thread
                let _ = tx.blocking_send(event);
            }
        })?;
        watcher.watch(&self.context_dir, RecursiveMode::Recursive)?;
        self.watcher = Some(watcher);
        tracing::info!(dir = %self.context_dir.display(), "Watching for changes");

        let debouncer = Arc::new(ChangeDebouncer::new(DEBOUNCE));

        let recorder = Arc::clone(&debouncer);
        let context_dir = self.context_dir.clone();
        let patterns = self.patterns.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                record_event(&event, &context_dir, &patterns, &recorder);
            }
        });

        let site = Arc::clone(&self.site);
        let broadcaster = self.broadcaster.clone();
        let context_dir = self.context_dir.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(POLL_INTERVAL);
            loop {
                interval.tick().await;
                for change in debouncer.drain_ready() {
                    handle_change(&change, &context_dir, &site, &broadcaster);
                }
            }
        });

        Ok(())
    }

    /// Get a receiver for reload events.
    #[must_use]
    pub(crate) fn subscribe(&self) -> broadcast::Receiver<ReloadEvent> {
        self.broadcaster.subscribe()
    }
}

fn record_event(
    event: &Event,
    context_dir: &Path,
    patterns: &[glob::Pattern],
    debouncer: &ChangeDebouncer,
) {
    for (index, path) in event.paths.iter().enumerate() {
        let Some(kind) = change_kind(event.kind, index) else {
            continue;
        };
        if matches_patterns(path, context_dir, patterns) {
            tracing::debug!(path = %path.display(), ?kind, "Recorded filesystem event");
            debouncer.record(path.clone(), kind);
        }
    }
}

/// Change kind for the `index`-th path of a notify event.
///
/// Renames are split into the removal of the old name and the creation of
/// the new one. A rename whose direction is unknown counts as a
/// modification and is sorted out against the hierarchy later.
fn change_kind(kind: EventKind, index: usize) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(_)
        | EventKind::Modify(ModifyKind::Name(RenameMode::To)) => Some(ChangeKind::Created),
        EventKind::Remove(_)
        | EventKind::Modify(ModifyKind::Name(RenameMode::From)) => Some(ChangeKind::Removed),
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => Some(if index == 0 {
            ChangeKind::Removed
        } else {
            ChangeKind::Created
        }),
        EventKind::Modify(_) => Some(ChangeKind::Modified),
        _ => None,
    }
}

/// Invalidate the site for a settled change and notify clients.
fn handle_change(
    change: &Change,
    context_dir: &Path,
    site: &Site,
    broadcaster: &broadcast::Sender<ReloadEvent>,
) {
    let start = Instant::now();
    let Some((category, slug)) = resolve_doc(&change.path, context_dir) else {
        return;
    };

    let structural = changes_structure(change.kind, category, &slug, site);
    if structural {
        site.invalidate();
    }
    site.invalidate_page(category, &slug);

    let href = doc_href(category, &slug);
    // No subscribers is not an error
    let _ = broadcaster.send(ReloadEvent::reload(href.clone(), structural));

    tracing::info!(
        path = %href,
        kind = ?change.kind,
        structural,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Live reload event processed"
    );
}

/// Whether a change adds or removes a document from the sidebar.
///
/// Edits only touch the page, unless the document is new to the current
/// snapshot or gone from storage.
fn changes_structure(kind: ChangeKind, category: Category, slug: &str, site: &Site) -> bool {
    kind != ChangeKind::Modified
        || !site.state().hierarchy.contains(category, slug)
        || site.storage().mtime(category, slug).is_err()
}

/// Document addressed by a file under the context directory.
///
/// Hidden files are ignored, matching the storage scan.
fn resolve_doc(path: &Path, context_dir: &Path) -> Option<(Category, String)> {
    let relative = path.strip_prefix(context_dir).ok()?;
    let (category, slug) = doc_for_source(relative)?;
    (!slug.starts_with('.')).then_some((category, slug))
}

fn matches_patterns(path: &Path, context_dir: &Path, patterns: &[glob::Pattern]) -> bool {
    let Ok(relative) = path.strip_prefix(context_dir) else {
        return false;
    };
    let relative = relative.to_string_lossy().replace('\\', "/");

    patterns.iter().any(|pattern| pattern.matches(&relative))
}
