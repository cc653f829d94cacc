use dashmap::DashMap;

/// Last observed full content per monitored note.
///
/// Entries are created during the warm-up scan or lazily on the first
/// observed modification, and updated in place on every subsequent one.
/// Entries are never deleted: a stale entry for a deleted note is harmless,
/// since no further events will reference it.
#[derive(Debug, Default)]
pub struct SnapshotTracker {
    snapshots: DashMap<String, String>,
}

impl SnapshotTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `new_content` for `path` and return the previously stored
    /// content, or the empty string when none existed.
    ///
    /// The read-then-write is a single map insert, so two events for the
    /// same note cannot interleave between the read and the write.
    pub fn record(&self, path: &str, new_content: impl Into<String>) -> String {
        self.snapshots
            .insert(path.to_owned(), new_content.into())
            .unwrap_or_default()
    }

    /// Whether a snapshot exists for `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.snapshots.contains_key(path)
    }

    /// Number of tracked notes.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the tracker holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_returns_previous_content_in_sequence() {
        let tracker = SnapshotTracker::new();
        assert_eq!(tracker.record("2026-01-05.md", "A"), "");
        assert_eq!(tracker.record("2026-01-05.md", "B"), "A");
        assert_eq!(tracker.record("2026-01-05.md", "C"), "B");
    }

    #[test]
    fn notes_are_tracked_independently() {
        let tracker = SnapshotTracker::new();
        tracker.record("2026-01-05.md", "first");
        assert_eq!(tracker.record("2026-01-06.md", "other"), "");
        assert_eq!(tracker.record("2026-01-05.md", "second"), "first");
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn contains_and_emptiness() {
        let tracker = SnapshotTracker::new();
        assert!(tracker.is_empty());
        assert!(!tracker.contains("2026-01-05.md"));
        tracker.record("2026-01-05.md", "x");
        assert!(tracker.contains("2026-01-05.md"));
        assert!(!tracker.is_empty());
    }
}
