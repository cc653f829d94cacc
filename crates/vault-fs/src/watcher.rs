use std::path::Path;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Watch a vault root for note modifications.
///
/// Returns the `notify` watcher (keep it alive for as long as events are
/// wanted) and a channel of vault-relative paths, one per create/modify
/// event touching a `.md` file. Sends are best-effort: if the channel is
/// full the event is dropped, which is harmless — a dropped event's delta is
/// picked up by the diff of the next event for the same note.
pub fn watch_notes(
    root: &Path,
) -> Result<(RecommendedWatcher, mpsc::Receiver<String>), notify::Error> {
    let (tx, rx) = mpsc::channel::<String>(256);
    let root_buf = root.to_path_buf();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !is_relevant_event(event.kind) {
                    return;
                }
                for path in event.paths {
                    if path.extension().and_then(|e| e.to_str()) != Some("md") {
                        continue;
                    }
                    let relative = path
                        .strip_prefix(&root_buf)
                        .unwrap_or(&path)
                        .to_string_lossy()
                        .into_owned();
                    let _ = tx.try_send(relative);
                }
            }
            Err(e) => {
                warn!(error = %e, "filesystem watcher error");
            }
        },
        notify::Config::default(),
    )?;

    watcher.watch(root, RecursiveMode::Recursive)?;
    info!(root = %root.display(), "vault watcher started");

    Ok((watcher, rx))
}

/// Returns `true` for filesystem events that can change note content.
fn is_relevant_event(kind: EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_modify_are_relevant() {
        assert!(is_relevant_event(EventKind::Create(
            notify::event::CreateKind::File
        )));
        assert!(is_relevant_event(EventKind::Modify(
            notify::event::ModifyKind::Data(notify::event::DataChange::Content)
        )));
    }

    #[test]
    fn remove_and_access_are_not_relevant() {
        assert!(!is_relevant_event(EventKind::Remove(
            notify::event::RemoveKind::File
        )));
        assert!(!is_relevant_event(EventKind::Access(
            notify::event::AccessKind::Read
        )));
    }

    #[tokio::test]
    async fn watcher_emits_relative_paths_for_note_writes() {
        let dir = tempfile::tempdir().unwrap();
        let (_watcher, mut rx) = watch_notes(dir.path()).unwrap();

        std::fs::write(dir.path().join("2026-01-05.md"), "content").unwrap();

        // Platform backends deliver with some latency.
        let event = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("no watcher event within timeout")
            .expect("watcher channel closed");
        assert_eq!(event, "2026-01-05.md");
    }

    #[tokio::test]
    async fn non_markdown_writes_are_filtered_out() {
        let dir = tempfile::tempdir().unwrap();
        let (_watcher, mut rx) = watch_notes(dir.path()).unwrap();

        std::fs::write(dir.path().join("audio.m4a"), [0u8]).unwrap();
        std::fs::write(dir.path().join("2026-01-05.md"), "note").unwrap();

        let event = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("no watcher event within timeout")
            .expect("watcher channel closed");
        assert_eq!(event, "2026-01-05.md");
    }
}
