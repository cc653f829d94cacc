use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// A plain ISO calendar date: exactly `YYYY-MM-DD`.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex is valid"));

/// Whether a file name identifies a daily note, the only kind monitored for
/// new recordings.
///
/// The final extension is stripped before matching, so `2026-01-05.md` and
/// `2026-01-05` are both eligible.
pub fn is_daily_note(file_name: &str) -> bool {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| DATE_RE.is_match(stem))
}

/// The base name of an eligible note (extension stripped), or `None` when
/// the path does not name a daily note.
///
/// For daily notes the base name doubles as the note's date, e.g.
/// `journal/2026-01-05.md` → `2026-01-05`.
pub fn note_name(path: &str) -> Option<&str> {
    let stem = Path::new(path).file_stem()?.to_str()?;
    DATE_RE.is_match(stem).then_some(stem)
}
