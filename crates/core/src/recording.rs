use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches an embedded audio recording link such as
/// `![[Recording 20260105012858.m4a]]`.
///
/// The embed must wrap text starting with the literal word `Recording`,
/// followed by any non-`]` characters, ending in a recognized audio
/// extension. The whole pattern is case-insensitive.
static RECORDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)!\[\[Recording[^\]]+\.(?:m4a|mp3|wav|webm|ogg)\]\]")
        .expect("recording embed regex is valid")
});

/// A reference to an embedded audio recording, as matched in note content.
///
/// Equality, ordering, and hashing are all structural on the raw matched
/// text: two refs are the same recording iff their embeds are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordingRef {
    raw: String,
}

impl RecordingRef {
    /// The raw matched embed text, including the `![[` / `]]` markers.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The bare attachment file name inside the embed markers.
    pub fn file_name(&self) -> &str {
        self.raw
            .strip_prefix("![[")
            .and_then(|s| s.strip_suffix("]]"))
            .unwrap_or(&self.raw)
    }

    /// The file extension of the attachment, without the leading dot.
    pub fn extension(&self) -> &str {
        self.file_name().rsplit('.').next().unwrap_or_default()
    }
}

impl std::fmt::Display for RecordingRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Extract all recording embeds from note content.
///
/// Non-overlapping matches; duplicate identical embeds collapse to a single
/// entry. Returns an empty set when the content has no recording embeds.
pub fn extract_recordings(content: &str) -> BTreeSet<RecordingRef> {
    RECORDING_RE
        .find_iter(content)
        .map(|m| RecordingRef {
            raw: m.as_str().to_owned(),
        })
        .collect()
}

/// Recording embeds present in `new` but not in `old`.
///
/// Set difference by structural equality on the raw embed text. An embed
/// that merely moved within the note is in both sets and not reported; an
/// embed removed earlier and re-added verbatim IS reported, since only the
/// immediately prior content is consulted.
pub fn diff_recordings(old: &str, new: &str) -> BTreeSet<RecordingRef> {
    let old_refs = extract_recordings(old);
    extract_recordings(new)
        .into_iter()
        .filter(|r| !old_refs.contains(r))
        .collect()
}
