use chrono::{SecondsFormat, Utc};

/// Current UTC time as an ISO 8601 string with millisecond precision and a
/// `Z` suffix, e.g. `2026-01-05T01:28:58.123Z`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'));
        // YYYY-MM-DDTHH:MM:SS.mmmZ
        assert_eq!(ts.len(), 24);
        assert_eq!(&ts[10..11], "T");
    }
}
