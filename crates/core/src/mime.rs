/// Resolve the MIME type for an audio file extension.
///
/// The table recognizes the detectable embed extensions plus `aac` and
/// `flac`, which can reach the upload path directly even though they are not
/// detection targets. Unrecognized extensions fall back to `audio/mpeg`.
pub fn mime_type(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "m4a" => "audio/mp4",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        "ogg" => "audio/ogg",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        _ => "audio/mpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(mime_type("m4a"), "audio/mp4");
        assert_eq!(mime_type("mp3"), "audio/mpeg");
        assert_eq!(mime_type("wav"), "audio/wav");
        assert_eq!(mime_type("webm"), "audio/webm");
        assert_eq!(mime_type("ogg"), "audio/ogg");
        assert_eq!(mime_type("aac"), "audio/aac");
        assert_eq!(mime_type("flac"), "audio/flac");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(mime_type("M4A"), "audio/mp4");
        assert_eq!(mime_type("Flac"), "audio/flac");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(mime_type("xyz"), "audio/mpeg");
        assert_eq!(mime_type(""), "audio/mpeg");
    }
}
