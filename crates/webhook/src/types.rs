use serde::Serialize;

/// Action tag for the connection probe.
pub const ACTION_TEST_CONNECTION: &str = "test_connection";

/// Action tag for the voice-note metadata notification.
pub const ACTION_VOICE_NOTE: &str = "voice_note_recorded";

/// Action tag for the multipart audio upload.
pub const ACTION_AUDIO_UPLOAD: &str = "audio_file_upload";

/// JSON body for the connection probe.
#[derive(Debug, Serialize)]
pub struct TestConnectionRequest {
    pub action: &'static str,
    pub timestamp: String,
    pub message: String,
}

/// JSON body for the voice-note metadata notification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceNoteRequest {
    pub action: &'static str,
    pub file_name: String,
    pub file_date: String,
    pub content: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_note_request_wire_field_names() {
        let request = VoiceNoteRequest {
            action: ACTION_VOICE_NOTE,
            file_name: "2026-01-05".into(),
            file_date: "2026-01-05".into(),
            content: "![[Recording 20260105012858.m4a]]".into(),
            timestamp: "2026-01-05T01:28:58.000Z".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "voice_note_recorded");
        assert_eq!(json["fileName"], "2026-01-05");
        assert_eq!(json["fileDate"], "2026-01-05");
        assert_eq!(json["content"], "![[Recording 20260105012858.m4a]]");
        assert!(json.get("file_name").is_none());
    }

    #[test]
    fn test_connection_request_wire_shape() {
        let request = TestConnectionRequest {
            action: ACTION_TEST_CONNECTION,
            timestamp: "2026-01-05T00:00:00.000Z".into(),
            message: "probe".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "test_connection");
        assert_eq!(json["message"], "probe");
    }
}
