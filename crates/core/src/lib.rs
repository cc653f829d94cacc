//! Core types and pure logic for the voxrelay notification bridge.
//!
//! This crate holds everything that has no I/O: the recording-embed
//! extraction and diffing, the daily-note eligibility rule, the MIME lookup
//! table for audio uploads, and the [`DispatchOutcome`] value returned by
//! every outbound call.

pub mod daily;
pub mod mime;
pub mod outcome;
pub mod recording;
pub mod timestamp;

pub use daily::{is_daily_note, note_name};
pub use mime::mime_type;
pub use outcome::DispatchOutcome;
pub use recording::{RecordingRef, diff_recordings, extract_recordings};
pub use timestamp::now_iso8601;
