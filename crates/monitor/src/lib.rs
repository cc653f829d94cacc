//! The recording-detection pipeline.
//!
//! [`RecordingMonitor`] ties the pieces together: it keeps a
//! [`SnapshotTracker`] of every daily note's last observed content, diffs new
//! content against it on each modification event, and dispatches one webhook
//! notification per newly discovered recording embed.

pub mod monitor;
pub mod snapshot;

pub use monitor::{DispatchReport, ModifyOutcome, RecordingMonitor};
pub use snapshot::SnapshotTracker;
