//! Filesystem backend for the voxrelay vault abstraction.
//!
//! [`FsVault`] implements [`VaultReader`](voxrelay_vault::VaultReader) over a
//! directory of markdown notes; [`watch_notes`] turns filesystem change
//! events for those notes into a stream of vault-relative paths.

pub mod vault;
pub mod watcher;

pub use vault::FsVault;
pub use watcher::watch_notes;
