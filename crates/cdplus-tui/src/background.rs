//! Off-loop directory reads.
//!
//! [`spawn_directory_read`] runs a read on tokio's blocking pool and sends the
//! outcome back to the main event loop through an unbounded mpsc channel.

use std::path::PathBuf;
use std::sync::Arc;

use cdplus_core::event::Event;
use cdplus_core::fs::ops::{read_directory_async, DirectoryReader};
use tokio::sync::mpsc::UnboundedSender;

/// Reads `path` in the background and sends a `DirectoryLoaded` or
/// `DirectoryFailed` event when done.
///
/// Reads are not cancelled; when several are in flight their results are
/// applied in arrival order.
pub fn spawn_directory_read(
    reader: Arc<dyn DirectoryReader>,
    path: PathBuf,
    tx: UnboundedSender<Event>,
) {
    tokio::spawn(async move {
        let (path, result) = read_directory_async(reader, path).await;
        if tx.send(Event::from_read(path, result)).is_err() {
            tracing::debug!("event loop gone, dropping directory read result");
        }
    });
}
