//! Background preparation of the export dump.
//!
//! The task only reads: it walks the repository through a shared `Arc`,
//! renders the dump, and hands the text back to the event loop over the
//! result channel. No mutation happens off the UI task, which is what makes
//! running this concurrently safe.

use std::sync::Arc;

use logbook_core::{EntityRepository, ExportData, KvStore};
use tokio::sync::mpsc;

use crate::app::RedrawHandle;

/// Spawns the read-only export task. The finished dump arrives on
/// `results`; the redraw handle wakes the event loop afterwards.
pub fn spawn<S: KvStore + 'static>(
    repo: Arc<EntityRepository<S>>,
    results: mpsc::UnboundedSender<String>,
    redraw: RedrawHandle,
) {
    tokio::spawn(async move {
        let dump = ExportData::collect(&repo);
        let text = match dump.to_pretty_json() {
            Ok(text) => text,
            Err(error) => {
                tracing::error!(%error, "rendering the export dump failed");
                format!("export failed: {error}")
            }
        };

        if results.send(text).is_err() {
            tracing::warn!("export finished after the UI went away");
        }
        redraw.request_redraw();
    });
}
