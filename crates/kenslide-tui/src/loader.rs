//! Async image decoding, kept off the render loop.

use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::event::ImageLoadResult;

/// Decode one image on the blocking pool; the result comes back over the
/// channel and is applied between frames. Send failures mean the UI is
/// already gone, so they are ignored.
pub fn spawn_decode(index: usize, path: PathBuf, tx: UnboundedSender<ImageLoadResult>) {
    tokio::task::spawn_blocking(move || {
        debug!("decoding {}", path.display());
        let result = match image::open(&path) {
            Ok(image) => ImageLoadResult::Decoded { index, image },
            Err(e) => ImageLoadResult::Failed {
                index,
                error: e.to_string(),
            },
        };
        let _ = tx.send(result);
    });
}
