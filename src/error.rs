// Errors of the windowing frontend. The simulation core itself has no
// fallible operations; everything that can fail lives at the platform edge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(minifb::Error),

    #[error("window update error: {0}")]
    WindowUpdate(minifb::Error),

    #[error("snapshot load error: {0}")]
    SnapshotLoad(#[from] image::ImageError),
}
