pub mod config;
pub mod output;

use lodestone_logger::{log, LogSeverity::Debug};
use std::io;
use std::path::Path;

// Re-export commonly used items
pub use lodestone_common::{ErrorClass, LodestoneError, PlacedBlock, Position, Result};
pub use lodestone_logger::LogSeverity;
pub use lodestone_schematic::{decode_schematic, ColorTable, DecodedSchematic, Dialect};

/// Reads a schematic from disk and decodes it on the blocking pool.
pub async fn load_file(path: impl AsRef<Path>) -> Result<DecodedSchematic> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    log(
        format!("Read {} bytes from {}", bytes.len(), path.display()),
        Debug,
    );

    tokio::task::spawn_blocking(move || decode_schematic(&bytes))
        .await
        .map_err(|join_error| {
            LodestoneError::IoError(io::Error::new(io::ErrorKind::Other, join_error))
        })?
}
