use flate2::read::GzDecoder;
use lodestone_common::{LodestoneError, Result};
use lodestone_logger::{log, LogSeverity::Debug};
use std::borrow::Cow;
use std::io::Read;

pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Inflates gzip-framed input; anything else is passed through borrowed.
///
/// The whole stream is inflated before returning, so corrupt or truncated
/// input never yields partial output.
pub fn decompress(bytes: &[u8]) -> Result<Cow<'_, [u8]>> {
    if !is_gzip(bytes) {
        return Ok(Cow::Borrowed(bytes));
    }

    let mut decoder = GzDecoder::new(bytes);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|e| LodestoneError::Decompression(format!("failed to inflate gzip data: {}", e)))?;

    log(
        format!("Inflated gzip input: {} -> {} bytes", bytes.len(), inflated.len()),
        Debug,
    );
    Ok(Cow::Owned(inflated))
}
