use crate::api::PkiSnapshot;
use thiserror::Error;

/// Errors surfaced while decoding a snapshot document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("snapshot document is not well-formed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decodes one raw snapshot document into its structured form.
///
/// Pure transform: no partial result is produced on failure.
pub fn decode_snapshot(bytes: &[u8]) -> Result<PkiSnapshot, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}
