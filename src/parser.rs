//! JSON decoder for SIRI vehicle-monitoring responses.

use crate::error::Result;
use crate::siri::SiriDocument;

/// Decodes a SIRI vehicle-monitoring [`SiriDocument`] from raw bytes.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`](crate::error::SnapshotError::Decode) if
/// the bytes are not JSON or a key on the fixed traversal path is missing.
pub fn parse_document(bytes: &[u8]) -> Result<SiriDocument> {
    Ok(serde_json::from_slice(bytes)?)
}
