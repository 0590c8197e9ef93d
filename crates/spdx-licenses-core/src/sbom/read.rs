use std::{fs, path::Path};

use tracing::debug;

use crate::error::ExtractError;
use crate::sbom::document::SbomDocument;

/// Read an SBOM JSON file fully into memory and deserialize it.
///
/// The bytes must be UTF-8 and the root must be a JSON object. No SPDX
/// checks happen here; see [`SbomDocument::validate`].
pub fn read_document(path: &Path) -> Result<SbomDocument, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size_bytes = bytes.len(), "read SBOM file");

    let text = String::from_utf8(bytes).map_err(|source| ExtractError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| ExtractError::Json {
        path: path.to_path_buf(),
        source,
    })
}
