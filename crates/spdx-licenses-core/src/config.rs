use crate::{DOCUMENT_SPDX_ID, NO_ASSERTION, SUPPORTED_SPDX_VERSION};

/// Literals the extraction pipeline compares documents and packages against.
///
/// The default reproduces the accepted SPDX-2.3 document shape; the CLI
/// never overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Required value of the top-level `SPDXID`.
    pub document_id: String,

    /// Required value of the top-level `spdxVersion`.
    pub spdx_version: String,

    /// `licenseConcluded` value that triggers the `licenseDeclared` fallback.
    pub no_assertion: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            document_id: DOCUMENT_SPDX_ID.to_string(),
            spdx_version: SUPPORTED_SPDX_VERSION.to_string(),
            no_assertion: NO_ASSERTION.to_string(),
        }
    }
}
