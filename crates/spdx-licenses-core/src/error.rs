use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Everything that can stop a license extraction run.
///
/// Only [`ExtractError::NotSpdx23`] is a curated diagnostic; the other
/// variants are surfaced raw by the CLI.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read SBOM file: {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("SBOM file is not valid UTF-8: {}", path.display())]
    Utf8 {
        path: PathBuf,
        source: FromUtf8Error,
    },

    #[error("failed to parse SBOM file as JSON: {}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Not an SPDX-2.3 SBOM file")]
    NotSpdx23,

    #[error("missing required document field `{0}`")]
    MissingDocumentField(&'static str),

    #[error("package #{index}: missing required field `{field}`")]
    MissingPackageField { index: usize, field: &'static str },

    #[error("package #{index}: malformed package record")]
    InvalidPackage {
        index: usize,
        source: serde_json::Error,
    },

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl ExtractError {
    /// True for the document-level schema rejection, the one failure the
    /// CLI reports with a fixed message.
    pub fn is_document_schema(&self) -> bool {
        matches!(self, Self::NotSpdx23)
    }
}
