//! SPDX SBOM input: file reading, document model and package records.

pub mod document;
pub mod package;
pub mod read;

pub use document::SbomDocument;
pub use package::PackageRecord;
