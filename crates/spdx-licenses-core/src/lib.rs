use std::io::Write;
use std::path::Path;

pub mod config;
pub mod error;
pub mod license;
pub mod report;
pub mod sbom;

pub use config::ExtractConfig;
pub use error::ExtractError;
pub use license::{LicenseLine, LicenseSource};

pub const TOOL_NAME: &str = "spdx-licenses";

/// `SPDXID` every accepted document must carry.
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";

/// The only `spdxVersion` this tool accepts.
pub const SUPPORTED_SPDX_VERSION: &str = "SPDX-2.3";

/// SPDX sentinel for "no assertion made".
pub const NO_ASSERTION: &str = "NOASSERTION";

/// Read an SBOM file and stream `<name>,<license>` lines into `out`.
///
/// Returns the number of lines written. Lines written before a failing
/// record stay in `out`.
pub fn extract_to<W: Write>(
    path: &Path,
    config: &ExtractConfig,
    out: &mut W,
) -> Result<usize, ExtractError> {
    let doc = sbom::read::read_document(path)?;
    report::render::write_lines(&doc, config, out)
}
