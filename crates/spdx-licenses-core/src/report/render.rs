use std::io::Write;

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::license;
use crate::sbom::{PackageRecord, SbomDocument};

/// Validate `doc` and write one `<name>,<license>` line per package to `out`.
///
/// Each line is written before the next record is interpreted, so a bad
/// record leaves every earlier line in `out`. Nothing is written when
/// document validation fails.
pub fn write_lines<W: Write>(
    doc: &SbomDocument,
    config: &ExtractConfig,
    out: &mut W,
) -> Result<usize, ExtractError> {
    doc.validate(config)?;

    let mut written = 0;
    for (index, value) in doc.packages()?.iter().enumerate() {
        let record = PackageRecord::from_value(index, value)?;
        let line = license::resolve(&record, config)?;
        writeln!(out, "{line}")?;
        written += 1;
    }
    out.flush()?;

    Ok(written)
}
