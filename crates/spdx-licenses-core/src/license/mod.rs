//! License resolution for a single package record.
//!
//! The concluded license wins unless it is the no-assertion sentinel, in
//! which case the declared license is used verbatim. No SPDX expression
//! parsing or normalization happens here.

use std::fmt;

use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::sbom::package::PackageRecord;

/// Which package field a resolved license was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseSource {
    Concluded,
    Declared,
}

/// One output record: a package name and its resolved license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseLine {
    pub name: String,
    pub license: String,
    pub source: LicenseSource,
}

/// Renders as `<name>,<license>` with no quoting or escaping.
impl fmt::Display for LicenseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.license)
    }
}

/// Resolve the license of `record`.
///
/// Fields are read in the order `licenseConcluded`, `licenseDeclared`
/// (only on fallback), `name`; the first missing one is the error.
pub fn resolve(
    record: &PackageRecord,
    config: &ExtractConfig,
) -> Result<LicenseLine, ExtractError> {
    let index = record.index;
    let concluded = record.license_concluded()?;

    let (license, source) = if concluded == config.no_assertion {
        (record.license_declared()?, LicenseSource::Declared)
    } else {
        (concluded, LicenseSource::Concluded)
    };

    let name = record.name()?;

    if source == LicenseSource::Declared && license == config.no_assertion {
        info!(index, package = name, "package has no concluded or declared license");
    }
    debug!(index, package = name, license, ?source, "resolved license");

    Ok(LicenseLine {
        name: name.to_string(),
        license: license.to_string(),
        source,
    })
}
