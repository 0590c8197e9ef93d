use std::path::PathBuf;

use clap::Parser;

const LONG_ABOUT: &str = "\
Extract licensing info from the packages of an SPDX-2.3 SBOM JSON file.

Written for the spdx-json output of the GitHub Action anchore/sbom-action.

Give the path to that output as the only argument. One `<name>,<license>`
line is printed per package, in document order. The concluded license is
used unless it is NOASSERTION, in which case the declared license is used.";

#[derive(Debug, Parser)]
#[command(
    name = spdx_licenses_core::TOOL_NAME,
    disable_help_flag = true,
    disable_version_flag = true,
    about = "List package licenses from an SPDX-2.3 SBOM JSON file",
    long_about = LONG_ABOUT
)]
pub struct Args {
    /// Path to the SPDX-2.3 JSON document
    #[arg(value_name = "SBOM_FILE", allow_hyphen_values = true)]
    pub sbom_path: PathBuf,
}
