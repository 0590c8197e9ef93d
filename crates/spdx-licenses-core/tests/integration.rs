use spdx_licenses_core::{ExtractConfig, ExtractError};
use std::path::PathBuf;

/// Path to the fixtures directory relative to the crate root.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Runs the streaming pipeline and captures what was written.
fn extract_fixture(name: &str) -> (Result<usize, ExtractError>, String) {
    let mut out = Vec::new();
    let result = spdx_licenses_core::extract_to(
        &fixtures_dir().join(name),
        &ExtractConfig::default(),
        &mut out,
    );
    (result, String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn sbom_action_output_lists_every_package_in_order() {
    let (result, text) = extract_fixture("sbom_action.spdx.json");

    assert_eq!(result.unwrap(), 4);
    assert_eq!(
        text,
        "github.com/BurntSushi/toml,MIT\n\
         github.com/jackc/pgx/v5,MIT\n\
         golang.org/x/crypto,BSD-3-Clause\n\
         svelte,NOASSERTION\n"
    );
}

#[test]
fn spdx_2_2_document_is_rejected_without_output() {
    let (result, text) = extract_fixture("spdx_2_2.spdx.json");

    let err = result.unwrap_err();
    assert!(err.is_document_schema());
    assert_eq!(err.to_string(), "Not an SPDX-2.3 SBOM file");
    assert!(text.is_empty());
}

#[test]
fn numeric_spdx_version_is_rejected_without_output() {
    let (result, text) = extract_fixture("numeric_version.spdx.json");

    let err = result.unwrap_err();
    assert!(err.is_document_schema());
    assert_eq!(err.to_string(), "Not an SPDX-2.3 SBOM file");
    assert!(text.is_empty());
}

#[test]
fn null_spdx_id_is_rejected_without_output() {
    let (result, text) = extract_fixture("null_id.spdx.json");

    let err = result.unwrap_err();
    assert!(err.is_document_schema());
    assert!(text.is_empty());
}

#[test]
fn missing_declared_license_stops_at_that_package() {
    let (result, text) = extract_fixture("missing_declared.spdx.json");

    assert!(matches!(
        result,
        Err(ExtractError::MissingPackageField {
            index: 1,
            field: "licenseDeclared"
        })
    ));
    assert_eq!(text, "libok,ISC\n");
}

#[test]
fn missing_file_is_a_read_error() {
    let (result, text) = extract_fixture("does_not_exist.spdx.json");

    assert!(matches!(result, Err(ExtractError::Read { .. })));
    assert!(text.is_empty());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let (_, first) = extract_fixture("sbom_action.spdx.json");
    let (_, second) = extract_fixture("sbom_action.spdx.json");

    assert_eq!(first, second);
}
