use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::info;

use crate::config::ExtractConfig;
use crate::error::ExtractError;

/// Root of an SPDX JSON document, reduced to the members this tool reads.
///
/// Identity members are kept as raw JSON so that a present but
/// wrong-typed value (including `null`) is told apart from an absent key.
/// Package records are kept raw so that each one is only interpreted when
/// it is reached.
#[derive(Debug, Clone, Deserialize)]
pub struct SbomDocument {
    #[serde(rename = "SPDXID", default, deserialize_with = "present")]
    pub spdx_id: Option<Value>,

    #[serde(rename = "spdxVersion", default, deserialize_with = "present")]
    pub spdx_version: Option<Value>,

    pub packages: Option<Vec<Value>>,
}

/// Maps any present member, `null` included, to `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SbomDocument {
    /// Check the document identity against `config`.
    ///
    /// An absent member is a raw field error; a present member that is not
    /// the expected string is a rejection. `SPDXID` is checked first; when
    /// it does not match, `spdxVersion` is never looked at.
    pub fn validate(&self, config: &ExtractConfig) -> Result<(), ExtractError> {
        Self::expect(self.spdx_id.as_ref(), "SPDXID", &config.document_id)?;
        Self::expect(
            self.spdx_version.as_ref(),
            "spdxVersion",
            &config.spdx_version,
        )?;

        info!(spdx_version = %config.spdx_version, "accepted SBOM document");
        Ok(())
    }

    fn expect(
        value: Option<&Value>,
        field: &'static str,
        expected: &str,
    ) -> Result<(), ExtractError> {
        match value {
            None => Err(ExtractError::MissingDocumentField(field)),
            Some(Value::String(s)) if s == expected => Ok(()),
            Some(_) => Err(ExtractError::NotSpdx23),
        }
    }

    /// Raw package records in document order.
    pub fn packages(&self) -> Result<&[Value], ExtractError> {
        self.packages
            .as_deref()
            .ok_or(ExtractError::MissingDocumentField("packages"))
    }
}
