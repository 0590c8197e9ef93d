use serde::Deserialize;
use serde_json::Value;

use crate::error::ExtractError;

/// The three fields of an SPDX package this tool reads.
///
/// Every field is optional at parse time; absence only becomes an error
/// when the accessor for it is called.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    #[serde(skip)]
    pub index: usize,
    pub name: Option<String>,
    pub license_concluded: Option<String>,
    pub license_declared: Option<String>,
}

impl PackageRecord {
    /// Deserialize the package at position `index` of the `packages` array.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, ExtractError> {
        let mut record = Self::deserialize(value)
            .map_err(|source| ExtractError::InvalidPackage { index, source })?;
        record.index = index;
        Ok(record)
    }

    pub fn name(&self) -> Result<&str, ExtractError> {
        self.field(self.name.as_deref(), "name")
    }

    pub fn license_concluded(&self) -> Result<&str, ExtractError> {
        self.field(self.license_concluded.as_deref(), "licenseConcluded")
    }

    pub fn license_declared(&self) -> Result<&str, ExtractError> {
        self.field(self.license_declared.as_deref(), "licenseDeclared")
    }

    fn field<'a>(
        &self,
        value: Option<&'a str>,
        field: &'static str,
    ) -> Result<&'a str, ExtractError> {
        value.ok_or(ExtractError::MissingPackageField {
            index: self.index,
            field,
        })
    }
}
