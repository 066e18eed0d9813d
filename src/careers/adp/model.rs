//! Wire types for the ADP staffing job-requisitions listing.
//!
//! Every field is optional upstream, so each struct defaults when a key is
//! absent or `null`. Unknown keys are ignored. A record that still fails to
//! decode (a field of the wrong type) is dropped on its own; the rest of the
//! page is kept.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "RawRequisitionPage")]
pub struct RequisitionPage {
    pub job_requisitions: Vec<Requisition>,
    /// Records present on the page that could not be decoded.
    pub skipped: usize,
    pub meta: Option<PageMeta>,
}

impl RequisitionPage {
    /// Records the upstream sent on this page, decodable or not.
    pub fn received(&self) -> usize {
        self.job_requisitions.len() + self.skipped
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawRequisitionPage {
    #[serde(deserialize_with = "null_as_default")]
    job_requisitions: Vec<Value>,
    meta: Option<PageMeta>,
}

impl From<RawRequisitionPage> for RequisitionPage {
    fn from(raw: RawRequisitionPage) -> Self {
        let mut job_requisitions = Vec::with_capacity(raw.job_requisitions.len());
        let mut skipped = 0;

        for (index, record) in raw.job_requisitions.into_iter().enumerate() {
            match serde_json::from_value::<Requisition>(record) {
                Ok(requisition) => job_requisitions.push(requisition),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed job requisition");
                    skipped += 1;
                }
            }
        }

        Self {
            job_requisitions,
            skipped,
            meta: raw.meta,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub total_number: u64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Requisition {
    #[serde(deserialize_with = "null_as_default")]
    pub posting_instructions: Vec<PostingInstruction>,
    #[serde(deserialize_with = "null_as_default")]
    pub organizational_units: Vec<OrganizationalUnit>,
    #[serde(deserialize_with = "null_as_default")]
    pub requisition_locations: Vec<RequisitionLocation>,
    pub worker_type_code: Option<CodeValue>,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PostingInstruction {
    pub expire_date: Option<String>,
    pub name_code: Option<CodeValue>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationalUnit {
    pub name_code: Option<CodeValue>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RequisitionLocation {
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub city_name: Option<String>,
    pub country_code: Option<String>,
    pub country_subdivision_level1: Option<CodeValue>,
}

/// ADP's code list entry (`{ "codeValue": ..., "shortName": ... }`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeValue {
    pub code_value: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Link {
    pub title: Option<String>,
    pub href: Option<String>,
}

// `#[serde(default)]` only covers absent keys; this also maps `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
