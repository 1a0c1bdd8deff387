//! # Customer Types
//!
//! The inbound CMS customer record and the shapes exchanged with a provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Metadata key under which the CMS id is stored on the provider record
pub const CMS_ID_METADATA_KEY: &str = "cms_id";

/// Customer record as posted by the CMS
///
/// Nothing here is validated. Missing or `null` names become empty strings and missing
/// contact fields are simply not forwarded; the provider decides what is
/// acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// CMS-side identifier, stored on the provider record for cross-referencing
    #[serde(
        default,
        deserialize_with = "deserialize_correlation_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_name_part")]
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_name_part")]
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerRecord {
    /// Full name as sent to the provider.
    ///
    /// Always `first_name + " " + last_name`; empty parts are kept, so an
    /// empty first name produces a leading space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Map this record onto the provider's create-customer input
    pub fn to_new_customer(&self) -> NewCustomer {
        let mut metadata = BTreeMap::new();
        if let Some(ref id) = self.id {
            metadata.insert(CMS_ID_METADATA_KEY.to_string(), id.clone());
        }

        NewCustomer {
            email: self.email.clone(),
            name: self.full_name(),
            phone: self.phone.clone(),
            metadata,
        }
    }
}

/// CMS ids show up both as strings and as numbers depending on the collection.
fn deserialize_correlation_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

/// A `null` name part counts as empty, same as a missing one.
fn deserialize_name_part<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Input to a provider's create-customer operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Free-form key/value pairs stored on the provider record
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl NewCustomer {
    /// CMS id carried in metadata, if any
    pub fn cms_id(&self) -> Option<&str> {
        self.metadata.get(CMS_ID_METADATA_KEY).map(String::as_str)
    }
}

/// Customer record as created by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCustomer {
    /// Provider-assigned identifier (e.g. `cus_...`)
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Creation time reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl ProviderCustomer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            name: None,
            created: None,
        }
    }
}
