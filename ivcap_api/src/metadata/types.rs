use crate::common::NavT;
use serde::{Deserialize, Serialize};

/// One metadata record. `aspect` is the schema-defined JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MetadataListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadMetaRT {
    pub records: Vec<MetadataListItem>,
    pub entity_id: Option<String>,
    pub at_time: Option<String>,
    pub links: NavT,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddMetaRT {
    /// Identifies the stored record, e.g. for a later revoke.
    pub record_id: String,
}
