use super::types::{AddMetaRT, MetadataListItem, ReadMetaRT};
use crate::common::{NavT, vec_or_default};
use ivcap_core::validate::ValidationError;
use ivcap_core::view::ResultView;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReadMetaRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<MetadataListItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<NavT>,
}

impl ResultView for ReadMetaRTView {
    type Result = ReadMetaRT;

    fn project(res: &ReadMetaRT, _view: &str) -> Self {
        Self {
            records: Some(res.records.clone()),
            entity_id: res.entity_id.clone(),
            at_time: res.at_time.clone(),
            links: Some(res.links.clone()),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("records", &self.records);
        v.require("links", &self.links);
        v.into_result()
    }

    fn into_result(self) -> ReadMetaRT {
        ReadMetaRT {
            records: vec_or_default(self.records),
            entity_id: self.entity_id,
            at_time: self.at_time,
            links: self.links.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddMetaRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl ResultView for AddMetaRTView {
    type Result = AddMetaRT;

    fn project(res: &AddMetaRT, _view: &str) -> Self {
        Self {
            record_id: Some(res.record_id.clone()),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("record-id", &self.record_id);
        v.into_result()
    }

    fn into_result(self) -> AddMetaRT {
        AddMetaRT {
            record_id: self.record_id.unwrap_or_default(),
        }
    }
}
