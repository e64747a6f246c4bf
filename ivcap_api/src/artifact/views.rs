use super::types::{ArtifactListItem, ArtifactListRT, ArtifactStatusRT};
use crate::common::{MetadataT, NavT, RefT, SelfT, vec_or_default, vec_or_none};
use ivcap_core::validate::ValidationError;
use ivcap_core::view::ResultView;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactListRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<ArtifactListItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<NavT>,
}

impl ResultView for ArtifactListRTView {
    type Result = ArtifactListRT;

    fn project(res: &ArtifactListRT, _view: &str) -> Self {
        Self {
            artifacts: Some(res.artifacts.clone()),
            links: res.links.clone(),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("artifacts", &self.artifacts);
        v.into_result()
    }

    fn into_result(self) -> ArtifactListRT {
        ArtifactListRT {
            artifacts: vec_or_default(self.artifacts),
            links: self.links,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactStatusRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SelfT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataT>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<RefT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tus_resumable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tus_offset: Option<i64>,
}

impl ResultView for ArtifactStatusRTView {
    type Result = ArtifactStatusRT;

    fn project(res: &ArtifactStatusRT, _view: &str) -> Self {
        Self {
            id: Some(res.id.clone()),
            name: res.name.clone(),
            collections: vec_or_none(&res.collections),
            data: res.data.clone(),
            status: Some(res.status.clone()),
            mime_type: res.mime_type.clone(),
            size: res.size,
            metadata: vec_or_none(&res.metadata),
            account: res.account.clone(),
            links: res.links.clone(),
            location: res.location.clone(),
            tus_resumable: res.tus_resumable.clone(),
            tus_offset: res.tus_offset,
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("id", &self.id);
        v.require("status", &self.status);
        v.into_result()
    }

    fn into_result(self) -> ArtifactStatusRT {
        ArtifactStatusRT {
            id: self.id.unwrap_or_default(),
            name: self.name,
            collections: vec_or_default(self.collections),
            data: self.data,
            status: self.status.unwrap_or_default(),
            mime_type: self.mime_type,
            size: self.size,
            metadata: vec_or_default(self.metadata),
            account: self.account,
            links: self.links,
            location: self.location,
            tus_resumable: self.tus_resumable,
            tus_offset: self.tus_offset,
        }
    }
}
