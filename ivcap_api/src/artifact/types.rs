use crate::common::{MetadataT, NavT, RefT, SelfT};
use serde::{Deserialize, Serialize};

/// One row of an artifact listing. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfT>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtifactListRT {
    pub artifacts: Vec<ArtifactListItem>,
    pub links: Option<NavT>,
}

/// State of a single artifact, as returned by read and upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtifactStatusRT {
    pub id: String,
    pub name: Option<String>,
    /// Collections this artifact is part of.
    pub collections: Vec<String>,
    /// Link to the artifact content.
    pub data: Option<SelfT>,
    pub status: String,
    pub mime_type: Option<String>,
    pub size: Option<i64>,
    pub metadata: Vec<MetadataT>,
    /// Billable account.
    pub account: Option<RefT>,
    pub links: Option<SelfT>,
    /// `Location` header of an upload.
    pub location: Option<String>,
    /// `Tus-Resumable` header of an upload.
    pub tus_resumable: Option<String>,
    /// `Upload-Offset` header of a partial upload.
    pub tus_offset: Option<i64>,
}
