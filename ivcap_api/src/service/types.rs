use crate::common::{NavT, ParameterT, RefT, SelfT};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceListItem {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Link to a banner image.
    pub banner: Option<String>,
    pub published_at: Option<String>,
    pub provider: Option<RefT>,
    pub account: Option<RefT>,
    pub links: SelfT,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceListRT {
    pub services: Vec<ServiceListItem>,
    pub at_time: Option<String>,
    pub links: NavT,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceStatusRT {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub banner: Option<String>,
    pub published_at: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub metadata: Vec<ParameterT>,
    pub references: Vec<ReferenceT>,
    pub parameters: Vec<ParameterDefT>,
    pub provider: Option<RefT>,
    pub account: Option<RefT>,
    pub links: SelfT,
}

/// Everything needed to register or replace a service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceDescriptionT {
    /// Provider's own reference for the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<ParameterT>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<ReferenceT>,
    pub parameters: Vec<ParameterDefT>,
    pub workflow: WorkflowT,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

/// Declared input of a service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefT {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ParameterOptT>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterOptT {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceT {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// How the service is executed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowT {
    /// `basic`, `argo` or `opts`.
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicWorkflowOptsT>,
    /// Argo workflow definition, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argo: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opts: Option<serde_json::Value>,
}

/// Single container workflow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BasicWorkflowOptsT {
    pub image: String,
    pub command: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<ResourceMemoryT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<ResourceMemoryT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<ResourceMemoryT>,
}

/// Kubernetes style request/limit pair, e.g. `"500m"` or `"1Gi"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMemoryT {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}
