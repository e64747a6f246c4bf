use super::types::{ParameterDefT, ReferenceT, ServiceListItem, ServiceListRT, ServiceStatusRT};
use crate::common::{NavT, ParameterT, RefT, SelfT, vec_or_default, vec_or_none};
use ivcap_core::validate::ValidationError;
use ivcap_core::view::{ResultView, project_all, validate_all};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceListItemView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<RefT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<RefT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfT>,
}

impl ResultView for ServiceListItemView {
    type Result = ServiceListItem;

    fn project(res: &ServiceListItem, _view: &str) -> Self {
        Self {
            id: Some(res.id.clone()),
            name: res.name.clone(),
            description: res.description.clone(),
            banner: res.banner.clone(),
            published_at: res.published_at.clone(),
            provider: res.provider.clone(),
            account: res.account.clone(),
            links: Some(res.links.clone()),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("id", &self.id);
        v.require("links", &self.links);
        v.into_result()
    }

    fn into_result(self) -> ServiceListItem {
        ServiceListItem {
            id: self.id.unwrap_or_default(),
            name: self.name,
            description: self.description,
            banner: self.banner,
            published_at: self.published_at,
            provider: self.provider,
            account: self.account,
            links: self.links.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceListRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceListItemView>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<NavT>,
}

impl ResultView for ServiceListRTView {
    type Result = ServiceListRT;

    fn project(res: &ServiceListRT, view: &str) -> Self {
        Self {
            services: Some(project_all(&res.services, view)),
            at_time: res.at_time.clone(),
            links: Some(res.links.clone()),
        }
    }

    fn validate(&self, view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("services", &self.services);
        v.require("links", &self.links);
        if let Some(services) = &self.services {
            v.merge(validate_all("services", services, view));
        }
        v.into_result()
    }

    fn into_result(self) -> ServiceListRT {
        ServiceListRT {
            services: vec_or_default(self.services)
                .into_iter()
                .map(ResultView::into_result)
                .collect(),
            at_time: self.at_time,
            links: self.links.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceStatusRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<ParameterT>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<ReferenceT>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDefT>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<RefT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<RefT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfT>,
}

impl ResultView for ServiceStatusRTView {
    type Result = ServiceStatusRT;

    fn project(res: &ServiceStatusRT, _view: &str) -> Self {
        Self {
            id: Some(res.id.clone()),
            name: res.name.clone(),
            description: res.description.clone(),
            banner: res.banner.clone(),
            published_at: res.published_at.clone(),
            status: res.status.clone(),
            tags: vec_or_none(&res.tags),
            metadata: vec_or_none(&res.metadata),
            references: vec_or_none(&res.references),
            parameters: vec_or_none(&res.parameters),
            provider: res.provider.clone(),
            account: res.account.clone(),
            links: Some(res.links.clone()),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("id", &self.id);
        v.require("links", &self.links);
        v.into_result()
    }

    fn into_result(self) -> ServiceStatusRT {
        ServiceStatusRT {
            id: self.id.unwrap_or_default(),
            name: self.name,
            description: self.description,
            banner: self.banner,
            published_at: self.published_at,
            status: self.status,
            tags: vec_or_default(self.tags),
            metadata: vec_or_default(self.metadata),
            references: vec_or_default(self.references),
            parameters: vec_or_default(self.parameters),
            provider: self.provider,
            account: self.account,
            links: self.links.unwrap_or_default(),
        }
    }
}
