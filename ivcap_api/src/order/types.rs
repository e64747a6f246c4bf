use crate::common::{NavT, ParameterT, RefT, SelfT, SelfWithDataT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderListItem {
    pub id: String,
    pub name: Option<String>,
    pub status: Option<String>,
    pub ordered_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub service_id: Option<String>,
    pub account_id: Option<String>,
    pub links: SelfT,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderListRT {
    pub orders: Vec<OrderListItem>,
    /// Time the listing was taken at.
    pub at_time: Option<String>,
    pub links: NavT,
}

/// Artifact produced by an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProductT {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfWithDataT>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderStatusRT {
    pub id: String,
    pub name: Option<String>,
    pub status: Option<String>,
    pub ordered_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub products: Vec<ProductT>,
    /// Service that executes the order.
    pub service: Option<RefT>,
    /// Billable account.
    pub account: Option<RefT>,
    pub parameters: Vec<ParameterT>,
    pub links: SelfT,
}

/// Body of an order create request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequestT {
    /// URI of the service to run.
    #[serde(rename = "serviceID")]
    pub service_id: String,
    /// URI of the account paying for it.
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    pub parameters: Vec<ParameterT>,
}

impl OrderRequestT {
    pub fn new(
        service_id: impl Into<String>,
        account_id: impl Into<String>,
        parameters: Vec<ParameterT>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            account_id: account_id.into(),
            name: None,
            metadata: None,
            parameters,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Body of a logs request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LogsRequestT {
    pub order_id: String,
    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
}

/// Body of a top request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TopRequestT {
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_name: Option<String>,
}

/// Resource usage of one container of a running order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderTopResultItem {
    pub container: String,
    pub cpu: String,
    pub memory: String,
    pub storage: String,
    pub ephemeral_storage: String,
}
