use super::types::{OrderListItem, OrderListRT, OrderStatusRT, OrderTopResultItem, ProductT};
use crate::common::{NavT, ParameterT, RefT, SelfT, vec_or_default, vec_or_none};
use ivcap_core::validate::ValidationError;
use ivcap_core::view::{ResultView, project_all, validate_all};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderListItemView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfT>,
}

impl ResultView for OrderListItemView {
    type Result = OrderListItem;

    fn project(res: &OrderListItem, _view: &str) -> Self {
        Self {
            id: Some(res.id.clone()),
            name: res.name.clone(),
            status: res.status.clone(),
            ordered_at: res.ordered_at.clone(),
            started_at: res.started_at.clone(),
            finished_at: res.finished_at.clone(),
            service_id: res.service_id.clone(),
            account_id: res.account_id.clone(),
            links: Some(res.links.clone()),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("id", &self.id);
        v.require("links", &self.links);
        v.into_result()
    }

    fn into_result(self) -> OrderListItem {
        OrderListItem {
            id: self.id.unwrap_or_default(),
            name: self.name,
            status: self.status,
            ordered_at: self.ordered_at,
            started_at: self.started_at,
            finished_at: self.finished_at,
            service_id: self.service_id,
            account_id: self.account_id,
            links: self.links.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderListRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<OrderListItemView>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<NavT>,
}

impl ResultView for OrderListRTView {
    type Result = OrderListRT;

    fn project(res: &OrderListRT, view: &str) -> Self {
        Self {
            orders: Some(project_all(&res.orders, view)),
            at_time: res.at_time.clone(),
            links: Some(res.links.clone()),
        }
    }

    fn validate(&self, view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("orders", &self.orders);
        v.require("links", &self.links);
        if let Some(orders) = &self.orders {
            v.merge(validate_all("orders", orders, view));
        }
        v.into_result()
    }

    fn into_result(self) -> OrderListRT {
        OrderListRT {
            orders: vec_or_default(self.orders)
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
pub struct OrderStatusRTView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductT>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<RefT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<RefT>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterT>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfT>,
}

impl ResultView for OrderStatusRTView {
    type Result = OrderStatusRT;

    fn project(res: &OrderStatusRT, _view: &str) -> Self {
        Self {
            id: Some(res.id.clone()),
            name: res.name.clone(),
            status: res.status.clone(),
            ordered_at: res.ordered_at.clone(),
            started_at: res.started_at.clone(),
            finished_at: res.finished_at.clone(),
            products: vec_or_none(&res.products),
            service: res.service.clone(),
            account: res.account.clone(),
            parameters: vec_or_none(&res.parameters),
            links: Some(res.links.clone()),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("id", &self.id);
        v.require("links", &self.links);
        v.into_result()
    }

    fn into_result(self) -> OrderStatusRT {
        OrderStatusRT {
            id: self.id.unwrap_or_default(),
            name: self.name,
            status: self.status,
            ordered_at: self.ordered_at,
            started_at: self.started_at,
            finished_at: self.finished_at,
            products: vec_or_default(self.products),
            service: self.service,
            account: self.account,
            parameters: vec_or_default(self.parameters),
            links: self.links.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderTopResultItemView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<String>,
}

impl ResultView for OrderTopResultItemView {
    type Result = OrderTopResultItem;

    fn project(res: &OrderTopResultItem, _view: &str) -> Self {
        Self {
            container: Some(res.container.clone()),
            cpu: Some(res.cpu.clone()),
            memory: Some(res.memory.clone()),
            storage: Some(res.storage.clone()),
            ephemeral_storage: Some(res.ephemeral_storage.clone()),
        }
    }

    fn validate(&self, _view: &str) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.require("container", &self.container);
        v.require("cpu", &self.cpu);
        v.require("memory", &self.memory);
        v.require("storage", &self.storage);
        v.require("ephemeral-storage", &self.ephemeral_storage);
        v.into_result()
    }

    fn into_result(self) -> OrderTopResultItem {
        OrderTopResultItem {
            container: self.container.unwrap_or_default(),
            cpu: self.cpu.unwrap_or_default(),
            memory: self.memory.unwrap_or_default(),
            storage: self.storage.unwrap_or_default(),
            ephemeral_storage: self.ephemeral_storage.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ivcap_core::view::{DEFAULT_VIEW, Viewed};

    #[test]
    fn list_items_are_checked_by_index() {
        let view: OrderListRTView = serde_json::from_str(
            r#"{"orders":[{"id":"o1","links":{}},{"name":"no id"}],"links":{}}"#,
        )
        .unwrap();
        let err = Viewed::new(view, DEFAULT_VIEW).resolve().unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["orders[1].id", "orders[1].links"]);
    }

    #[test]
    fn status_wire_names() {
        let view: OrderStatusRTView = serde_json::from_str(
            r#"{"id":"o1","ordered-at":"2024-05-01T10:00:00Z","links":{"self":"/1/orders/o1"},
                "products":[{"id":"p1","mime-type":"image/png"}]}"#,
        )
        .unwrap();
        let res = Viewed::new(view, "").resolve().unwrap();
        assert_eq!(res.ordered_at.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(res.products[0].mime_type.as_deref(), Some("image/png"));
        assert!(res.parameters.is_empty());
    }
}
