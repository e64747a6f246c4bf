//! Link blocks and small records shared by every resource.
//!
//! None of these carry required fields, so each type is its own wire view.

use ivcap_core::prelude::{Policy, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribedByT {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfT {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(rename = "describedBy", default, skip_serializing_if = "Option::is_none")]
    pub described_by: Option<DescribedByT>,
}

/// Navigation links of a list page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavT {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RefT {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SelfT>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfWithDataT {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(rename = "describedBy", default, skip_serializing_if = "Option::is_none")]
    pub described_by: Option<DescribedByT>,
}

/// Metadata record attached to an entity; `data` is schema-defined JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataT {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterT {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ParameterT {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// Paging and ordering of the order and service listings. `limit` and
/// `order-desc` are always sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// 1..=50.
    pub limit: i64,
    /// Opaque token from a previous page.
    pub page: Option<String>,
    pub filter: Option<String>,
    pub order_by: Option<String>,
    pub order_desc: bool,
    /// Returns the listing as it was at this RFC 3339 time.
    pub at_time: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            page: None,
            filter: None,
            order_by: None,
            order_desc: true,
            at_time: None,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn limit(mut self, v: i64) -> Self {
        self.limit = v;
        self
    }

    #[inline]
    pub fn order_desc(mut self, v: bool) -> Self {
        self.order_desc = v;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        let mut v = ValidationError::new();
        v.range("limit", self.limit, Some(1), Some(50));
        v.into_result()
    }

    pub(crate) fn apply(&self, policy: &mut Policy) {
        policy.push_query("limit", self.limit.to_string());
        policy.push_query_opt("page", self.page.as_deref());
        policy.push_query_opt("filter", self.filter.as_deref());
        policy.push_query_opt("order-by", self.order_by.as_deref());
        policy.push_query("order-desc", self.order_desc.to_string());
        policy.push_query_opt("at-time", self.at_time.as_deref());
    }
}

optional_setters!(ListQuery {
    page: String,
    filter: String,
    order_by: String,
    at_time: String,
});

/// Moves a present list out of a view, an absent one becomes empty.
pub(crate) fn vec_or_default<T>(v: Option<Vec<T>>) -> Vec<T> {
    v.unwrap_or_default()
}

/// Projects a list; an empty one is left off the wire.
pub(crate) fn vec_or_none<T: Clone>(v: &[T]) -> Option<Vec<T>> {
    (!v.is_empty()).then(|| v.to_vec())
}
