//! Named projections of result types.
//!
//! A view type has every field optional and is what travels on the wire.
//! `Viewed` pairs a projection with the name of the view it was built for;
//! resolving it checks the fields that view requires before handing back the
//! full result.

use crate::validate::{FieldErrorKind, ValidationError};

/// Response header selecting the projection.
pub const VIEW_HEADER: &str = "goa-view";

pub const DEFAULT_VIEW: &str = "default";

pub trait ResultView: Sized {
    type Result;

    /// Views this type can be rendered with.
    const VIEWS: &'static [&'static str] = &[DEFAULT_VIEW];

    /// Copies the fields exposed by `view`.
    fn project(res: &Self::Result, view: &str) -> Self;

    /// Checks the fields `view` marks as required.
    fn validate(&self, view: &str) -> Result<(), ValidationError>;

    /// Converts a validated projection into the full result.
    fn into_result(self) -> Self::Result;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewed<V> {
    pub projected: V,
    pub view: String,
}

impl<V: ResultView> Viewed<V> {
    /// An empty view name stands for the default view.
    pub fn new(projected: V, view: impl Into<String>) -> Self {
        let view = view.into();
        let view = if view.is_empty() {
            DEFAULT_VIEW.to_string()
        } else {
            view
        };
        Self { projected, view }
    }

    pub fn project(res: &V::Result, view: &str) -> Self {
        Self::new(V::project(res, view), view)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !V::VIEWS.contains(&self.view.as_str()) {
            let mut v = ValidationError::new();
            v.push(
                "view",
                FieldErrorKind::Enum {
                    value: self.view.clone(),
                    allowed: V::VIEWS,
                },
            );
            return Err(v);
        }
        self.projected.validate(&self.view)
    }

    pub fn resolve(self) -> Result<V::Result, ValidationError> {
        self.validate()?;
        Ok(self.projected.into_result())
    }
}

/// Projects every element of a collection.
pub fn project_all<V: ResultView>(items: &[V::Result], view: &str) -> Vec<V> {
    items.iter().map(|r| V::project(r, view)).collect()
}

/// Validates every element, naming failures by index (`items[2].id`).
pub fn validate_all<V: ResultView>(
    field: &str,
    items: &[V],
    view: &str,
) -> Result<(), ValidationError> {
    let mut v = ValidationError::new();
    for (i, item) in items.iter().enumerate() {
        v.merge_nested(&format!("{}[{}]", field, i), item.validate(view));
    }
    v.into_result()
}
