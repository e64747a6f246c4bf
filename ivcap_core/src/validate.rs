//! Field validation shared by payload checks and decoded-body checks.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldErrorKind {
    Missing,
    /// `min` is true when the lower bound was crossed.
    Range { value: i64, bound: i64, min: bool },
    Enum { value: String, allowed: &'static [&'static str] },
    Format { value: String, format: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Missing => write!(f, "\"{}\" is missing", self.field),
            FieldErrorKind::Range { value, bound, min: true } => write!(
                f,
                "\"{}\" must be greater or equal than {} but got value {}",
                self.field, bound, value
            ),
            FieldErrorKind::Range { value, bound, min: false } => write!(
                f,
                "\"{}\" must be lesser or equal than {} but got value {}",
                self.field, bound, value
            ),
            FieldErrorKind::Enum { value, allowed } => write!(
                f,
                "value of \"{}\" must be one of {:?} but got value {:?}",
                self.field, allowed, value
            ),
            FieldErrorKind::Format { value, format } => write!(
                f,
                "\"{}\" must be formatted as {} but got value {:?}",
                self.field, format, value
            ),
        }
    }
}

/// One or more field errors, merged in the order they were found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, field: impl Into<String>, kind: FieldErrorKind) {
        self.errors.push(FieldError {
            field: field.into(),
            kind,
        });
    }

    pub fn missing(&mut self, field: impl Into<String>) {
        self.push(field, FieldErrorKind::Missing);
    }

    /// Records a missing field when `value` is `None`.
    pub fn require<T>(&mut self, field: &str, value: &Option<T>) {
        if value.is_none() {
            self.missing(field);
        }
    }

    pub fn range(&mut self, field: &str, value: i64, min: Option<i64>, max: Option<i64>) {
        if let Some(bound) = min
            && value < bound
        {
            self.push(field, FieldErrorKind::Range { value, bound, min: true });
        }
        if let Some(bound) = max
            && value > bound
        {
            self.push(field, FieldErrorKind::Range { value, bound, min: false });
        }
    }

    pub fn uri(&mut self, field: &str, value: &str) {
        if !is_uri(value) {
            self.push(
                field,
                FieldErrorKind::Format {
                    value: value.to_string(),
                    format: "uri",
                },
            );
        }
    }

    /// Nests the errors of a child under `prefix` (e.g. `links.self`).
    pub fn merge_nested(&mut self, prefix: &str, other: Result<(), ValidationError>) {
        if let Err(other) = other {
            for mut e in other.errors {
                e.field = format!("{}.{}", prefix, e.field);
                self.errors.push(e);
            }
        }
    }

    pub fn merge(&mut self, other: Result<(), ValidationError>) {
        if let Err(other) = other {
            self.errors.extend(other.errors);
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accepts absolute URIs with a scheme (`urn:`, `https:`, ...).
pub fn is_uri(value: &str) -> bool {
    match value.split_once(':') {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && scheme
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
