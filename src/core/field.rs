use indexmap::IndexMap;
use serde::Serialize;

/// Semantic type of one dataset field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Float,
    Text,
}

impl FieldKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

/// One named column of a figure's fixed record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSchema {
    #[must_use]
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
        }
    }

    #[must_use]
    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float,
        }
    }

    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }
}

/// Looks up a field by name in a schema slice.
#[must_use]
pub fn find_field(schema: &[FieldSchema], name: &str) -> Option<FieldSchema> {
    schema.iter().copied().find(|field| field.name == name)
}

/// Dynamically typed cell value handed to render adapters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Integer,
            Self::Float(_) => FieldKind::Float,
            Self::Text(_) => FieldKind::Text,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Int(_) | Self::Float(_) => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One dataset row, keyed by field name in schema order.
pub type Record = IndexMap<&'static str, FieldValue>;

/// Builds a [`Record`] preserving the given field order.
#[must_use]
pub fn record<const N: usize>(fields: [(&'static str, FieldValue); N]) -> Record {
    fields.into_iter().collect()
}
