//! Value representations and schema types
//!
//! A leaf filter declares the kind of value it compares against. For each
//! lookup the filter reports a [`FormField`], which [`SchemaType::resolve`]
//! maps onto the small closed set of types an API document understands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of value a leaf filter accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Char,
    Integer,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    Uuid,
    Email,
    Url,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Uuid => "uuid",
            Self::Email => "email",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value representation a filter expects for one specific lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// One value of the given kind
    Single(ValueKind),
    /// Comma separated values, each of the given kind
    Multiple(ValueKind),
}

/// Abstract value type published for a query parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
    Array,
}

impl SchemaType {
    /// Resolve the schema type for a form field.
    ///
    /// Only exact representation matches are mapped; everything else
    /// (decimals, dates, identifiers) is documented as a string.
    pub fn resolve(field: &FormField) -> Self {
        match field {
            FormField::Multiple(_) => Self::Array,
            FormField::Single(ValueKind::Boolean) => Self::Boolean,
            FormField::Single(ValueKind::Integer) => Self::Integer,
            FormField::Single(ValueKind::Float) => Self::Number,
            FormField::Single(_) => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
