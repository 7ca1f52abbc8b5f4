//! Schema descriptors for documentation and serialization tooling.
//!
//! Descriptors are plain serde structs shaped like JSON Schema fragments.
//! They have no effect on validation.

use polars::prelude::DataType;
use serde::{Deserialize, Serialize};

/// Structural description of a field type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Descriptor of every element; `Some(default)` means "any value".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaDescriptor>>,
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Polars dtype the descriptor was derived from.
    #[serde(rename = "x-polars-dtype", skip_serializing_if = "Option::is_none")]
    pub polars_dtype: Option<String>,
}

impl SchemaDescriptor {
    /// An `array` whose elements may be anything.
    pub fn array_like() -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(SchemaDescriptor::default())),
            ..Default::default()
        }
    }

    /// Element descriptor for a polars dtype.
    pub fn for_dtype(dtype: &DataType) -> Self {
        let schema_type = match dtype {
            DataType::Boolean => Some("boolean"),
            DataType::String => Some("string"),
            DataType::Null => Some("null"),
            DataType::Float32 | DataType::Float64 => Some("number"),
            DataType::List(_) => Some("array"),
            dt if dt.is_integer() => Some("integer"),
            _ => None,
        };
        let items = match dtype {
            DataType::List(inner) => Some(Box::new(SchemaDescriptor::for_dtype(inner))),
            _ => None,
        };
        Self {
            schema_type: schema_type.map(str::to_string),
            items,
            polars_dtype: Some(dtype.to_string()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render the descriptor as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Schema-description hook for field types.
pub trait DescribeSchema {
    fn describe_schema() -> SchemaDescriptor;
}
