//! Raw input accepted by validation.
//!
//! A [`RawColumn`] is whatever a caller hands to the adapter before it has
//! been turned into a polars series: an existing series, a JSON value, or a
//! vector of scalars. The helpers here convert between JSON values and
//! polars [`AnyValue`]s in both directions.

use polars::prelude::*;
use serde_json::{Map, Value};

/// Raw value entering validation.
#[derive(Debug, Clone)]
pub enum RawColumn {
    /// An already constructed polars series.
    Series(Series),
    /// A JSON sequence, mapping or scalar.
    Json(Value),
    /// Scalars already in polars form.
    Values(Vec<AnyValue<'static>>),
}

impl RawColumn {
    /// Short description used in log lines.
    pub fn describe(&self) -> String {
        match self {
            RawColumn::Series(s) => format!("series '{}' ({}, len {})", s.name(), s.dtype(), s.len()),
            RawColumn::Json(Value::Array(items)) => format!("JSON array of {} values", items.len()),
            RawColumn::Json(Value::Object(map)) => format!("JSON mapping of {} entries", map.len()),
            RawColumn::Json(_) => "JSON scalar".to_string(),
            RawColumn::Values(values) => format!("{} scalar values", values.len()),
        }
    }

    /// Converts the raw input into the values handed to the polars constructor.
    ///
    /// Sequences keep their order, mappings contribute their values in
    /// iteration order, and a lone scalar becomes a single value. Calling
    /// this on [`RawColumn::Series`] yields the series' own values.
    pub fn into_any_values(self, strict: bool) -> PolarsResult<Vec<AnyValue<'static>>> {
        match self {
            RawColumn::Series(s) => Ok(series_to_any_values(&s)),
            RawColumn::Values(values) => Ok(values),
            RawColumn::Json(Value::Array(items)) => json_items_to_any_values(&items, strict),
            RawColumn::Json(Value::Object(map)) => mapping_to_any_values(&map, strict),
            RawColumn::Json(scalar) => Ok(vec![json_to_any_value(&scalar, strict)?]),
        }
    }
}

impl From<Series> for RawColumn {
    fn from(s: Series) -> Self {
        RawColumn::Series(s)
    }
}

impl From<&Series> for RawColumn {
    fn from(s: &Series) -> Self {
        RawColumn::Series(s.clone())
    }
}

impl From<crate::series::Series> for RawColumn {
    fn from(s: crate::series::Series) -> Self {
        RawColumn::Series(s.into_inner())
    }
}

impl From<Value> for RawColumn {
    fn from(value: Value) -> Self {
        RawColumn::Json(value)
    }
}

impl From<Vec<AnyValue<'static>>> for RawColumn {
    fn from(values: Vec<AnyValue<'static>>) -> Self {
        RawColumn::Values(values)
    }
}

macro_rules! impl_raw_from_scalars {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for RawColumn {
                fn from(values: Vec<$ty>) -> Self {
                    RawColumn::Values(values.into_iter().map(AnyValue::$variant).collect())
                }
            }

            impl From<&[$ty]> for RawColumn {
                fn from(values: &[$ty]) -> Self {
                    RawColumn::Values(values.iter().copied().map(AnyValue::$variant).collect())
                }
            }
        )*
    };
}

impl_raw_from_scalars!(
    i32 => Int32,
    i64 => Int64,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    bool => Boolean,
);

impl From<Vec<String>> for RawColumn {
    fn from(values: Vec<String>) -> Self {
        RawColumn::Values(
            values
                .into_iter()
                .map(|s| AnyValue::StringOwned(s.into()))
                .collect(),
        )
    }
}

impl From<Vec<&str>> for RawColumn {
    fn from(values: Vec<&str>) -> Self {
        RawColumn::Values(
            values
                .into_iter()
                .map(|s| AnyValue::StringOwned(s.into()))
                .collect(),
        )
    }
}

impl From<Vec<Option<i64>>> for RawColumn {
    fn from(values: Vec<Option<i64>>) -> Self {
        RawColumn::Values(
            values
                .into_iter()
                .map(|v| v.map_or(AnyValue::Null, AnyValue::Int64))
                .collect(),
        )
    }
}

impl From<Vec<Option<f64>>> for RawColumn {
    fn from(values: Vec<Option<f64>>) -> Self {
        RawColumn::Values(
            values
                .into_iter()
                .map(|v| v.map_or(AnyValue::Null, AnyValue::Float64))
                .collect(),
        )
    }
}

/// Convert a single JSON value into a polars scalar.
///
/// Numbers that fit `i64` become `Int64`, larger non-negative integers
/// `UInt64`, everything else `Float64`. Nested arrays become list values
/// built with the same constructor as top-level columns. Objects have no
/// scalar form and are rejected.
pub fn json_to_any_value(value: &Value, strict: bool) -> PolarsResult<AnyValue<'static>> {
    match value {
        Value::Null => Ok(AnyValue::Null),
        Value::Bool(b) => Ok(AnyValue::Boolean(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(AnyValue::Int64(i))
            } else if let Some(u) = n.as_u64() {
                Ok(AnyValue::UInt64(u))
            } else if let Some(f) = n.as_f64() {
                Ok(AnyValue::Float64(f))
            } else {
                Err(PolarsError::ComputeError(
                    format!("number {} cannot be represented as a polars scalar", n).into(),
                ))
            }
        }
        Value::String(s) => Ok(AnyValue::StringOwned(s.as_str().into())),
        Value::Array(items) => {
            let values = json_items_to_any_values(items, strict)?;
            let inner = Series::from_any_values(PlSmallStr::EMPTY, &values, strict)?;
            Ok(AnyValue::List(inner))
        }
        Value::Object(map) => Err(PolarsError::SchemaMismatch(
            format!(
                "cannot build a series element from a mapping with {} entries",
                map.len()
            )
            .into(),
        )),
    }
}

fn json_items_to_any_values(items: &[Value], strict: bool) -> PolarsResult<Vec<AnyValue<'static>>> {
    items
        .iter()
        .map(|item| json_to_any_value(item, strict))
        .collect()
}

fn mapping_to_any_values(
    map: &Map<String, Value>,
    strict: bool,
) -> PolarsResult<Vec<AnyValue<'static>>> {
    map.values()
        .map(|item| json_to_any_value(item, strict))
        .collect()
}

fn series_to_any_values(s: &Series) -> Vec<AnyValue<'static>> {
    if s.is_empty() {
        return Vec::new();
    }
    let s = s.rechunk();
    s.iter().map(|av| av.into_static()).collect()
}

/// Convert a polars scalar into a JSON value.
///
/// Non-finite floats become `null`, list values become arrays, and dtypes
/// without a JSON counterpart fall back to their polars display string.
pub fn any_value_to_json(value: &AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(*b),
        AnyValue::String(s) => Value::String((*s).to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int8(v) => Value::from(*v),
        AnyValue::Int16(v) => Value::from(*v),
        AnyValue::Int32(v) => Value::from(*v),
        AnyValue::Int64(v) => Value::from(*v),
        AnyValue::UInt8(v) => Value::from(*v),
        AnyValue::UInt16(v) => Value::from(*v),
        AnyValue::UInt32(v) => Value::from(*v),
        AnyValue::UInt64(v) => Value::from(*v),
        AnyValue::Float32(v) => Value::from(f64::from(*v)),
        AnyValue::Float64(v) => Value::from(*v),
        AnyValue::List(inner) => Value::Array(series_to_json(inner)),
        other => Value::String(other.to_string()),
    }
}

/// Export every value of a series as JSON, in order.
pub fn series_to_json(s: &Series) -> Vec<Value> {
    if s.is_empty() {
        return Vec::new();
    }
    let s = s.rechunk();
    s.iter().map(|av| any_value_to_json(&av)).collect()
}
