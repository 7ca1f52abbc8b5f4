//! The [`Series`] field type.
//!
//! `Series` wraps a [`polars::prelude::Series`] and dereferences to it, so
//! every polars method is available directly. What it adds is the glue a
//! serde model needs: `Deserialize` runs validation, `Serialize` writes the
//! values back out as a JSON array, and [`DescribeSchema`] describes the
//! field for documentation tooling.

use polars::prelude as pl;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::adapter;
use crate::raw::series_to_json;
use crate::schema::{DescribeSchema, SchemaDescriptor};

/// A validated polars series, usable as a serde field type.
///
/// # Examples
///
/// ```
/// use polars::prelude::NamedFrom;
/// use serde::Deserialize;
/// use series_field::Series;
///
/// #[derive(Deserialize)]
/// struct SeriesModel {
///     data: Series,
/// }
///
/// let model: SeriesModel = serde_json::from_str(r#"{"data": [1, 2, 4]}"#).unwrap();
/// let expected = polars::prelude::Series::new("".into(), &[1i64, 2, 4]);
/// assert!(model.data.equals(&expected));
/// ```
#[derive(Clone)]
pub struct Series(pl::Series);

impl Series {
    /// Borrow the underlying polars series.
    pub fn as_series(&self) -> &pl::Series {
        &self.0
    }

    /// Consume the wrapper and return the polars series.
    pub fn into_inner(self) -> pl::Series {
        self.0
    }

    /// Elementwise equality where missing values compare equal.
    ///
    /// Names are ignored; dtypes and values must agree.
    pub fn equals(&self, other: &pl::Series) -> bool {
        self.0.dtype() == other.dtype() && self.0.equals_missing(other)
    }

    /// All values as JSON, in order.
    pub fn to_list(&self) -> Vec<serde_json::Value> {
        series_to_json(&self.0)
    }

    /// Descriptor specialised to this instance's dtype and length.
    pub fn instance_schema(&self) -> SchemaDescriptor {
        let mut descriptor = Self::describe_schema();
        descriptor.items = Some(Box::new(SchemaDescriptor::for_dtype(self.0.dtype())));
        descriptor.min_items = Some(self.0.len());
        descriptor.max_items = Some(self.0.len());
        descriptor
    }
}

impl From<pl::Series> for Series {
    fn from(s: pl::Series) -> Self {
        Series(s)
    }
}

impl From<Series> for pl::Series {
    fn from(s: Series) -> Self {
        s.0
    }
}

impl Deref for Series {
    type Target = pl::Series;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Series {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<pl::Series> for Series {
    fn as_ref(&self) -> &pl::Series {
        &self.0
    }
}

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<pl::Series> for Series {
    fn eq(&self, other: &pl::Series) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl DescribeSchema for Series {
    fn describe_schema() -> SchemaDescriptor {
        SchemaDescriptor::array_like()
            .with_title("Series")
            .with_description("One-dimensional array of scalar values")
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        adapter::validate(raw).map_err(D::Error::custom)
    }
}

impl Serialize for Series {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_list().serialize(serializer)
    }
}
