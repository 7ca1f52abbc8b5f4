//! Validated polars `Series` field type for serde data models.
//!
//! `series_field` lets a serde model declare a column of tabular data as an
//! ordinary field. Raw input (a JSON sequence, a mapping, a scalar, or an
//! already built polars series) is validated into a genuine
//! [`polars::prelude::Series`]; storage, arithmetic, equality and printing
//! all stay with polars.
//!
//! # Modules
//!
//! - [`adapter`]: The validation entry point and its identity fast path
//! - [`raw`]: Raw input accepted by validation, JSON to `AnyValue` conversion
//! - [`series`]: The [`Series`] field type
//! - [`arithmetic`]: Elementwise operators against series, sequences and scalars
//! - [`schema`]: Schema descriptors for documentation tooling
//! - [`error`]: Error kind classification and configuration errors
//! - [`config`]: Adapter settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use serde::Deserialize;
//! use series_field::Series;
//!
//! #[derive(Deserialize)]
//! struct SeriesModel {
//!     data: Series,
//! }
//!
//! let model: SeriesModel = serde_json::from_str(r#"{"data": [1, 2, 4]}"#).unwrap();
//! assert_eq!(model.data.len(), 3);
//! ```

pub mod adapter;
pub mod arithmetic;
pub mod config;
pub mod error;
pub mod raw;
pub mod schema;
pub mod series;

pub use adapter::{from_json_path, validate, SeriesAdapter};
pub use arithmetic::Operand;
pub use config::AdapterConfig;
pub use error::{ConfigError, ErrorKind, PolarsErrorExt};
pub use raw::RawColumn;
pub use schema::{DescribeSchema, SchemaDescriptor};
pub use series::Series;
