//! Validation of raw input into polars series.
//!
//! [`SeriesAdapter`] is the single bridge between serde models and polars.
//! An existing series passes through untouched; anything else is handed to
//! `Series::from_any_values`, and whatever that constructor decides (empty
//! input, mixed types, strictness) is the outcome. Errors are the
//! constructor's own [`PolarsError`]s.

use polars::prelude::{PlSmallStr, PolarsResult};
use serde::de::DeserializeOwned;

use crate::config::AdapterConfig;
use crate::raw::RawColumn;
use crate::series::Series;

/// Validates raw values into [`Series`] instances.
///
/// Holds only its immutable configuration, so one adapter can be shared
/// freely between threads.
///
/// # Examples
///
/// ```
/// use series_field::{AdapterConfig, SeriesAdapter};
///
/// let adapter = SeriesAdapter::with_config(AdapterConfig::default().with_name("prices"));
/// let s = adapter.validate(vec![1i64, 2, 3]).unwrap();
/// assert_eq!(s.name().as_str(), "prices");
/// assert_eq!(s.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesAdapter {
    config: AdapterConfig,
}

impl SeriesAdapter {
    /// Creates an adapter with the default settings: unnamed series and
    /// non-strict construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that builds series with the given settings.
    ///
    /// # Arguments
    ///
    /// * `config` - Name and strictness forwarded to `Series::from_any_values`
    pub fn with_config(config: AdapterConfig) -> Self {
        Self { config }
    }

    /// Returns the settings this adapter constructs with.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Validate `raw` into a series.
    ///
    /// An existing series is returned as is. Other input is converted to
    /// polars scalars and built with `Series::from_any_values` using the
    /// configured name and strictness.
    pub fn validate(&self, raw: impl Into<RawColumn>) -> PolarsResult<Series> {
        let raw = raw.into();
        if let RawColumn::Series(existing) = raw {
            log::trace!(
                "Column validation: passing through existing series '{}'",
                existing.name()
            );
            return Ok(Series::from(existing));
        }

        let description = raw.describe();
        log::debug!("Column validation: constructing series from {}", description);

        let constructed = raw
            .into_any_values(self.config.strict)
            .and_then(|values| {
                polars::prelude::Series::from_any_values(
                    PlSmallStr::from(self.config.name.as_str()),
                    &values,
                    self.config.strict,
                )
            });

        match constructed {
            Ok(s) => {
                log::debug!(
                    "Column validation: built series of {} values with dtype {}",
                    s.len(),
                    s.dtype()
                );
                Ok(Series::from(s))
            }
            Err(e) => {
                log::debug!("Column validation failed for {}: {}", description, e);
                Err(e)
            }
        }
    }
}

/// Validate `raw` with the default adapter settings.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let s = series_field::validate(json!([1, 2, 3])).unwrap();
/// assert_eq!(s.to_list(), vec![json!(1), json!(2), json!(3)]);
///
/// // Validating a series again returns it unchanged.
/// let again = series_field::validate(s.clone()).unwrap();
/// assert!(again.equals(&s));
/// ```
pub fn validate(raw: impl Into<RawColumn>) -> PolarsResult<Series> {
    SeriesAdapter::default().validate(raw)
}

/// Deserialize a model from a JSON value, reporting the path of the field
/// that failed validation.
///
/// The error message has the form `data: <polars message>`.
pub fn from_json_path<M: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<M, serde_path_to_error::Error<serde_json::Error>> {
    serde_path_to_error::deserialize(value)
}
