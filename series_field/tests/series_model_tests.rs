//! Integration tests for the `Series` field type.
//!
//! These tests ensure that:
//! 1. Raw sequences validate into polars series with the same contents
//! 2. Existing series pass through validation unchanged
//! 3. Arithmetic, equality and display behave like polars
//! 4. Errors keep polars' own type and message

use polars::prelude as pl;
use polars::prelude::{DataType, NamedFrom, PolarsError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use series_field::{
    from_json_path, validate, AdapterConfig, DescribeSchema, ErrorKind, PolarsErrorExt, Series,
    SeriesAdapter,
};

#[derive(Debug, Deserialize, Serialize)]
struct SeriesModel {
    data: Series,
}

fn int_series(values: &[i64]) -> pl::Series {
    pl::Series::new("".into(), values)
}

// ==================== Construction ====================

#[test]
fn test_series_creation() {
    let cases = vec![
        (json!([1, 2, 3]), vec![json!(1), json!(2), json!(3)]),
        (json!([10, 20, 30, 40]), vec![json!(10), json!(20), json!(30), json!(40)]),
    ];

    for (data, expected) in cases {
        let s = validate(data).unwrap();
        assert_eq!(s.to_list(), expected);
    }
}

#[test]
fn test_empty_series_follows_polars() {
    let from_polars = pl::Series::from_any_values("".into(), &[], true);
    let validated = validate(json!([]));

    match (validated, from_polars) {
        (Ok(s), Ok(expected)) => {
            assert!(s.is_empty());
            assert_eq!(s.dtype(), expected.dtype());
        }
        (Err(e), Err(expected)) => assert_eq!(e.to_string(), expected.to_string()),
        (validated, expected) => panic!(
            "empty input diverged from polars: {:?} vs {:?}",
            validated.map(|s| s.len()),
            expected.map(|s| s.len())
        ),
    }
}

#[test]
fn test_series_repr() {
    let s = validate(vec![1i64, 2, 3]).unwrap();
    assert_eq!(s.to_string(), int_series(&[1, 2, 3]).to_string());
}

#[test]
fn test_series_attribute_access() {
    let s = validate(vec![1i64, 2, 3]).unwrap();
    assert_eq!(s.sum::<i64>().unwrap(), int_series(&[1, 2, 3]).sum::<i64>().unwrap());
    assert_eq!(s.len(), 3);
}

#[test]
fn test_series_equality() {
    let s1 = validate(vec![1i64, 2, 3]).unwrap();
    let s2 = validate(vec![1i64, 2, 3]).unwrap();
    assert!(s1.equals(&s2));
    assert!(s2.equals(&int_series(&[1, 2, 3])));
}

#[test]
fn test_validation_is_idempotent() {
    let once = validate(json!([1, 2, 3])).unwrap();
    let twice = validate(once.clone()).unwrap();
    assert!(twice.equals(&once));
    assert_eq!(twice.name(), once.name());
}

// ==================== Arithmetic ====================

#[test]
fn test_series_addition() {
    let s1 = validate(vec![1i64, 2, 3]).unwrap();
    let s2 = validate(vec![4i64, 5, 6]).unwrap();
    let s3 = (&s1 + &s2).unwrap();
    assert_eq!(s3.to_list(), vec![json!(5), json!(7), json!(9)]);
}

#[test]
fn test_series_addition_with_types() {
    let s = validate(vec![1i64, 2, 3]).unwrap();
    let result = (&s + vec![4i64, 5, 6]).unwrap();
    assert_eq!(result.to_list(), vec![json!(5), json!(7), json!(9)]);

    let s = validate(vec![10i64, 20, 30]).unwrap();
    let result = (&s + json!([1, 2, 3])).unwrap();
    assert_eq!(result.to_list(), vec![json!(11), json!(22), json!(33)]);

    let s = validate(vec![5i64, 10, 15]).unwrap();
    let result = (&s + int_series(&[1, 2, 3])).unwrap();
    assert_eq!(result.to_list(), vec![json!(6), json!(12), json!(18)]);
}

#[test]
fn test_series_addition_invalid_type_error() {
    let s = validate(vec![1i64, 2, 3]).unwrap();

    let err = (&s + json!("invalid")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    let err = (&s + json!({"a": 1, "b": 2})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_series_addition_invalid_value_error() {
    let s = validate(vec![1i64, 2, 3]).unwrap();
    let err = (&s + json!([])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
}

#[test]
fn test_one_element_sequence_is_value_error() {
    let s = validate(vec![1i64, 2, 3]).unwrap();

    let err = (&s + vec![1i64]).unwrap_err();
    assert!(matches!(err, PolarsError::ShapeMismatch(_)));

    let err = (&s + json!([1])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);

    let result = (&s + 1i64).unwrap();
    assert_eq!(result.to_list(), vec![json!(2), json!(3), json!(4)]);
}

// ==================== Models ====================

#[test]
fn test_valid_series_model() {
    let model: SeriesModel = serde_json::from_value(json!({"data": [1, 2, 4]})).unwrap();
    assert!(model.data.equals(&int_series(&[1, 2, 4])));
}

#[test]
fn test_valid_series_model_with_pl_series() {
    let s = pl::Series::new("orig".into(), &[1i64, 2, 4]);
    let adapter = SeriesAdapter::with_config(AdapterConfig::default().with_name("other"));
    let model = SeriesModel {
        data: adapter.validate(s.clone()).unwrap(),
    };
    assert!(model.data.equals(&s));
    assert_eq!(model.data.name().as_str(), "orig");
    assert_eq!(model.data.dtype(), s.dtype());
}

#[test]
fn test_model_with_mixed_numbers() {
    let model: SeriesModel = serde_json::from_value(json!({"data": [1, 2.5]})).unwrap();
    assert_eq!(model.data.dtype(), &DataType::Float64);
    assert_eq!(model.data.to_list(), vec![json!(1.0), json!(2.5)]);
}

#[test]
fn test_model_from_mapping_keeps_order() {
    let model: SeriesModel = serde_json::from_str(r#"{"data": {"b": 1, "a": 2}}"#).unwrap();
    assert_eq!(model.data.to_list(), vec![json!(1), json!(2)]);
}

#[test]
fn test_model_serializes_values() {
    let model: SeriesModel = serde_json::from_value(json!({"data": [1.5, 2.5]})).unwrap();
    assert_eq!(serde_json::to_value(&model).unwrap(), json!({"data": [1.5, 2.5]}));
}

#[test]
fn test_model_error_reports_field_path() {
    let err = from_json_path::<SeriesModel>(json!({"data": [{"nested": true}]})).unwrap_err();
    assert_eq!(err.path().to_string(), "data");
}

#[test]
fn test_schema_descriptor() {
    let schema = Series::describe_schema().to_json();
    assert_eq!(schema["type"], json!("array"));
    assert_eq!(schema["items"], json!({}));
}
