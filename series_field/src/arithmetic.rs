//! Elementwise arithmetic on validated series.
//!
//! The right-hand side may be another series, a fixed-length sequence, a
//! JSON value or a scalar. It is turned into a polars series and the polars
//! operator does the work.
//!
//! Before calling polars the operands are checked:
//!
//! - scalars broadcast; sequences must have exactly the series' length;
//!   series follow polars' rule (equal lengths, or one side of length 1).
//!   Anything else is a `ShapeMismatch`, a value-kind error.
//! - a numeric series never combines with a string operand (or the other
//!   way round), which polars would otherwise concatenate.
//!   That is an `InvalidOperation`, a type-kind error.
//!
//! Every other dtype combination is left to polars.

use polars::prelude as pl;
use polars::prelude::{AnyValue, DataType, PlSmallStr, PolarsError, PolarsResult};
use serde_json::Value;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::raw::RawColumn;
use crate::series::Series;

/// Right-hand side of an arithmetic operation.
#[derive(Debug, Clone)]
pub enum Operand {
    Series(pl::Series),
    Values(Vec<AnyValue<'static>>),
    Json(Value),
    Scalar(AnyValue<'static>),
}

/// How an operand's length is matched against the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandShape {
    /// A single value, broadcast over every element.
    Scalar,
    /// A fixed-length sequence; lengths must be equal.
    Sequence,
    /// A polars series; equal lengths or length 1 on either side.
    Series,
}

impl Operand {
    /// Length rule this operand follows.
    pub fn shape(&self) -> OperandShape {
        match self {
            Operand::Series(_) => OperandShape::Series,
            Operand::Values(_) => OperandShape::Sequence,
            Operand::Json(Value::Array(_)) | Operand::Json(Value::Object(_)) => {
                OperandShape::Sequence
            }
            Operand::Json(_) | Operand::Scalar(_) => OperandShape::Scalar,
        }
    }

    /// Build the polars series this operand stands for.
    pub fn into_series(self) -> PolarsResult<pl::Series> {
        match self {
            Operand::Series(s) => Ok(s),
            Operand::Values(values) => pl::Series::from_any_values(PlSmallStr::EMPTY, &values, false),
            Operand::Scalar(value) => pl::Series::from_any_values(PlSmallStr::EMPTY, &[value], false),
            Operand::Json(Value::Object(map)) => Err(PolarsError::InvalidOperation(
                format!(
                    "arithmetic is not supported between a series and a mapping of {} entries",
                    map.len()
                )
                .into(),
            )),
            Operand::Json(value) => {
                let values = RawColumn::Json(value).into_any_values(false)?;
                pl::Series::from_any_values(PlSmallStr::EMPTY, &values, false)
            }
        }
    }
}

impl From<&Series> for Operand {
    fn from(s: &Series) -> Self {
        Operand::Series(s.as_series().clone())
    }
}

impl From<Series> for Operand {
    fn from(s: Series) -> Self {
        Operand::Series(s.into_inner())
    }
}

impl From<pl::Series> for Operand {
    fn from(s: pl::Series) -> Self {
        Operand::Series(s)
    }
}

impl From<&pl::Series> for Operand {
    fn from(s: &pl::Series) -> Self {
        Operand::Series(s.clone())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Json(value)
    }
}

impl From<Vec<AnyValue<'static>>> for Operand {
    fn from(values: Vec<AnyValue<'static>>) -> Self {
        Operand::Values(values)
    }
}

impl From<AnyValue<'static>> for Operand {
    fn from(value: AnyValue<'static>) -> Self {
        Operand::Scalar(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Scalar(AnyValue::StringOwned(value.into()))
    }
}

macro_rules! impl_operand_from_scalars {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Scalar(AnyValue::$variant(value))
                }
            }

            impl From<Vec<$ty>> for Operand {
                fn from(values: Vec<$ty>) -> Self {
                    Operand::Values(values.into_iter().map(AnyValue::$variant).collect())
                }
            }

            impl<const N: usize> From<[$ty; N]> for Operand {
                fn from(values: [$ty; N]) -> Self {
                    Operand::Values(values.into_iter().map(AnyValue::$variant).collect())
                }
            }
        )*
    };
}

impl_operand_from_scalars!(i32 => Int32, i64 => Int64, f64 => Float64, bool => Boolean);

/// Elementwise operator applied by [`Series::try_arithmetic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArithmeticOp::Add => "add",
            ArithmeticOp::Sub => "sub",
            ArithmeticOp::Mul => "mul",
            ArithmeticOp::Div => "div",
        };
        write!(f, "{}", name)
    }
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    dtype.is_integer() || dtype.is_float()
}

fn check_operands(
    op: ArithmeticOp,
    lhs: &pl::Series,
    rhs: &pl::Series,
    shape: OperandShape,
) -> PolarsResult<()> {
    let lengths_fit = match shape {
        OperandShape::Scalar => true,
        OperandShape::Sequence => lhs.len() == rhs.len(),
        OperandShape::Series => lhs.len() == rhs.len() || lhs.len() == 1 || rhs.len() == 1,
    };
    if !lengths_fit {
        return Err(PolarsError::ShapeMismatch(
            format!(
                "cannot {} operands of different lengths: got {} and {}",
                op,
                lhs.len(),
                rhs.len()
            )
            .into(),
        ));
    }

    let numeric_with_string = (is_numeric_dtype(lhs.dtype()) && rhs.dtype() == &DataType::String)
        || (lhs.dtype() == &DataType::String && is_numeric_dtype(rhs.dtype()));
    if numeric_with_string {
        return Err(PolarsError::InvalidOperation(
            format!(
                "{} operation not supported for dtypes `{}` and `{}`",
                op,
                lhs.dtype(),
                rhs.dtype()
            )
            .into(),
        ));
    }

    Ok(())
}

impl Series {
    /// Apply `op` elementwise between this series and `rhs`.
    pub fn try_arithmetic(&self, op: ArithmeticOp, rhs: impl Into<Operand>) -> PolarsResult<Series> {
        let lhs = self.as_series();
        let rhs = rhs.into();
        let shape = rhs.shape();
        let rhs = rhs.into_series()?;
        check_operands(op, lhs, &rhs, shape)?;

        let out = match op {
            ArithmeticOp::Add => (lhs + &rhs)?,
            ArithmeticOp::Sub => (lhs - &rhs)?,
            ArithmeticOp::Mul => (lhs * &rhs)?,
            ArithmeticOp::Div => (lhs / &rhs)?,
        };
        Ok(Series::from(out))
    }

    pub fn try_add(&self, rhs: impl Into<Operand>) -> PolarsResult<Series> {
        self.try_arithmetic(ArithmeticOp::Add, rhs)
    }

    pub fn try_sub(&self, rhs: impl Into<Operand>) -> PolarsResult<Series> {
        self.try_arithmetic(ArithmeticOp::Sub, rhs)
    }

    pub fn try_mul(&self, rhs: impl Into<Operand>) -> PolarsResult<Series> {
        self.try_arithmetic(ArithmeticOp::Mul, rhs)
    }

    pub fn try_div(&self, rhs: impl Into<Operand>) -> PolarsResult<Series> {
        self.try_arithmetic(ArithmeticOp::Div, rhs)
    }
}

macro_rules! impl_series_operator {
    ($($trait:ident, $method:ident => $op:ident);* $(;)?) => {
        $(
            impl<T: Into<Operand>> $trait<T> for &Series {
                type Output = PolarsResult<Series>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.try_arithmetic(ArithmeticOp::$op, rhs)
                }
            }

            impl<T: Into<Operand>> $trait<T> for Series {
                type Output = PolarsResult<Series>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.try_arithmetic(ArithmeticOp::$op, rhs)
                }
            }
        )*
    };
}

impl_series_operator!(
    Add, add => Add;
    Sub, sub => Sub;
    Mul, mul => Mul;
    Div, div => Div;
);
