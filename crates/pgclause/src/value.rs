//! Bound values and per-condition value shapes.
//!
//! [`Scalar`] is one bindable value; [`Value`] is the tagged union carried by
//! a [`Condition`](crate::Condition), discriminating between a single bound
//! value, an inlined membership list, a range, a cross-table column
//! reference, and no value at all.

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};
use uuid::Uuid;

use crate::ident::ColumnRef;

/// A single bindable value.
///
/// Implements [`ToSql`] by delegating to the wrapped type, so the argument
/// list returned by [`build_where`](crate::build_where) can be handed to
/// `tokio-postgres` as positional parameters without conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
    Uuid(Uuid),
}

impl Scalar {
    /// Append this value as an inline SQL literal.
    ///
    /// Numbers and booleans render bare; everything else renders
    /// single-quoted, with embedded quotes doubled.
    pub(crate) fn write_literal(&self, out: &mut String) {
        match self {
            Scalar::Int(v) => {
                out.push_str(&v.to_string());
            }
            Scalar::Float(v) => {
                out.push_str(&v.to_string());
            }
            Scalar::Bool(v) => {
                out.push_str(if *v { "true" } else { "false" });
            }
            Scalar::Text(v) => write_quoted(out, v),
            Scalar::Timestamp(v) => write_quoted(out, &v.to_rfc3339()),
            Scalar::Date(v) => write_quoted(out, &v.to_string()),
            Scalar::Uuid(v) => write_quoted(out, &v.to_string()),
        }
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
}

impl ToSql for Scalar {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            Scalar::Text(v) => v.to_sql(ty, out),
            Scalar::Int(v) => v.to_sql(ty, out),
            Scalar::Float(v) => v.to_sql(ty, out),
            Scalar::Bool(v) => v.to_sql(ty, out),
            Scalar::Timestamp(v) => v.to_sql(ty, out),
            Scalar::Date(v) => v.to_sql(ty, out),
            Scalar::Uuid(v) => v.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        <String as ToSql>::accepts(ty)
            || <i64 as ToSql>::accepts(ty)
            || <f64 as ToSql>::accepts(ty)
            || <bool as ToSql>::accepts(ty)
            || <DateTime<Utc> as ToSql>::accepts(ty)
            || <NaiveDate as ToSql>::accepts(ty)
            || <Uuid as ToSql>::accepts(ty)
    }

    to_sql_checked!();
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<i16> for Scalar {
    fn from(v: i16) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(v as f64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::Timestamp(v)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(v: NaiveDate) -> Self {
        Scalar::Date(v)
    }
}

impl From<Uuid> for Scalar {
    fn from(v: Uuid) -> Self {
        Scalar::Uuid(v)
    }
}

/// The value shape carried by one condition.
///
/// The operator decides how the shape is interpreted; a shape the operator
/// cannot use degrades to the inert `= ''` fragment at render time rather
/// than failing (see [`crate::check`] for the stricter surface).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value; the default. Used by null checks, inert otherwise.
    #[default]
    None,
    /// A single bound value.
    Scalar(Scalar),
    /// Membership list, inlined as literals.
    List(Vec<Scalar>),
    /// Range bounds, bound as two parameters in `(from, to)` order.
    Range { from: Scalar, to: Scalar },
    /// Cross-table comparison target; compared directly, never bound.
    Column(ColumnRef),
}

impl Value {
    /// A membership list from anything convertible to scalars.
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Value::List(values.into_iter().map(Into::into).collect())
    }

    /// A range from two scalar bounds.
    pub fn range(from: impl Into<Scalar>, to: impl Into<Scalar>) -> Self {
        Value::Range {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl From<ColumnRef> for Value {
    fn from(v: ColumnRef) -> Self {
        Value::Column(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Scalar(v.into())
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Scalar>,
{
    fn from(values: Vec<T>) -> Self {
        Value::list(values)
    }
}
