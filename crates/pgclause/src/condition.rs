//! Condition descriptors for dynamic WHERE clauses.
//!
//! This module provides [`Operator`], [`Connector`] and [`Condition`]: the
//! ordered descriptors callers hand to [`build_where`](crate::build_where).
//! Descriptors are plain data -- typically built from request filter
//! parameters (they derive `serde`), consumed in one pass, and never mutated
//! by the assembler.
//!
//! # Example
//! ```
//! use pgclause::{Condition, build_where};
//!
//! let clause = build_where(&[
//!     Condition::eq("employer_id", 19),
//!     Condition::is_not_null("termination_date").with_source("c"),
//!     Condition::in_list("code", vec!["COL", "COP"]),
//! ]);
//! assert_eq!(
//!     clause.text,
//!     "WHERE employer_id = $1 AND c.termination_date IS NOT NULL AND code IN ('COL','COP')"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::ident::ColumnRef;
use crate::value::{Scalar, Value};

/// Comparison operator for a condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `column = value`; the default.
    #[default]
    Equality,
    /// `column > value`
    GreaterThan,
    /// `column < value`
    LessThan,
    /// `column >= value`
    GreaterOrEqual,
    /// `column <= value`
    LessOrEqual,
    /// Case-insensitive pattern match (PostgreSQL `ILIKE`).
    Ilike,
    /// `column IS NULL`
    IsNull,
    /// `column IS NOT NULL`
    IsNotNull,
    /// `column BETWEEN from AND to`
    Between,
    /// `column IN (literals...)`
    In,
    /// `column NOT IN (literals...)`
    NotIn,
}

impl Operator {
    /// SQL token for operators that compare against a single operand.
    ///
    /// Anything without its own token compares with `=`; null checks,
    /// membership and ranges never ask for one.
    pub(crate) fn token(self) -> &'static str {
        match self {
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Ilike => "ILIKE",
            _ => "=",
        }
    }
}

/// Boolean keyword joining one condition to the NEXT one.
///
/// The trailing condition's connector is never rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// One filter descriptor in a condition sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    /// Optional table alias prefix for `name`.
    pub source: Option<String>,
    /// Column name.
    pub name: String,
    /// Comparison operator; defaults to equality.
    pub operator: Operator,
    /// Value shape; interpretation depends on `operator`.
    pub value: Value,
    /// Connector joining this condition to the next one.
    pub connector: Connector,
    /// Opens a parenthesized group immediately before this fragment.
    pub group_open: bool,
    /// Closes every currently-open group immediately after this fragment.
    pub group_close: bool,
}

impl Condition {
    /// Create a condition from its three defining parts.
    pub fn new(name: impl Into<String>, operator: Operator, value: Value) -> Self {
        Self {
            name: name.into(),
            operator,
            value,
            ..Default::default()
        }
    }

    // ==================== Convenience constructors ====================

    /// `column = value`
    pub fn eq(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::new(name, Operator::Equality, Value::Scalar(value.into()))
    }

    /// `column > value`
    pub fn gt(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::new(name, Operator::GreaterThan, Value::Scalar(value.into()))
    }

    /// `column >= value`
    pub fn gte(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::new(name, Operator::GreaterOrEqual, Value::Scalar(value.into()))
    }

    /// `column < value`
    pub fn lt(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::new(name, Operator::LessThan, Value::Scalar(value.into()))
    }

    /// `column <= value`
    pub fn lte(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::new(name, Operator::LessOrEqual, Value::Scalar(value.into()))
    }

    /// `column ILIKE pattern`
    pub fn ilike(name: impl Into<String>, pattern: impl Into<Scalar>) -> Self {
        Self::new(name, Operator::Ilike, Value::Scalar(pattern.into()))
    }

    /// `column IS NULL`
    pub fn is_null(name: impl Into<String>) -> Self {
        Self::new(name, Operator::IsNull, Value::None)
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(name: impl Into<String>) -> Self {
        Self::new(name, Operator::IsNotNull, Value::None)
    }

    /// `column IN (literals...)`
    pub fn in_list<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::new(name, Operator::In, Value::list(values))
    }

    /// `column NOT IN (literals...)`
    pub fn not_in<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::new(name, Operator::NotIn, Value::list(values))
    }

    /// `column BETWEEN from AND to`
    pub fn between(
        name: impl Into<String>,
        from: impl Into<Scalar>,
        to: impl Into<Scalar>,
    ) -> Self {
        Self::new(name, Operator::Between, Value::range(from, to))
    }

    /// `column = other_table.other_column` -- compared directly, no
    /// parameter is bound.
    pub fn eq_column(name: impl Into<String>, other: ColumnRef) -> Self {
        Self::new(name, Operator::Equality, Value::Column(other))
    }

    /// Compare against another table's column with an arbitrary operator.
    pub fn compare_column(name: impl Into<String>, operator: Operator, other: ColumnRef) -> Self {
        Self::new(name, operator, Value::Column(other))
    }

    // ==================== Chainable setters ====================

    /// Set the table alias prefix.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Join this condition to the next one with `OR`.
    pub fn or(mut self) -> Self {
        self.connector = Connector::Or;
        self
    }

    /// Join this condition to the next one with `AND` (the default).
    pub fn and(mut self) -> Self {
        self.connector = Connector::And;
        self
    }

    /// Open a parenthesized group at this condition.
    pub fn open_group(mut self) -> Self {
        self.group_open = true;
        self
    }

    /// Close every open group after this condition.
    pub fn close_group(mut self) -> Self {
        self.group_close = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_equality_and_and() {
        let condition = Condition {
            name: "id".to_string(),
            ..Default::default()
        };
        assert_eq!(condition.operator, Operator::Equality);
        assert_eq!(condition.connector, Connector::And);
        assert_eq!(condition.value, Value::None);
        assert!(!condition.group_open);
        assert!(!condition.group_close);
    }

    #[test]
    fn chainable_setters_compose() {
        let condition = Condition::eq("is_active", true)
            .with_source("contracts")
            .or()
            .open_group();
        assert_eq!(condition.source.as_deref(), Some("contracts"));
        assert_eq!(condition.connector, Connector::Or);
        assert!(condition.group_open);
    }

    #[test]
    fn deserializes_from_partial_filter_json() {
        let condition: Condition = serde_json::from_str(
            r#"{"name": "age", "operator": "greater_than", "value": {"Scalar": {"Int": 30}}}"#,
        )
        .unwrap();
        assert_eq!(condition.name, "age");
        assert_eq!(condition.operator, Operator::GreaterThan);
        assert_eq!(condition.value, Value::Scalar(Scalar::Int(30)));
        assert_eq!(condition.connector, Connector::And);
    }

    #[test]
    fn serde_round_trip_preserves_descriptor() {
        let condition = Condition::between("begins_at", 10, 20)
            .with_source("c")
            .close_group();
        let json = serde_json::to_string(&condition).unwrap();
        let back: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(condition, back);
    }
}
