//! # pgclause
//!
//! Dynamic, parameter-safe `WHERE` clause assembly for PostgreSQL
//! data-access layers.
//!
//! ## Features
//!
//! - **One pass, positional parameters**: `$1, $2, ...` placeholders are
//!   numbered as fragments are emitted and the bound values come back in the
//!   same order
//! - **Typed descriptors**: operators, connectors and value shapes are enums,
//!   so rendering dispatch is exhaustive and filter input deserializes
//!   straight into [`Condition`] values
//! - **Never fails to render**: malformed descriptors degrade to inert SQL
//!   fragments instead of errors; the [`check`] module reports them upstream
//! - **tokio-postgres ready**: bound values implement `ToSql`, see
//!   [`WhereClause::params_ref`]
//!
//! ## Example
//!
//! ```
//! use pgclause::{Condition, build_where};
//!
//! let clause = build_where(&[
//!     Condition::eq("status", "active"),
//!     Condition::gt("age", 18).or(),
//!     Condition::ilike("name", "%ada%"),
//! ]);
//!
//! assert_eq!(clause.text, "WHERE status = $1 AND age = $2 OR name ILIKE $3");
//! assert_eq!(clause.params.len(), 3);
//! ```

pub mod builder;
pub mod check;
pub mod condition;
pub mod error;
pub mod ident;
pub mod value;

pub use builder::{
    Direction, SortField, WhereClause, build_insert, build_order_by, build_select,
    build_update_by_id, build_where, columns_aliased,
};
pub use check::{LintIssue, LintLevel, LintResult, ensure_valid, lint_conditions};
pub use condition::{Condition, Connector, Operator};
pub use error::{ClauseError, ClauseResult};
pub use ident::ColumnRef;
pub use value::{Scalar, Value};
