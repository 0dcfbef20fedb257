//! Fixed-shape statement builders.
//!
//! Plain string formatting over a caller-supplied field list: INSERT,
//! UPDATE-by-id, SELECT, ORDER BY and aliased column lists. Tables managed
//! this way carry a synthetic `id` identity column and `created_at` /
//! `updated_at` timestamp columns; the builders weave those in.

use serde::{Deserialize, Serialize};

use crate::ident;

/// Synthetic identity column.
const ID_COLUMN: &str = "id";
/// Creation timestamp column, returned by INSERT.
const CREATED_AT_COLUMN: &str = "created_at";
/// Update timestamp column, touched by UPDATE.
const UPDATED_AT_COLUMN: &str = "updated_at";

/// `INSERT INTO t (id,f1,...) VALUES ($1,$2,...) RETURNING created_at`.
///
/// `$1` is reserved for the identity column. An empty field list keeps the
/// trailing comma after `id` and `$1`; callers get back exactly what the
/// field list describes.
pub fn build_insert(table: &str, fields: &[&str]) -> String {
    let mut columns = String::from(ID_COLUMN);
    columns.push(',');
    let mut placeholders = String::from("$1");
    placeholders.push(',');

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            columns.push(',');
            placeholders.push(',');
        }
        ident::write_folded(&mut columns, field);
        placeholders.push('$');
        placeholders.push_str(&(i + 2).to_string());
    }

    let mut out = String::from("INSERT INTO ");
    ident::write_folded(&mut out, table);
    out.push_str(" (");
    out.push_str(&columns);
    out.push_str(") VALUES (");
    out.push_str(&placeholders);
    out.push_str(") RETURNING ");
    out.push_str(CREATED_AT_COLUMN);
    out
}

/// `UPDATE t SET f1 = $1, ..., updated_at = now() WHERE id = $n+1`.
///
/// Empty field list yields an empty string.
pub fn build_update_by_id(table: &str, fields: &[&str]) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut out = String::from("UPDATE ");
    ident::write_folded(&mut out, table);
    out.push_str(" SET ");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        ident::write_folded(&mut out, field);
        out.push_str(" = $");
        out.push_str(&(i + 1).to_string());
    }
    out.push_str(", ");
    out.push_str(UPDATED_AT_COLUMN);
    out.push_str(" = now() WHERE ");
    out.push_str(ID_COLUMN);
    out.push_str(" = $");
    out.push_str(&(fields.len() + 1).to_string());
    out
}

/// `SELECT f1, f2 FROM t` over exactly the given fields.
///
/// Empty field list yields an empty string.
pub fn build_select(table: &str, fields: &[&str]) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut out = String::from("SELECT ");
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        ident::write_folded(&mut out, field);
    }
    out.push_str(" FROM ");
    ident::write_folded(&mut out, table);
    out
}

/// Sort direction for [`build_order_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortField {
    /// Optional table alias prefix.
    pub source: Option<String>,
    /// Column name.
    pub name: String,
    /// Sort direction; ascending by default.
    pub direction: Direction,
}

impl SortField {
    /// Ascending sort on a column.
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Descending sort on a column.
    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Desc,
            ..Default::default()
        }
    }

    /// Set the table alias prefix.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// `ORDER BY a.id ASC, begins_at DESC` over the given sort entries.
///
/// Empty sequence yields an empty string.
pub fn build_order_by(sorts: &[SortField]) -> String {
    if sorts.is_empty() {
        return String::new();
    }

    let mut out = String::from("ORDER BY ");
    for (i, sort) in sorts.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        ident::write_qualified(&mut out, sort.source.as_deref(), &sort.name);
        out.push(' ');
        out.push_str(sort.direction.as_sql());
    }
    out
}

/// Comma-joined `alias.field` list bracketed by the identity and timestamp
/// columns: `b.id, b.f1, ..., b.created_at, b.updated_at`.
///
/// Empty field list yields an empty string.
pub fn columns_aliased(fields: &[&str], alias: &str) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    ident::write_qualified(&mut out, Some(alias), ID_COLUMN);
    for field in fields {
        out.push_str(", ");
        ident::write_qualified(&mut out, Some(alias), field);
    }
    out.push_str(", ");
    ident::write_qualified(&mut out, Some(alias), CREATED_AT_COLUMN);
    out.push_str(", ");
    ident::write_qualified(&mut out, Some(alias), UPDATED_AT_COLUMN);
    out
}
