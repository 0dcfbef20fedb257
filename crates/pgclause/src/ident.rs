//! Column identifiers and case normalization.
//!
//! Every identifier this crate renders (table alias, column name, cross-table
//! reference) is folded to lower case. Folding is total and idempotent; input
//! case is never preserved. Nothing here validates or quotes identifiers --
//! [`crate::check`] is the stricter opt-in surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column reference with an optional table alias.
///
/// Renders as `source.name` when an alias is present, otherwise just `name`,
/// lower-cased either way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnRef {
    /// Table alias prefix; `None` (or empty) means no prefix.
    pub source: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// An unqualified column reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            source: None,
            name: name.into(),
        }
    }

    /// A column reference qualified by a table alias.
    pub fn qualified(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            name: name.into(),
        }
    }

    /// Render the reference as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::with_capacity(
            self.name.len() + self.source.as_deref().map_or(0, |s| s.len() + 1),
        );
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        write_qualified(out, self.source.as_deref(), &self.name);
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Append a possibly-aliased column as `source.name`, lower-cased.
pub(crate) fn write_qualified(out: &mut String, source: Option<&str>, name: &str) {
    if let Some(source) = source {
        if !source.is_empty() {
            write_folded(out, source);
            out.push('.');
        }
    }
    write_folded(out, name);
}

/// Append `s` folded to lower case.
pub(crate) fn write_folded(out: &mut String, s: &str) {
    for ch in s.chars() {
        out.extend(ch.to_lowercase());
    }
}

/// Render a possibly-aliased column as an owned string.
pub(crate) fn qualified(source: Option<&str>, name: &str) -> String {
    let mut out = String::with_capacity(name.len() + source.map_or(0, |s| s.len() + 1));
    write_qualified(&mut out, source, name);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unqualified_folds_case() {
        assert_eq!(ColumnRef::new("DESCRIPTION").to_sql(), "description");
    }

    #[test]
    fn qualified_folds_both_parts() {
        assert_eq!(
            ColumnRef::qualified("peRiods", "eNds_at").to_sql(),
            "periods.ends_at"
        );
    }

    #[test]
    fn empty_source_renders_no_prefix() {
        let col = ColumnRef {
            source: Some(String::new()),
            name: "id".to_string(),
        };
        assert_eq!(col.to_sql(), "id");
    }

    #[test]
    fn folding_is_idempotent() {
        let once = qualified(Some("Contracts"), "EndS_At");
        let mut again = String::new();
        write_folded(&mut again, &once);
        assert_eq!(once, again);
    }

    #[test]
    fn rendered_identifiers_have_no_uppercase() {
        for input in ["ID", "CamelCase", "snake_CASE", "x"] {
            let rendered = qualified(Some("SRC"), input);
            assert!(rendered.chars().all(|c| !c.is_uppercase()), "{rendered}");
        }
    }
}
