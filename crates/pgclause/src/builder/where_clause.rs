//! WHERE clause assembly.

use tokio_postgres::types::ToSql;

use super::render::render;
use crate::condition::Condition;
use crate::value::Scalar;

/// An assembled WHERE clause: text plus bound values in placeholder order.
///
/// `text` starts with `WHERE ` or is empty; `params` holds exactly the values
/// the `$1, $2, ...` placeholders refer to, in emission order.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub text: String,
    pub params: Vec<Scalar>,
}

impl WhereClause {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }

    /// Split into the `(text, params)` pair.
    pub fn into_parts(self) -> (String, Vec<Scalar>) {
        (self.text, self.params)
    }

    /// True when no conditions were rendered.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Assemble a parameterized `WHERE` clause from an ordered condition
/// sequence.
///
/// The sequence is consumed in one left-to-right pass:
///
/// - each condition after the first is preceded by the PREVIOUS condition's
///   connector (`AND`/`OR`); the last condition's connector is unused
/// - `group_open` emits `(` between the connector and the fragment
/// - `group_close` closes EVERY group still open at that point, and any
///   groups left open when the sequence ends are closed at the very end
/// - placeholder numbering starts at `$1` and grows once per bound value;
///   range conditions bind two values in `(from, to)` order
///
/// An empty sequence yields an empty clause with no `WHERE` token. Malformed
/// descriptors never abort assembly; they degrade to inert fragments (see
/// [`crate::check`]).
pub fn build_where(conditions: &[Condition]) -> WhereClause {
    if conditions.is_empty() {
        return WhereClause::default();
    }

    let mut text = String::from("WHERE ");
    let mut params: Vec<Scalar> = Vec::new();
    let mut open_groups = 0usize;

    for (i, condition) in conditions.iter().enumerate() {
        if i > 0 {
            text.push(' ');
            text.push_str(conditions[i - 1].connector.as_sql());
            text.push(' ');
        }
        if condition.group_open {
            text.push('(');
            open_groups += 1;
        }

        let (fragment, consumed) = render(condition, params.len() + 1);
        text.push_str(&fragment);
        params.extend(consumed);

        if condition.group_close {
            while open_groups > 0 {
                text.push(')');
                open_groups -= 1;
            }
        }
    }

    while open_groups > 0 {
        text.push(')');
        open_groups -= 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(clause = %text, params = params.len(), "assembled WHERE clause");

    WhereClause { text, params }
}
