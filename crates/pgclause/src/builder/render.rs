//! Per-condition fragment rendering.
//!
//! [`render`] is pure and re-entrant: it receives the next placeholder index
//! and reports the values it consumed; all counters live in the assembler.

use crate::condition::{Condition, Operator};
use crate::ident;
use crate::value::{Scalar, Value};

/// Render one condition's SQL fragment.
///
/// `next_param` is the placeholder index the first bound value would take.
/// Returns the fragment and the values it consumed, in placeholder order.
/// Never fails: a value shape the operator cannot use renders the inert
/// `column = ''` fragment instead.
pub(crate) fn render(condition: &Condition, next_param: usize) -> (String, Vec<Scalar>) {
    let column = ident::qualified(condition.source.as_deref(), &condition.name);

    match condition.operator {
        Operator::IsNull => (format!("{column} IS NULL"), Vec::new()),
        Operator::IsNotNull => (format!("{column} IS NOT NULL"), Vec::new()),
        Operator::In => (render_membership(&column, &condition.value, "IN"), Vec::new()),
        Operator::NotIn => (
            render_membership(&column, &condition.value, "NOT IN"),
            Vec::new(),
        ),
        Operator::Between => match &condition.value {
            Value::Range { from, to } => (
                format!("{column} BETWEEN ${next_param} AND ${}", next_param + 1),
                vec![from.clone(), to.clone()],
            ),
            _ => (inert(&column), Vec::new()),
        },
        _ => {
            let token = condition.operator.token();
            match &condition.value {
                Value::Column(other) => (format!("{column} {token} {other}"), Vec::new()),
                Value::Scalar(value) => {
                    (format!("{column} {token} ${next_param}"), vec![value.clone()])
                }
                _ => (inert(&column), Vec::new()),
            }
        }
    }
}

/// `column IN (1,2,3)` / `column NOT IN ('A','B')` with inlined literals.
///
/// A non-list or empty-list value falls back to the inert fragment; callers
/// relying on membership semantics must validate upstream.
fn render_membership(column: &str, value: &Value, keyword: &str) -> String {
    let Value::List(items) = value else {
        return inert(column);
    };
    if items.is_empty() {
        return inert(column);
    }

    let mut out = String::with_capacity(column.len() + keyword.len() + 4 + items.len() * 4);
    out.push_str(column);
    out.push(' ');
    out.push_str(keyword);
    out.push_str(" (");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        item.write_literal(&mut out);
    }
    out.push(')');
    out
}

/// The defensive no-match fragment emitted for unusable value shapes.
fn inert(column: &str) -> String {
    format!("{column} = ''")
}
