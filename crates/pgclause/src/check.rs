//! Condition-sequence linting.
//!
//! The assembler never rejects input: unusable descriptors render inert
//! fragments, unbalanced group markers resolve deterministically. This module
//! is the stricter upstream surface -- it reports every construct
//! [`build_where`](crate::build_where) will paper over, so callers can
//! validate filters before rendering.
//!
//! # Example
//! ```
//! use pgclause::{Condition, Operator, Value, lint_conditions};
//!
//! let field = Condition {
//!     name: "employee_id".to_string(),
//!     operator: Operator::In,
//!     value: Value::from("fake"),
//!     ..Default::default()
//! };
//! let result = lint_conditions(&[field]);
//! assert!(result.has_warnings());
//! ```

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, Operator};
use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

// ── Lint codes ──────────────────────────────────────────────────────
// Centralised constants to avoid magic strings scattered across the codebase.

/// Empty column name.
pub const LINT_E001: &str = "E001";
/// Membership operator without a usable list value.
pub const LINT_W001: &str = "W001";
/// Parameterized operator without a matching value shape.
pub const LINT_W002: &str = "W002";
/// Group-close marker with no group open.
pub const LINT_I001: &str = "I001";
/// Groups left open at the end of the sequence.
pub const LINT_I002: &str = "I002";
/// Value ignored by a null-check operator.
pub const LINT_I003: &str = "I003";

/// Lint level for issues found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintLevel {
    /// Informational only.
    Info,
    /// The clause will render, but with a defensive fallback.
    Warning,
    /// The clause is almost certainly not what the caller meant.
    Error,
}

/// A lint issue found in a condition sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    pub level: LintLevel,
    pub code: &'static str,
    pub message: String,
}

/// Result of linting a condition sequence.
#[derive(Debug, Clone, Default)]
pub struct LintResult {
    pub issues: Vec<LintIssue>,
}

impl LintResult {
    /// Returns true if there are no issues.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.level == LintLevel::Error)
    }

    /// Returns true if there are any warnings or errors.
    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == LintLevel::Warning || i.level == LintLevel::Error)
    }
}

/// Inspect a condition sequence for constructs the assembler resolves with
/// defensive fallbacks.
pub fn lint_conditions(conditions: &[Condition]) -> LintResult {
    let mut issues = Vec::new();
    let mut open_groups = 0usize;

    for (i, condition) in conditions.iter().enumerate() {
        if condition.name.is_empty() {
            issues.push(LintIssue {
                level: LintLevel::Error,
                code: LINT_E001,
                message: format!("condition {i}: empty column name"),
            });
        }

        if condition.group_open {
            open_groups += 1;
        }

        match condition.operator {
            Operator::In | Operator::NotIn => match &condition.value {
                Value::List(items) if !items.is_empty() => {}
                _ => issues.push(LintIssue {
                    level: LintLevel::Warning,
                    code: LINT_W001,
                    message: format!(
                        "condition {i} ({}): membership without a non-empty list renders the inert `= ''` fragment",
                        condition.name
                    ),
                }),
            },
            Operator::IsNull | Operator::IsNotNull => {
                if condition.value != Value::None {
                    issues.push(LintIssue {
                        level: LintLevel::Info,
                        code: LINT_I003,
                        message: format!(
                            "condition {i} ({}): value is ignored by a null check",
                            condition.name
                        ),
                    });
                }
            }
            Operator::Between => {
                if !matches!(condition.value, Value::Range { .. }) {
                    issues.push(LintIssue {
                        level: LintLevel::Warning,
                        code: LINT_W002,
                        message: format!(
                            "condition {i} ({}): BETWEEN without range bounds renders the inert `= ''` fragment",
                            condition.name
                        ),
                    });
                }
            }
            _ => {
                if !matches!(condition.value, Value::Scalar(_) | Value::Column(_)) {
                    issues.push(LintIssue {
                        level: LintLevel::Warning,
                        code: LINT_W002,
                        message: format!(
                            "condition {i} ({}): comparison without a scalar or column value renders the inert `= ''` fragment",
                            condition.name
                        ),
                    });
                }
            }
        }

        if condition.group_close {
            if open_groups == 0 {
                issues.push(LintIssue {
                    level: LintLevel::Info,
                    code: LINT_I001,
                    message: format!("condition {i}: group close with no group open"),
                });
            }
            // Drain-all close, matching the assembler.
            open_groups = 0;
        }
    }

    if open_groups > 0 {
        issues.push(LintIssue {
            level: LintLevel::Info,
            code: LINT_I002,
            message: format!("{open_groups} group(s) left open; closed at the end of the clause"),
        });
    }

    LintResult { issues }
}

/// Fail on lint errors; warnings and infos pass.
pub fn ensure_valid(conditions: &[Condition]) -> ClauseResult<()> {
    let result = lint_conditions(conditions);
    if result.has_errors() {
        let message = result
            .issues
            .iter()
            .filter(|i| i.level == LintLevel::Error)
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ClauseError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_sequence_is_ok() {
        let conditions = vec![
            Condition::eq("name", "Alejandro"),
            Condition::in_list("id", vec![1, 2, 3]),
            Condition::between("begins_at", 1, 9),
        ];
        let result = lint_conditions(&conditions);
        assert!(result.is_ok(), "{:?}", result.issues);
        assert!(ensure_valid(&conditions).is_ok());
    }

    #[test]
    fn empty_name_is_an_error() {
        let result = lint_conditions(&[Condition::eq("", 1)]);
        assert!(result.has_errors());
        assert_eq!(result.issues[0].code, LINT_E001);
        assert!(ensure_valid(&[Condition::eq("", 1)]).is_err());
    }

    #[test]
    fn scalar_membership_is_a_warning() {
        let field = Condition::new("employee_id", Operator::In, Value::from("fake"));
        let result = lint_conditions(&[field]);
        assert!(result.has_warnings());
        assert!(!result.has_errors());
        assert_eq!(result.issues[0].code, LINT_W001);
    }

    #[test]
    fn empty_list_membership_is_a_warning() {
        let field = Condition::in_list("contract_id", Vec::<i64>::new());
        let result = lint_conditions(&[field]);
        assert_eq!(result.issues[0].code, LINT_W001);
    }

    #[test]
    fn between_without_range_is_a_warning() {
        let field = Condition::new("d", Operator::Between, Value::from(1));
        let result = lint_conditions(&[field]);
        assert_eq!(result.issues[0].code, LINT_W002);
    }

    #[test]
    fn equality_without_value_is_a_warning() {
        let field = Condition {
            name: "x".to_string(),
            ..Default::default()
        };
        let result = lint_conditions(&[field]);
        assert_eq!(result.issues[0].code, LINT_W002);
    }

    #[test]
    fn null_check_with_value_is_informational() {
        let field = Condition::new("begins_at", Operator::IsNull, Value::from("fake"));
        let result = lint_conditions(&[field]);
        assert!(!result.has_warnings());
        assert_eq!(result.issues[0].code, LINT_I003);
    }

    #[test]
    fn unbalanced_groups_are_informational() {
        let dangling_close = Condition::eq("a", 1).close_group();
        let result = lint_conditions(&[dangling_close]);
        assert_eq!(result.issues[0].code, LINT_I001);

        let left_open = Condition::eq("a", 1).open_group();
        let result = lint_conditions(&[left_open]);
        assert_eq!(result.issues[0].code, LINT_I002);
    }

    #[test]
    fn drain_all_close_resets_the_counter() {
        // Two opens, one close: nothing is left open afterwards.
        let conditions = vec![
            Condition::eq("a", 1).open_group(),
            Condition::eq("b", 2).open_group(),
            Condition::eq("c", 3).close_group(),
        ];
        let result = lint_conditions(&conditions);
        assert!(result.is_ok(), "{:?}", result.issues);
    }
}
