//! Clause and statement assembly.
//!
//! ## Design
//!
//! - The WHERE assembler is a single left-to-right pass: placeholders are
//!   numbered as they are emitted and values are collected in the same order.
//! - Rendering never fails: descriptors the renderer cannot use degrade to
//!   inert fragments (see [`crate::check`] for the stricter surface).
//! - The statement builders are fixed-shape string formatting over a field
//!   list; they share only the identifier lower-casing convention.

mod render;
pub mod statement;
pub mod where_clause;

pub use statement::{
    Direction, SortField, build_insert, build_order_by, build_select, build_update_by_id,
    columns_aliased,
};
pub use where_clause::{WhereClause, build_where};
