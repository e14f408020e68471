//! SQL projection utilities for Quarry's Datalog query compiler.
//!
//! This crate provides the pure, compile-time pieces the query compiler
//! leans on while lowering Datalog to SQL:
//! - Mangle Datalog variables (`?foo`) into SQL-safe identifiers
//! - Accumulate compiled clause fragments into a nested, path-addressed tree
//! - Group compiled pieces by a derived key in encounter order
//! - The `cond!` guarded-branch macro

mod cond;
mod error;
mod fragments;
mod group;
mod vars;

pub use error::SqlError;
pub use fragments::FragmentTree;
pub use group::group_by_kv;
pub use vars::{
    SqlIdent, Symbol, aggregate_alias, validate_var, var_to_column, var_to_type_tag_column,
};
