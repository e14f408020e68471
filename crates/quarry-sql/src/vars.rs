//! Mangle Datalog variables into SQL-safe identifiers.
//!
//! Datalog variables are unqualified symbols whose name starts with `?`
//! (e.g. `?xyz`). The compiler projects each variable into up to two SQL
//! columns: the value column (`xyz`) and its type-tag column
//! (`_xyz_type_tag`). Aggregates get a `%`-prefixed alias (`%max.xyz`) that
//! cannot collide with any projected variable column.

use std::fmt;

use crate::SqlError;

/// A Datalog symbol, optionally namespace-qualified.
///
/// Symbols are what the parser hands the compiler; this crate only inspects
/// their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    namespace: Option<String>,
    name: String,
}

impl Symbol {
    /// An unqualified symbol.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    /// A namespace-qualified symbol.
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    /// The symbol's name, without any namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol's namespace, if qualified.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Whether this symbol is a Datalog variable: unqualified and
    /// `?`-prefixed.
    pub fn is_var(&self) -> bool {
        self.namespace.is_none() && self.name.starts_with('?')
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// An identifier emitted into generated SQL.
///
/// Opaque; produced only by the mangling functions and compared by equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlIdent(String);

impl SqlIdent {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SqlIdent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SqlIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that `sym` is a Datalog variable.
pub fn validate_var(sym: &Symbol) -> Result<(), SqlError> {
    var_name(sym).map(|_| ())
}

/// The variable's name with the `?` prefix stripped.
fn var_name(sym: &Symbol) -> Result<&str, SqlError> {
    if sym.is_var() {
        Ok(&sym.name()[1..])
    } else {
        Err(SqlError::InvalidVariable {
            value: sym.to_string(),
        })
    }
}

/// Mangle a variable into its value-column identifier: `?foo` -> `foo`.
pub fn var_to_column(var: &Symbol) -> Result<SqlIdent, SqlError> {
    Ok(SqlIdent(var_name(var)?.to_string()))
}

/// Mangle a variable into its type-tag column identifier:
/// `?foo` -> `_foo_type_tag`.
pub fn var_to_type_tag_column(var: &Symbol) -> Result<SqlIdent, SqlError> {
    Ok(SqlIdent(format!("_{}_type_tag", var_name(var)?)))
}

/// Alias for an aggregate over a column: `("max", col)` -> `%max.col`.
///
/// `column` need not be a variable; no validation is performed. The `%`
/// prefix keeps aggregate aliases disjoint from variable columns.
pub fn aggregate_alias(fn_name: &str, column: &Symbol) -> SqlIdent {
    SqlIdent(format!("%{}.{}", fn_name, column.name()))
}
