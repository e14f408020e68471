//! Error types for SQL projection.

use thiserror::Error;

/// Errors that can occur while projecting Datalog terms into SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// A value given where a Datalog variable was required is not one.
    ///
    /// Raised for namespaced symbols and for names missing the `?` prefix.
    /// Carries the offending value for diagnostics.
    #[error("expected a Datalog variable (unqualified, `?`-prefixed), got: {value}")]
    InvalidVariable {
        /// Rendered form of the rejected symbol.
        value: String,
    },
}
