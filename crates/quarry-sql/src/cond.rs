//! Guarded-branch expression macro.

/// Evaluate guarded arms in order and return the value of the first arm
/// that applies; later arms are never evaluated.
///
/// Two arm forms, plus a mandatory `else` fallback:
/// - `guard => value` — taken when `guard` is true.
/// - `pat = option_expr => value` — taken when the expression is `Some`,
///   with the inner value bound to `pat` for the arm body.
///
/// ```
/// use quarry_sql::cond;
///
/// let clauses: Vec<&str> = vec![];
/// let label = cond! {
///     clauses.len() > 1 => "compound",
///     first = clauses.first() => *first,
///     else "empty",
/// };
/// assert_eq!(label, "empty");
/// ```
#[macro_export]
macro_rules! cond {
    (else $fallback:expr $(,)?) => {
        $fallback
    };
    ($binding:pat = $option:expr => $value:expr, $($rest:tt)+) => {
        match $option {
            Some($binding) => $value,
            None => $crate::cond!($($rest)+),
        }
    };
    ($guard:expr => $value:expr, $($rest:tt)+) => {
        if $guard {
            $value
        } else {
            $crate::cond!($($rest)+)
        }
    };
}
