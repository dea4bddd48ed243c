//! Reusable field predicates
//!
//! Each predicate answers whether a single field value satisfies one
//! constraint. They are combined into the order rule table in the parent
//! module.

/// Value is present (may still be empty)
pub fn not_null(value: Option<&str>) -> bool {
    value.is_some()
}

/// Value is present and has at least one character
pub fn not_empty(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

/// Number is present and strictly greater than zero
///
/// NaN fails the comparison and is rejected.
pub fn positive(value: Option<f64>) -> bool {
    value.is_some_and(|n| n > 0.0)
}
