//! Order validation rules
//!
//! Every rule is checked on every call; the result lists the message of each
//! violated rule, in table order. An empty list means the candidate is valid.

pub mod validators;

use crate::core::order::OrderPayload;

/// One constraint on one field of an order candidate
pub struct FieldRule {
    /// JSON name of the constrained field
    pub field: &'static str,
    /// Message reported when the rule is violated
    pub message: &'static str,
    check: fn(&OrderPayload) -> bool,
}

impl FieldRule {
    /// Returns `true` when the candidate satisfies this rule
    pub fn is_satisfied_by(&self, payload: &OrderPayload) -> bool {
        (self.check)(payload)
    }
}

pub const CUSTOMER_NAME_NULL: &str = "Customer name cannot be null";
pub const CUSTOMER_NAME_EMPTY: &str = "Customer name cannot be empty";
pub const SHIPPING_ADDRESS_EMPTY: &str = "Shipping address cannot be empty";
pub const TOTAL_NOT_POSITIVE: &str = "Total cannot be negative";

/// Rules applied to order candidates on create and update
///
/// `orderDate` carries no constraint. A null shipping address is reported
/// with the "empty" message.
pub const ORDER_RULES: &[FieldRule] = &[
    FieldRule {
        field: "customerName",
        message: CUSTOMER_NAME_NULL,
        check: |p| validators::not_null(p.customer_name.as_deref()),
    },
    FieldRule {
        field: "customerName",
        message: CUSTOMER_NAME_EMPTY,
        check: |p| validators::not_empty(p.customer_name.as_deref()),
    },
    FieldRule {
        field: "shippingAddress",
        message: SHIPPING_ADDRESS_EMPTY,
        check: |p| validators::not_empty(p.shipping_address.as_deref()),
    },
    FieldRule {
        field: "total",
        message: TOTAL_NOT_POSITIVE,
        check: |p| validators::positive(p.total),
    },
];

/// Collect the violation messages for an order candidate
pub fn validate_order(payload: &OrderPayload) -> Vec<String> {
    ORDER_RULES
        .iter()
        .filter(|rule| !rule.is_satisfied_by(payload))
        .map(|rule| rule.message.to_string())
        .collect()
}
