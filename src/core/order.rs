//! The Order record and its request payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single customer order
///
/// `id` is `None` until the repository stores the order for the first time
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub customer_name: String,
    pub order_date: Option<NaiveDate>,
    pub shipping_address: String,
    pub total: f64,
}

impl Order {
    /// Create an unsaved order
    pub fn new(
        customer_name: impl Into<String>,
        order_date: Option<NaiveDate>,
        shipping_address: impl Into<String>,
        total: f64,
    ) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            order_date,
            shipping_address: shipping_address.into(),
            total,
        }
    }

    /// Copy every client-writable field from `other`, keeping this order's id
    pub fn merge_from(&mut self, other: Order) {
        self.customer_name = other.customer_name;
        self.order_date = other.order_date;
        self.shipping_address = other.shipping_address;
        self.total = other.total;
    }
}

/// Order candidate as received in a request body
///
/// Every field is optional so that missing values reach validation instead of
/// failing deserialization. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl OrderPayload {
    /// Convert into an unsaved order
    ///
    /// Only meaningful once the payload passed validation: absent text fields
    /// become empty strings and an absent total becomes zero.
    pub fn into_order(self) -> Order {
        Order {
            id: None,
            customer_name: self.customer_name.unwrap_or_default(),
            order_date: self.order_date,
            shipping_address: self.shipping_address.unwrap_or_default(),
            total: self.total.unwrap_or_default(),
        }
    }
}
