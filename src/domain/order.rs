use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Order parameters submitted to Trxps when a payment is started.
pub type OrderData = Map<String, Value>;

/// An order as stored by the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntity {
    pub id: Uuid,
    pub order_number: String,
    pub sales_channel_id: Uuid,
}

/// Customer data available to handlers while building order data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutContext {
    pub customer_email: Option<String>,
}
