//! Read-only resources returned by the Trxps API.

use super::status::{PaymentMethodStatus, PaymentStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub value: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePayment {
    pub id: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub amount: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMethod {
    /// Matches `PaymentMethodHandler::name` of the local handler.
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<PaymentMethodStatus>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodCollection {
    pub count: usize,
    pub methods: Vec<RemoteMethod>,
}

impl MethodCollection {
    pub fn new(methods: Vec<RemoteMethod>) -> Self {
        Self {
            count: methods.len(),
            methods,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemoteMethod> {
        self.methods.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteOrder {
    pub id: String,
    pub order_number: String,
    pub status: String,
    #[serde(default)]
    pub payments: Vec<RemotePayment>,
}
