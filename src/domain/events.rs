use super::context::Context;
use super::order::OrderEntity;
use super::remote::RemoteOrder;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raised when the customer returns from a failed or cancelled payment page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPageFailEvent {
    context: Context,
    host_order: Option<OrderEntity>,
    trxps_order: Option<RemoteOrder>,
    sales_channel_id: Option<Uuid>,
    redirect_url: Option<String>,
}

impl PaymentPageFailEvent {
    pub const EVENT_NAME: &'static str = "trxps.payment.page.fail";

    pub fn new(context: Context) -> Self {
        Self {
            context,
            host_order: None,
            trxps_order: None,
            sales_channel_id: None,
            redirect_url: None,
        }
    }

    pub fn with_host_order(mut self, order: OrderEntity) -> Self {
        self.host_order = Some(order);
        self
    }

    pub fn with_trxps_order(mut self, order: RemoteOrder) -> Self {
        self.trxps_order = Some(order);
        self
    }

    pub fn with_sales_channel_id(mut self, sales_channel_id: Uuid) -> Self {
        self.sales_channel_id = Some(sales_channel_id);
        self
    }

    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn host_order(&self) -> Option<&OrderEntity> {
        self.host_order.as_ref()
    }

    pub fn trxps_order(&self) -> Option<&RemoteOrder> {
        self.trxps_order.as_ref()
    }

    pub fn sales_channel_id(&self) -> Option<Uuid> {
        self.sales_channel_id
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }
}

/// Everything the plugin publishes to other listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum PluginEvent {
    #[serde(rename = "trxps.payment.page.fail")]
    PaymentPageFail(PaymentPageFailEvent),
}

impl PluginEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PaymentPageFail(_) => PaymentPageFailEvent::EVENT_NAME,
        }
    }
}

impl From<PaymentPageFailEvent> for PluginEvent {
    fn from(event: PaymentPageFailEvent) -> Self {
        Self::PaymentPageFail(event)
    }
}
