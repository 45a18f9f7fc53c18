//! Payment method handlers and the registry the service reads them from.
//!
//! Every payment method Trxps offers through this plugin is one handler: a
//! name matching the Trxps method id, a human readable description that
//! becomes the host record's name, a stable handler identifier, and a hook
//! that may rewrite the order parameters before they are sent to Trxps.

use super::order::{CheckoutContext, OrderData};
use super::payment_method::PaymentMethodDescriptor;
use crate::error::{PluginError, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;

pub trait PaymentMethodHandler: Send + Sync {
    /// Trxps method id.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn handler_identifier(&self) -> &'static str;

    /// Registry key used in configuration.
    fn key(&self) -> String {
        self.name().to_lowercase()
    }

    /// Method specific order parameters. Passthrough unless overridden.
    fn transform_order_data(&self, order_data: OrderData, _checkout: &CheckoutContext) -> OrderData {
        order_data
    }

    fn descriptor(&self) -> PaymentMethodDescriptor {
        PaymentMethodDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            handler_identifier: self.handler_identifier().to_string(),
        }
    }
}

pub type PaymentMethodHandlerRef = Arc<dyn PaymentMethodHandler>;

macro_rules! passthrough_handler {
    ($ty:ident, $name:literal, $description:literal, $identifier:literal) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl $ty {
            pub const PAYMENT_METHOD_NAME: &'static str = $name;
            pub const PAYMENT_METHOD_DESCRIPTION: &'static str = $description;
        }

        impl PaymentMethodHandler for $ty {
            fn name(&self) -> &'static str {
                Self::PAYMENT_METHOD_NAME
            }

            fn description(&self) -> &'static str {
                Self::PAYMENT_METHOD_DESCRIPTION
            }

            fn handler_identifier(&self) -> &'static str {
                $identifier
            }
        }
    };
}

passthrough_handler!(TrxpsPayment, "trxps", "Trxps", "trxps_payments.handler.trxps");
passthrough_handler!(IdealPayment, "iDEAL", "iDEAL", "trxps_payments.handler.ideal");
passthrough_handler!(
    CreditCardPayment,
    "creditcard",
    "Credit card",
    "trxps_payments.handler.creditcard"
);
passthrough_handler!(
    PayDirektPayment,
    "paydirekt",
    "paydirekt",
    "trxps_payments.handler.paydirekt"
);
passthrough_handler!(PayPalPayment, "paypal", "PayPal", "trxps_payments.handler.paypal");
passthrough_handler!(
    SofortPayment,
    "sofort",
    "SOFORT Banking",
    "trxps_payments.handler.sofort"
);

/// Bank transfers mail the payment instructions to the customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferPayment;

impl BankTransferPayment {
    pub const PAYMENT_METHOD_NAME: &'static str = "banktransfer";
    pub const PAYMENT_METHOD_DESCRIPTION: &'static str = "Bank transfer";
}

impl PaymentMethodHandler for BankTransferPayment {
    fn name(&self) -> &'static str {
        Self::PAYMENT_METHOD_NAME
    }

    fn description(&self) -> &'static str {
        Self::PAYMENT_METHOD_DESCRIPTION
    }

    fn handler_identifier(&self) -> &'static str {
        "trxps_payments.handler.banktransfer"
    }

    fn transform_order_data(&self, mut order_data: OrderData, checkout: &CheckoutContext) -> OrderData {
        let Some(email) = &checkout.customer_email else {
            return order_data;
        };

        let payment = order_data
            .entry("payment")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(payment) = payment {
            payment.insert("billingEmail".to_string(), Value::String(email.clone()));
        }
        order_data
    }
}

/// Ordered set of handlers, keyed by `PaymentMethodHandler::key`.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: IndexMap<String, PaymentMethodHandlerRef>,
}

impl HandlerRegistry {
    pub const DEFAULT_ENABLED: &'static [&'static str] = &["trxps"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Every handler shipped with the plugin.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TrxpsPayment));
        registry.register(Arc::new(IdealPayment));
        registry.register(Arc::new(BankTransferPayment));
        registry.register(Arc::new(CreditCardPayment));
        registry.register(Arc::new(PayDirektPayment));
        registry.register(Arc::new(PayPalPayment));
        registry.register(Arc::new(SofortPayment));
        registry
    }

    /// The built-in handlers named by `keys`, in that order.
    pub fn with_enabled<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        let builtin = Self::builtin();
        let mut registry = Self::new();
        for key in keys {
            let key = key.as_ref();
            let handler = builtin
                .get(key)
                .ok_or_else(|| PluginError::UnknownHandler(key.to_string()))?;
            registry.register(handler);
        }
        Ok(registry)
    }

    /// Adds a handler, replacing any handler with the same key.
    pub fn register(&mut self, handler: PaymentMethodHandlerRef) {
        self.handlers.insert(handler.key(), handler);
    }

    pub fn get(&self, key: &str) -> Option<PaymentMethodHandlerRef> {
        self.handlers.get(key).cloned()
    }

    pub fn handlers(&self) -> impl Iterator<Item = &PaymentMethodHandlerRef> {
        self.handlers.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn descriptors(&self) -> Vec<PaymentMethodDescriptor> {
        self.handlers().map(|handler| handler.descriptor()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.handlers.keys()).finish()
    }
}
