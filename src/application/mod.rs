//! Application layer orchestrating the plugin's use cases.
//!
//! `PaymentMethodService` synchronizes handlers into the host's payment method
//! store, `PluginLifecycle` wires it to the host's plugin hooks, and
//! `DoesOpenPaymentExist` guards checkout against duplicate payments.

pub mod lifecycle;
pub mod payment_method_service;
pub mod validator;
