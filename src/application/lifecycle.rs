use super::payment_method_service::PaymentMethodService;
use crate::domain::context::Context;
use crate::domain::ports::MethodsApiBox;
use crate::error::Result;
use tracing::{info, warn};

/// Hooks the host plugin system calls while installing and enabling the plugin.
pub struct PluginLifecycle {
    service: PaymentMethodService,
    methods_api: Option<MethodsApiBox>,
}

impl PluginLifecycle {
    pub fn new(service: PaymentMethodService) -> Self {
        Self {
            service,
            methods_api: None,
        }
    }

    pub fn with_methods_api(mut self, api: MethodsApiBox) -> Self {
        self.methods_api = Some(api);
        self
    }

    pub fn service(&self) -> &PaymentMethodService {
        &self.service
    }

    pub async fn install(&self, context: &Context) -> Result<()> {
        info!("Installing payment methods");
        self.service.add_payment_methods(context).await
    }

    pub async fn update(&self, context: &Context) -> Result<()> {
        info!("Updating payment methods");
        self.service.add_payment_methods(context).await
    }

    /// Synchronizes the methods, then activates what Trxps reports as active.
    pub async fn activate(&self, context: &Context) -> Result<()> {
        self.service.add_payment_methods(context).await?;

        match &self.methods_api {
            Some(api) => {
                self.service
                    .activate_payment_methods(api.as_ref(), context)
                    .await
            }
            None => {
                warn!("No Trxps API configured, payment methods stay inactive");
                Ok(())
            }
        }
    }
}
