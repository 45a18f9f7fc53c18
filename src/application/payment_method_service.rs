use crate::domain::context::Context;
use crate::domain::criteria::{Criteria, EqualsFilter};
use crate::domain::handler::{HandlerRegistry, PaymentMethodHandlerRef};
use crate::domain::media::{ICON_FOLDER, MediaFile, icon_file_name};
use crate::domain::payment_method::{
    PaymentMethodDescriptor, PaymentMethodPayload, PaymentMethodRecord, WriteResult,
};
use crate::domain::ports::{
    MediaRepositoryBox, MediaServiceBox, MethodsApi, PaymentMethodRepository,
    PaymentMethodRepositoryBox, PluginIdProviderBox,
};
use crate::error::{PluginError, Result};
use tracing::{debug, info};
use uuid::Uuid;

/// Plugin class the host resolves the plugin id from.
pub const DEFAULT_PLUGIN_CLASS: &str = "TrxpsPayments";

/// Keeps the host's payment methods in line with the registered handlers.
///
/// `add_payment_methods` writes one host record per handler, keyed by
/// `(handlerIdentifier, name)` so repeated runs update instead of insert.
/// `activate_payment_methods` switches on the records Trxps reports as active.
pub struct PaymentMethodService {
    media_service: MediaServiceBox,
    media_repository: MediaRepositoryBox,
    payment_repository: PaymentMethodRepositoryBox,
    plugin_id_provider: PluginIdProviderBox,
    registry: HandlerRegistry,
    class_name: String,
    icon_folder: String,
}

impl PaymentMethodService {
    /// Creates a new `PaymentMethodService`.
    ///
    /// # Arguments
    ///
    /// * `media_service` - Uploads icons that do not exist yet.
    /// * `media_repository` - Looks up existing icons by file name.
    /// * `payment_repository` - The host's payment method store.
    /// * `plugin_id_provider` - Resolves the plugin id stored on every record.
    /// * `registry` - The handlers to synchronize.
    pub fn new(
        media_service: MediaServiceBox,
        media_repository: MediaRepositoryBox,
        payment_repository: PaymentMethodRepositoryBox,
        plugin_id_provider: PluginIdProviderBox,
        registry: HandlerRegistry,
    ) -> Self {
        Self {
            media_service,
            media_repository,
            payment_repository,
            plugin_id_provider,
            registry,
            class_name: DEFAULT_PLUGIN_CLASS.to_string(),
            icon_folder: ICON_FOLDER.to_string(),
        }
    }

    /// Sets the plugin class the plugin id is resolved from.
    pub fn with_plugin_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets the media folder new icons are uploaded to.
    pub fn with_icon_folder(mut self, folder: impl Into<String>) -> Self {
        self.icon_folder = folder.into();
        self
    }

    /// Returns the payment method repository.
    pub fn repository(&self) -> &dyn PaymentMethodRepository {
        self.payment_repository.as_ref()
    }

    /// Handlers enabled for this installation, in registration order.
    pub fn payment_handlers(&self) -> Vec<PaymentMethodHandlerRef> {
        self.registry.handlers().cloned().collect()
    }

    pub fn payment_methods(&self) -> Vec<PaymentMethodDescriptor> {
        self.registry.descriptors()
    }

    /// Inserts or updates a host payment method for every enabled handler.
    pub async fn add_payment_methods(&self, context: &Context) -> Result<()> {
        let plugin_id = self
            .plugin_id_provider
            .plugin_id_by_base_class(&self.class_name, context)
            .await?;

        let mut payment_data = Vec::new();
        for method in self.payment_methods() {
            let media_id = self.media_id(&method, context).await?;
            let mut draft = PaymentMethodPayload::from_descriptor(&method, plugin_id, media_id);

            // Inconsistent criteria mean "not found"; the record is created instead.
            let existing_id = match self
                .payment_method_id(&method.handler_identifier, &method.description, context)
                .await
            {
                Ok(id) => id,
                Err(PluginError::InconsistentCriteria(reason)) => {
                    debug!(method = %method.name, %reason, "Payment method lookup failed");
                    None
                }
                Err(e) => return Err(e),
            };

            if let Some(id) = existing_id {
                draft.id = Some(id);
            }
            payment_data.push(draft);
        }

        if payment_data.is_empty() {
            return Ok(());
        }

        let result = self.payment_repository.upsert(payment_data, context).await?;
        info!(
            inserted = result.inserted.len(),
            updated = result.updated.len(),
            "Payment methods synchronized"
        );
        Ok(())
    }

    /// Activates every enabled method that Trxps reports as active.
    ///
    /// Methods missing from the remote list keep their current state.
    pub async fn activate_payment_methods(
        &self,
        api: &dyn MethodsApi,
        context: &Context,
    ) -> Result<()> {
        let methods = api.all_active().await?;
        let payment_methods = self.payment_methods();

        let mut handlers = Vec::new();
        if methods.count > 0 {
            for method in methods.iter() {
                for payment_method in &payment_methods {
                    if payment_method.name == method.id {
                        handlers.push(payment_method);
                    }
                }
            }
        }

        for handler in handlers {
            let id = self
                .payment_method_id(&handler.handler_identifier, &handler.description, context)
                .await?;

            if let Some(id) = id {
                self.activate_payment_method(id, true, context).await?;
                info!(method = %handler.name, %id, "Payment method activated");
            }
        }
        Ok(())
    }

    /// Sets the `active` flag of a single payment method.
    pub async fn activate_payment_method(
        &self,
        id: Uuid,
        active: bool,
        context: &Context,
    ) -> Result<WriteResult> {
        self.payment_repository
            .upsert(vec![PaymentMethodPayload::activation(id, active)], context)
            .await
    }

    /// Fetches a payment method by id, `None` when it does not exist.
    pub async fn get_payment_method_by_id(
        &self,
        id: Uuid,
        context: &Context,
    ) -> Result<Option<PaymentMethodRecord>> {
        let result = self
            .payment_repository
            .search(&Criteria::with_id(id), context)
            .await?;
        if result.total == 0 {
            return Ok(None);
        }
        Ok(result.into_first())
    }

    async fn payment_method_id(
        &self,
        handler_identifier: &str,
        name: &str,
        context: &Context,
    ) -> Result<Option<Uuid>> {
        let criteria = Criteria::new()
            .with_filter(EqualsFilter::new("handlerIdentifier", handler_identifier))
            .with_filter(EqualsFilter::new("name", name));

        let result = self.payment_repository.search_ids(&criteria, context).await?;
        if result.total == 0 {
            return Ok(None);
        }
        Ok(result.ids.first().copied())
    }

    /// Returns the icon for the method, uploading the placeholder on first use.
    async fn media_id(&self, method: &PaymentMethodDescriptor, context: &Context) -> Result<Uuid> {
        let file_name = icon_file_name(&method.name);
        let criteria = Criteria::new().with_filter(EqualsFilter::new("fileName", file_name.as_str()));

        let icons = self.media_repository.search(&criteria, context).await?;
        if let Some(icon) = icons.first() {
            return Ok(icon.id);
        }

        let media_id = self
            .media_service
            .save_file(MediaFile::placeholder_icon(&method.name, &self.icon_folder), context)
            .await?;
        debug!(%file_name, %media_id, "Uploaded payment method icon");
        Ok(media_id)
    }
}
