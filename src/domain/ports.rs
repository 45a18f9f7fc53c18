//! Contracts of the host platform and the Trxps API consumed by the plugin.

use super::context::Context;
use super::criteria::Criteria;
use super::media::{MediaAsset, MediaFile};
use super::payment_method::{
    EntitySearchResult, IdSearchResult, PaymentMethodPayload, PaymentMethodRecord, WriteResult,
};
use super::remote::MethodCollection;
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    async fn search(
        &self,
        criteria: &Criteria,
        context: &Context,
    ) -> Result<EntitySearchResult<PaymentMethodRecord>>;
    async fn search_ids(&self, criteria: &Criteria, context: &Context) -> Result<IdSearchResult>;
    async fn upsert(
        &self,
        payloads: Vec<PaymentMethodPayload>,
        context: &Context,
    ) -> Result<WriteResult>;
}

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn search(
        &self,
        criteria: &Criteria,
        context: &Context,
    ) -> Result<EntitySearchResult<MediaAsset>>;
}

#[async_trait]
pub trait MediaService: Send + Sync {
    /// Stores the file and returns the id of the media entity.
    async fn save_file(&self, file: MediaFile, context: &Context) -> Result<Uuid>;
}

#[async_trait]
pub trait PluginIdProvider: Send + Sync {
    async fn plugin_id_by_base_class(&self, class_name: &str, context: &Context) -> Result<Uuid>;
}

/// The `methods` endpoint of the Trxps API.
#[async_trait]
pub trait MethodsApi: Send + Sync {
    /// Methods currently usable for the merchant account.
    async fn all_active(&self) -> Result<MethodCollection>;
}

pub type PaymentMethodRepositoryBox = Box<dyn PaymentMethodRepository>;
pub type MediaRepositoryBox = Box<dyn MediaRepository>;
pub type MediaServiceBox = Box<dyn MediaService>;
pub type PluginIdProviderBox = Box<dyn PluginIdProvider>;
pub type MethodsApiBox = Box<dyn MethodsApi>;
