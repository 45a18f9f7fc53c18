use crate::domain::context::Context;
use crate::domain::criteria::Criteria;
use crate::domain::media::{MediaAsset, MediaFile};
use crate::domain::payment_method::{
    EntitySearchResult, IdSearchResult, PaymentMethodPayload, PaymentMethodRecord, WriteResult,
};
use crate::domain::ports::{
    MediaRepository, MediaService, MethodsApi, PaymentMethodRepository, PluginIdProvider,
};
use crate::domain::remote::MethodCollection;
use crate::error::{PluginError, Result};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

fn search_entities<T: Clone + Serialize>(
    entities: &IndexMap<Uuid, T>,
    criteria: &Criteria,
) -> Result<EntitySearchResult<T>> {
    criteria.validate()?;
    let mut matches = Vec::new();
    for entity in entities.values() {
        if criteria.matches(entity)? {
            matches.push(entity.clone());
        }
    }
    let total = matches.len();
    if let Some(limit) = criteria.limit() {
        matches.truncate(limit);
    }
    Ok(EntitySearchResult {
        total,
        entities: matches,
    })
}

/// A thread-safe in-memory payment method store.
///
/// Records keep their insertion order. A whole `upsert` batch is applied under
/// a single write lock and is rejected as a unit if any payload is invalid.
#[derive(Default, Clone)]
pub struct InMemoryPaymentMethodRepository {
    records: Arc<RwLock<IndexMap<Uuid, PaymentMethodRecord>>>,
}

impl InMemoryPaymentMethodRepository {
    /// Creates a new, empty in-memory payment method repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record.
    pub async fn all(&self) -> Vec<PaymentMethodRecord> {
        self.records.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl PaymentMethodRepository for InMemoryPaymentMethodRepository {
    async fn search(
        &self,
        criteria: &Criteria,
        _context: &Context,
    ) -> Result<EntitySearchResult<PaymentMethodRecord>> {
        let records = self.records.read().await;
        search_entities(&records, criteria)
    }

    async fn search_ids(&self, criteria: &Criteria, context: &Context) -> Result<IdSearchResult> {
        let result = self.search(criteria, context).await?;
        Ok(IdSearchResult {
            total: result.total,
            ids: result.entities.iter().map(|record| record.id).collect(),
        })
    }

    async fn upsert(
        &self,
        payloads: Vec<PaymentMethodPayload>,
        _context: &Context,
    ) -> Result<WriteResult> {
        let mut records = self.records.write().await;
        let mut staged = records.clone();
        let mut result = WriteResult::default();

        for payload in payloads {
            match payload.id.and_then(|id| staged.get_mut(&id)) {
                Some(record) => {
                    result.updated.push(record.id);
                    payload.apply_to(record);
                }
                None => {
                    let id = payload.id.unwrap_or_else(Uuid::new_v4);
                    let record = payload.into_record(id).ok_or_else(|| {
                        PluginError::RepositoryError(format!(
                            "payment method {} is missing handlerIdentifier or name",
                            id
                        ))
                    })?;
                    staged.insert(id, record);
                    result.inserted.push(id);
                }
            }
        }

        *records = staged;
        Ok(result)
    }
}

/// In-memory media library acting as both the media repository and the
/// media service.
#[derive(Default, Clone)]
pub struct InMemoryMediaStore {
    assets: Arc<RwLock<IndexMap<Uuid, MediaAsset>>>,
}

impl InMemoryMediaStore {
    /// Creates a new, empty in-memory media store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<MediaAsset> {
        self.assets.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl MediaRepository for InMemoryMediaStore {
    async fn search(
        &self,
        criteria: &Criteria,
        _context: &Context,
    ) -> Result<EntitySearchResult<MediaAsset>> {
        let assets = self.assets.read().await;
        search_entities(&assets, criteria)
    }
}

#[async_trait]
impl MediaService for InMemoryMediaStore {
    async fn save_file(&self, file: MediaFile, _context: &Context) -> Result<Uuid> {
        if file.file_name.is_empty() {
            return Err(PluginError::MediaError("file name must not be empty".to_string()));
        }

        let id = file.media_id.unwrap_or_else(Uuid::new_v4);
        let asset = MediaAsset {
            id,
            file_size: file.blob.len(),
            file_name: file.file_name,
            file_extension: file.extension,
            mime_type: file.mime_type,
            folder: file.folder,
            private: file.private,
            uploaded_at: Utc::now(),
        };

        let mut assets = self.assets.write().await;
        assets.insert(id, asset);
        Ok(id)
    }
}

/// Resolves every plugin class to the same fixed id.
#[derive(Debug, Clone, Copy)]
pub struct StaticPluginIdProvider {
    plugin_id: Uuid,
}

impl StaticPluginIdProvider {
    /// Creates a provider that answers every lookup with `plugin_id`.
    pub fn new(plugin_id: Uuid) -> Self {
        Self { plugin_id }
    }
}

#[async_trait]
impl PluginIdProvider for StaticPluginIdProvider {
    async fn plugin_id_by_base_class(&self, class_name: &str, _context: &Context) -> Result<Uuid> {
        if class_name.is_empty() {
            return Err(PluginError::RepositoryError(
                "plugin class name must not be empty".to_string(),
            ));
        }
        Ok(self.plugin_id)
    }
}

/// Serves a fixed set of active methods.
#[derive(Debug, Clone, Default)]
pub struct StaticMethodsApi {
    methods: MethodCollection,
}

impl StaticMethodsApi {
    /// Creates an API double that always reports `methods` as active.
    pub fn new(methods: MethodCollection) -> Self {
        Self { methods }
    }
}

#[async_trait]
impl MethodsApi for StaticMethodsApi {
    async fn all_active(&self) -> Result<MethodCollection> {
        Ok(self.methods.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::EqualsFilter;
    use crate::domain::media::ICON_FOLDER;

    fn draft(handler: &str, name: &str) -> PaymentMethodPayload {
        PaymentMethodPayload {
            handler_identifier: Some(handler.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let repo = InMemoryPaymentMethodRepository::new();
        let context = Context::default();

        let inserted = repo.upsert(vec![draft("h", "iDEAL")], &context).await.unwrap();
        assert_eq!(inserted.inserted.len(), 1);
        let id = inserted.inserted[0];

        let mut update = draft("h", "iDEAL");
        update.id = Some(id);
        update.description = Some("updated".to_string());
        let updated = repo.upsert(vec![update], &context).await.unwrap();

        assert_eq!(updated.updated, vec![id]);
        let records = repo.all().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "updated");
    }

    #[tokio::test]
    async fn test_upsert_with_unknown_id_inserts_under_that_id() {
        let repo = InMemoryPaymentMethodRepository::new();
        let id = Uuid::new_v4();
        let mut payload = draft("h", "PayPal");
        payload.id = Some(id);

        let result = repo.upsert(vec![payload], &Context::default()).await.unwrap();
        assert_eq!(result.inserted, vec![id]);
    }

    #[tokio::test]
    async fn test_invalid_batch_is_rejected_as_a_unit() {
        let repo = InMemoryPaymentMethodRepository::new();
        let payloads = vec![
            draft("h", "iDEAL"),
            PaymentMethodPayload::activation(Uuid::new_v4(), true),
        ];

        let result = repo.upsert(payloads, &Context::default()).await;
        assert!(matches!(result, Err(PluginError::RepositoryError(_))));
        assert!(repo.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_ids_by_natural_key() {
        let repo = InMemoryPaymentMethodRepository::new();
        let context = Context::default();
        repo.upsert(vec![draft("a", "iDEAL"), draft("b", "iDEAL")], &context)
            .await
            .unwrap();

        let criteria = Criteria::new()
            .with_filter(EqualsFilter::new("handlerIdentifier", "b"))
            .with_filter(EqualsFilter::new("name", "iDEAL"));
        let result = repo.search_ids(&criteria, &context).await.unwrap();
        assert_eq!(result.total, 1);

        let limited = repo
            .search(&Criteria::new().with_limit(1), &context)
            .await
            .unwrap();
        assert_eq!(limited.total, 2);
        assert_eq!(limited.entities.len(), 1);
    }

    #[tokio::test]
    async fn test_media_store_roundtrip() {
        let store = InMemoryMediaStore::new();
        let context = Context::default();
        let id = store
            .save_file(MediaFile::placeholder_icon("paypal", ICON_FOLDER), &context)
            .await
            .unwrap();

        let criteria = Criteria::new().with_filter(EqualsFilter::new("fileName", "paypal-icon"));
        let found = store.search(&criteria, &context).await.unwrap();
        assert_eq!(found.first().map(|asset| asset.id), Some(id));
        assert!(found.first().unwrap().file_size > 0);
    }

    #[tokio::test]
    async fn test_media_store_rejects_unnamed_files() {
        let store = InMemoryMediaStore::new();
        let mut file = MediaFile::placeholder_icon("paypal", ICON_FOLDER);
        file.file_name.clear();

        let result = store.save_file(file, &Context::default()).await;
        assert!(matches!(result, Err(PluginError::MediaError(_))));
    }
}
