#![allow(dead_code)]

use trxps_payments::application::payment_method_service::PaymentMethodService;
use trxps_payments::domain::handler::HandlerRegistry;
use trxps_payments::domain::ports::PaymentMethodRepositoryBox;
use trxps_payments::domain::remote::{MethodCollection, RemoteMethod};
use trxps_payments::infrastructure::in_memory::{
    InMemoryMediaStore, InMemoryPaymentMethodRepository, StaticMethodsApi, StaticPluginIdProvider,
};
use uuid::Uuid;

pub struct Harness {
    pub service: PaymentMethodService,
    pub payments: InMemoryPaymentMethodRepository,
    pub media: InMemoryMediaStore,
    pub plugin_id: Uuid,
}

pub fn harness(keys: &[&str]) -> Harness {
    let payments = InMemoryPaymentMethodRepository::new();
    harness_with_repository(keys, payments.clone(), Box::new(payments))
}

/// Harness whose service writes through `repository`; `payments` is the
/// store the assertions read from.
pub fn harness_with_repository(
    keys: &[&str],
    payments: InMemoryPaymentMethodRepository,
    repository: PaymentMethodRepositoryBox,
) -> Harness {
    let media = InMemoryMediaStore::new();
    let plugin_id = Uuid::new_v4();
    let service = PaymentMethodService::new(
        Box::new(media.clone()),
        Box::new(media.clone()),
        repository,
        Box::new(StaticPluginIdProvider::new(plugin_id)),
        HandlerRegistry::with_enabled(keys).unwrap(),
    );

    Harness {
        service,
        payments,
        media,
        plugin_id,
    }
}

pub fn remote_method(id: &str) -> RemoteMethod {
    RemoteMethod {
        id: id.to_string(),
        description: id.to_string(),
        status: None,
    }
}

pub fn methods_api(ids: &[&str]) -> StaticMethodsApi {
    StaticMethodsApi::new(MethodCollection::new(
        ids.iter().map(|id| remote_method(id)).collect(),
    ))
}
