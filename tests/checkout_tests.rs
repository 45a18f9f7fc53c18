use trxps_payments::application::validator::DoesOpenPaymentExist;
use trxps_payments::domain::context::Context;
use trxps_payments::domain::events::{PaymentPageFailEvent, PluginEvent};
use trxps_payments::domain::remote::RemoteOrder;
use trxps_payments::infrastructure::event_bus::EventBus;
use uuid::Uuid;

fn order(json: &str) -> RemoteOrder {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_order_with_open_payment_blocks_new_payment() {
    let order = order(
        r#"{
            "id": "ord_kEn1PlbGa",
            "orderNumber": "10042",
            "status": "created",
            "payments": [
                { "id": "tr_1", "status": "canceled" },
                { "id": "tr_2", "status": "open", "amount": { "value": "42.00", "currency": "EUR" } }
            ]
        }"#,
    );
    assert!(DoesOpenPaymentExist::validate(&order.payments));
}

#[test]
fn test_order_with_only_final_payments() {
    let order = order(
        r#"{
            "id": "ord_kEn1PlbGa",
            "orderNumber": "10042",
            "status": "created",
            "payments": [
                { "id": "tr_1", "status": "expired" },
                { "id": "tr_2", "status": "failed" }
            ]
        }"#,
    );
    assert!(!DoesOpenPaymentExist::validate(&order.payments));
}

#[test]
fn test_order_without_payments() {
    let order = order(r#"{ "id": "ord_1", "orderNumber": "1", "status": "created" }"#);
    assert!(order.payments.is_empty());
    assert!(!DoesOpenPaymentExist::validate(&order.payments));
}

#[tokio::test]
async fn test_failed_payment_page_is_published() {
    let bus = EventBus::default();
    let mut listener = bus.subscribe();
    let sales_channel = Uuid::new_v4();
    let trxps_order = order(r#"{ "id": "ord_1", "orderNumber": "1", "status": "canceled" }"#);

    bus.publish(
        PaymentPageFailEvent::new(Context::for_sales_channel(sales_channel))
            .with_trxps_order(trxps_order.clone())
            .with_sales_channel_id(sales_channel)
            .with_redirect_url("https://shop.example/checkout/cart"),
    );

    let envelope = listener.recv().await.unwrap();
    let PluginEvent::PaymentPageFail(event) = envelope.event;
    assert_eq!(event.context().sales_channel_id(), Some(sales_channel));
    assert_eq!(event.sales_channel_id(), Some(sales_channel));
    assert_eq!(event.trxps_order(), Some(&trxps_order));
    assert!(event.host_order().is_none());
}
