use crate::domain::remote::RemotePayment;
use crate::domain::status::PaymentStatus;

/// Checkout guard: an order with an open payment must not get a second one.
pub struct DoesOpenPaymentExist;

impl DoesOpenPaymentExist {
    pub fn validate(payments: &[RemotePayment]) -> bool {
        if payments.is_empty() {
            return false;
        }

        payments
            .iter()
            .any(|payment| payment.status == PaymentStatus::STATUS_OPEN)
    }
}
