//! MarkPaid command handler

use chrono::{DateTime, Utc};

use crate::error::{DomainError, DomainResult};
use crate::lifecycle::{OrderMutation, is_order_mutation_allowed};
use crate::model::Order;

/// MarkPaid action - records or reverses a payment. Unlike voiding this
/// is reversible; un-marking clears the payment timestamp.
#[derive(Debug, Clone, Copy)]
pub struct MarkPaidAction {
    pub paid: bool,
}

impl MarkPaidAction {
    pub fn apply(&self, order: &Order, now: DateTime<Utc>) -> DomainResult<Order> {
        let mutation = if self.paid {
            OrderMutation::MarkPaid
        } else {
            OrderMutation::MarkUnpaid
        };
        if !is_order_mutation_allowed(order, mutation) {
            return Err(DomainError::OrderAlreadyVoided { id: order.id });
        }

        let mut marked = order.clone();
        marked.paid = self.paid;
        marked.paid_at = self.paid.then_some(now);
        marked.updated_at = now;
        Ok(marked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderCondition, PayMethod};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn test_order() -> Order {
        let now = Utc.with_ymd_and_hms(2024, 6, 2, 13, 0, 0).unwrap();
        Order {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            full_name: "Ana Torres".to_string(),
            phone: "999111222".to_string(),
            food_desc: "Lomo saltado".to_string(),
            food_amount: Some(20.0),
            drink_desc: None,
            drink_amount: None,
            pay_method: PayMethod::Plin,
            notes: None,
            condition: OrderCondition::Ordinary,
            paid: false,
            paid_at: None,
            is_void: false,
            void_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_mark_paid_records_timestamp() {
        let order = test_order();
        let when = Utc.with_ymd_and_hms(2024, 6, 7, 20, 30, 0).unwrap();

        let paid = MarkPaidAction { paid: true }.apply(&order, when).unwrap();

        assert!(paid.paid);
        assert_eq!(paid.paid_at, Some(when));
        assert_eq!(paid.updated_at, when);
    }

    #[test]
    fn test_mark_unpaid_clears_timestamp() {
        let order = test_order();
        let when = Utc.with_ymd_and_hms(2024, 6, 7, 20, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 7, 21, 0, 0).unwrap();

        let paid = MarkPaidAction { paid: true }.apply(&order, when).unwrap();
        let unpaid = MarkPaidAction { paid: false }.apply(&paid, later).unwrap();

        assert!(!unpaid.paid);
        assert_eq!(unpaid.paid_at, None);
        assert_eq!(unpaid.updated_at, later);
    }

    #[test]
    fn test_remark_refreshes_timestamp() {
        let order = test_order();
        let first = Utc.with_ymd_and_hms(2024, 6, 7, 20, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 6, 8, 9, 0, 0).unwrap();

        let paid = MarkPaidAction { paid: true }.apply(&order, first).unwrap();
        let repaid = MarkPaidAction { paid: true }.apply(&paid, second).unwrap();

        assert!(repaid.paid);
        assert_eq!(repaid.paid_at, Some(second));
    }

    #[test]
    fn test_mark_rejected_on_voided_order() {
        let mut order = test_order();
        order.is_void = true;

        for paid in [true, false] {
            let err = MarkPaidAction { paid }.apply(&order, Utc::now()).unwrap_err();
            assert!(matches!(err, DomainError::OrderAlreadyVoided { id } if id == order.id));
        }
    }
}
