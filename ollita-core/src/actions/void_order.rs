//! VoidOrder command handler

use chrono::{DateTime, Utc};

use crate::error::{DomainError, DomainResult};
use crate::lifecycle::{OrderMutation, is_order_mutation_allowed};
use crate::model::Order;
use crate::validation::{MAX_NOTE_LEN, normalize_optional_text, validate_optional_text};

/// VoidOrder action - excludes an order from settlement for good. The
/// record stays readable for audit; there is no un-void.
#[derive(Debug, Clone, Default)]
pub struct VoidOrderAction {
    /// Optional operator note on why
    pub reason: Option<String>,
}

impl VoidOrderAction {
    pub fn apply(&self, order: &Order, now: DateTime<Utc>) -> DomainResult<Order> {
        if !is_order_mutation_allowed(order, OrderMutation::Void) {
            return Err(DomainError::OrderAlreadyVoided { id: order.id });
        }
        validate_optional_text(&self.reason, "void_reason", MAX_NOTE_LEN)?;

        let mut voided = order.clone();
        voided.is_void = true;
        voided.void_reason = normalize_optional_text(self.reason.as_deref());
        voided.updated_at = now;
        Ok(voided)
    }
}
