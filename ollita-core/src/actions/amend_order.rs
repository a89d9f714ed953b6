//! AmendOrder command handler

use chrono::{DateTime, Utc};

use crate::error::{DomainError, DomainResult};
use crate::lifecycle::{OrderMutation, is_order_mutation_allowed};
use crate::model::{Order, OrderUpdate};
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, normalize_optional_text,
    validate_optional_amount, validate_optional_text, validate_required_text,
};

/// AmendOrder action - operator edit of the descriptive fields and the
/// settlement condition. The payload is the complete desired state, so
/// an absent optional clears what was stored. Payment and void flags
/// are untouched here.
#[derive(Debug, Clone)]
pub struct AmendOrderAction {
    pub payload: OrderUpdate,
}

impl AmendOrderAction {
    pub fn apply(&self, order: &Order, now: DateTime<Utc>) -> DomainResult<Order> {
        if !is_order_mutation_allowed(order, OrderMutation::Amend) {
            return Err(DomainError::OrderAlreadyVoided { id: order.id });
        }

        validate_required_text(&self.payload.full_name, "full_name", MAX_NAME_LEN)?;
        validate_required_text(&self.payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.payload.food_desc, "food_desc", MAX_NOTE_LEN)?;
        validate_optional_text(&self.payload.drink_desc, "drink_desc", MAX_NOTE_LEN)?;
        validate_optional_text(&self.payload.notes, "notes", MAX_NOTE_LEN)?;
        validate_optional_amount(self.payload.food_amount, "food_amount")?;
        validate_optional_amount(self.payload.drink_amount, "drink_amount")?;

        let mut amended = order.clone();
        amended.full_name = self.payload.full_name.trim().to_string();
        amended.phone = self.payload.phone.trim().to_string();
        amended.food_desc = self.payload.food_desc.trim().to_string();
        amended.food_amount = self.payload.food_amount;
        amended.drink_desc = normalize_optional_text(self.payload.drink_desc.as_deref());
        amended.drink_amount = self.payload.drink_amount;
        amended.pay_method = self.payload.pay_method;
        amended.notes = normalize_optional_text(self.payload.notes.as_deref());
        amended.condition = self.payload.condition;
        amended.updated_at = now;
        Ok(amended)
    }
}
