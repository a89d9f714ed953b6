//! SubmitOrder command handler
//!
//! Participant-facing submission against the ACTIVE event. New orders
//! always start ORDINARY, unpaid, and non-void; the operator reassigns
//! the condition afterwards when someone is celebrated or interning.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::lifecycle::accepts_orders;
use crate::model::{MealEvent, Order, OrderCondition, OrderCreate};
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, normalize_optional_text,
    validate_optional_amount, validate_optional_text, validate_required_text,
};

/// SubmitOrder action
#[derive(Debug, Clone)]
pub struct SubmitOrderAction {
    pub payload: OrderCreate,
}

impl SubmitOrderAction {
    /// Build the new order against `event`. `now` stamps both timestamps.
    pub fn apply(&self, event: &MealEvent, now: DateTime<Utc>) -> DomainResult<Order> {
        if !accepts_orders(event.status) {
            return Err(DomainError::OrdersClosed {
                status: event.status,
            });
        }

        validate_required_text(&self.payload.full_name, "full_name", MAX_NAME_LEN)?;
        validate_required_text(&self.payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.payload.food_desc, "food_desc", MAX_NOTE_LEN)?;
        validate_optional_text(&self.payload.drink_desc, "drink_desc", MAX_NOTE_LEN)?;
        validate_optional_text(&self.payload.notes, "notes", MAX_NOTE_LEN)?;
        validate_optional_amount(self.payload.food_amount, "food_amount")?;
        validate_optional_amount(self.payload.drink_amount, "drink_amount")?;

        Ok(Order {
            id: Uuid::new_v4(),
            event_id: event.id,
            full_name: self.payload.full_name.trim().to_string(),
            phone: self.payload.phone.trim().to_string(),
            food_desc: self.payload.food_desc.trim().to_string(),
            food_amount: self.payload.food_amount,
            drink_desc: normalize_optional_text(self.payload.drink_desc.as_deref()),
            drink_amount: self.payload.drink_amount,
            pay_method: self.payload.pay_method,
            notes: normalize_optional_text(self.payload.notes.as_deref()),
            condition: OrderCondition::Ordinary,
            paid: false,
            paid_at: None,
            is_void: false,
            void_reason: None,
            created_at: now,
            updated_at: now,
        })
    }
}
