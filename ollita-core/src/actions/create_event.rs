//! CreateEvent command handler
//!
//! Opens a new event in DRAFT with zeroed shared costs. The operator
//! fills in shared figures later, once the receipts exist.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainResult;
use crate::model::{EventCreate, EventStatus, MealEvent};
use crate::validation::{MAX_NAME_LEN, validate_required_text};

/// CreateEvent action
#[derive(Debug, Clone)]
pub struct CreateEventAction {
    pub payload: EventCreate,
}

impl CreateEventAction {
    /// Build the new DRAFT event. `now` stamps both timestamps.
    pub fn apply(&self, now: DateTime<Utc>) -> DomainResult<MealEvent> {
        validate_required_text(&self.payload.restaurant, "restaurant", MAX_NAME_LEN)?;

        Ok(MealEvent {
            id: Uuid::new_v4(),
            restaurant: self.payload.restaurant.trim().to_string(),
            event_date: self.payload.event_date,
            order_deadline: self.payload.order_deadline,
            status: EventStatus::Draft,
            shared_tip: 0.0,
            shared_cake: 0.0,
            shared_other: 0.0,
            menu_url: None,
            created_at: now,
            updated_at: now,
        })
    }
}
