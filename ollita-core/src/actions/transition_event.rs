//! TransitionEvent command handler
//!
//! Moves one event along DRAFT -> ACTIVE -> CLOSED -> FINISHED. The
//! cross-record side of activation (closing every other active event)
//! is planned by [`crate::lifecycle::activation_plan`]; this handler
//! changes exactly one record.

use chrono::{DateTime, Utc};

use crate::error::DomainResult;
use crate::lifecycle::{EventTransition, apply_transition};
use crate::model::MealEvent;

/// TransitionEvent action
#[derive(Debug, Clone)]
pub struct TransitionEventAction {
    pub transition: EventTransition,
}

impl TransitionEventAction {
    /// Produce the event in its new status, or a typed rejection.
    pub fn apply(&self, event: &MealEvent, now: DateTime<Utc>) -> DomainResult<MealEvent> {
        let status = apply_transition(event.status, self.transition)?;

        let mut updated = event.clone();
        updated.status = status;
        updated.updated_at = now;
        Ok(updated)
    }
}
