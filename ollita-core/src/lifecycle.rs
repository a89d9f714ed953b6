//! Event and order lifecycle rules
//!
//! Pure verdicts on what an operator or participant may do next. The
//! persistence collaborator applies the actual mutations; everything
//! here is a predicate or a plan over an immutable snapshot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::model::{EventStatus, MealEvent, Order};

/// Operator-driven event status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventTransition {
    /// Make this the single event accepting orders
    Activate,
    /// Stop submissions; payments keep settling
    Close,
    /// Archive for good
    Finish,
}

impl EventTransition {
    /// Status an event lands in after this transition
    pub fn target(&self) -> EventStatus {
        match self {
            Self::Activate => EventStatus::Active,
            Self::Close => EventStatus::Closed,
            Self::Finish => EventStatus::Finished,
        }
    }
}

/// Whether `transition` is legal for an event currently in `status`.
///
/// Progression is monotonic DRAFT -> ACTIVE -> CLOSED -> FINISHED with
/// one exception: Activate re-opens an event from any state. The caller
/// must close every other active event first (see [`activation_plan`]).
pub fn is_transition_allowed(status: EventStatus, transition: EventTransition) -> bool {
    match transition {
        EventTransition::Activate => true,
        EventTransition::Close => status == EventStatus::Active,
        EventTransition::Finish => status == EventStatus::Closed,
    }
}

/// Apply `transition` to `status`, returning the new status or a typed rejection.
pub fn apply_transition(
    status: EventStatus,
    transition: EventTransition,
) -> DomainResult<EventStatus> {
    if !is_transition_allowed(status, transition) {
        return Err(DomainError::InvalidTransition {
            from: status,
            transition,
        });
    }
    Ok(transition.target())
}

/// Whether participants may submit orders against an event in `status`.
pub fn accepts_orders(status: EventStatus) -> bool {
    status == EventStatus::Active
}

/// Sibling events that must be closed when `target_id` activates, so
/// that exactly one event stays ACTIVE. The caller applies the closures
/// and the activation in one atomic write.
pub fn activation_plan(events: &[MealEvent], target_id: Uuid) -> DomainResult<Vec<Uuid>> {
    if !events.iter().any(|e| e.id == target_id) {
        return Err(DomainError::EventNotFound { id: target_id });
    }
    Ok(events
        .iter()
        .filter(|e| e.status == EventStatus::Active && e.id != target_id)
        .map(|e| e.id)
        .collect())
}

/// Operator mutation on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderMutation {
    /// Edit the descriptive fields or the settlement condition
    Amend,
    /// Exclude from settlement for good
    Void,
    /// Record payment received
    MarkPaid,
    /// Take a recorded payment back
    MarkUnpaid,
}

/// Whether `mutation` is legal on `order`. Void is terminal: a voided
/// order rejects every further mutation, re-void included.
pub fn is_order_mutation_allowed(order: &Order, mutation: OrderMutation) -> bool {
    match mutation {
        OrderMutation::Amend
        | OrderMutation::Void
        | OrderMutation::MarkPaid
        | OrderMutation::MarkUnpaid => !order.is_void,
    }
}
