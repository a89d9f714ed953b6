//! Meal event model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{to_decimal, to_f64};

/// Event lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Being prepared by an operator, invisible to participants
    #[default]
    Draft,
    /// Accepting order submissions
    Active,
    /// Submissions stopped, operator still settles payments
    Closed,
    /// Read-only archive
    Finished,
}

/// Meal event record - one shared dining occasion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEvent {
    pub id: Uuid,
    /// Restaurant display name
    pub restaurant: String,
    /// Calendar date of the meal
    pub event_date: NaiveDate,
    /// Advisory submission cutoff shown to participants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_deadline: Option<DateTime<Utc>>,
    /// Lifecycle status
    pub status: EventStatus,
    /// Shared tip
    pub shared_tip: f64,
    /// Shared cake
    pub shared_cake: f64,
    /// Other shared costs
    pub shared_other: f64,
    /// Reference to an externally stored menu document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealEvent {
    /// Combined shared cost (tip + cake + other) fed into the settlement pool.
    pub fn shared_total(&self) -> f64 {
        to_f64(
            to_decimal(self.shared_tip)
                + to_decimal(self.shared_cake)
                + to_decimal(self.shared_other),
        )
    }

    /// Whether the advisory submission cutoff lies behind `now`.
    ///
    /// Submission legality depends only on status; the deadline is
    /// display policy for the caller to surface.
    pub fn deadline_passed(&self, now: DateTime<Utc>) -> bool {
        self.order_deadline.is_some_and(|deadline| now > deadline)
    }
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    /// Restaurant display name
    pub restaurant: String,
    /// Calendar date of the meal
    pub event_date: NaiveDate,
    /// Advisory submission cutoff
    pub order_deadline: Option<DateTime<Utc>>,
}

/// Update event payload - absent fields stay unchanged.
///
/// A blank `menu_url` clears the stored link; `order_deadline` can be
/// set or moved but not removed through this payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    /// Restaurant display name
    pub restaurant: Option<String>,
    /// Calendar date of the meal
    pub event_date: Option<NaiveDate>,
    /// Advisory submission cutoff
    pub order_deadline: Option<DateTime<Utc>>,
    /// Shared tip
    pub shared_tip: Option<f64>,
    /// Shared cake
    pub shared_cake: Option<f64>,
    /// Other shared costs
    pub shared_other: Option<f64>,
    /// Reference to an externally stored menu document
    pub menu_url: Option<String>,
}

/// Event surfaced to participants: the ACTIVE event if one exists,
/// otherwise the most recently updated CLOSED event as a read-only view.
/// DRAFT and FINISHED events never surface.
pub fn select_public_event(events: &[MealEvent]) -> Option<&MealEvent> {
    events
        .iter()
        .find(|e| e.status == EventStatus::Active)
        .or_else(|| {
            events
                .iter()
                .filter(|e| e.status == EventStatus::Closed)
                .max_by_key(|e| e.updated_at)
        })
}
