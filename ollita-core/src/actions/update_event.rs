//! UpdateEvent command handler
//!
//! Operator edit of event attributes and shared costs. Legal in every
//! status: closed events still get their shared figures corrected while
//! payments settle. Absent payload fields stay unchanged; a blank
//! `menu_url` clears the stored link, and a set `order_deadline` can
//! only be moved, not removed.

use chrono::{DateTime, Utc};

use crate::error::DomainResult;
use crate::model::{EventUpdate, MealEvent};
use crate::validation::{
    MAX_NAME_LEN, MAX_URL_LEN, normalize_optional_text, validate_amount, validate_optional_text,
    validate_required_text,
};

/// UpdateEvent action
#[derive(Debug, Clone)]
pub struct UpdateEventAction {
    pub payload: EventUpdate,
}

impl UpdateEventAction {
    /// Produce the updated event. `now` stamps `updated_at`.
    pub fn apply(&self, event: &MealEvent, now: DateTime<Utc>) -> DomainResult<MealEvent> {
        if let Some(restaurant) = &self.payload.restaurant {
            validate_required_text(restaurant, "restaurant", MAX_NAME_LEN)?;
        }
        if let Some(tip) = self.payload.shared_tip {
            validate_amount(tip, "shared_tip")?;
        }
        if let Some(cake) = self.payload.shared_cake {
            validate_amount(cake, "shared_cake")?;
        }
        if let Some(other) = self.payload.shared_other {
            validate_amount(other, "shared_other")?;
        }
        validate_optional_text(&self.payload.menu_url, "menu_url", MAX_URL_LEN)?;

        let mut updated = event.clone();
        if let Some(restaurant) = &self.payload.restaurant {
            updated.restaurant = restaurant.trim().to_string();
        }
        if let Some(event_date) = self.payload.event_date {
            updated.event_date = event_date;
        }
        if let Some(deadline) = self.payload.order_deadline {
            updated.order_deadline = Some(deadline);
        }
        if let Some(tip) = self.payload.shared_tip {
            updated.shared_tip = tip;
        }
        if let Some(cake) = self.payload.shared_cake {
            updated.shared_cake = cake;
        }
        if let Some(other) = self.payload.shared_other {
            updated.shared_other = other;
        }
        if self.payload.menu_url.is_some() {
            updated.menu_url = normalize_optional_text(self.payload.menu_url.as_deref());
        }
        updated.updated_at = now;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::model::EventStatus;
    use chrono::{Duration, NaiveDate, TimeZone};
    use uuid::Uuid;

    fn test_event(status: EventStatus) -> MealEvent {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        MealEvent {
            id: Uuid::new_v4(),
            restaurant: "La Ollita".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
            order_deadline: None,
            status,
            shared_tip: 0.0,
            shared_cake: 0.0,
            shared_other: 0.0,
            menu_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_update_shared_costs() {
        let event = test_event(EventStatus::Active);
        let action = UpdateEventAction {
            payload: EventUpdate {
                shared_tip: Some(10.0),
                shared_cake: Some(15.0),
                shared_other: Some(5.0),
                ..Default::default()
            },
        };

        let now = event.updated_at + Duration::hours(1);
        let updated = action.apply(&event, now).unwrap();

        assert_eq!(updated.shared_tip, 10.0);
        assert_eq!(updated.shared_cake, 15.0);
        assert_eq!(updated.shared_other, 5.0);
        assert_eq!(updated.shared_total(), 30.0);
        assert_eq!(updated.updated_at, now);
        // Untouched fields survive
        assert_eq!(updated.restaurant, "La Ollita");
        assert_eq!(updated.status, EventStatus::Active);
        assert_eq!(updated.created_at, event.created_at);
    }

    #[test]
    fn test_update_is_legal_on_closed_events() {
        let event = test_event(EventStatus::Closed);
        let action = UpdateEventAction {
            payload: EventUpdate {
                shared_tip: Some(12.5),
                ..Default::default()
            },
        };

        let updated = action.apply(&event, Utc::now()).unwrap();
        assert_eq!(updated.shared_tip, 12.5);
        assert_eq!(updated.status, EventStatus::Closed);
    }

    #[test]
    fn test_update_restaurant_and_menu_url() {
        let event = test_event(EventStatus::Draft);
        let action = UpdateEventAction {
            payload: EventUpdate {
                restaurant: Some("  El Rincon  ".to_string()),
                menu_url: Some("  https://example.com/carta.pdf ".to_string()),
                ..Default::default()
            },
        };

        let updated = action.apply(&event, Utc::now()).unwrap();
        assert_eq!(updated.restaurant, "El Rincon");
        assert_eq!(
            updated.menu_url.as_deref(),
            Some("https://example.com/carta.pdf")
        );
    }

    #[test]
    fn test_update_rejects_negative_shared_cost() {
        let event = test_event(EventStatus::Active);
        let action = UpdateEventAction {
            payload: EventUpdate {
                shared_cake: Some(-1.0),
                ..Default::default()
            },
        };

        let err = action.apply(&event, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_update_rejects_non_finite_shared_cost() {
        let event = test_event(EventStatus::Active);
        let action = UpdateEventAction {
            payload: EventUpdate {
                shared_tip: Some(f64::NAN),
                ..Default::default()
            },
        };

        assert!(action.apply(&event, Utc::now()).is_err());

        let action = UpdateEventAction {
            payload: EventUpdate {
                shared_other: Some(f64::INFINITY),
                ..Default::default()
            },
        };
        assert!(action.apply(&event, Utc::now()).is_err());
    }

    #[test]
    fn test_update_rejects_blank_restaurant() {
        let event = test_event(EventStatus::Active);
        let action = UpdateEventAction {
            payload: EventUpdate {
                restaurant: Some("  ".to_string()),
                ..Default::default()
            },
        };

        assert!(action.apply(&event, Utc::now()).is_err());
    }

    #[test]
    fn test_empty_update_only_bumps_timestamp() {
        let event = test_event(EventStatus::Active);
        let action = UpdateEventAction {
            payload: EventUpdate::default(),
        };

        let now = event.updated_at + Duration::minutes(5);
        let updated = action.apply(&event, now).unwrap();

        assert_eq!(updated.restaurant, event.restaurant);
        assert_eq!(updated.event_date, event.event_date);
        assert_eq!(updated.shared_tip, event.shared_tip);
        assert_eq!(updated.updated_at, now);
    }

    #[test]
    fn test_absent_fields_leave_deadline_and_menu_url_set() {
        let mut event = test_event(EventStatus::Active);
        event.order_deadline = Some(event.created_at + Duration::days(3));
        event.menu_url = Some("https://example.com/carta.pdf".to_string());

        let action = UpdateEventAction {
            payload: EventUpdate {
                shared_tip: Some(8.0),
                ..Default::default()
            },
        };

        let updated = action.apply(&event, Utc::now()).unwrap();
        assert_eq!(updated.order_deadline, event.order_deadline);
        assert_eq!(updated.menu_url, event.menu_url);
    }

    #[test]
    fn test_blank_menu_url_clears_stored_link() {
        let mut event = test_event(EventStatus::Active);
        event.menu_url = Some("https://example.com/old.pdf".to_string());

        let action = UpdateEventAction {
            payload: EventUpdate {
                menu_url: Some("   ".to_string()),
                ..Default::default()
            },
        };

        let updated = action.apply(&event, Utc::now()).unwrap();
        assert_eq!(updated.menu_url, None);
    }
}
