//! Order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settlement condition determining subsidy policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCondition {
    /// Pays own consumption plus an even slice of the pool
    #[default]
    Ordinary,
    /// Pays nothing; own consumption folds into the pool
    Birthday,
    /// Pays own consumption only, never shares the pool
    Intern,
}

/// Payment channel the participant settles through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayMethod {
    Yape,
    Plin,
    Cash,
}

/// Order record - one participant's submission for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub event_id: Uuid,
    /// Participant display name
    pub full_name: String,
    /// Contact phone
    pub phone: String,
    /// Food description
    pub food_desc: String,
    /// Food cost, absent while the price is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_amount: Option<f64>,
    /// Drink description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink_desc: Option<String>,
    /// Drink cost, absent while the price is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink_amount: Option<f64>,
    /// Payment channel
    pub pay_method: PayMethod,
    /// Free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Settlement condition
    #[serde(default)]
    pub condition: OrderCondition,
    /// Payment received
    #[serde(default)]
    pub paid: bool,
    /// When payment was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    /// Excluded from settlement when set (terminal, no un-void)
    #[serde(default)]
    pub is_void: bool,
    /// Why the order was voided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Participant submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    /// Participant display name
    pub full_name: String,
    /// Contact phone
    pub phone: String,
    /// Food description
    pub food_desc: String,
    /// Food cost, absent while the price is unknown
    pub food_amount: Option<f64>,
    /// Drink description
    pub drink_desc: Option<String>,
    /// Drink cost, absent while the price is unknown
    pub drink_amount: Option<f64>,
    /// Payment channel
    pub pay_method: PayMethod,
    /// Free-text note
    pub notes: Option<String>,
}

/// Operator amendment payload - the complete descriptive state of the
/// order. An absent optional clears the stored value. Paid and void
/// flags are controlled by their dedicated commands, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// Participant display name
    pub full_name: String,
    /// Contact phone
    pub phone: String,
    /// Food description
    pub food_desc: String,
    /// Food cost
    pub food_amount: Option<f64>,
    /// Drink description
    pub drink_desc: Option<String>,
    /// Drink cost
    pub drink_amount: Option<f64>,
    /// Payment channel
    pub pay_method: PayMethod,
    /// Free-text note
    pub notes: Option<String>,
    /// Settlement condition
    #[serde(default)]
    pub condition: OrderCondition,
}
