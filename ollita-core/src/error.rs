//! Error types for the domain core
//!
//! Every fallible operation in this crate returns [`DomainError`]. The
//! paired [`DomainErrorCode`] gives transport layers a stable machine
//! code per variant so they never have to parse messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::lifecycle::EventTransition;
use crate::model::EventStatus;

/// Stable machine codes for domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainErrorCode {
    /// Payload failed validation
    Validation,
    /// Referenced event is not in the provided snapshot
    EventNotFound,
    /// Submission against an event that is not accepting orders
    OrdersClosed,
    /// Requested status change is not legal from the current status
    InvalidTransition,
    /// Mutation attempted on a voided order
    OrderAlreadyVoided,
}

impl DomainErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::OrdersClosed => "ORDERS_CLOSED",
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::OrderAlreadyVoided => "ORDER_ALREADY_VOIDED",
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Validation => "Validation failed",
            Self::EventNotFound => "Event not found",
            Self::OrdersClosed => "Event is not accepting orders",
            Self::InvalidTransition => "Transition not allowed",
            Self::OrderAlreadyVoided => "Order is voided",
        }
    }
}

impl std::fmt::Display for DomainErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unified error type for the domain core
#[derive(Debug, Error)]
pub enum DomainError {
    /// Payload failed validation
    #[error("{message}")]
    Validation { message: String },

    /// Referenced event is not in the provided snapshot
    #[error("event {id} not found")]
    EventNotFound { id: Uuid },

    /// Submission against an event that is not accepting orders
    #[error("event is not accepting orders ({status:?})")]
    OrdersClosed { status: EventStatus },

    /// Requested status change is not legal from the current status
    #[error("cannot {transition:?} an event in {from:?} status")]
    InvalidTransition {
        from: EventStatus,
        transition: EventTransition,
    },

    /// Mutation attempted on a voided order
    #[error("order {id} is voided")]
    OrderAlreadyVoided { id: Uuid },
}

impl DomainError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> DomainErrorCode {
        match self {
            Self::Validation { .. } => DomainErrorCode::Validation,
            Self::EventNotFound { .. } => DomainErrorCode::EventNotFound,
            Self::OrdersClosed { .. } => DomainErrorCode::OrdersClosed,
            Self::InvalidTransition { .. } => DomainErrorCode::InvalidTransition,
            Self::OrderAlreadyVoided { .. } => DomainErrorCode::OrderAlreadyVoided,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
