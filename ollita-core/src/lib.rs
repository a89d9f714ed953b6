//! Core domain for La Ollita group lunches
//!
//! Event lifecycle, order commands, and the settlement engine that
//! splits shared costs and birthday subsidies across participants.
//! Everything here is pure: commands take snapshots plus a clock value
//! and return new records or typed rejections, and the allocation
//! engine is a deterministic function of its inputs. Persistence and
//! transport live in the callers.

pub mod actions;
pub mod allocation;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod money;
pub mod validation;

// Re-exports
pub use error::{DomainError, DomainErrorCode, DomainResult};

// Model re-exports (for convenient access)
pub use model::{
    EventCreate, EventStatus, EventUpdate, MealEvent, Order, OrderCondition, OrderCreate,
    OrderUpdate, PayMethod, select_public_event,
};

// Lifecycle re-exports
pub use lifecycle::{EventTransition, OrderMutation, accepts_orders, activation_plan};

// Command re-exports
pub use actions::{
    AmendOrderAction, CreateEventAction, MarkPaidAction, SubmitOrderAction, TransitionEventAction,
    UpdateEventAction, VoidOrderAction,
};

// Settlement re-exports
pub use allocation::{AllocatedOrder, AllocationResult, OrderCounts, compute_allocation};
