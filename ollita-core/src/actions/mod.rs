//! Command action implementations
//!
//! One handler per caller-visible mutation. Every handler validates its
//! payload, consults the lifecycle rules, and returns the updated
//! record by value with `updated_at` stamped from the caller-supplied
//! instant; the persistence collaborator writes it back. Nothing is
//! ever partially applied.

mod amend_order;
mod create_event;
mod mark_paid;
mod submit_order;
mod transition_event;
mod update_event;
mod void_order;

pub use amend_order::AmendOrderAction;
pub use create_event::CreateEventAction;
pub use mark_paid::MarkPaidAction;
pub use submit_order::SubmitOrderAction;
pub use transition_event::TransitionEventAction;
pub use update_event::UpdateEventAction;
pub use void_order::VoidOrderAction;
