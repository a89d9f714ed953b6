//! Settlement engine
//!
//! Pure computation: a slice of orders plus the event's shared cost in,
//! the full per-participant and event-level settlement out. Voided
//! orders are excluded. BIRTHDAY consumption folds into the shared
//! pool, which splits evenly across ORDINARY orders; INTERN orders pay
//! their own consumption only. Every aggregate is rounded to 2 decimal
//! places as it is produced, so displayed partial figures always
//! reconcile with the totals built from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Order, OrderCondition};
use crate::money::{round2_dec, to_decimal, to_f64};

/// One active order with its computed settlement figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatedOrder {
    /// The order as provided, echoed intact
    #[serde(flatten)]
    pub order: Order,
    /// Own consumption: food + drink
    pub own_total: f64,
    /// Slice of the shared pool (zero unless ORDINARY)
    pub pool_share: f64,
    /// What this participant owes
    pub final_total: f64,
}

/// Head counts per settlement bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderCounts {
    /// Active (non-void) orders
    pub orders: usize,
    pub ordinary: usize,
    pub birthday: usize,
    pub intern: usize,
    /// Orders marked paid
    pub paid: usize,
    /// Orders awaiting payment
    pub pending: usize,
}

/// Full settlement picture for one event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Active orders with their computed figures
    pub orders: Vec<AllocatedOrder>,
    /// Subsidized birthday consumption folded into the pool
    pub birthday_total: f64,
    /// Shared costs plus birthday consumption
    pub pool_to_share: f64,
    /// Even slice of the pool per ORDINARY order
    pub per_contributor_share: f64,
    /// Sum of final totals over active orders
    pub total_event: f64,
    /// Sum of final totals over paid orders
    pub total_paid: f64,
    /// Still outstanding: total_event - total_paid
    pub total_pending: f64,
    /// Head counts
    pub counts: OrderCounts,
}

/// Own consumption of one order in exact decimal (absent amounts count as zero)
fn own_total_dec(order: &Order) -> Decimal {
    let food = order.food_amount.map(to_decimal).unwrap_or(Decimal::ZERO);
    let drink = order.drink_amount.map(to_decimal).unwrap_or(Decimal::ZERO);
    food + drink
}

/// Compute the settlement for one event snapshot.
///
/// `shared_total` is the event's combined tip + cake + other figure
/// (see [`crate::model::MealEvent::shared_total`]). Deterministic, no
/// side effects, no error conditions: degenerate inputs (no ORDINARY
/// contributors, absent amounts) resolve to zero by policy.
pub fn compute_allocation(orders: &[Order], shared_total: f64) -> AllocationResult {
    let active: Vec<&Order> = orders.iter().filter(|o| !o.is_void).collect();

    let ordinary = active
        .iter()
        .filter(|o| o.condition == OrderCondition::Ordinary)
        .count();
    let birthday = active
        .iter()
        .filter(|o| o.condition == OrderCondition::Birthday)
        .count();
    let intern = active
        .iter()
        .filter(|o| o.condition == OrderCondition::Intern)
        .count();

    // Birthday consumption is subsidized: it joins the shared pool
    // instead of being billed to the birthday orders themselves.
    let birthday_total: Decimal = active
        .iter()
        .filter(|o| o.condition == OrderCondition::Birthday)
        .map(|o| own_total_dec(o))
        .sum();

    let pool_to_share = round2_dec(to_decimal(shared_total) + birthday_total);

    // Zero contributors is not an error: nobody carries the pool.
    let per_contributor_share = if ordinary > 0 {
        round2_dec(pool_to_share / Decimal::from(ordinary as i64))
    } else {
        Decimal::ZERO
    };

    let mut total_event = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut paid_count = 0usize;

    let mut allocated = Vec::with_capacity(active.len());
    for &order in &active {
        let own_total = round2_dec(own_total_dec(order));
        let (pool_share, final_total) = match order.condition {
            OrderCondition::Birthday => (Decimal::ZERO, Decimal::ZERO),
            OrderCondition::Intern => (Decimal::ZERO, own_total),
            OrderCondition::Ordinary => (
                per_contributor_share,
                round2_dec(own_total + per_contributor_share),
            ),
        };

        total_event += final_total;
        if order.paid {
            total_paid += final_total;
            paid_count += 1;
        }

        allocated.push(AllocatedOrder {
            order: order.clone(),
            own_total: to_f64(own_total),
            pool_share: to_f64(pool_share),
            final_total: to_f64(final_total),
        });
    }

    let total_event = round2_dec(total_event);
    let total_paid = round2_dec(total_paid);
    let total_pending = round2_dec(total_event - total_paid);

    let counts = OrderCounts {
        orders: active.len(),
        ordinary,
        birthday,
        intern,
        paid: paid_count,
        pending: active.len() - paid_count,
    };

    tracing::debug!(
        orders = counts.orders,
        pool = %pool_to_share,
        share = %per_contributor_share,
        total = %total_event,
        "computed event settlement"
    );

    AllocationResult {
        orders: allocated,
        birthday_total: to_f64(birthday_total),
        pool_to_share: to_f64(pool_to_share),
        per_contributor_share: to_f64(per_contributor_share),
        total_event: to_f64(total_event),
        total_paid: to_f64(total_paid),
        total_pending: to_f64(total_pending),
        counts,
    }
}
