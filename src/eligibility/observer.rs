use tracing::debug;

use super::rules::{BoxedItemsCheck, HighDistanceCheck};

/// Receives every eligibility decision the pipeline makes.
///
/// The rules themselves stay pure; whoever runs them decides what to do with
/// the outcome (log it, count it, ignore it).
pub trait EligibilityObserver: Send + Sync {
    fn on_boxed_items(&self, check: &BoxedItemsCheck);

    fn on_high_distance(&self, check: &HighDistanceCheck);
}

/// Logs each decision as a `debug` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl EligibilityObserver for TracingObserver {
    fn on_boxed_items(&self, check: &BoxedItemsCheck) {
        debug!(
            courier_id = %check.courier.id,
            order_id = %check.order.id,
            description = %check.order.description,
            has_food_keyword = check.has_food_keyword,
            courier_has_box = check.courier.has_box,
            allowed = check.allowed(),
            "can_carry_boxed_items"
        );
    }

    fn on_high_distance(&self, check: &HighDistanceCheck) {
        debug!(
            courier_id = %check.courier.id,
            order_id = %check.order.id,
            pickup = %check.order.pickup,
            location = %check.courier.location,
            distance = check.distance,
            threshold = check.threshold,
            is_high_distance = check.is_high_distance(),
            vehicle = %check.courier.vehicle,
            allowed = check.allowed(),
            "can_move_high_distances"
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EligibilityObserver for NoopObserver {
    fn on_boxed_items(&self, _check: &BoxedItemsCheck) {}

    fn on_high_distance(&self, _check: &HighDistanceCheck) {}
}
