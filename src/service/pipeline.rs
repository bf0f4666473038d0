use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info, span, Level};

use crate::config::Settings;
use crate::domain::types::{Courier, Order, RankedOrderView};
use crate::eligibility::{
    check_boxed_items, check_high_distance, EligibilityObserver, TracingObserver,
};
use crate::ranking::OrderRanker;

/// Filters a courier's candidate orders by eligibility, then ranks them.
pub struct AvailabilityPipeline {
    settings: Settings,
    ranker: OrderRanker,
    observer: Box<dyn EligibilityObserver>,
}

impl AvailabilityPipeline {
    /// Pipeline that logs every eligibility decision through `tracing`.
    pub fn new(settings: Settings) -> Self {
        Self::with_observer(settings, TracingObserver)
    }

    pub fn with_observer<O>(settings: Settings, observer: O) -> Self
    where
        O: EligibilityObserver + 'static,
    {
        let ranker = OrderRanker::from_settings(&settings);
        Self {
            settings,
            ranker,
            observer: Box::new(observer),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ranker(&self) -> &OrderRanker {
        &self.ranker
    }

    /// Box rule with the decision reported to the observer.
    pub fn can_carry_boxed_items(&self, courier: Option<&Courier>, order: Option<&Order>) -> bool {
        courier
            .zip(order)
            .is_some_and(|(courier, order)| self.carries(courier, order))
    }

    /// Distance rule with the decision reported to the observer.
    pub fn can_move_high_distances(
        &self,
        courier: Option<&Courier>,
        order: Option<&Order>,
    ) -> bool {
        courier
            .zip(order)
            .is_some_and(|(courier, order)| self.reaches(courier, order))
    }

    pub fn compare(&self, courier: &Courier, a: &Order, b: &Order) -> Ordering {
        self.ranker.compare(courier, a, b)
    }

    /// Orders `courier` may take, best first, reduced to id and description.
    pub fn find_available_orders(
        &self,
        courier: &Courier,
        orders: &[Order],
    ) -> Vec<RankedOrderView> {
        let span = span!(Level::INFO, "find_available_orders", courier = %courier.id);
        let _guard = span.enter();

        let carriable: Vec<&Order> = orders
            .iter()
            .filter(|order| self.carries(courier, order))
            .collect();
        debug!(
            "{} of {} orders pass the box rule",
            carriable.len(),
            orders.len()
        );

        let reachable: Vec<&Order> = carriable
            .into_iter()
            .filter(|order| self.reaches(courier, order))
            .collect();
        debug!("{} orders pass the distance rule", reachable.len());

        let views: Vec<RankedOrderView> = self
            .ranker
            .rank(courier, reachable)
            .into_iter()
            .map(RankedOrderView::from)
            .collect();

        info!(
            "{} of {} orders available for courier {}",
            views.len(),
            orders.len(),
            courier.id
        );
        views
    }

    // Both predicates and the filters in `find_available_orders` go through
    // these two, so every decision reaches the observer exactly once.
    fn carries(&self, courier: &Courier, order: &Order) -> bool {
        let check = check_boxed_items(&self.settings, courier, order);
        self.observer.on_boxed_items(&check);
        check.allowed()
    }

    fn reaches(&self, courier: &Courier, order: &Order) -> bool {
        let check = check_high_distance(&self.settings, courier, order);
        self.observer.on_high_distance(&check);
        check.allowed()
    }
}

impl fmt::Debug for AvailabilityPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilityPipeline")
            .field("settings", &self.settings)
            .field("ranker", &self.ranker)
            .finish_non_exhaustive()
    }
}
