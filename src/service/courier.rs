use tracing::{info, warn};

use crate::domain::types::{Courier, Order, RankedOrderView};
use crate::repository::Repository;

use super::pipeline::AvailabilityPipeline;

/// Resolves couriers and orders by id and runs them through the pipeline.
pub struct CourierService<C, O> {
    pipeline: AvailabilityPipeline,
    couriers: C,
    orders: O,
}

impl<C, O> CourierService<C, O>
where
    C: Repository<Courier>,
    O: Repository<Order>,
{
    pub fn new(pipeline: AvailabilityPipeline, couriers: C, orders: O) -> Self {
        Self {
            pipeline,
            couriers,
            orders,
        }
    }

    pub fn pipeline(&self) -> &AvailabilityPipeline {
        &self.pipeline
    }

    pub fn find_courier_by_id(&self, courier_id: &str) -> Option<Courier> {
        self.couriers.find_by_id(courier_id)
    }

    /// Look up each id, skipping (and logging) the ones that don't exist.
    pub fn find_orders_by_ids<S: AsRef<str>>(&self, order_ids: &[S]) -> Vec<Order> {
        order_ids
            .iter()
            .filter_map(|id| {
                let id = id.as_ref();
                let order = self.orders.find_by_id(id);
                if order.is_none() {
                    warn!("Order '{}' not found, skipping", id);
                }
                order
            })
            .collect()
    }

    /// `None` when the courier doesn't exist.
    pub fn find_available_orders_by_courier_id<S: AsRef<str>>(
        &self,
        courier_id: &str,
        order_ids: &[S],
    ) -> Option<Vec<RankedOrderView>> {
        let Some(courier) = self.find_courier_by_id(courier_id) else {
            warn!("Courier '{}' not found", courier_id);
            return None;
        };
        let orders = self.find_orders_by_ids(order_ids);
        Some(self.pipeline.find_available_orders(&courier, &orders))
    }

    /// Same as above, over every known order.
    pub fn find_all_available_orders(&self, courier_id: &str) -> Option<Vec<RankedOrderView>> {
        let Some(courier) = self.find_courier_by_id(courier_id) else {
            warn!("Courier '{}' not found", courier_id);
            return None;
        };
        let orders = self.orders.find_all();
        info!(
            "Checking all {} orders for courier {}",
            orders.len(),
            courier.id
        );
        Some(self.pipeline.find_available_orders(&courier, &orders))
    }
}
