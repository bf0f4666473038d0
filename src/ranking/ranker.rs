use std::cmp::Ordering;

use itertools::Itertools;
use tracing::trace;

use crate::config::Settings;
use crate::distance::distance_km;
use crate::domain::types::{Courier, Order};

use super::criterion::{Candidate, Criterion};

/// Ranks orders for a courier using an ordered list of criteria.
///
/// The first criterion that tells two orders apart decides their order;
/// when all of them tie the orders compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRanker {
    criteria: Vec<Criterion>,
    bucket_size: f64,
}

impl OrderRanker {
    pub fn new(criteria: Vec<Criterion>, bucket_size: f64) -> Self {
        Self {
            criteria,
            bucket_size,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.ranking_criteria.clone(),
            settings.distance_bucket_size,
        )
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Compare two orders from the point of view of `courier`.
    ///
    /// `Less` means `a` is presented before `b`.
    pub fn compare(&self, courier: &Courier, a: &Order, b: &Order) -> Ordering {
        let a = Candidate {
            order: a,
            distance: distance_km(courier.location, a.pickup),
        };
        let b = Candidate {
            order: b,
            distance: distance_km(courier.location, b.pickup),
        };
        self.compare_candidates(&a, &b)
    }

    pub fn compare_candidates(&self, a: &Candidate, b: &Candidate) -> Ordering {
        self.criteria.iter().fold(Ordering::Equal, |acc, criterion| {
            acc.then_with(|| criterion.compare(a, b, self.bucket_size))
        })
    }

    /// Stable-sort `orders` for `courier`. Each pickup distance is computed once.
    pub fn rank<'a, I>(&self, courier: &Courier, orders: I) -> Vec<&'a Order>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut candidates: Vec<Candidate<'a>> = orders
            .into_iter()
            .map(|order| Candidate {
                order,
                distance: distance_km(courier.location, order.pickup),
            })
            .collect();

        candidates.sort_by(|a, b| self.compare_candidates(a, b));

        trace!(
            "Ranked for {} by [{}]: {:?}",
            courier.id,
            self.criteria.iter().join(","),
            candidates
                .iter()
                .map(|c| (c.order.id.as_str(), c.distance))
                .collect::<Vec<_>>()
        );

        candidates.into_iter().map(|c| c.order).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::offset_north_km;
    use crate::domain::types::{Coordinate, Vehicle};

    const ORIGIN: Coordinate = Coordinate {
        lat: 41.3851,
        lon: 2.1734,
    };

    fn courier() -> Courier {
        Courier {
            id: "courier-1".into(),
            name: "Test".into(),
            has_box: true,
            vehicle: Vehicle::Motorcycle,
            location: ORIGIN,
        }
    }

    fn order(id: &str, km: f64, vip: bool, food: bool) -> Order {
        Order {
            id: id.into(),
            description: id.into(),
            food,
            vip,
            pickup: offset_north_km(ORIGIN, km),
            delivery: ORIGIN,
        }
    }

    fn ids(ranked: &[&Order]) -> Vec<String> {
        ranked.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn vip_wins_regardless_of_bucket() {
        let ranker = OrderRanker::new(vec![Criterion::Vip, Criterion::Range, Criterion::Food], 0.5);
        let orders = vec![
            order("near", 0.2, false, false),
            order("vip-far", 4.8, true, false),
            order("mid", 1.1, false, true),
        ];

        let ranked = ranker.rank(&courier(), &orders);
        assert_eq!(ids(&ranked), vec!["vip-far", "near", "mid"]);
    }

    #[test]
    fn later_criteria_only_break_ties() {
        let ranker = OrderRanker::new(vec![Criterion::Range, Criterion::Food], 1.0);
        let orders = vec![
            order("plain", 0.3, false, false),
            order("food", 0.9, false, true),
            order("far-food", 1.5, false, true),
        ];

        // plain and food share bucket 0, so food decides between them.
        let ranked = ranker.rank(&courier(), &orders);
        assert_eq!(ids(&ranked), vec!["food", "plain", "far-food"]);
    }

    #[test]
    fn distance_criterion_orders_by_raw_distance() {
        let ranker = OrderRanker::new(vec![Criterion::Distance], 0.5);
        let orders = vec![
            order("c", 3.0, true, true),
            order("a", 0.4, false, false),
            order("b", 0.45, false, false),
        ];

        let ranked = ranker.rank(&courier(), &orders);
        assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let ranker = OrderRanker::new(vec![Criterion::Vip], 0.5);
        let orders = vec![
            order("first", 3.0, false, false),
            order("second", 1.0, false, false),
        ];

        let ranked = ranker.rank(&courier(), &orders);
        assert_eq!(ids(&ranked), vec!["first", "second"]);
    }

    #[test]
    fn compare_matches_rank() {
        let ranker = OrderRanker::from_settings(&Settings::default());
        let c = courier();
        let a = order("a", 0.2, false, true);
        let b = order("b", 0.3, true, false);

        assert_eq!(ranker.compare(&c, &a, &b), Ordering::Greater);
        assert_eq!(ranker.compare(&c, &b, &a), Ordering::Less);
        assert_eq!(ranker.compare(&c, &a, &a), Ordering::Equal);
        assert_eq!(ids(&ranker.rank(&c, [&a, &b])), vec!["b", "a"]);
    }
}
