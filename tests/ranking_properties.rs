use std::cmp::Ordering;
use std::collections::HashSet;

use proptest::prelude::*;

use courier_orders::distance::{distance_km, offset_north_km};
use courier_orders::eligibility::{
    can_carry_boxed_items, can_move_high_distances, mentions_boxed_food, NoopObserver,
};
use courier_orders::ranking::{Criterion, OrderRanker};
use courier_orders::{AvailabilityPipeline, Coordinate, Courier, Order, Settings, Vehicle};

const ORIGIN: Coordinate = Coordinate {
    lat: 41.3965463,
    lon: 2.1963997,
};

const DESCRIPTIONS: [&str; 6] = [
    "Pizza four cheeses",
    "Envelope",
    "Strawberry cake",
    "Keys",
    "Flamingo float",
    "Sushi",
];

fn vehicle() -> impl Strategy<Value = Vehicle> {
    prop_oneof![
        Just(Vehicle::Motorcycle),
        Just(Vehicle::ElectricScooter),
        Just(Vehicle::Bicycle),
    ]
}

fn criterion() -> impl Strategy<Value = Criterion> {
    prop_oneof![
        Just(Criterion::Vip),
        Just(Criterion::Range),
        Just(Criterion::Food),
        Just(Criterion::Distance),
    ]
}

fn courier() -> impl Strategy<Value = Courier> {
    (any::<bool>(), vehicle()).prop_map(|(has_box, vehicle)| Courier {
        id: "courier".into(),
        name: "Courier".into(),
        has_box,
        vehicle,
        location: ORIGIN,
    })
}

fn order_fields() -> impl Strategy<Value = (usize, bool, bool, f64)> {
    (0..DESCRIPTIONS.len(), any::<bool>(), any::<bool>(), -10.0..10.0f64)
}

fn build_order(id: usize, (desc, vip, food, km): (usize, bool, bool, f64)) -> Order {
    Order {
        id: format!("order-{id}"),
        description: DESCRIPTIONS[desc].to_string(),
        food,
        vip,
        pickup: offset_north_km(ORIGIN, km),
        delivery: ORIGIN,
    }
}

fn orders(max: usize) -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(order_fields(), 0..max).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, f)| build_order(i, f))
            .collect()
    })
}

fn ranker() -> impl Strategy<Value = OrderRanker> {
    (prop::collection::vec(criterion(), 1..5), 0.1..3.0f64)
        .prop_map(|(criteria, bucket)| OrderRanker::new(criteria, bucket))
}

proptest! {
    #[test]
    fn compare_is_reflexive_and_antisymmetric(
        ranker in ranker(),
        courier in courier(),
        a in order_fields(),
        b in order_fields(),
    ) {
        let a = build_order(0, a);
        let b = build_order(1, b);
        prop_assert_eq!(ranker.compare(&courier, &a, &a), Ordering::Equal);
        prop_assert_eq!(
            ranker.compare(&courier, &a, &b),
            ranker.compare(&courier, &b, &a).reverse()
        );
    }

    #[test]
    fn compare_is_transitive(
        ranker in ranker(),
        courier in courier(),
        a in order_fields(),
        b in order_fields(),
        c in order_fields(),
    ) {
        let a = build_order(0, a);
        let b = build_order(1, b);
        let c = build_order(2, c);
        let ab = ranker.compare(&courier, &a, &b);
        let bc = ranker.compare(&courier, &b, &c);
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(ranker.compare(&courier, &a, &c), Ordering::Greater);
        }
        if ab == Ordering::Equal && bc == Ordering::Equal {
            prop_assert_eq!(ranker.compare(&courier, &a, &c), Ordering::Equal);
        }
    }

    #[test]
    fn rank_output_is_sorted(ranker in ranker(), courier in courier(), orders in orders(12)) {
        let ranked = ranker.rank(&courier, &orders);
        prop_assert_eq!(ranked.len(), orders.len());
        for pair in ranked.windows(2) {
            prop_assert_ne!(ranker.compare(&courier, pair[0], pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn vip_first_puts_every_vip_ahead(courier in courier(), orders in orders(12)) {
        let ranker = OrderRanker::new(vec![Criterion::Vip, Criterion::Range, Criterion::Food], 0.5);
        let ranked = ranker.rank(&courier, &orders);
        let first_plain = ranked.iter().position(|o| !o.vip).unwrap_or(ranked.len());
        prop_assert!(ranked[first_plain..].iter().all(|o| !o.vip));
    }

    #[test]
    fn pipeline_returns_an_eligible_subset(courier in courier(), orders in orders(16)) {
        let settings = Settings::default();
        let pipeline = AvailabilityPipeline::with_observer(settings.clone(), NoopObserver);
        let views = pipeline.find_available_orders(&courier, &orders);

        prop_assert!(views.len() <= orders.len());
        let input_ids: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        for view in &views {
            prop_assert!(input_ids.contains(view.id.as_str()));
            let order = orders.iter().find(|o| o.id == view.id).unwrap();
            prop_assert!(can_carry_boxed_items(&settings, Some(&courier), Some(order)));
            prop_assert!(can_move_high_distances(&settings, Some(&courier), Some(order)));
        }

        let eligible = orders
            .iter()
            .filter(|o| can_carry_boxed_items(&settings, Some(&courier), Some(*o)))
            .filter(|o| can_move_high_distances(&settings, Some(&courier), Some(*o)))
            .count();
        prop_assert_eq!(views.len(), eligible);
    }

    #[test]
    fn box_rule_depends_only_on_keywords_and_box(courier in courier(), fields in order_fields()) {
        let settings = Settings::default();
        let order = build_order(0, fields);
        let allowed = can_carry_boxed_items(&settings, Some(&courier), Some(&order));
        if mentions_boxed_food(&settings, &order.description) {
            prop_assert_eq!(allowed, courier.has_box);
        } else {
            prop_assert!(allowed);
        }
    }

    #[test]
    fn distance_rule_matches_threshold(courier in courier(), fields in order_fields()) {
        let settings = Settings::default();
        let order = build_order(0, fields);
        let allowed = can_move_high_distances(&settings, Some(&courier), Some(&order));
        if settings.is_high_distance_vehicle(courier.vehicle) {
            prop_assert!(allowed);
        } else {
            let d = distance_km(courier.location, order.pickup);
            prop_assert_eq!(allowed, d <= settings.high_distance_threshold);
        }
    }
}
