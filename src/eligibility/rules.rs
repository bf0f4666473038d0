use crate::config::Settings;
use crate::distance::distance_km;
use crate::domain::types::{Courier, Order};

/// Inputs and outcome of the insulated-box rule for one courier/order pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxedItemsCheck<'a> {
    pub courier: &'a Courier,
    pub order: &'a Order,
    pub has_food_keyword: bool,
}

impl BoxedItemsCheck<'_> {
    pub fn allowed(&self) -> bool {
        !self.has_food_keyword || self.courier.has_box
    }
}

/// Inputs and outcome of the long-distance rule for one courier/order pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighDistanceCheck<'a> {
    pub courier: &'a Courier,
    pub order: &'a Order,
    pub distance: f64,
    pub threshold: f64,
    pub vehicle_exempt: bool,
}

impl HighDistanceCheck<'_> {
    /// Strictly beyond the threshold; a pickup exactly at it is not high distance.
    pub fn is_high_distance(&self) -> bool {
        self.distance > self.threshold
    }

    pub fn allowed(&self) -> bool {
        !self.is_high_distance() || self.vehicle_exempt
    }
}

/// True when the description mentions any configured keyword, ignoring case.
pub fn mentions_boxed_food(settings: &Settings, description: &str) -> bool {
    let description = description.to_lowercase();
    settings
        .food_keywords
        .iter()
        .any(|keyword| description.contains(keyword.as_str()))
}

pub fn check_boxed_items<'a>(
    settings: &Settings,
    courier: &'a Courier,
    order: &'a Order,
) -> BoxedItemsCheck<'a> {
    BoxedItemsCheck {
        courier,
        order,
        has_food_keyword: mentions_boxed_food(settings, &order.description),
    }
}

pub fn check_high_distance<'a>(
    settings: &Settings,
    courier: &'a Courier,
    order: &'a Order,
) -> HighDistanceCheck<'a> {
    HighDistanceCheck {
        courier,
        order,
        distance: distance_km(courier.location, order.pickup),
        threshold: settings.high_distance_threshold,
        vehicle_exempt: settings.is_high_distance_vehicle(courier.vehicle),
    }
}

/// Orders whose description names boxed food need a courier with a box.
/// A missing courier or order is never eligible.
pub fn can_carry_boxed_items(
    settings: &Settings,
    courier: Option<&Courier>,
    order: Option<&Order>,
) -> bool {
    match (courier, order) {
        (Some(courier), Some(order)) => check_boxed_items(settings, courier, order).allowed(),
        _ => false,
    }
}

/// Pickups beyond the threshold need an exempt vehicle.
/// A missing courier or order is never eligible.
pub fn can_move_high_distances(
    settings: &Settings,
    courier: Option<&Courier>,
    order: Option<&Order>,
) -> bool {
    match (courier, order) {
        (Some(courier), Some(order)) => check_high_distance(settings, courier, order).allowed(),
        _ => false,
    }
}
