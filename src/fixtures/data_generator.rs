use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::constant::SEED;
use crate::distance::{offset_north_km, EARTH_RADIUS_KM};
use crate::domain::types::{Coordinate, Courier, Order, Vehicle};

/// Plaça de Catalunya, Barcelona.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 41.3870,
    lon: 2.1701,
};

const VEHICLES: [Vehicle; 3] = [Vehicle::Motorcycle, Vehicle::ElectricScooter, Vehicle::Bicycle];

// (description, is food)
const DESCRIPTIONS: [(&str, bool); 10] = [
    ("I want a pizza cut into very small slices", true),
    ("I want a chocolate cake", true),
    ("Flamingo for my pool", false),
    ("Envelope with documents", false),
    ("Hot dog with mustard", true),
    ("Burger menu with fries", true),
    ("Spare keys for my flat", false),
    ("Sushi for two", true),
    ("Phone charger", false),
    ("Cheesecake and coffee", true),
];

/// A uniformly random point inside a `radius_km` square around `center`.
pub fn random_point_near(rng: &mut impl Rng, center: Coordinate, radius_km: f64) -> Coordinate {
    let north = rng.gen_range(-radius_km..=radius_km);
    let east = rng.gen_range(-radius_km..=radius_km);
    let shifted = offset_north_km(center, north);
    let dlon = (east / EARTH_RADIUS_KM).to_degrees() / center.lat.to_radians().cos();
    Coordinate::new(shifted.lat, shifted.lon + dlon)
}

/// Random couriers with ids `courier-1..=count`.
pub fn generate_couriers(
    rng: &mut impl Rng,
    count: usize,
    center: Coordinate,
    radius_km: f64,
) -> Vec<Courier> {
    (1..=count)
        .map(|i| Courier {
            id: format!("courier-{i}"),
            name: format!("Courier {i}"),
            has_box: rng.gen_bool(0.5),
            vehicle: *VEHICLES.choose(rng).unwrap_or(&Vehicle::Bicycle),
            location: random_point_near(rng, center, radius_km),
        })
        .collect()
}

/// Random orders with ids `order-1..=count`; roughly one in five is VIP.
pub fn generate_orders(
    rng: &mut impl Rng,
    count: usize,
    center: Coordinate,
    radius_km: f64,
) -> Vec<Order> {
    (1..=count)
        .map(|i| {
            let (description, food) = *DESCRIPTIONS.choose(rng).unwrap_or(&DESCRIPTIONS[3]);
            Order {
                id: format!("order-{i}"),
                description: description.to_string(),
                food,
                vip: rng.gen_bool(0.2),
                pickup: random_point_near(rng, center, radius_km),
                delivery: random_point_near(rng, center, radius_km),
            }
        })
        .collect()
}

/// Seeded couriers and orders spread over a 10 km square around the centre.
pub fn generate_random_inputs(
    courier_count: usize,
    order_count: usize,
) -> (Vec<Courier>, Vec<Order>) {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let couriers = generate_couriers(&mut rng, courier_count, DEFAULT_CENTER, 5.0);
    let orders = generate_orders(&mut rng, order_count, DEFAULT_CENTER, 5.0);
    info!(
        "Generated {} couriers and {} orders around {}",
        couriers.len(),
        orders.len(),
        DEFAULT_CENTER
    );
    (couriers, orders)
}
