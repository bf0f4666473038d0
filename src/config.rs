use std::env;

use dotenv::dotenv;
use itertools::Itertools;
use tracing::{debug, info};

use crate::domain::types::Vehicle;
use crate::error::ConfigError;
use crate::ranking::criterion::Criterion;

pub mod constant {
    pub(crate) const FOOD_KEYWORDS: &str = "pizza,cake,flamingo";
    pub(crate) const HIGH_DISTANCE_KM: f64 = 5.0;
    pub(crate) const HIGH_DISTANCE_VEHICLES: &str = "MOTORCYCLE,ELECTRIC_SCOOTER";
    pub(crate) const DISTANCE_BUCKET_KM: f64 = 0.5;
    pub(crate) const RANKING_CRITERIA: &str = "vip,range,food,distance";
    pub(crate) const COURIERS_PATH: &str = "data/couriers.json";
    pub(crate) const ORDERS_PATH: &str = "data/orders.json";
    pub(crate) const SEED: u64 = 64;
}

pub mod keys {
    pub const FOOD_KEYWORDS: &str = "ORDER_FOOD_IN_BOX";
    pub const HIGH_DISTANCE: &str = "COURIER_HIGH_DISTANCE";
    pub const HIGH_DISTANCE_VEHICLES: &str = "COURIER_HIGH_DISTANCE_VEHICLES";
    pub const DISTANCE_RANGE: &str = "COURIER_DISTANCE_RANGE";
    pub const RANKING_CRITERIA: &str = "ORDER_RANKING_CRITERIA";
    pub const COURIERS_PATH: &str = "COURIERS_PATH";
    pub const ORDERS_PATH: &str = "ORDERS_PATH";
    pub const CSV_EXPORT_PATH: &str = "AVAILABLE_ORDERS_CSV";
    pub const GENERATE_FIXTURES: &str = "GENERATE_FIXTURES";
}

/// Business rules for eligibility and ranking. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub food_keywords: Vec<String>,
    pub high_distance_threshold: f64,
    pub high_distance_vehicles: Vec<Vehicle>,
    pub distance_bucket_size: f64,
    pub ranking_criteria: Vec<Criterion>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            food_keywords: parse_keywords(constant::FOOD_KEYWORDS),
            high_distance_threshold: constant::HIGH_DISTANCE_KM,
            high_distance_vehicles: vec![Vehicle::Motorcycle, Vehicle::ElectricScooter],
            distance_bucket_size: constant::DISTANCE_BUCKET_KM,
            ranking_criteria: vec![
                Criterion::Vip,
                Criterion::Range,
                Criterion::Food,
                Criterion::Distance,
            ],
        }
    }
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let settings = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            "Loaded settings: keywords=[{}], threshold={:.2}km, vehicles=[{}], \
             bucket={:.2}km, criteria=[{}]",
            settings.food_keywords.join(","),
            settings.high_distance_threshold,
            settings.high_distance_vehicles.iter().join(","),
            settings.distance_bucket_size,
            settings.ranking_criteria.iter().join(","),
        );
        Ok(settings)
    }

    /// Build settings from an arbitrary key lookup; missing keys take the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let food_keywords = parse_keywords(
            &lookup(keys::FOOD_KEYWORDS).unwrap_or_else(|| constant::FOOD_KEYWORDS.to_string()),
        );

        let high_distance_threshold = match lookup(keys::HIGH_DISTANCE) {
            Some(raw) => parse_number(keys::HIGH_DISTANCE, &raw)?,
            None => constant::HIGH_DISTANCE_KM,
        };

        let high_distance_vehicles = parse_vehicles(
            &lookup(keys::HIGH_DISTANCE_VEHICLES)
                .unwrap_or_else(|| constant::HIGH_DISTANCE_VEHICLES.to_string()),
        )?;

        let distance_bucket_size = match lookup(keys::DISTANCE_RANGE) {
            Some(raw) => parse_number(keys::DISTANCE_RANGE, &raw)?,
            None => constant::DISTANCE_BUCKET_KM,
        };

        let ranking_criteria = Criterion::parse_list(
            &lookup(keys::RANKING_CRITERIA)
                .unwrap_or_else(|| constant::RANKING_CRITERIA.to_string()),
        );

        Self {
            food_keywords,
            high_distance_threshold,
            high_distance_vehicles,
            distance_bucket_size,
            ranking_criteria,
        }
        .validated()
    }

    /// Check the numeric and list invariants. Use after building by hand.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !self.high_distance_threshold.is_finite() || self.high_distance_threshold < 0.0 {
            return Err(ConfigError::NegativeDistance {
                key: keys::HIGH_DISTANCE,
                value: self.high_distance_threshold,
            });
        }
        if !self.distance_bucket_size.is_finite() || self.distance_bucket_size <= 0.0 {
            return Err(ConfigError::NonPositiveBucket {
                key: keys::DISTANCE_RANGE,
                value: self.distance_bucket_size,
            });
        }
        if self.ranking_criteria.is_empty() {
            return Err(ConfigError::EmptyRankingCriteria {
                key: keys::RANKING_CRITERIA,
            });
        }
        Ok(self)
    }

    pub fn is_high_distance_vehicle(&self, vehicle: Vehicle) -> bool {
        self.high_distance_vehicles.contains(&vehicle)
    }
}

/// Where the runner finds its fixture data and where it exports results.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPaths {
    pub couriers: String,
    pub orders: String,
    pub csv_export: Option<String>,
    /// Use seeded generated data instead of reading the fixture files.
    pub generate: bool,
}

impl DataPaths {
    pub fn from_env() -> Self {
        dotenv().ok();
        let paths = Self {
            couriers: env::var(keys::COURIERS_PATH)
                .unwrap_or_else(|_| constant::COURIERS_PATH.to_string()),
            orders: env::var(keys::ORDERS_PATH)
                .unwrap_or_else(|_| constant::ORDERS_PATH.to_string()),
            csv_export: env::var(keys::CSV_EXPORT_PATH).ok(),
            generate: env::var(keys::GENERATE_FIXTURES).is_ok_and(|v| is_truthy(&v)),
        };
        debug!("Data paths: {:?}", paths);
        paths
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// Lowercased once here so matching only has to lowercase the description.
fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn parse_number(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

fn parse_vehicles(raw: &str) -> Result<Vec<Vehicle>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<Vehicle>()
                .map_err(|value| ConfigError::UnknownVehicle {
                    key: keys::HIGH_DISTANCE_VEHICLES,
                    value,
                })
        })
        .collect()
}
