use std::cmp::Ordering;
use std::fmt;

use tracing::warn;

use crate::domain::types::Order;

/// An order paired with its pickup distance from the courier being ranked for.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub order: &'a Order,
    pub distance: f64,
}

/// One key of the ranking comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// VIP orders first.
    Vip,
    /// Closer distance bucket first; orders in the same bucket tie.
    Range,
    /// Food orders first.
    Food,
    /// Closer pickup first. Also what unknown tokens resolve to.
    Distance,
}

impl Criterion {
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Vip => "vip",
            Criterion::Range => "range",
            Criterion::Food => "food",
            Criterion::Distance => "distance",
        }
    }

    /// Resolve a configuration token. Anything unrecognized compares by raw distance.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "vip" => Criterion::Vip,
            "range" => Criterion::Range,
            "food" => Criterion::Food,
            "distance" | "default" => Criterion::Distance,
            other => {
                warn!(
                    "Unknown ranking criterion '{}', falling back to distance",
                    other
                );
                Criterion::Distance
            }
        }
    }

    /// Parse a comma-separated token list, skipping blank entries.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(',')
            .filter(|t| !t.trim().is_empty())
            .map(Self::from_token)
            .collect()
    }

    pub fn compare(&self, a: &Candidate, b: &Candidate, bucket_size: f64) -> Ordering {
        match self {
            // true sorts before false
            Criterion::Vip => b.order.vip.cmp(&a.order.vip),
            Criterion::Food => b.order.food.cmp(&a.order.food),
            Criterion::Range => {
                let bucket_a = distance_bucket(a.distance, bucket_size);
                let bucket_b = distance_bucket(b.distance, bucket_size);
                bucket_a.cmp(&bucket_b)
            }
            Criterion::Distance => a.distance.total_cmp(&b.distance),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of the `bucket_size`-wide band a distance falls into.
pub fn distance_bucket(distance: f64, bucket_size: f64) -> u64 {
    (distance / bucket_size).floor() as u64
}
