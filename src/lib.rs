//! Which delivery orders can a courier take, and in what order should they see them.
//!
//! Candidate orders go through two eligibility rules (insulated box for boxed
//! food, suitable vehicle for long pickups), are ranked by a configurable list
//! of criteria, and come out as `{id, description}` views.

pub mod config;
pub mod distance;
pub mod domain;
pub mod eligibility;
pub mod error;
pub mod fixtures;
pub mod ranking;
pub mod repository;
pub mod runner;
pub mod service;

pub use config::Settings;
pub use domain::types::{Coordinate, Courier, Order, RankedOrderView, Vehicle};
pub use error::{ConfigError, RepositoryError};
pub use service::{AvailabilityPipeline, CourierService};
