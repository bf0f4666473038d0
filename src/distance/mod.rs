pub mod haversine;

pub use haversine::*;
