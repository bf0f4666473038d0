pub mod courier;
pub mod pipeline;

pub use courier::CourierService;
pub use pipeline::AvailabilityPipeline;
