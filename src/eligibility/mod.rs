pub mod observer;
pub mod rules;

pub use observer::{EligibilityObserver, NoopObserver, TracingObserver};
pub use rules::*;
