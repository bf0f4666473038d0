//! Order ranking.
//!
//! Orders are compared criterion by criterion in the configured order; a
//! later criterion is only consulted when every earlier one ties.

pub mod criterion;
pub mod ranker;

pub use criterion::{Candidate, Criterion};
pub use ranker::OrderRanker;
