pub mod memory;

pub use memory::{CourierRepository, InMemoryRepository, OrderRepository};

/// Identifier lookup over some store of records.
pub trait Repository<T> {
    /// `None` when nothing has this id.
    fn find_by_id(&self, id: &str) -> Option<T>;

    fn find_all(&self) -> Vec<T>;
}
