use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::domain::types::{Courier, Identified, Order};
use crate::error::RepositoryError;

use super::Repository;

pub type CourierRepository = InMemoryRepository<Courier>;
pub type OrderRepository = InMemoryRepository<Order>;

/// Records held in memory, in load order, with an id index.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Identified + Clone> InMemoryRepository<T> {
    /// Later records with a duplicate id replace earlier ones in the index.
    pub fn new(records: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.id().to_string(), pos).is_some() {
                warn!("Duplicate id '{}' in repository, keeping the last one", record.id());
            }
        }
        Self { records, index }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowing lookup, for callers that don't need an owned copy.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }
}

impl<T: Identified + Clone + DeserializeOwned> InMemoryRepository<T> {
    pub fn from_json_str(path: &str, json: &str) -> Result<Self, RepositoryError> {
        let records: Vec<T> =
            serde_json::from_str(json).map_err(|source| RepositoryError::Parse {
                path: path.to_string(),
                source,
            })?;
        Ok(Self::new(records))
    }

    /// Reads a JSON array of records from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let shown = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref()).map_err(|source| RepositoryError::Io {
            path: shown.clone(),
            source,
        })?;
        let repo = Self::from_json_str(&shown, &content)?;
        info!("Loaded {} records from {}", repo.len(), shown);
        Ok(repo)
    }
}

impl<T: Identified + Clone> Repository<T> for InMemoryRepository<T> {
    fn find_by_id(&self, id: &str) -> Option<T> {
        self.get(id).cloned()
    }

    fn find_all(&self) -> Vec<T> {
        self.records.clone()
    }
}
