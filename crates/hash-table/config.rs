use log::warn;
use thiserror::Error;

/// Invalid [`HashTableConfig`] values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HashTableError {
    #[error("initial capacity must be at least 1 bucket, got {0}")]
    InvalidCapacity(usize),

    #[error("max load factor must be finite and greater than 0, got {0}")]
    InvalidLoadFactor(f64),
}

/// Sizing policy for a [`HashTable`](crate::HashTable).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashTableConfig {
    /// Buckets allocated up front.
    pub initial_capacity: usize,
    /// Average entries per bucket allowed before the table doubles.
    pub max_load_factor: f64,
}

impl HashTableConfig {
    pub const DEFAULT_CAPACITY: usize = 16;
    pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    pub fn validate(&self) -> Result<(), HashTableError> {
        let result = if self.initial_capacity == 0 {
            Err(HashTableError::InvalidCapacity(self.initial_capacity))
        } else if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            Err(HashTableError::InvalidLoadFactor(self.max_load_factor))
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            warn!("rejecting hash table config: {}", err);
        }
        result
    }
}

impl Default for HashTableConfig {
    fn default() -> Self {
        HashTableConfig {
            initial_capacity: Self::DEFAULT_CAPACITY,
            max_load_factor: Self::DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
