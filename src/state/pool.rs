//! Available numbers.
//!
//! The pool holds the draw numbers not yet handed out. Draws pick a uniformly
//! random position in the *remaining* pool, so every remaining number is
//! equally likely no matter how many have already been drawn.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Pool of undrawn numbers, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct NumberPool {
    available: Vec<u32>,
}

impl NumberPool {
    /// Empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool holding `1..=size`.
    pub fn full(size: u32) -> Self {
        Self {
            available: (1..=size).collect(),
        }
    }

    /// Remove and return a uniformly random number.
    ///
    /// Returns `None` when the pool is empty.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<u32> {
        if self.available.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.available.len());
        Some(self.available.remove(index))
    }

    pub fn contains(&self, number: u32) -> bool {
        self.available.binary_search(&number).is_ok()
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Remaining numbers, ascending.
    pub fn numbers(&self) -> &[u32] {
        &self.available
    }
}

impl TryFrom<Vec<u32>> for NumberPool {
    type Error = SnapshotError;

    fn try_from(available: Vec<u32>) -> Result<Self, Self::Error> {
        if available.first() == Some(&0) {
            return Err(SnapshotError::ZeroNumber);
        }
        if !available.windows(2).all(|w| w[0] < w[1]) {
            return Err(SnapshotError::UnsortedPool);
        }
        Ok(Self { available })
    }
}

impl From<NumberPool> for Vec<u32> {
    fn from(pool: NumberPool) -> Self {
        pool.available
    }
}
