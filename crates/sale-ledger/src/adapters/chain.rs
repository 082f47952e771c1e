//! # Fixed Height Oracle
//!
//! `HeightOracle` implementation returning a settable height. Tests advance
//! it to move a scenario through the sale window.

use crate::ports::outbound::HeightOracle;
use std::sync::atomic::{AtomicU64, Ordering};

/// Height oracle backed by an atomic counter.
#[derive(Debug, Default)]
pub struct FixedHeightOracle {
    height: AtomicU64,
}

impl FixedHeightOracle {
    /// Creates an oracle at height zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an oracle at the given height.
    #[must_use]
    pub fn at(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Sets the reported height.
    pub fn set_height(&self, height: u64) {
        self.height.store(height, Ordering::SeqCst);
    }

    /// Advances the reported height by `blocks`.
    pub fn advance(&self, blocks: u64) {
        self.height.fetch_add(blocks, Ordering::SeqCst);
    }
}

impl HeightOracle for FixedHeightOracle {
    fn current_height(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }
}

// =============================================================================
// TESTS
// =============================================================================
