//! Manually driven block clock
//!
//! Used by tests and simulations that step the chain forward explicitly.

use crate::ports::outbound::BlockClock;
use shared_types::BlockHeight;
use std::sync::atomic::{AtomicU64, Ordering};

/// Block clock advanced by hand.
#[derive(Debug, Default)]
pub struct ManualClock {
    height: AtomicU64,
}

impl ManualClock {
    pub fn new(start: BlockHeight) -> Self {
        Self {
            height: AtomicU64::new(start),
        }
    }

    /// Mine `blocks` blocks. Returns the new height.
    pub fn advance(&self, blocks: BlockHeight) -> BlockHeight {
        self.height.fetch_add(blocks, Ordering::SeqCst) + blocks
    }

    /// Jump to `height`. Heights never move backwards.
    pub fn set(&self, height: BlockHeight) {
        self.height.fetch_max(height, Ordering::SeqCst);
    }
}

impl BlockClock for ManualClock {
    fn current_block_height(&self) -> BlockHeight {
        self.height.load(Ordering::SeqCst)
    }
}
