use anchor_lang::prelude::*;

use crate::errors::ClearingError;

#[account]
#[derive(Default, Debug)]
pub struct IndexFeed {
    pub current_index: u64,          // Fixed-point (price decimals), 0 until first update
    pub last_update_time: i64,
    pub last_source_hash: [u8; 32],  // Opaque digest of contributing sources, audit only
    pub update_count: u64,
    pub bump: u8,
}

impl IndexFeed {
    pub const LEN: usize = 8 +  // discriminator
        8 +   // current_index
        8 +   // last_update_time
        32 +  // last_source_hash
        8 +   // update_count
        1;    // bump

    /// Stores a new index value and returns the one it replaced.
    pub fn update(&mut self, value: u64, source_hash: [u8; 32], now: i64) -> Result<u64> {
        require!(value > 0, ClearingError::InvalidIndex);

        let previous = self.current_index;
        self.current_index = value;
        self.last_update_time = now.max(self.last_update_time);
        self.last_source_hash = source_hash;
        self.update_count = self
            .update_count
            .checked_add(1)
            .ok_or(ClearingError::MathOverflow)?;

        Ok(previous)
    }
}
