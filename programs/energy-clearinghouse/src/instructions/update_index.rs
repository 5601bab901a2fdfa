use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, INDEX_FEED_SEED};
use crate::{errors::ClearingError, events::IndexUpdated, state::*};

#[derive(Accounts)]
pub struct UpdateIndex<'info> {
    #[account(
        constraint = config.is_oracle(&oracle.key()) @ ClearingError::Unauthorized,
    )]
    pub oracle: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ClearinghouseConfig>,

    #[account(
        mut,
        seeds = [INDEX_FEED_SEED],
        bump = index_feed.bump,
    )]
    pub index_feed: Account<'info, IndexFeed>,
}

/// Publishes a new index value. Aggregation across sources happens off-chain;
/// `source_hash` only identifies the inputs for audit.
pub fn update_index(ctx: Context<UpdateIndex>, value: u64, source_hash: [u8; 32]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let feed = &mut ctx.accounts.index_feed;
    let previous_index = feed.update(value, source_hash, now)?;

    emit!(IndexUpdated {
        previous_index,
        index: feed.current_index,
        source_hash,
        timestamp: feed.last_update_time,
    });

    Ok(())
}
