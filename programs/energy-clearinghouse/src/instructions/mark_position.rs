use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, INDEX_FEED_SEED, POSITION_SEED};
use crate::{events::PositionMarked, state::*};

/// Permissionless. Anyone may bring a position up to date with the index.
#[derive(Accounts)]
pub struct MarkPosition<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ClearinghouseConfig>,

    #[account(
        seeds = [INDEX_FEED_SEED],
        bump = index_feed.bump,
    )]
    pub index_feed: Account<'info, IndexFeed>,

    /// CHECK: Validated through Series::load
    pub series: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POSITION_SEED, series.key().as_ref(), position.owner.as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,
}

/// Reconciles the position against the current index and returns its margin.
pub fn mark_position(ctx: Context<MarkPosition>) -> Result<u64> {
    ctx.accounts.config.require_active()?;
    let series = Series::load(&ctx.accounts.series, ctx.program_id)?;
    let now = Clock::get()?.unix_timestamp;
    let index = ctx.accounts.index_feed.current_index;

    let position = &mut ctx.accounts.position;
    let mark = position.mark(&series, &ctx.accounts.config, index, now)?;

    emit!(PositionMarked {
        owner: position.owner,
        series: position.series,
        index: mark.last_index,
        pnl: mark.pnl,
        margin: mark.margin,
        timestamp: now,
    });

    Ok(mark.margin)
}
