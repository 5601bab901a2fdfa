use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, INDEX_FEED_SEED, POSITION_SEED};
use crate::state::*;

#[derive(Accounts)]
pub struct GetMarginRequirements<'info> {
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
        seeds = [POSITION_SEED, series.key().as_ref(), position.owner.as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,
}

pub fn get_margin_requirements(ctx: Context<GetMarginRequirements>) -> Result<MarginSnapshot> {
    let series = Series::load(&ctx.accounts.series, ctx.program_id)?;

    ctx.accounts.position.snapshot(
        &series,
        &ctx.accounts.config,
        ctx.accounts.index_feed.current_index,
    )
}
