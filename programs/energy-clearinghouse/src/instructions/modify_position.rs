use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, INDEX_FEED_SEED, POSITION_SEED, VAULT_SEED};
use crate::transfers::pull_collateral;
use crate::{errors::ClearingError, events::PositionModified, state::*};

#[derive(Accounts)]
pub struct ModifyPosition<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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
        init_if_needed,
        payer = owner,
        space = Position::LEN,
        seeds = [POSITION_SEED, series.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    /// Collateral account of the owner
    #[account(
        mut,
        constraint = owner_collateral.owner == owner.key() @ ClearingError::Unauthorized,
        constraint = owner_collateral.mint == config.collateral_mint @ ClearingError::InvalidVault,
    )]
    pub owner_collateral: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = config.vault_bump,
        constraint = vault.key() == config.vault @ ClearingError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Opens, resizes, flips or closes a position, optionally posting collateral
/// in the same call. The new size must be covered by initial margin.
pub fn modify_position(ctx: Context<ModifyPosition>, qty_delta: i64, margin_delta: u64) -> Result<()> {
    ctx.accounts.config.require_active()?;
    let series = Series::load(&ctx.accounts.series, ctx.program_id)?;
    let now = Clock::get()?.unix_timestamp;
    let index = ctx.accounts.index_feed.current_index;

    let owner_key = ctx.accounts.owner.key();
    let series_key = ctx.accounts.series.key();

    let position = &mut ctx.accounts.position;
    position.bind(owner_key, series_key, ctx.bumps.position);
    let receipt = position.modify(&series, &ctx.accounts.config, index, qty_delta, margin_delta, now)?;

    // State is final before collateral moves.
    pull_collateral(
        &ctx.accounts.token_program,
        &ctx.accounts.owner_collateral,
        &ctx.accounts.vault,
        &ctx.accounts.owner,
        margin_delta,
    )?;

    emit!(PositionModified {
        owner: owner_key,
        series: series_key,
        qty_delta,
        quantity: receipt.quantity,
        margin_delta,
        margin: receipt.margin,
        pnl: receipt.mark.pnl,
        index,
        timestamp: now,
    });

    Ok(())
}
