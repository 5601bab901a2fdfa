use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, INDEX_FEED_SEED, POSITION_SEED, VAULT_SEED};
use crate::transfers::push_collateral;
use crate::{errors::ClearingError, events::MarginWithdrawn, state::*};

#[derive(Accounts)]
pub struct WithdrawMargin<'info> {
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
        mut,
        seeds = [POSITION_SEED, series.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

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
}

pub fn withdraw_margin(ctx: Context<WithdrawMargin>, amount: u64) -> Result<()> {
    ctx.accounts.config.require_active()?;
    let series = Series::load(&ctx.accounts.series, ctx.program_id)?;
    let now = Clock::get()?.unix_timestamp;
    let index = ctx.accounts.index_feed.current_index;

    let position = &mut ctx.accounts.position;
    let receipt = position.withdraw(&series, &ctx.accounts.config, index, amount, now)?;
    let owner = position.owner;
    let series_key = position.series;

    push_collateral(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.owner_collateral,
        &ctx.accounts.config,
        amount,
    )?;

    emit!(MarginWithdrawn {
        owner,
        series: series_key,
        amount,
        margin: receipt.margin,
        pnl: receipt.mark.pnl,
        timestamp: now,
    });

    Ok(())
}
