use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, INDEX_FEED_SEED, POSITION_SEED, VAULT_SEED};
use crate::transfers::push_collateral;
use crate::{errors::ClearingError, events::PositionLiquidated, state::*};

#[derive(Accounts)]
pub struct Liquidate<'info> {
    pub liquidator: Signer<'info>,

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

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = config.vault_bump,
        constraint = vault.key() == config.vault @ ClearingError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = config.insurance_fund @ ClearingError::InvalidInsuranceFund,
    )]
    pub insurance_fund: Account<'info, TokenAccount>,

    /// Receives what is left after the penalty
    #[account(
        mut,
        constraint = owner_collateral.owner == position.owner @ ClearingError::Unauthorized,
        constraint = owner_collateral.mint == config.collateral_mint @ ClearingError::InvalidVault,
    )]
    pub owner_collateral: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Closes a position whose reconciled margin fell below maintenance. The
/// penalty goes to the insurance fund and the remainder back to the owner.
pub fn liquidate(ctx: Context<Liquidate>) -> Result<()> {
    ctx.accounts.config.require_active()?;
    let series = Series::load(&ctx.accounts.series, ctx.program_id)?;
    let now = Clock::get()?.unix_timestamp;
    let index = ctx.accounts.index_feed.current_index;

    let position = &mut ctx.accounts.position;
    let outcome = position.liquidate(&series, &ctx.accounts.config, index, now)?;
    let owner = position.owner;
    let series_key = position.series;

    push_collateral(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.insurance_fund,
        &ctx.accounts.config,
        outcome.penalty,
    )?;
    push_collateral(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.owner_collateral,
        &ctx.accounts.config,
        outcome.remainder,
    )?;

    msg!(
        "Liquidated {} contracts: margin {} below maintenance {}, penalty {}, returned {}",
        outcome.quantity,
        outcome.seized_margin,
        outcome.maintenance_required,
        outcome.penalty,
        outcome.remainder
    );

    emit!(PositionLiquidated {
        owner,
        series: series_key,
        liquidator: ctx.accounts.liquidator.key(),
        quantity: outcome.quantity,
        seized_margin: outcome.seized_margin,
        maintenance_required: outcome.maintenance_required,
        penalty: outcome.penalty,
        remainder: outcome.remainder,
        index,
        timestamp: now,
    });

    Ok(())
}
