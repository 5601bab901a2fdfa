use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, INDEX_FEED_SEED, VAULT_SEED};
use crate::{errors::ClearingError, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ClearinghouseConfig::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ClearinghouseConfig>,

    #[account(
        init,
        payer = admin,
        space = IndexFeed::LEN,
        seeds = [INDEX_FEED_SEED],
        bump
    )]
    pub index_feed: Account<'info, IndexFeed>,

    /// Collateral mint, decimals are read once here
    pub collateral_mint: Account<'info, Mint>,

    /// Vault holding every position's margin
    #[account(
        init,
        payer = admin,
        seeds = [VAULT_SEED],
        bump,
        token::mint = collateral_mint,
        token::authority = config,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Receives liquidation penalties
    #[account(
        constraint = insurance_fund.mint == collateral_mint.key() @ ClearingError::InvalidInsuranceFund,
    )]
    pub insurance_fund: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize(
    ctx: Context<Initialize>,
    price_decimals: u8,
    params: MarginParams,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();

    let config = &mut ctx.accounts.config;
    config.configure_scales(ctx.accounts.collateral_mint.decimals, price_decimals)?;
    config.set_margin_params(params)?;
    config.admin = admin;
    config.oracle_authority = admin;
    config.pauser = admin;
    config.collateral_mint = ctx.accounts.collateral_mint.key();
    config.vault = ctx.accounts.vault.key();
    config.insurance_fund = ctx.accounts.insurance_fund.key();
    config.paused = false;
    config.bump = ctx.bumps.config;
    config.vault_bump = ctx.bumps.vault;

    ctx.accounts.index_feed.bump = ctx.bumps.index_feed;

    msg!(
        "Clearinghouse initialized: collateral decimals {}, price decimals {}, IM {} bps, MM {} bps, penalty {} bps",
        config.collateral_decimals,
        config.price_decimals,
        config.initial_margin_bps,
        config.maintenance_margin_bps,
        config.liquidation_penalty_bps
    );

    Ok(())
}
