use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::CONFIG_SEED;
use crate::{errors::ClearingError, events::InsuranceFundUpdated, state::*};

#[derive(Accounts)]
pub struct SetInsuranceFund<'info> {
    #[account(
        constraint = config.is_admin(&admin.key()) @ ClearingError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ClearinghouseConfig>,

    #[account(
        constraint = insurance_fund.mint == config.collateral_mint @ ClearingError::InvalidInsuranceFund,
    )]
    pub insurance_fund: Account<'info, TokenAccount>,
}

pub fn set_insurance_fund(ctx: Context<SetInsuranceFund>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous = config.insurance_fund;
    config.insurance_fund = ctx.accounts.insurance_fund.key();

    msg!("Insurance fund set to {}", config.insurance_fund);

    emit!(InsuranceFundUpdated {
        previous,
        insurance_fund: config.insurance_fund,
    });

    Ok(())
}
