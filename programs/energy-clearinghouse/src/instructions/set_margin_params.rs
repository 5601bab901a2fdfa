use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::{errors::ClearingError, events::MarginParamsUpdated, state::*};

#[derive(Accounts)]
pub struct SetMarginParams<'info> {
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
}

/// New thresholds apply the next time any position is touched.
pub fn set_margin_params(ctx: Context<SetMarginParams>, params: MarginParams) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.set_margin_params(params)?;
    let stored = config.margin_params();

    msg!(
        "Margin params updated: IM {} bps, MM {} bps, penalty {} bps",
        stored.initial_margin_bps,
        stored.maintenance_margin_bps,
        stored.liquidation_penalty_bps
    );

    emit!(MarginParamsUpdated {
        initial_margin_bps: stored.initial_margin_bps,
        maintenance_margin_bps: stored.maintenance_margin_bps,
        liquidation_penalty_bps: stored.liquidation_penalty_bps,
    });

    Ok(())
}
