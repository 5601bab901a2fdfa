use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, SERIES_SEED};
use crate::{errors::ClearingError, events::SeriesCreated, state::*};

#[derive(Accounts)]
#[instruction(id: [u8; 32])]
pub struct CreateSeries<'info> {
    #[account(
        mut,
        constraint = config.is_admin(&admin.key()) @ ClearingError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ClearinghouseConfig>,

    /// Created on first registration; an existing account is rejected in the handler
    #[account(
        init_if_needed,
        payer = admin,
        space = Series::LEN,
        seeds = [SERIES_SEED, id.as_ref()],
        bump,
    )]
    pub series: Account<'info, Series>,

    pub system_program: Program<'info, System>,
}

pub fn create_series(ctx: Context<CreateSeries>, id: [u8; 32], terms: SeriesTerms) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let series = &mut ctx.accounts.series;
    series.register(id, terms, now, ctx.bumps.series)?;

    emit!(SeriesCreated {
        series: series.key(),
        id,
        expiry: series.expiry,
        strike: series.strike,
        is_call: series.is_call,
        notional: series.notional,
        timestamp: now,
    });

    Ok(())
}
