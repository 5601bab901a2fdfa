use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::{errors::ClearingError, events::PauseToggled, state::*};

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        constraint = config.is_pauser(&pauser.key()) @ ClearingError::Unauthorized,
    )]
    pub pauser: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ClearinghouseConfig>,
}

pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    ctx.accounts.config.paused = paused;

    msg!("Clearinghouse paused: {}", paused);

    emit!(PauseToggled {
        paused,
        by: ctx.accounts.pauser.key(),
    });

    Ok(())
}
