use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::{errors::ClearingError, events::AuthoritiesUpdated, state::*};

#[derive(Accounts)]
pub struct UpdateAuthorities<'info> {
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

/// Replaces each role holder passed as `Some`. Handing `admin` to another key
/// gives up admin rights for the signer.
pub fn update_authorities(
    ctx: Context<UpdateAuthorities>,
    admin: Option<Pubkey>,
    oracle_authority: Option<Pubkey>,
    pauser: Option<Pubkey>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.update_authorities(admin, oracle_authority, pauser);

    emit!(AuthoritiesUpdated {
        admin: config.admin,
        oracle_authority: config.oracle_authority,
        pauser: config.pauser,
    });

    Ok(())
}
