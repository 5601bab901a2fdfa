use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_DECIMALS, MAX_LIQUIDATION_PENALTY_BPS};
use crate::errors::ClearingError;
use crate::math::pow10;

#[account]
#[derive(Default, Debug)]
pub struct ClearinghouseConfig {
    pub admin: Pubkey,               // Creates series, sets parameters and roles
    pub oracle_authority: Pubkey,    // Sole writer of the index feed
    pub pauser: Pubkey,              // May toggle the emergency pause
    pub collateral_mint: Pubkey,     // Collateral token mint
    pub vault: Pubkey,               // Token account holding all posted margin
    pub insurance_fund: Pubkey,      // Receives liquidation penalties
    pub collateral_decimals: u8,     // Read from the mint at initialization
    pub price_decimals: u8,          // Decimals of strikes and index values
    pub collateral_scale: u64,       // 10^collateral_decimals
    pub price_scale: u64,            // 10^price_decimals
    pub initial_margin_bps: u16,
    pub maintenance_margin_bps: u16,
    pub liquidation_penalty_bps: u16,
    pub paused: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Basis-point margin parameters, written together so the cross-field
/// invariants can be checked as one unit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarginParams {
    pub initial_margin_bps: u16,
    pub maintenance_margin_bps: u16,
    pub liquidation_penalty_bps: u16,
}

impl MarginParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.initial_margin_bps as u64 <= BPS_DENOMINATOR,
            ClearingError::InvalidMarginParams
        );
        require!(
            self.initial_margin_bps >= self.maintenance_margin_bps,
            ClearingError::InvalidMarginParams
        );
        require!(
            self.liquidation_penalty_bps <= MAX_LIQUIDATION_PENALTY_BPS,
            ClearingError::InvalidMarginParams
        );
        Ok(())
    }
}

impl ClearinghouseConfig {
    pub const LEN: usize = 8 + // discriminator
        32 * 6 + // admin, oracle_authority, pauser, collateral_mint, vault, insurance_fund
        1 + 1 +  // decimals
        8 + 8 +  // scales
        2 * 3 +  // margin bps
        1 +      // paused
        1 + 1;   // bumps

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    pub fn is_oracle(&self, key: &Pubkey) -> bool {
        self.oracle_authority == *key
    }

    /// Pauser role holder or the admin.
    pub fn is_pauser(&self, key: &Pubkey) -> bool {
        self.pauser == *key || self.is_admin(key)
    }

    pub fn require_active(&self) -> Result<()> {
        require!(!self.paused, ClearingError::Paused);
        Ok(())
    }

    pub fn configure_scales(&mut self, collateral_decimals: u8, price_decimals: u8) -> Result<()> {
        require!(
            collateral_decimals <= MAX_DECIMALS && price_decimals <= MAX_DECIMALS,
            ClearingError::InvalidDecimals
        );

        self.collateral_decimals = collateral_decimals;
        self.price_decimals = price_decimals;
        self.collateral_scale = pow10(collateral_decimals)?;
        self.price_scale = pow10(price_decimals)?;
        Ok(())
    }

    pub fn margin_params(&self) -> MarginParams {
        MarginParams {
            initial_margin_bps: self.initial_margin_bps,
            maintenance_margin_bps: self.maintenance_margin_bps,
            liquidation_penalty_bps: self.liquidation_penalty_bps,
        }
    }

    pub fn set_margin_params(&mut self, params: MarginParams) -> Result<()> {
        params.validate()?;

        self.initial_margin_bps = params.initial_margin_bps;
        self.maintenance_margin_bps = params.maintenance_margin_bps;
        self.liquidation_penalty_bps = params.liquidation_penalty_bps;
        Ok(())
    }

    pub fn update_authorities(
        &mut self,
        admin: Option<Pubkey>,
        oracle_authority: Option<Pubkey>,
        pauser: Option<Pubkey>,
    ) {
        if let Some(key) = admin {
            self.admin = key;
        }
        if let Some(key) = oracle_authority {
            self.oracle_authority = key;
        }
        if let Some(key) = pauser {
            self.pauser = key;
        }
    }
}
