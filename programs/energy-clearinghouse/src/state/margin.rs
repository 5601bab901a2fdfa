use anchor_lang::prelude::*;

use crate::errors::ClearingError;
use crate::math::{apply_bps, rescale};
use crate::state::{ClearinghouseConfig, Series};

/// Margin thresholds for one series at one absolute quantity, in collateral
/// units. Always recomputed from the live configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarginRequirements {
    pub exposure: u128,
    pub initial: u64,
    pub maintenance: u64,
}

impl MarginRequirements {
    pub fn compute(
        config: &ClearinghouseConfig,
        series: &Series,
        abs_quantity: u64,
    ) -> Result<Self> {
        let exposure_raw = (series.strike as u128)
            .checked_mul(series.notional as u128)
            .ok_or(ClearingError::MathOverflow)?
            .checked_mul(abs_quantity as u128)
            .ok_or(ClearingError::MathOverflow)?;

        let exposure = rescale(exposure_raw, config.price_scale, config.collateral_scale)?;

        Ok(Self {
            exposure,
            initial: apply_bps(exposure, config.initial_margin_bps)?,
            maintenance: apply_bps(exposure, config.maintenance_margin_bps)?,
        })
    }
}

/// Read-only view of a position: margin as it would stand after
/// reconciliation against the current index, next to its thresholds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarginSnapshot {
    pub quantity: i64,
    pub margin: u64,
    pub initial: u64,
    pub maintenance: u64,
    pub liquidatable: bool,
}
