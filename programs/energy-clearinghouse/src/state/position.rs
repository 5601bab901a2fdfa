use anchor_lang::prelude::*;

use crate::errors::ClearingError;
use crate::math::{apply_bps, rescale, to_u64};
use crate::state::{ClearinghouseConfig, MarginRequirements, MarginSnapshot, Series};

#[account]
#[derive(Default, Debug)]
pub struct Position {
    pub owner: Pubkey,               // Account holding the position
    pub series: Pubkey,              // Series account address
    pub quantity: i64,               // Contracts, positive long, negative short
    pub margin: u64,                 // Posted collateral in custody
    pub last_index: u64,             // Index the margin was last reconciled against
    pub last_marked_at: i64,
    pub bump: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionHealth {
    Flat,
    Healthy,
    Liquidatable,
}

impl PositionHealth {
    pub fn classify(quantity: i64, margin: u64, maintenance_required: u64) -> Self {
        if quantity == 0 {
            PositionHealth::Flat
        } else if margin >= maintenance_required {
            PositionHealth::Healthy
        } else {
            PositionHealth::Liquidatable
        }
    }
}

/// Outcome of reconciling one position against an index value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mark {
    pub margin: u64,
    pub last_index: u64,
    /// Collateral credited (positive) or debited (negative), after the loss cap.
    pub pnl: i128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModifyReceipt {
    pub mark: Mark,
    pub quantity: i64,
    pub margin: u64,
    pub initial_required: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub mark: Mark,
    pub margin: u64,
    pub maintenance_required: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Liquidation {
    pub mark: Mark,
    pub quantity: i64,
    pub seized_margin: u64,
    pub maintenance_required: u64,
    pub penalty: u64,
    pub remainder: u64,
}

impl Position {
    pub const LEN: usize = 8 +  // discriminator
        32 +  // owner
        32 +  // series
        8 +   // quantity
        8 +   // margin
        8 +   // last_index
        8 +   // last_marked_at
        1;    // bump

    /// Stamps identity on a position account the first time it is touched.
    pub fn bind(&mut self, owner: Pubkey, series: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.series = series;
            self.bump = bump;
        }
    }

    pub fn is_flat(&self) -> bool {
        self.quantity == 0
    }

    pub fn abs_quantity(&self) -> u64 {
        self.quantity.unsigned_abs()
    }

    /// Computes the reconciliation of this position against `current_index`
    /// without writing it.
    ///
    /// Index movement since `last_index` is turned into a payoff delta for the
    /// series, scaled by `notional * |quantity|` and converted from price to
    /// collateral decimals. Longs gain when the payoff rises, shorts when it
    /// falls. Losses are capped at the posted margin.
    pub fn marked(
        &self,
        series: &Series,
        config: &ClearinghouseConfig,
        current_index: u64,
    ) -> Result<Mark> {
        let unchanged = Mark {
            margin: self.margin,
            last_index: current_index,
            pnl: 0,
        };

        if self.is_flat() {
            return Ok(unchanged);
        }
        require!(current_index > 0, ClearingError::IndexNotSet);

        let previous_index = if self.last_index == 0 {
            current_index
        } else {
            self.last_index
        };
        if previous_index == current_index {
            return Ok(unchanged);
        }

        let delta = series.payoff(current_index) as i128 - series.payoff(previous_index) as i128;
        if delta == 0 {
            return Ok(unchanged);
        }

        let size = (series.notional as u128)
            .checked_mul(self.abs_quantity() as u128)
            .ok_or(ClearingError::MathOverflow)?;
        let pnl_raw = delta
            .unsigned_abs()
            .checked_mul(size)
            .ok_or(ClearingError::MathOverflow)?;
        let pnl = rescale(pnl_raw, config.price_scale, config.collateral_scale)?;

        let gains = (delta > 0) == (self.quantity > 0);
        if gains {
            let gain = to_u64(pnl)?;
            Ok(Mark {
                margin: self
                    .margin
                    .checked_add(gain)
                    .ok_or(ClearingError::MathOverflow)?,
                last_index: current_index,
                pnl: gain as i128,
            })
        } else {
            let loss = pnl.min(self.margin as u128) as u64;
            Ok(Mark {
                margin: self.margin - loss,
                last_index: current_index,
                pnl: -(loss as i128),
            })
        }
    }

    fn apply_mark(&mut self, mark: &Mark, now: i64) {
        self.margin = mark.margin;
        self.last_index = mark.last_index;
        self.last_marked_at = now;
    }

    /// Reconciles and writes the result. Calling it again with the same index
    /// changes nothing.
    pub fn mark(
        &mut self,
        series: &Series,
        config: &ClearinghouseConfig,
        current_index: u64,
        now: i64,
    ) -> Result<Mark> {
        let mark = self.marked(series, config, current_index)?;
        self.apply_mark(&mark, now);
        Ok(mark)
    }

    pub fn requirements(
        &self,
        series: &Series,
        config: &ClearinghouseConfig,
    ) -> Result<MarginRequirements> {
        MarginRequirements::compute(config, series, self.abs_quantity())
    }

    /// True when moving to `quantity` neither grows the position nor flips
    /// its side.
    pub fn is_reduction(&self, quantity: i64) -> bool {
        quantity == 0
            || (quantity.signum() == self.quantity.signum()
                && quantity.unsigned_abs() <= self.abs_quantity())
    }

    /// Margin and thresholds as they would stand after reconciliation, with
    /// nothing written back.
    pub fn snapshot(
        &self,
        series: &Series,
        config: &ClearinghouseConfig,
        current_index: u64,
    ) -> Result<MarginSnapshot> {
        let mark = self.marked(series, config, current_index)?;
        let req = self.requirements(series, config)?;

        Ok(MarginSnapshot {
            quantity: self.quantity,
            margin: mark.margin,
            initial: req.initial,
            maintenance: req.maintenance,
            liquidatable: PositionHealth::classify(self.quantity, mark.margin, req.maintenance)
                == PositionHealth::Liquidatable,
        })
    }

    /// Opens, resizes or closes the position. `margin_delta` is collateral the
    /// caller moves into custody alongside the change. The new quantity must
    /// be covered by initial margin; on any error nothing is written.
    ///
    /// Once the series has expired only reductions toward flat are accepted.
    pub fn modify(
        &mut self,
        series: &Series,
        config: &ClearinghouseConfig,
        current_index: u64,
        qty_delta: i64,
        margin_delta: u64,
        now: i64,
    ) -> Result<ModifyReceipt> {
        require!(series.is_initialized, ClearingError::InvalidSeries);

        let quantity = self
            .quantity
            .checked_add(qty_delta)
            .ok_or(ClearingError::MathOverflow)?;
        if series.is_expired(now) {
            require!(self.is_reduction(quantity), ClearingError::SeriesExpired);
        }
        require!(current_index > 0, ClearingError::IndexNotSet);

        let mark = self.marked(series, config, current_index)?;

        let margin = mark
            .margin
            .checked_add(margin_delta)
            .ok_or(ClearingError::MathOverflow)?;

        let req = MarginRequirements::compute(config, series, quantity.unsigned_abs())?;
        require!(margin >= req.initial, ClearingError::InsufficientMargin);

        self.apply_mark(&mark, now);
        self.quantity = quantity;
        self.margin = margin;

        Ok(ModifyReceipt {
            mark,
            quantity,
            margin,
            initial_required: req.initial,
        })
    }

    /// Adds collateral. Only ever improves health, so no threshold applies.
    pub fn deposit(
        &mut self,
        series: &Series,
        config: &ClearinghouseConfig,
        current_index: u64,
        amount: u64,
        now: i64,
    ) -> Result<Mark> {
        require!(amount > 0, ClearingError::InvalidAmount);

        let mark = self.marked(series, config, current_index)?;
        let margin = mark
            .margin
            .checked_add(amount)
            .ok_or(ClearingError::MathOverflow)?;

        self.apply_mark(&mark, now);
        self.margin = margin;

        Ok(mark)
    }

    /// Releases collateral as long as what remains covers maintenance margin
    /// for the current quantity.
    pub fn withdraw(
        &mut self,
        series: &Series,
        config: &ClearinghouseConfig,
        current_index: u64,
        amount: u64,
        now: i64,
    ) -> Result<WithdrawReceipt> {
        require!(amount > 0, ClearingError::InvalidAmount);

        let mark = self.marked(series, config, current_index)?;
        require!(amount <= mark.margin, ClearingError::InsufficientMargin);

        let margin = mark.margin - amount;
        let req = self.requirements(series, config)?;
        require!(margin >= req.maintenance, ClearingError::InsufficientMargin);

        self.apply_mark(&mark, now);
        self.margin = margin;

        Ok(WithdrawReceipt {
            mark,
            margin,
            maintenance_required: req.maintenance,
        })
    }

    /// Closes an under-margined position. The reconciled margin is split into
    /// the insurance-fund penalty and the remainder owed back to the owner.
    pub fn liquidate(
        &mut self,
        series: &Series,
        config: &ClearinghouseConfig,
        current_index: u64,
        now: i64,
    ) -> Result<Liquidation> {
        let mark = self.marked(series, config, current_index)?;
        let req = self.requirements(series, config)?;
        require!(
            PositionHealth::classify(self.quantity, mark.margin, req.maintenance)
                == PositionHealth::Liquidatable,
            ClearingError::StillHealthy
        );

        let penalty = apply_bps(mark.margin as u128, config.liquidation_penalty_bps)?;
        let remainder = mark.margin - penalty;
        let quantity = self.quantity;

        self.apply_mark(&mark, now);
        self.quantity = 0;
        self.margin = 0;

        Ok(Liquidation {
            mark,
            quantity,
            seized_margin: mark.margin,
            maintenance_required: req.maintenance,
            penalty,
            remainder,
        })
    }
}
