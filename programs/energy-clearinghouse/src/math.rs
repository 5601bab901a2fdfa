use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::ClearingError;

/// Converts a fixed-point amount from one decimal base to another.
///
/// Every price-decimals to collateral-decimals conversion in the program goes
/// through here, so rounding is always toward zero and happens in one place.
/// Both scales are powers of ten, so the ratio path is exact; the mul/div path
/// only runs for scales that do not divide each other.
pub fn rescale(value: u128, from_scale: u64, to_scale: u64) -> Result<u128> {
    require!(from_scale > 0 && to_scale > 0, ClearingError::MathOverflow);

    let from = from_scale as u128;
    let to = to_scale as u128;

    if from == to {
        Ok(value)
    } else if to % from == 0 {
        value
            .checked_mul(to / from)
            .ok_or(ClearingError::MathOverflow.into())
    } else if from % to == 0 {
        Ok(value / (from / to))
    } else {
        value
            .checked_mul(to)
            .ok_or(ClearingError::MathOverflow)?
            .checked_div(from)
            .ok_or(ClearingError::MathOverflow.into())
    }
}

/// Intrinsic value of one unit of underlying at `index`, in price decimals.
pub fn payoff(index: u64, strike: u64, is_call: bool) -> u64 {
    if is_call {
        index.saturating_sub(strike)
    } else {
        strike.saturating_sub(index)
    }
}

/// `amount * bps / 10000`, rounded down.
pub fn apply_bps(amount: u128, bps: u16) -> Result<u64> {
    let scaled = amount
        .checked_mul(bps as u128)
        .ok_or(ClearingError::MathOverflow)?
        / BPS_DENOMINATOR as u128;

    u64::try_from(scaled).map_err(|_| ClearingError::MathOverflow.into())
}

pub fn pow10(decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .ok_or(ClearingError::InvalidDecimals.into())
}

pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| ClearingError::MathOverflow.into())
}
