use anchor_lang::prelude::*;

use crate::errors::ClearingError;
use crate::math::payoff;

#[account]
#[derive(Default, Debug)]
pub struct Series {
    pub id: [u8; 32],            // Opaque series key, also the PDA seed
    pub expiry: i64,             // No position changes at or after this instant
    pub strike: u64,             // Price decimals
    pub is_call: bool,
    pub notional: u64,           // Underlying units (kWh) per contract
    pub created_at: i64,
    pub is_initialized: bool,
    pub bump: u8,
}

/// Contract terms published by the admin when a series is listed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeriesTerms {
    pub expiry: i64,
    pub strike: u64,
    pub is_call: bool,
    pub notional: u64,
}

impl Series {
    pub const LEN: usize = 8 +  // discriminator
        32 +  // id
        8 +   // expiry
        8 +   // strike
        1 +   // is_call
        8 +   // notional
        8 +   // created_at
        1 +   // is_initialized
        1;    // bump

    /// Writes the terms of a fresh series. A registered id can never be
    /// written again.
    pub fn register(&mut self, id: [u8; 32], terms: SeriesTerms, now: i64, bump: u8) -> Result<()> {
        require!(!self.is_initialized, ClearingError::SeriesExists);
        require!(terms.expiry > now, ClearingError::InvalidSeriesTerms);
        require!(terms.notional > 0, ClearingError::InvalidSeriesTerms);
        require!(terms.strike > 0, ClearingError::InvalidSeriesTerms);

        self.id = id;
        self.expiry = terms.expiry;
        self.strike = terms.strike;
        self.is_call = terms.is_call;
        self.notional = terms.notional;
        self.created_at = now;
        self.bump = bump;
        self.is_initialized = true;

        Ok(())
    }

    pub fn terms(&self) -> SeriesTerms {
        SeriesTerms {
            expiry: self.expiry,
            strike: self.strike,
            is_call: self.is_call,
            notional: self.notional,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expiry
    }

    pub fn payoff(&self, index: u64) -> u64 {
        payoff(index, self.strike, self.is_call)
    }

    /// Loads a series passed as an unchecked account, mapping every way it can
    /// fail to be a registered series of this program onto `InvalidSeries`.
    pub fn load(account_info: &AccountInfo, program_id: &Pubkey) -> Result<Series> {
        if account_info.owner != program_id || account_info.data_is_empty() {
            return err!(ClearingError::InvalidSeries);
        }

        let data = account_info.try_borrow_data()?;
        let series = Series::try_deserialize(&mut &data[..])
            .map_err(|_| error!(ClearingError::InvalidSeries))?;

        require!(series.is_initialized, ClearingError::InvalidSeries);
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn terms() -> SeriesTerms {
        SeriesTerms {
            expiry: NOW + 30 * 86_400,
            strike: 1_000_000,
            is_call: true,
            notional: 1_000,
        }
    }

    #[test]
    fn registers_terms_once() {
        let mut series = Series::default();
        series.register([1u8; 32], terms(), NOW, 254).unwrap();

        assert!(series.is_initialized);
        assert_eq!(series.id, [1u8; 32]);
        assert_eq!(series.terms(), terms());
        assert_eq!(series.created_at, NOW);
        assert_eq!(series.bump, 254);
    }

    #[test]
    fn second_registration_under_same_id_fails_and_keeps_terms() {
        let mut series = Series::default();
        series.register([1u8; 32], terms(), NOW, 254).unwrap();

        let other = SeriesTerms {
            expiry: NOW + 90 * 86_400,
            strike: 2_000_000,
            is_call: false,
            notional: 5,
        };
        let err = series.register([1u8; 32], other, NOW + 10, 254).unwrap_err();
        assert_eq!(err, anchor_lang::error::Error::from(ClearingError::SeriesExists));
        assert_eq!(series.terms(), terms());
        assert_eq!(series.created_at, NOW);
    }

    #[test]
    fn rejects_expiry_not_in_future() {
        let mut series = Series::default();
        let mut t = terms();
        t.expiry = NOW;
        assert!(series.register([2u8; 32], t, NOW, 255).is_err());
        assert!(!series.is_initialized);
    }

    #[test]
    fn rejects_zero_notional_or_strike() {
        let mut series = Series::default();
        let mut t = terms();
        t.notional = 0;
        assert!(series.register([3u8; 32], t, NOW, 255).is_err());

        let mut t = terms();
        t.strike = 0;
        assert!(series.register([3u8; 32], t, NOW, 255).is_err());
    }

    #[test]
    fn expiry_boundary() {
        let mut series = Series::default();
        series.register([4u8; 32], terms(), NOW, 255).unwrap();

        assert!(!series.is_expired(series.expiry - 1));
        assert!(series.is_expired(series.expiry));
        assert!(series.is_expired(series.expiry + 1));
    }

    #[test]
    fn payoff_follows_option_type() {
        let mut series = Series::default();
        series.register([5u8; 32], terms(), NOW, 255).unwrap();
        assert_eq!(series.payoff(1_250_000), 250_000);
        assert_eq!(series.payoff(750_000), 0);

        let mut put = Series::default();
        put.register([6u8; 32], SeriesTerms { is_call: false, ..terms() }, NOW, 255).unwrap();
        assert_eq!(put.payoff(750_000), 250_000);
        assert_eq!(put.payoff(1_250_000), 0);
    }
}
