#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use energy_clearinghouse::errors::ClearingError;
use energy_clearinghouse::state::*;

pub const NOW: i64 = 1_700_000_000;
pub const ONE: u64 = 1_000_000; // 1.0 at 6 decimals
pub const STARTING_BALANCE: u64 = 1_000 * ONE;

pub fn default_params() -> MarginParams {
    MarginParams {
        initial_margin_bps: 1_000,
        maintenance_margin_bps: 500,
        liquidation_penalty_bps: 500,
    }
}

pub fn call_terms() -> SeriesTerms {
    SeriesTerms {
        expiry: NOW + 30 * 86_400,
        strike: ONE,
        is_call: true,
        notional: 1_000,
    }
}

/// In-memory clearinghouse driving the state API in the same order as the
/// instruction handlers: role and pause checks, reconciliation and state
/// transition, then token movement. A failed call leaves nothing behind.
pub struct Clearinghouse {
    pub admin: Pubkey,
    pub oracle: Pubkey,
    pub config: ClearinghouseConfig,
    pub feed: IndexFeed,
    pub series: HashMap<[u8; 32], Series>,
    pub positions: HashMap<(Pubkey, [u8; 32]), Position>,
    pub balances: HashMap<Pubkey, u64>,
    pub vault: u64,
    pub insurance_fund: u64,
    pub now: i64,
}

impl Clearinghouse {
    pub fn new() -> Self {
        let admin = Pubkey::new_unique();
        let oracle = Pubkey::new_unique();

        let mut config = ClearinghouseConfig {
            admin,
            oracle_authority: oracle,
            pauser: admin,
            ..Default::default()
        };
        config.configure_scales(6, 6).unwrap();
        config.set_margin_params(default_params()).unwrap();

        Self {
            admin,
            oracle,
            config,
            feed: IndexFeed::default(),
            series: HashMap::new(),
            positions: HashMap::new(),
            balances: HashMap::new(),
            vault: 0,
            insurance_fund: 0,
            now: NOW,
        }
    }

    pub fn fund(&mut self, owner: Pubkey, amount: u64) {
        *self.balances.entry(owner).or_default() += amount;
    }

    pub fn balance(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    pub fn total_tokens(&self) -> u64 {
        self.balances.values().sum::<u64>() + self.vault + self.insurance_fund
    }

    pub fn position(&self, owner: &Pubkey, id: [u8; 32]) -> Position {
        self.positions.get(&(*owner, id)).cloned().unwrap_or_default()
    }

    fn load_series(&self, id: [u8; 32]) -> Result<Series> {
        Ok(self
            .series
            .get(&id)
            .cloned()
            .ok_or(ClearingError::InvalidSeries)?)
    }

    fn pull(&mut self, owner: &Pubkey, amount: u64) -> Result<()> {
        let balance = self.balance(owner);
        if balance < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }
        self.balances.insert(*owner, balance - amount);
        self.vault += amount;
        Ok(())
    }

    fn push(&mut self, amount: u64) -> Result<()> {
        if self.vault < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }
        self.vault -= amount;
        Ok(())
    }

    pub fn create_series(&mut self, signer: &Pubkey, id: [u8; 32], terms: SeriesTerms) -> Result<()> {
        if !self.config.is_admin(signer) {
            return Err(ClearingError::Unauthorized.into());
        }
        let mut series = self.series.get(&id).cloned().unwrap_or_default();
        series.register(id, terms, self.now, 255)?;
        self.series.insert(id, series);
        Ok(())
    }

    pub fn update_index(&mut self, signer: &Pubkey, value: u64) -> Result<()> {
        if !self.config.is_oracle(signer) {
            return Err(ClearingError::Unauthorized.into());
        }
        self.feed.update(value, [0u8; 32], self.now)?;
        Ok(())
    }

    pub fn set_paused(&mut self, signer: &Pubkey, paused: bool) -> Result<()> {
        if !self.config.is_pauser(signer) {
            return Err(ClearingError::Unauthorized.into());
        }
        self.config.paused = paused;
        Ok(())
    }

    pub fn set_margin_params(&mut self, signer: &Pubkey, params: MarginParams) -> Result<()> {
        if !self.config.is_admin(signer) {
            return Err(ClearingError::Unauthorized.into());
        }
        self.config.set_margin_params(params)
    }

    pub fn modify_position(
        &mut self,
        owner: &Pubkey,
        id: [u8; 32],
        qty_delta: i64,
        margin_delta: u64,
    ) -> Result<ModifyReceipt> {
        self.config.require_active()?;
        let series = self.load_series(id)?;

        let mut position = self.position(owner, id);
        position.bind(*owner, Pubkey::new_from_array(id), 254);
        let receipt = position.modify(
            &series,
            &self.config,
            self.feed.current_index,
            qty_delta,
            margin_delta,
            self.now,
        )?;

        self.pull(owner, margin_delta)?;
        self.positions.insert((*owner, id), position);
        Ok(receipt)
    }

    pub fn deposit_margin(&mut self, owner: &Pubkey, id: [u8; 32], amount: u64) -> Result<Mark> {
        self.config.require_active()?;
        let series = self.load_series(id)?;

        let mut position = self.position(owner, id);
        position.bind(*owner, Pubkey::new_from_array(id), 254);
        let mark = position.deposit(&series, &self.config, self.feed.current_index, amount, self.now)?;

        self.pull(owner, amount)?;
        self.positions.insert((*owner, id), position);
        Ok(mark)
    }

    pub fn withdraw_margin(
        &mut self,
        owner: &Pubkey,
        id: [u8; 32],
        amount: u64,
    ) -> Result<WithdrawReceipt> {
        self.config.require_active()?;
        let series = self.load_series(id)?;

        let mut position = self.existing_position(owner, id)?;
        let receipt = position.withdraw(&series, &self.config, self.feed.current_index, amount, self.now)?;

        self.push(amount)?;
        *self.balances.entry(*owner).or_default() += amount;
        self.positions.insert((*owner, id), position);
        Ok(receipt)
    }

    pub fn mark_position(&mut self, owner: &Pubkey, id: [u8; 32]) -> Result<u64> {
        self.config.require_active()?;
        let series = self.load_series(id)?;

        let mut position = self.existing_position(owner, id)?;
        let mark = position.mark(&series, &self.config, self.feed.current_index, self.now)?;

        self.positions.insert((*owner, id), position);
        Ok(mark.margin)
    }

    pub fn liquidate(&mut self, owner: &Pubkey, id: [u8; 32]) -> Result<Liquidation> {
        self.config.require_active()?;
        let series = self.load_series(id)?;

        let mut position = self.existing_position(owner, id)?;
        let outcome = position.liquidate(&series, &self.config, self.feed.current_index, self.now)?;

        self.push(outcome.penalty + outcome.remainder)?;
        self.insurance_fund += outcome.penalty;
        *self.balances.entry(*owner).or_default() += outcome.remainder;
        self.positions.insert((*owner, id), position);
        Ok(outcome)
    }

    pub fn margin_requirements(&self, owner: &Pubkey, id: [u8; 32]) -> Result<MarginSnapshot> {
        let series = self.load_series(id)?;
        self.existing_position(owner, id)?
            .snapshot(&series, &self.config, self.feed.current_index)
    }

    fn existing_position(&self, owner: &Pubkey, id: [u8; 32]) -> Result<Position> {
        self.positions
            .get(&(*owner, id))
            .cloned()
            .ok_or(ProgramError::UninitializedAccount.into())
    }
}
