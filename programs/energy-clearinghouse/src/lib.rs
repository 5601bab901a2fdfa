pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;
pub mod transfers;

use anchor_lang::prelude::*;

use instructions::*;
pub use state::*;
pub use events::*;

declare_id!("HNZJbF9VhjimGJCj3d8tLpJV3JjEgZ9ZZzpM3NMrmLjX");

#[program]
pub mod energy_clearinghouse {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        price_decimals: u8,
        params: MarginParams,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, price_decimals, params)
    }

    pub fn create_series(
        ctx: Context<CreateSeries>,
        id: [u8; 32],
        terms: SeriesTerms,
    ) -> Result<()> {
        instructions::create_series::create_series(ctx, id, terms)
    }

    pub fn update_index(
        ctx: Context<UpdateIndex>,
        value: u64,
        source_hash: [u8; 32],
    ) -> Result<()> {
        instructions::update_index::update_index(ctx, value, source_hash)
    }

    pub fn modify_position(
        ctx: Context<ModifyPosition>,
        qty_delta: i64,
        margin_delta: u64,
    ) -> Result<()> {
        instructions::modify_position::modify_position(ctx, qty_delta, margin_delta)
    }

    pub fn deposit_margin(ctx: Context<DepositMargin>, amount: u64) -> Result<()> {
        instructions::deposit_margin::deposit_margin(ctx, amount)
    }

    pub fn withdraw_margin(ctx: Context<WithdrawMargin>, amount: u64) -> Result<()> {
        instructions::withdraw_margin::withdraw_margin(ctx, amount)
    }

    pub fn mark_position(ctx: Context<MarkPosition>) -> Result<u64> {
        instructions::mark_position::mark_position(ctx)
    }

    pub fn liquidate(ctx: Context<Liquidate>) -> Result<()> {
        instructions::liquidate::liquidate(ctx)
    }

    pub fn get_margin_requirements(
        ctx: Context<GetMarginRequirements>,
    ) -> Result<MarginSnapshot> {
        instructions::get_margin_requirements::get_margin_requirements(ctx)
    }

    pub fn set_margin_params(ctx: Context<SetMarginParams>, params: MarginParams) -> Result<()> {
        instructions::set_margin_params::set_margin_params(ctx, params)
    }

    pub fn set_insurance_fund(ctx: Context<SetInsuranceFund>) -> Result<()> {
        instructions::set_insurance_fund::set_insurance_fund(ctx)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::set_paused(ctx, paused)
    }

    pub fn update_authorities(
        ctx: Context<UpdateAuthorities>,
        admin: Option<Pubkey>,
        oracle_authority: Option<Pubkey>,
        pauser: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_authorities::update_authorities(ctx, admin, oracle_authority, pauser)
    }
}
