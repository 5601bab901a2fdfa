use anchor_lang::prelude::*;

#[event]
pub struct SeriesCreated {
    pub series: Pubkey,
    pub id: [u8; 32],
    pub expiry: i64,
    pub strike: u64,
    pub is_call: bool,
    pub notional: u64,
    pub timestamp: i64,
}

#[event]
pub struct IndexUpdated {
    pub previous_index: u64,
    pub index: u64,
    pub source_hash: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct PositionModified {
    pub owner: Pubkey,
    pub series: Pubkey,
    pub qty_delta: i64,
    pub quantity: i64,
    pub margin_delta: u64,
    pub margin: u64,
    pub pnl: i128,
    pub index: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarginDeposited {
    pub owner: Pubkey,
    pub series: Pubkey,
    pub amount: u64,
    pub margin: u64,
    pub pnl: i128,
    pub timestamp: i64,
}

#[event]
pub struct MarginWithdrawn {
    pub owner: Pubkey,
    pub series: Pubkey,
    pub amount: u64,
    pub margin: u64,
    pub pnl: i128,
    pub timestamp: i64,
}

#[event]
pub struct PositionMarked {
    pub owner: Pubkey,
    pub series: Pubkey,
    pub index: u64,
    pub pnl: i128,
    pub margin: u64,
    pub timestamp: i64,
}

#[event]
pub struct PositionLiquidated {
    pub owner: Pubkey,
    pub series: Pubkey,
    pub liquidator: Pubkey,
    pub quantity: i64,
    pub seized_margin: u64,
    pub maintenance_required: u64,
    pub penalty: u64,
    pub remainder: u64,
    pub index: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarginParamsUpdated {
    pub initial_margin_bps: u16,
    pub maintenance_margin_bps: u16,
    pub liquidation_penalty_bps: u16,
}

#[event]
pub struct InsuranceFundUpdated {
    pub previous: Pubkey,
    pub insurance_fund: Pubkey,
}

#[event]
pub struct PauseToggled {
    pub paused: bool,
    pub by: Pubkey,
}

#[event]
pub struct AuthoritiesUpdated {
    pub admin: Pubkey,
    pub oracle_authority: Pubkey,
    pub pauser: Pubkey,
}
