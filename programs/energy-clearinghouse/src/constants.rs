pub const CONFIG_SEED: &[u8] = b"config";
pub const INDEX_FEED_SEED: &[u8] = b"index_feed";
pub const VAULT_SEED: &[u8] = b"vault";
pub const SERIES_SEED: &[u8] = b"series";
pub const POSITION_SEED: &[u8] = b"position";

/// Basis-point denominator for every ratio in the margin configuration.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Liquidation penalty ceiling (10%).
pub const MAX_LIQUIDATION_PENALTY_BPS: u16 = 1_000;

/// Largest decimal count whose scale still fits a u64.
pub const MAX_DECIMALS: u8 = 18;
