use anchor_lang::prelude::*;

#[error_code]
pub enum ClearingError {
    #[msg("Series is not registered")]
    InvalidSeries,

    #[msg("Series id is already registered")]
    SeriesExists,

    #[msg("Series has expired, positions can no longer be modified")]
    SeriesExpired,

    #[msg("Oracle has not posted an index yet")]
    IndexNotSet,

    #[msg("Margin is below the required threshold")]
    InsufficientMargin,

    #[msg("Position is flat or meets its maintenance requirement")]
    StillHealthy,

    #[msg("Signer does not hold the required role")]
    Unauthorized,

    #[msg("Series expiry must be in the future and strike and notional must be non-zero")]
    InvalidSeriesTerms,

    #[msg("Index value must be greater than zero")]
    InvalidIndex,

    #[msg("Margin parameters violate initial >= maintenance, initial <= 10000 or penalty <= 1000")]
    InvalidMarginParams,

    #[msg("Decimal count exceeds the supported maximum")]
    InvalidDecimals,

    #[msg("Invalid token amount")]
    InvalidAmount,

    #[msg("Insurance fund must be a token account for the collateral mint")]
    InvalidInsuranceFund,

    #[msg("Vault or collateral account does not match the configured collateral")]
    InvalidVault,

    #[msg("Clearinghouse is paused")]
    Paused,

    #[msg("Math overflow")]
    MathOverflow,
}
