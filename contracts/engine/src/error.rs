use cosmwasm_std::{Decimal, DecimalRangeExceeded, OverflowError, StdError};
use hex::FromHexError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DecimalRangeExceeded(#[from] DecimalRangeExceeded),

    #[error("Invalid price feed id: {0}")]
    InvalidPriceFeedId(#[from] FromHexError),

    #[error("Invalid collateral asset: {denom}")]
    InvalidCollateralAsset { denom: String },

    #[error("Assets and price feed ids lengths don't match")]
    AssetsAndPriceFeedIdsLengthsDontMatch {},

    #[error(
        "Resultant health factor {health_factor_value} lower than min allowed {min_value}"
    )]
    BreaksHealthFactor {
        health_factor_value: Decimal,
        min_value: Decimal,
    },

    #[error("Health factor of liquidated user not improved")]
    HealthFactorNotImproved {},

    #[error("Health factor is ok, user cannot be liquidated")]
    HealthFactorOk {},

    #[error("Expected native funds: {denom}")]
    MissingNativeFunds { denom: String },
}
