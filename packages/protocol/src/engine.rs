use std::collections::HashMap;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Decimal, Uint128};

use crate::asset::AssetInfo;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to change contract parameters
    pub owner: String,
    /// Assets that can be deposited and used as collateral
    pub assets: Vec<AssetInfo>,
    /// Address of the protocol wrapper around the Pyth oracle
    pub oracle_address: String,
    /// Pyth oracle contract address
    pub pyth_oracle_address: String,
    /// Pyth price feed id for each collateral asset, same order as `assets`
    pub price_feed_ids: Vec<String>,
    /// Address of the stable asset minted against collateral
    pub dsc_address: String,
    /// liquidation_threshold = 50 means positions must stay 200% over-collateralized
    pub liquidation_threshold: Uint128,
    /// liquidation_bonus = 10 means liquidators get collateral at a 10% discount
    pub liquidation_bonus: Uint128,
    /// Health factor below which a position can be liquidated
    pub min_health_factor: Decimal,
}

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    /// Deposit collateral and mint DSC against it in one transaction
    DepositCollateralAndMintDsc {
        collateral_asset: AssetInfo,
        amount_collateral: Uint128,
        amount_dsc_to_mint: Uint128,
    },
    /// Burn DSC and withdraw collateral in one transaction
    RedeemCollateralForDsc {
        collateral_asset: AssetInfo,
        amount_collateral: Uint128,
        amount_dsc_to_burn: Uint128,
    },
    /// Withdraw collateral. Fails if the remaining position would go below
    /// the minimum health factor
    RedeemCollateral {
        collateral_asset: AssetInfo,
        amount_collateral: Uint128,
    },
    /// Burn DSC without touching collateral, improving the health factor
    BurnDsc { amount_dsc_to_burn: Uint128 },
    /// Cover `debt_to_cover` (USD) of an insolvent user's debt by burning own
    /// DSC, seizing the equivalent collateral plus the liquidation bonus.
    /// Partial liquidations are allowed
    Liquidate {
        collateral_asset: AssetInfo,
        user: String,
        debt_to_cover: Decimal,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
#[cfg_attr(feature = "interface", derive(cw_orch::QueryFns))]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Uint128)]
    CollateralBalanceOfUser {
        user: String,
        collateral_asset: String,
    },
    #[returns(Decimal)]
    UserHealthFactor { user: String },
    #[returns(AccountInfoResponse)]
    AccountInformation { user: String },
    #[returns(Decimal)]
    AccountCollateralValueUsd { user: String },
    #[returns(Decimal)]
    CalculateHealthFactor {
        total_dsc_minted: Uint128,
        collateral_value_usd: Decimal,
    },
    #[returns(Decimal)]
    GetUsdValue { token: String, amount: Uint128 },
    #[returns(Decimal)]
    GetTokenAmountFromUsd { token: String, usd_amount: Decimal },
    #[returns(String)]
    GetCollateralTokenPriceFeed { collateral_asset: String },
    #[returns(Uint128)]
    GetCollateralBalanceOfUser { user: String, token: String },
}

#[cw_serde]
pub struct ConfigResponse {
    /// Address allowed to change contract parameters
    pub owner: Addr,
    /// Registered collateral assets
    pub assets: Vec<AssetInfo>,
    /// Collateral denom or address mapped to its Pyth price feed id
    pub assets_to_feeds: HashMap<String, String>,
    /// Address of the protocol wrapper around the Pyth oracle
    pub oracle_address: Addr,
    /// Pyth oracle contract address
    pub pyth_oracle_address: Addr,
    /// Address of the stable asset minted against collateral
    pub dsc_address: Addr,
    pub liquidation_threshold: Uint128,
    pub liquidation_bonus: Uint128,
    pub min_health_factor: Decimal,
}

#[cw_serde]
pub struct AccountInfoResponse {
    /// USD value of all collateral deposited by the user
    pub deposited_collateral_in_usd: Decimal,
    /// DSC minted by the user
    pub total_dsc_minted: Uint128,
}
