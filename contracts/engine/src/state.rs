use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_storage_plus::{Item, Map};
use std::collections::HashMap;

use dsc_protocol::asset::AssetInfo;

/// This structure holds the main contract parameters.
#[cw_serde]
pub struct Config {
    /// Address allowed to change contract parameters
    pub owner: Addr,
    /// List of depositable asset infos
    pub assets: Vec<AssetInfo>,
    /// Key is the deposited asset denom or address, value is its Pyth price feed id
    pub assets_to_feeds: HashMap<String, String>,
    /// Address of the protocol wrapper around the Pyth oracle
    pub oracle_address: Addr,
    /// Pyth oracle contract address
    pub pyth_oracle_address: Addr,
    /// Address of the stable asset minted against collateral
    pub dsc_address: Addr,
    /// liquidation_threshold = 50 means positions must stay 200% over-collateralized
    pub liquidation_threshold: Uint128,
    /// liquidation_bonus = 10 means liquidators get collateral at a 10% discount
    pub liquidation_bonus: Uint128,
    /// Health factor below which a position can be liquidated
    pub min_health_factor: Decimal,
}

/// Saves dsc-engine settings
pub const CONFIG: Item<Config> = Item::new("config");

/// First key is user address, second key is collateral token denom or address
pub const COLLATERAL_DEPOSITED: Map<(&Addr, String), Uint128> = Map::new("collateral_deposited");

/// DSC minted per user, the debt side of each position
pub const DSC_MINTED: Map<&Addr, Uint128> = Map::new("dsc_minted");
