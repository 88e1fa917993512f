use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

/// A collateral asset, either a native denom or a cw20 token contract.
///
/// Serializes as `{"native": "<denom>"}` or `{"cw20": "<address>"}`.
#[cw_serde]
pub enum AssetInfo {
    Native(String),
    Cw20(Addr),
}

impl AssetInfo {
    /// The raw denom or contract address, used as storage and lookup key.
    pub fn inner(&self) -> String {
        match self {
            AssetInfo::Native(denom) => denom.clone(),
            AssetInfo::Cw20(contract_addr) => contract_addr.to_string(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native(_))
    }
}
