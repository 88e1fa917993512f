use cosmwasm_schema::cw_serde;

/// Queries use [`pyth_sdk_cw::QueryMsg`] directly so the mock can stand in
/// for the real Pyth contract.
#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    UpdateMockPrice { price: i64 },
}
