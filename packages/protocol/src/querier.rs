use cosmwasm_std::{
    to_json_binary, Addr, Decimal, QuerierWrapper, QueryRequest, StdError, StdResult, Uint128,
    WasmQuery,
};
use pyth_sdk_cw::{Price, PriceIdentifier};

use crate::oracle::{FetchPriceResponse, QueryMsg as OracleQueryMsg};

/// Number of decimals used by DSC and by every supported collateral token.
pub const TOKEN_DECIMALS: u32 = 6;

/// Fetches the current price of `price_feed_id` through the oracle wrapper.
pub fn query_price(
    querier: &QuerierWrapper,
    oracle: &Addr,
    pyth_oracle: &Addr,
    price_feed_id: PriceIdentifier,
) -> StdResult<FetchPriceResponse> {
    querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: oracle.to_string(),
        msg: to_json_binary(&OracleQueryMsg::FetchPrice {
            pyth_contract_addr: pyth_oracle.to_string(),
            price_feed_id,
        })?,
    }))
}

/// Converts a Pyth price (mantissa and exponent) into a USD `Decimal`.
pub fn price_to_decimal(price: &Price) -> StdResult<Decimal> {
    if price.price <= 0 {
        return Err(StdError::generic_err("oracle returned a non-positive price"));
    }
    Decimal::from_atomics(Uint128::from(price.price as u64), price.expo.unsigned_abs())
        .map_err(|err| StdError::generic_err(err.to_string()))
}
