#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError, StdResult,
};
use pyth_sdk_cw::{Price, PriceFeed, PriceFeedResponse, PriceIdentifier, QueryMsg};

use crate::state::PRICE;
use dsc_protocol::mock_pyth::ExecuteMsg;

/// Mantissa served before any `UpdateMockPrice`, 6.8 USD at expo -5.
const DEFAULT_PRICE: i64 = 680_000;
const PRICE_EXPO: i32 = -5;
// Matches the default block time of the test environment so the feed is never stale.
const PUBLISH_TIME: i64 = 1_571_797_419;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::UpdateMockPrice { price } => update_mock_price(deps, price),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::PriceFeed { id } => to_json_binary(&mocked_price_feed(deps, id)?),
        _ => Err(StdError::generic_err("unsupported query")),
    }
}

fn update_mock_price(deps: DepsMut, price: i64) -> StdResult<Response> {
    PRICE.save(deps.storage, &price)?;
    Ok(Response::default())
}

fn mocked_price_feed(deps: Deps, id: PriceIdentifier) -> StdResult<PriceFeedResponse> {
    let price = PRICE.may_load(deps.storage)?.unwrap_or(DEFAULT_PRICE);
    let ema_price = price + 100;

    Ok(PriceFeedResponse {
        price_feed: PriceFeed::new(
            id,
            Price {
                price,
                conf: 510_000,
                expo: PRICE_EXPO,
                publish_time: PUBLISH_TIME,
            },
            Price {
                price: ema_price,
                conf: 400_000,
                expo: PRICE_EXPO,
                publish_time: PUBLISH_TIME,
            },
        ),
    })
}
