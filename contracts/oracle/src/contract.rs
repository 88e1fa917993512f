#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
};
use pyth_sdk_cw::{get_valid_time_period, query_price_feed, PriceIdentifier};
use std::time::Duration;

use dsc_protocol::oracle::{
    ExecuteMsg, FetchPriceResponse, InstantiateMsg, MigrateMsg, QueryMsg,
};

/// A price older than this many seconds is considered stale and not served.
const STALENESS_THRESHOLD_SECONDS: i64 = 60;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: ExecuteMsg,
) -> StdResult<Response> {
    Ok(Response::new().add_attribute("method", "execute"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::new().add_attribute("method", "migrate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::FetchPrice {
            pyth_contract_addr,
            price_feed_id,
        } => to_json_binary(&query_fetch_price(
            deps,
            env,
            pyth_contract_addr,
            price_feed_id,
        )?),
        QueryMsg::FetchValidTimePeriod { pyth_contract_addr } => {
            to_json_binary(&query_fetch_valid_time_period(deps, pyth_contract_addr)?)
        }
    }
}

/// Reads the current and EMA prices of the feed from the Pyth contract.
/// Both prices must have been published within [`STALENESS_THRESHOLD_SECONDS`]
/// of the current block time, otherwise the query fails.
fn query_fetch_price(
    deps: Deps,
    env: Env,
    pyth_contract_addr: String,
    price_feed_id: PriceIdentifier,
) -> StdResult<FetchPriceResponse> {
    let pyth_contract_addr = deps.api.addr_validate(&pyth_contract_addr)?;
    let price_feed_response = query_price_feed(&deps.querier, pyth_contract_addr, price_feed_id)?;
    let price_feed = price_feed_response.price_feed;

    // get_price_no_older_than returns None when the feed has not updated
    // recently enough, e.g. during a network outage or off trading hours.
    let current_price = price_feed
        .get_price_no_older_than(
            env.block.time.seconds() as i64,
            STALENESS_THRESHOLD_SECONDS as u64,
        )
        .ok_or_else(|| StdError::not_found("Current price is not available"))?;

    let ema_price = price_feed
        .get_ema_price_no_older_than(
            env.block.time.seconds() as i64,
            STALENESS_THRESHOLD_SECONDS as u64,
        )
        .ok_or_else(|| StdError::not_found("EMA price is not available"))?;

    Ok(FetchPriceResponse {
        current_price,
        ema_price,
    })
}

fn query_fetch_valid_time_period(deps: Deps, pyth_contract_addr: String) -> StdResult<Duration> {
    let pyth_contract_addr = deps.api.addr_validate(&pyth_contract_addr)?;
    get_valid_time_period(&deps.querier, pyth_contract_addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage};
    use cosmwasm_std::{
        from_json, Coin, OwnedDeps, QuerierResult, SystemError, SystemResult, Timestamp, WasmQuery,
    };
    use pyth_sdk_cw::testing::MockPyth;
    use pyth_sdk_cw::{Price, PriceFeed, PriceIdentifier, UnixTimestamp};
    use std::convert::TryFrom;
    use std::time::Duration;

    const PYTH_CONTRACT_ADDR: &str = "pyth_contract_addr";
    const PRICE_FEED_ID: &str = "63f341689d98a12ef60a5cff1d7f85c70a9e17bf1575f0e7c0b2512d48b1c8b3";

    fn setup_test(
        mock_pyth: &MockPyth,
        block_timestamp: UnixTimestamp,
    ) -> (OwnedDeps<MockStorage, MockApi, MockQuerier>, Env) {
        let mut dependencies = mock_dependencies();

        let mock_pyth_copy = (*mock_pyth).clone();
        dependencies
            .querier
            .update_wasm(move |x| handle_wasm_query(&mock_pyth_copy, x));

        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(u64::try_from(block_timestamp).unwrap());

        (dependencies, env)
    }

    fn handle_wasm_query(pyth: &MockPyth, wasm_query: &WasmQuery) -> QuerierResult {
        match wasm_query {
            WasmQuery::Smart { contract_addr, msg } if *contract_addr == PYTH_CONTRACT_ADDR => {
                pyth.handle_wasm_query(msg)
            }
            WasmQuery::Smart { contract_addr, .. } => {
                SystemResult::Err(SystemError::NoSuchContract {
                    addr: contract_addr.clone(),
                })
            }
            WasmQuery::Raw { contract_addr, .. } => {
                SystemResult::Err(SystemError::NoSuchContract {
                    addr: contract_addr.clone(),
                })
            }
            WasmQuery::ContractInfo { contract_addr, .. } => {
                SystemResult::Err(SystemError::NoSuchContract {
                    addr: contract_addr.clone(),
                })
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn fetch_price() {
        let current_unix_time = 10_000_000;

        let mut mock_pyth = MockPyth::new(Duration::from_secs(60), Coin::new(1, "foo"), &[]);
        let price_feed = PriceFeed::new(
            PriceIdentifier::from_hex(PRICE_FEED_ID).unwrap(),
            Price {
                price: 100,
                conf: 10,
                expo: -1,
                publish_time: current_unix_time,
            },
            Price {
                price: 200,
                conf: 20,
                expo: -1,
                publish_time: current_unix_time,
            },
        );

        mock_pyth.add_feed(price_feed);

        let (deps, env) = setup_test(&mock_pyth, current_unix_time);

        let msg = QueryMsg::FetchPrice {
            pyth_contract_addr: String::from(PYTH_CONTRACT_ADDR),
            price_feed_id: PriceIdentifier::from_hex(PRICE_FEED_ID).unwrap(),
        };
        let result = query(deps.as_ref(), env, msg)
            .and_then(|binary| from_json::<FetchPriceResponse>(&binary))
            .unwrap();

        assert_eq!(result.current_price.price, 100);
        assert_eq!(result.ema_price.price, 200);
    }

    #[test]
    fn fetch_price_fails_when_stale() {
        let publish_time = 10_000_000;

        let mut mock_pyth = MockPyth::new(Duration::from_secs(60), Coin::new(1, "foo"), &[]);
        let price_feed = PriceFeed::new(
            PriceIdentifier::from_hex(PRICE_FEED_ID).unwrap(),
            Price {
                price: 100,
                conf: 10,
                expo: -1,
                publish_time,
            },
            Price {
                price: 200,
                conf: 20,
                expo: -1,
                publish_time,
            },
        );

        mock_pyth.add_feed(price_feed);

        // the block is more than 60 seconds past the publish time
        let (deps, env) = setup_test(&mock_pyth, publish_time + 100);

        let msg = QueryMsg::FetchPrice {
            pyth_contract_addr: String::from(PYTH_CONTRACT_ADDR),
            price_feed_id: PriceIdentifier::from_hex(PRICE_FEED_ID).unwrap(),
        };
        let result = query(deps.as_ref(), env, msg);
        assert!(result.is_err());
    }

    #[test]
    fn fetch_valid_time_period() {
        let current_unix_time = 10_000_000;

        let mock_pyth = MockPyth::new(Duration::from_secs(60), Coin::new(1, "foo"), &[]);
        let (deps, env) = setup_test(&mock_pyth, current_unix_time);

        let msg = QueryMsg::FetchValidTimePeriod {
            pyth_contract_addr: String::from(PYTH_CONTRACT_ADDR),
        };
        let result =
            query(deps.as_ref(), env, msg).and_then(|binary| from_json::<Duration>(&binary));

        assert_eq!(result.map(|r| r.as_secs()), Ok(60));
    }
}
