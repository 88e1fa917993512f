#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Decimal, Deps, Env, StdError, StdResult, Uint128,
};
use pyth_sdk_cw::PriceIdentifier;

use crate::state::{Config, COLLATERAL_DEPOSITED, CONFIG, DSC_MINTED};
use dsc_protocol::asset::AssetInfo;
use dsc_protocol::engine::{AccountInfoResponse, ConfigResponse, QueryMsg};
use dsc_protocol::querier::{price_to_decimal, query_price, TOKEN_DECIMALS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CollateralBalanceOfUser {
            user,
            collateral_asset,
        } => to_json_binary(&collateral_balance_of_user(deps, user, collateral_asset)?),
        QueryMsg::UserHealthFactor { user } => to_json_binary(&user_health_factor(deps, user)?),
        QueryMsg::AccountInformation { user } => to_json_binary(&account_information(deps, user)?),
        QueryMsg::AccountCollateralValueUsd { user } => {
            to_json_binary(&account_collateral_value_usd(deps, user)?)
        }
        QueryMsg::CalculateHealthFactor {
            total_dsc_minted,
            collateral_value_usd,
        } => to_json_binary(&calculate_health_factor(
            deps,
            total_dsc_minted,
            collateral_value_usd,
        )?),
        QueryMsg::GetUsdValue { token, amount } => {
            to_json_binary(&usd_value(deps, &AssetInfo::Cw20(Addr::unchecked(token)), amount)?)
        }
        QueryMsg::GetTokenAmountFromUsd { token, usd_amount } => to_json_binary(
            &token_amount_from_usd(deps, AssetInfo::Cw20(Addr::unchecked(token)).inner(), usd_amount)?,
        ),
        QueryMsg::GetCollateralTokenPriceFeed { collateral_asset } => {
            to_json_binary(&collateral_token_price_feed(deps, collateral_asset)?)
        }
        QueryMsg::GetCollateralBalanceOfUser { user, token } => {
            to_json_binary(&collateral_balance_of_user(deps, user, token)?)
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        assets: config.assets,
        assets_to_feeds: config.assets_to_feeds,
        oracle_address: config.oracle_address,
        pyth_oracle_address: config.pyth_oracle_address,
        dsc_address: config.dsc_address,
        liquidation_threshold: config.liquidation_threshold,
        liquidation_bonus: config.liquidation_bonus,
        min_health_factor: config.min_health_factor,
    })
}

pub fn collateral_balance_of_user(
    deps: Deps,
    user: String,
    collateral_asset: String,
) -> StdResult<Uint128> {
    let user_addr = deps.api.addr_validate(&user)?;
    Ok(COLLATERAL_DEPOSITED
        .may_load(deps.storage, (&user_addr, collateral_asset))?
        .unwrap_or_default())
}

pub fn user_health_factor(deps: Deps, user: String) -> StdResult<Decimal> {
    let AccountInfoResponse {
        deposited_collateral_in_usd,
        total_dsc_minted,
    } = account_information(deps, user)?;
    calculate_health_factor(deps, total_dsc_minted, deposited_collateral_in_usd)
}

pub fn account_information(deps: Deps, user: String) -> StdResult<AccountInfoResponse> {
    let user_addr = deps.api.addr_validate(&user)?;
    let total_dsc_minted = DSC_MINTED
        .may_load(deps.storage, &user_addr)?
        .unwrap_or_default();
    Ok(AccountInfoResponse {
        deposited_collateral_in_usd: account_collateral_value_usd(deps, user)?,
        total_dsc_minted,
    })
}

pub fn account_collateral_value_usd(deps: Deps, user: String) -> StdResult<Decimal> {
    let config = CONFIG.load(deps.storage)?;
    let user_addr = deps.api.addr_validate(&user)?;

    let mut user_deposited_balance_usd = Decimal::zero();
    for collateral_asset in config.assets {
        let balance = COLLATERAL_DEPOSITED
            .may_load(deps.storage, (&user_addr, collateral_asset.inner()))?
            .unwrap_or_default();
        if !balance.is_zero() {
            user_deposited_balance_usd =
                user_deposited_balance_usd.checked_add(usd_value(deps, &collateral_asset, balance)?)?;
        }
    }

    Ok(user_deposited_balance_usd)
}

/// A user with no DSC minted has an unbounded health factor.
pub fn calculate_health_factor(
    deps: Deps,
    total_dsc_minted: Uint128,
    collateral_value_usd: Decimal,
) -> StdResult<Decimal> {
    if total_dsc_minted.is_zero() {
        return Ok(Decimal::MAX);
    }
    let config = CONFIG.load(deps.storage)?;
    let liquidation_threshold = Decimal::percent(config.liquidation_threshold.u128() as u64);
    let collateral_adjusted_for_threshold =
        collateral_value_usd.checked_mul(liquidation_threshold)?;
    let total_dsc_minted = Decimal::from_atomics(total_dsc_minted, TOKEN_DECIMALS)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    collateral_adjusted_for_threshold
        .checked_div(total_dsc_minted)
        .map_err(|err| StdError::generic_err(err.to_string()))
}

pub fn usd_value(deps: Deps, asset: &AssetInfo, amount: Uint128) -> StdResult<Decimal> {
    let config = CONFIG.load(deps.storage)?;
    let asset_price_usd = collateral_price(deps, &config, &asset.inner())?;
    let amount = Decimal::from_atomics(amount, TOKEN_DECIMALS)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    amount.checked_mul(asset_price_usd).map_err(StdError::overflow)
}

pub fn token_amount_from_usd(
    deps: Deps,
    asset_denom: String,
    usd_amount: Decimal,
) -> StdResult<Decimal> {
    let config = CONFIG.load(deps.storage)?;
    let asset_price_usd = collateral_price(deps, &config, &asset_denom)?;
    usd_amount
        .checked_div(asset_price_usd)
        .map_err(|err| StdError::generic_err(err.to_string()))
}

pub fn collateral_token_price_feed(deps: Deps, asset_denom: String) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    price_feed_of(&config, &asset_denom).cloned()
}

fn price_feed_of<'a>(config: &'a Config, asset_denom: &str) -> StdResult<&'a String> {
    config.assets_to_feeds.get(asset_denom).ok_or_else(|| {
        StdError::generic_err(format!("no price feed registered for asset {}", asset_denom))
    })
}

/// Current USD price of one whole unit of the collateral, via the oracle wrapper.
fn collateral_price(deps: Deps, config: &Config, asset_denom: &str) -> StdResult<Decimal> {
    let price_feed_id = PriceIdentifier::from_hex(price_feed_of(config, asset_denom)?)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    let oracle_res = query_price(
        &deps.querier,
        &config.oracle_address,
        &config.pyth_oracle_address,
        price_feed_id,
    )?;
    price_to_decimal(&oracle_res.current_price)
}
