#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Decimal, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Storage, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;
use pyth_sdk_cw::PriceIdentifier;

use crate::error::ContractError;
use crate::queries;
use crate::state::{Config, COLLATERAL_DEPOSITED, CONFIG, DSC_MINTED};
use dsc_protocol::asset::AssetInfo;
use dsc_protocol::engine::{ExecuteMsg, InstantiateMsg};
use dsc_protocol::querier::TOKEN_DECIMALS;

const CONTRACT_NAME: &str = "crates.io:dsc-engine";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.assets.len() != msg.price_feed_ids.len() {
        return Err(ContractError::AssetsAndPriceFeedIdsLengthsDontMatch {});
    }
    for price_feed_id in &msg.price_feed_ids {
        PriceIdentifier::from_hex(price_feed_id)?;
    }

    let assets_to_feeds = msg
        .assets
        .iter()
        .map(|asset| asset.inner())
        .zip(msg.price_feed_ids)
        .collect();

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        assets: msg.assets,
        assets_to_feeds,
        oracle_address: deps.api.addr_validate(&msg.oracle_address)?,
        pyth_oracle_address: deps.api.addr_validate(&msg.pyth_oracle_address)?,
        dsc_address: deps.api.addr_validate(&msg.dsc_address)?,
        liquidation_threshold: msg.liquidation_threshold,
        liquidation_bonus: msg.liquidation_bonus,
        min_health_factor: msg.min_health_factor,
    };

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DepositCollateralAndMintDsc {
            collateral_asset,
            amount_collateral,
            amount_dsc_to_mint,
        } => deposit_collateral_and_mint_dsc(
            deps,
            env,
            info,
            collateral_asset,
            amount_collateral,
            amount_dsc_to_mint,
        ),
        ExecuteMsg::RedeemCollateralForDsc {
            collateral_asset,
            amount_collateral,
            amount_dsc_to_burn,
        } => redeem_collateral_for_dsc(
            deps,
            info,
            collateral_asset,
            amount_collateral,
            amount_dsc_to_burn,
        ),
        ExecuteMsg::RedeemCollateral {
            collateral_asset,
            amount_collateral,
        } => redeem_collateral(deps, info, collateral_asset, amount_collateral),
        ExecuteMsg::BurnDsc { amount_dsc_to_burn } => burn_dsc(deps, info, amount_dsc_to_burn),
        ExecuteMsg::Liquidate {
            collateral_asset,
            user,
            debt_to_cover,
        } => liquidate(deps, info, collateral_asset, user, debt_to_cover),
    }
}

pub fn deposit_collateral_and_mint_dsc(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collateral_asset: AssetInfo,
    amount_collateral: Uint128,
    amount_dsc_to_mint: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_valid_collateral(&config, &collateral_asset)?;

    // A token contract needs an explicit TransferFrom to move the collateral
    // in. A native deposit already arrived with the message funds.
    let mut messages: Vec<CosmosMsg> = vec![];
    match &collateral_asset {
        AssetInfo::Cw20(contract_addr) => {
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount: amount_collateral,
                })?,
                funds: vec![],
            }));
        }
        AssetInfo::Native(denom) => {
            let sent = info
                .funds
                .iter()
                .find(|coin| coin.denom == *denom)
                .map(|coin| coin.amount)
                .unwrap_or_default();
            if sent != amount_collateral {
                return Err(ContractError::MissingNativeFunds {
                    denom: denom.clone(),
                });
            }
        }
    }

    COLLATERAL_DEPOSITED.update(
        deps.storage,
        (&info.sender, collateral_asset.inner()),
        |balance| -> StdResult<_> {
            balance
                .unwrap_or_default()
                .checked_add(amount_collateral)
                .map_err(StdError::overflow)
        },
    )?;

    // The engine must be declared as minter on DSC instantiation
    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.dsc_address.into_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount: amount_dsc_to_mint,
        })?,
        funds: vec![],
    }));

    DSC_MINTED.update(deps.storage, &info.sender, |balance| -> StdResult<_> {
        balance
            .unwrap_or_default()
            .checked_add(amount_dsc_to_mint)
            .map_err(StdError::overflow)
    })?;

    assert_health_factor_not_broken(&deps, &info.sender)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "deposit_collateral_and_mint_dsc")
        .add_attribute("from", info.sender)
        .add_attribute("asset", collateral_asset.inner())
        .add_attribute("amount_collateral", amount_collateral)
        .add_attribute("amount_dsc_minted", amount_dsc_to_mint))
}

pub fn redeem_collateral_for_dsc(
    deps: DepsMut,
    info: MessageInfo,
    collateral_asset: AssetInfo,
    amount_collateral: Uint128,
    amount_dsc_to_burn: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_valid_collateral(&config, &collateral_asset)?;

    let burn_dsc_msg = burn_dsc_from(
        deps.storage,
        amount_dsc_to_burn,
        &info.sender,
        &info.sender,
    )?;
    let redeem_collateral_msg = withdraw_collateral(
        deps.storage,
        &collateral_asset,
        amount_collateral,
        &info.sender,
        &info.sender,
    )?;

    assert_health_factor_not_broken(&deps, &info.sender)?;

    Ok(Response::new()
        .add_messages(vec![burn_dsc_msg, redeem_collateral_msg])
        .add_attribute("action", "redeem_collateral_for_dsc")
        .add_attribute("from", info.sender)
        .add_attribute("asset", collateral_asset.inner())
        .add_attribute("amount_collateral", amount_collateral)
        .add_attribute("amount_dsc_burned", amount_dsc_to_burn))
}

pub fn redeem_collateral(
    deps: DepsMut,
    info: MessageInfo,
    collateral_asset: AssetInfo,
    amount_collateral: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_valid_collateral(&config, &collateral_asset)?;

    let redeem_collateral_msg = withdraw_collateral(
        deps.storage,
        &collateral_asset,
        amount_collateral,
        &info.sender,
        &info.sender,
    )?;

    assert_health_factor_not_broken(&deps, &info.sender)?;

    Ok(Response::new()
        .add_message(redeem_collateral_msg)
        .add_attribute("action", "redeem_collateral")
        .add_attribute("from", info.sender)
        .add_attribute("asset", collateral_asset.inner())
        .add_attribute("amount_collateral", amount_collateral))
}

pub fn burn_dsc(
    deps: DepsMut,
    info: MessageInfo,
    amount_dsc_to_burn: Uint128,
) -> Result<Response, ContractError> {
    let burn_dsc_msg = burn_dsc_from(
        deps.storage,
        amount_dsc_to_burn,
        &info.sender,
        &info.sender,
    )?;

    assert_health_factor_not_broken(&deps, &info.sender)?;

    Ok(Response::new()
        .add_message(burn_dsc_msg)
        .add_attribute("action", "burn_dsc")
        .add_attribute("from", info.sender)
        .add_attribute("amount_dsc_burned", amount_dsc_to_burn))
}

pub fn liquidate(
    deps: DepsMut,
    info: MessageInfo,
    collateral_asset: AssetInfo,
    user: String,
    debt_to_cover: Decimal,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_valid_collateral(&config, &collateral_asset)?;

    let user_addr = deps.api.addr_validate(&user)?;

    let starting_user_health_factor =
        queries::user_health_factor(deps.as_ref(), user_addr.to_string())?;
    if starting_user_health_factor >= config.min_health_factor {
        return Err(ContractError::HealthFactorOk {});
    }

    let token_amount_from_debt_covered =
        queries::token_amount_from_usd(deps.as_ref(), collateral_asset.inner(), debt_to_cover)?;
    let liquidation_bonus = Decimal::from_atomics(config.liquidation_bonus, 2)?;
    let bonus_collateral = token_amount_from_debt_covered.checked_mul(liquidation_bonus)?;
    let collateral_to_redeem = token_amount_from_debt_covered.checked_add(bonus_collateral)?;
    let collateral_to_redeem_atomics = to_token_atomics(collateral_to_redeem);

    let redeem_collateral_msg = withdraw_collateral(
        deps.storage,
        &collateral_asset,
        collateral_to_redeem_atomics,
        &user_addr,
        &info.sender,
    )?;

    let debt_to_cover_atomics = to_token_atomics(debt_to_cover);
    let burn_dsc_msg = burn_dsc_from(deps.storage, debt_to_cover_atomics, &user_addr, &info.sender)?;

    let ending_user_health_factor =
        queries::user_health_factor(deps.as_ref(), user_addr.to_string())?;
    if ending_user_health_factor <= starting_user_health_factor {
        return Err(ContractError::HealthFactorNotImproved {});
    }

    assert_health_factor_not_broken(&deps, &info.sender)?;

    Ok(Response::new()
        .add_messages(vec![redeem_collateral_msg, burn_dsc_msg])
        .add_attribute("action", "liquidate")
        .add_attribute("liquidator", &info.sender)
        .add_attribute("liquidated_user", &user)
        .add_attribute("asset", collateral_asset.inner())
        .add_attribute("collateral_redeemed", collateral_to_redeem_atomics)
        .add_attribute("debt_covered", debt_to_cover_atomics)
        .add_attribute(
            "initial_health_factor",
            starting_user_health_factor.to_string(),
        )
        .add_attribute("final_health_factor", ending_user_health_factor.to_string()))
}

/// Floors a decimal token amount down to its integer atomic representation.
fn to_token_atomics(amount: Decimal) -> Uint128 {
    Uint128::new(10u128.pow(TOKEN_DECIMALS)).mul_floor(amount)
}

/// Decreases the collateral balance of `from` and builds the message sending
/// the collateral to `to`. Fails when `from` has not deposited enough.
fn withdraw_collateral(
    storage: &mut dyn Storage,
    collateral_asset: &AssetInfo,
    amount_collateral: Uint128,
    from: &Addr,
    to: &Addr,
) -> Result<CosmosMsg, ContractError> {
    let message = match collateral_asset {
        AssetInfo::Cw20(contract_addr) => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: to.to_string(),
                amount: amount_collateral,
            })?,
            funds: vec![],
        }),
        AssetInfo::Native(denom) => CosmosMsg::Bank(BankMsg::Send {
            to_address: to.to_string(),
            amount: vec![Coin {
                denom: denom.clone(),
                amount: amount_collateral,
            }],
        }),
    };

    COLLATERAL_DEPOSITED.update(
        storage,
        (from, collateral_asset.inner()),
        |balance| -> StdResult<_> {
            balance
                .unwrap_or_default()
                .checked_sub(amount_collateral)
                .map_err(StdError::overflow)
        },
    )?;

    Ok(message)
}

/// Decreases the minted-DSC balance of `on_behalf_of` and builds the message
/// burning the DSC out of `dsc_from`'s wallet. Fails when `on_behalf_of` has
/// not minted enough.
fn burn_dsc_from(
    storage: &mut dyn Storage,
    amount_dsc_to_burn: Uint128,
    on_behalf_of: &Addr,
    dsc_from: &Addr,
) -> Result<CosmosMsg, ContractError> {
    let config = CONFIG.load(storage)?;
    let message = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.dsc_address.into_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: dsc_from.to_string(),
            amount: amount_dsc_to_burn,
        })?,
        funds: vec![],
    });

    DSC_MINTED.update(storage, on_behalf_of, |balance| -> StdResult<_> {
        balance
            .unwrap_or_default()
            .checked_sub(amount_dsc_to_burn)
            .map_err(StdError::overflow)
    })?;

    Ok(message)
}

fn assert_valid_collateral(
    config: &Config,
    collateral_asset: &AssetInfo,
) -> Result<(), ContractError> {
    if !config
        .assets_to_feeds
        .contains_key(&collateral_asset.inner())
    {
        return Err(ContractError::InvalidCollateralAsset {
            denom: collateral_asset.inner(),
        });
    }
    Ok(())
}

fn assert_health_factor_not_broken(
    deps: &DepsMut,
    user_addr: &Addr,
) -> Result<(), ContractError> {
    let user_health_factor = queries::user_health_factor(deps.as_ref(), user_addr.to_string())?;
    let config = CONFIG.load(deps.storage)?;

    if user_health_factor < config.min_health_factor {
        return Err(ContractError::BreaksHealthFactor {
            health_factor_value: user_health_factor,
            min_value: config.min_health_factor,
        });
    }
    Ok(())
}
