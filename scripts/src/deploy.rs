use cosmwasm_std::{Decimal, Uint128};
use cw20::{BalanceResponse, Cw20Coin, MinterResponse};
use cw20_base::msg::{
    ExecuteMsg as Cw20ExecuteMsg, InstantiateMsg as Cw20InstantiateMsg,
    QueryMsg as Cw20QueryMsg,
};
use cw_orch::prelude::*;

use dsc_interface::{DscEngine, Oracle, Stablecoin};
use dsc_protocol::asset::AssetInfo;
use dsc_protocol::engine::InstantiateMsg as EngineInstantiateMsg;
use dsc_protocol::oracle::InstantiateMsg as OracleInstantiateMsg;

/// Pyth oracle contract on pion-1
/// https://docs.pyth.network/documentation/pythnet-price-feeds/cosmwasm
pub const PYTH_ORACLE_ADDRESS: &str =
    "neutron1m2emc93m9gpwgsrsf2vylv9xvgqh654630v7dfrhrkmr5slly53spg85wv";
/// NTRN/USD price feed, see https://pyth.network/developers/price-feed-ids
pub const NTRN_USD_PRICE_FEED_ID: &str =
    "a8e6517966a52cb1df864b2764f3629fde3f21d2b640b5c572fcd654cbccd65e";
pub const NATIVE_COLLATERAL_DENOM: &str = "untrn";

/// 200% over-collateralization
pub const LIQUIDATION_THRESHOLD: u128 = 50;
/// 10% liquidator discount
pub const LIQUIDATION_BONUS: u128 = 10;

const INITIAL_DSC_BALANCE: u128 = 10_000_000;
const DSC_CAP: u128 = 1_000_000_000_000;
const FIRST_MINT_AMOUNT: u128 = 1_000_000;

/// Uploads and instantiates the DSC token with `minter` as the initial
/// minter, then mints a first batch to it as a smoke test.
pub fn deploy_stablecoin<Chain: CwEnv>(
    chain: Chain,
    minter: String,
) -> anyhow::Result<Stablecoin<Chain>> {
    let stablecoin = Stablecoin::new("dsc_stablecoin", chain);
    stablecoin.upload()?;
    stablecoin.instantiate(
        &Cw20InstantiateMsg {
            name: String::from("Decentralized Stablecoin"),
            symbol: String::from("DSC"),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: minter.clone(),
                amount: Uint128::new(INITIAL_DSC_BALANCE),
            }],
            mint: Some(MinterResponse {
                minter: minter.clone(),
                cap: Some(Uint128::new(DSC_CAP)),
            }),
            marketing: None,
        },
        None,
        None,
    )?;
    log::info!("dsc instantiated at {}", stablecoin.addr_str()?);

    stablecoin.execute(
        &Cw20ExecuteMsg::Mint {
            recipient: minter.clone(),
            amount: Uint128::new(FIRST_MINT_AMOUNT),
        },
        None,
    )?;

    let balance: BalanceResponse =
        stablecoin.query(&Cw20QueryMsg::Balance { address: minter })?;
    log::info!("dsc balance after first mint: {}", balance.balance);

    Ok(stablecoin)
}

/// Deploys the whole protocol against the live Pyth oracle: DSC token,
/// oracle wrapper and engine, then hands the DSC minter role to the engine.
pub fn deploy_protocol<Chain: CwEnv>(chain: Chain, owner: String) -> anyhow::Result<()> {
    let stablecoin = deploy_stablecoin(chain.clone(), owner.clone())?;

    let oracle = Oracle::new("dsc_oracle", chain.clone());
    oracle.upload()?;
    oracle.instantiate(&OracleInstantiateMsg {}, None, None)?;
    log::info!("oracle instantiated at {}", oracle.addr_str()?);

    let engine = DscEngine::new("dsc_engine", chain);
    engine.upload()?;
    engine.instantiate(
        &EngineInstantiateMsg {
            owner,
            assets: vec![AssetInfo::Native(String::from(NATIVE_COLLATERAL_DENOM))],
            oracle_address: oracle.addr_str()?,
            pyth_oracle_address: String::from(PYTH_ORACLE_ADDRESS),
            price_feed_ids: vec![String::from(NTRN_USD_PRICE_FEED_ID)],
            dsc_address: stablecoin.addr_str()?,
            liquidation_threshold: Uint128::new(LIQUIDATION_THRESHOLD),
            liquidation_bonus: Uint128::new(LIQUIDATION_BONUS),
            min_health_factor: Decimal::one(),
        },
        None,
        None,
    )?;
    log::info!("engine instantiated at {}", engine.addr_str()?);

    stablecoin.execute(
        &Cw20ExecuteMsg::UpdateMinter {
            new_minter: Some(engine.addr_str()?),
        },
        None,
    )?;
    log::info!("dsc minter role handed over to the engine");

    Ok(())
}
