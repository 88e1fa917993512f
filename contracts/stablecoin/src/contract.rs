#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use cw20_base::contract::{
    execute as cw20_execute, instantiate as cw20_instantiate, migrate as cw20_migrate,
    query as cw20_query,
};
use cw20_base::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cw20_base::ContractError;

const CONTRACT_NAME: &str = "crates.io:dsc-stablecoin";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a new token with the parameters of the [`InstantiateMsg`]. The
/// minter is expected to be handed over to the DSC engine after deployment.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let res = cw20_instantiate(deps.branch(), env, info, msg)?;
    // cw20_instantiate records the cw20-base crate in cw2, overwrite with our own name
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(res)
}

/// Exposes execute functions available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    cw20_execute(deps, env, info, msg)
}

/// Exposes queries available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    cw20_query(deps, env, msg)
}

/// Manages contract migration.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    cw20_migrate(deps, env, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, Uint128};
    use cw2::get_contract_version;
    use cw20::{BalanceResponse, Cw20Coin, MinterResponse, TokenInfoResponse};

    fn dsc_instantiate_msg(minter: &str) -> InstantiateMsg {
        InstantiateMsg {
            name: "Decentralized Stablecoin".to_string(),
            symbol: "DSC".to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: minter.to_string(),
                amount: Uint128::new(10_000_000),
            }],
            mint: Some(MinterResponse {
                minter: minter.to_string(),
                cap: None,
            }),
            marketing: None,
        }
    }

    #[test]
    fn instantiate_sets_own_contract_version() {
        let mut deps = mock_dependencies();

        let info = mock_info("minter0000", &[]);
        instantiate(deps.as_mut(), mock_env(), info, dsc_instantiate_msg("minter0000")).unwrap();

        let version = get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);

        let res = query(deps.as_ref(), mock_env(), QueryMsg::TokenInfo {}).unwrap();
        let info: TokenInfoResponse = from_json(&res).unwrap();
        assert_eq!(info.symbol, "DSC");
        assert_eq!(info.total_supply, Uint128::new(10_000_000));
    }

    #[test]
    fn mint_passthrough() {
        let mut deps = mock_dependencies();

        let info = mock_info("minter0000", &[]);
        instantiate(deps.as_mut(), mock_env(), info, dsc_instantiate_msg("minter0000")).unwrap();

        let info = mock_info("minter0000", &[]);
        let msg = ExecuteMsg::Mint {
            recipient: "user0000".to_string(),
            amount: Uint128::new(1_000_000),
        };
        execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Balance {
                address: "user0000".to_string(),
            },
        )
        .unwrap();
        let balance: BalanceResponse = from_json(&res).unwrap();
        assert_eq!(balance.balance, Uint128::new(1_000_000));
    }
}
