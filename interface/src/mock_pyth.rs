use cw_orch::{interface, prelude::*};
use dsc_mock_pyth::contract::{execute, instantiate, query};
use dsc_protocol::mock_pyth::ExecuteMsg;
use pyth_sdk_cw::QueryMsg;

#[interface(Empty, ExecuteMsg, QueryMsg, Empty)]
pub struct MockPyth;

impl<Chain: CwEnv> Uploadable for MockPyth<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(&self) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path("dsc_mock_pyth")
            .unwrap()
    }
    /// Returns a CosmWasm contract wrapper
    fn wrapper(&self) -> Box<dyn MockContract<Empty>> {
        Box::new(ContractWrapper::new_with_empty(execute, instantiate, query))
    }
}
