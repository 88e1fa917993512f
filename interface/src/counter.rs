use cw_orch::{interface, prelude::*};
use dsc_counter::contract::{execute, instantiate, query};
use dsc_protocol::counter::{ExecuteMsg, InstantiateMsg, QueryMsg};

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, Empty)]
pub struct Counter;

impl<Chain: CwEnv> Uploadable for Counter<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(&self) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path("dsc_counter")
            .unwrap()
    }
    /// Returns a CosmWasm contract wrapper
    fn wrapper(&self) -> Box<dyn MockContract<Empty>> {
        Box::new(ContractWrapper::new_with_empty(execute, instantiate, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CounterExecuteMsgFns, CounterQueryMsgFns};
    use dsc_protocol::counter::CountResponse;

    #[test]
    fn counter_mock_roundtrip() {
        let sender = Addr::unchecked("sender");
        let mock = Mock::new(&sender);

        let counter = Counter::new("counter", mock);
        counter.upload().unwrap();
        counter
            .instantiate(&InstantiateMsg { count: 0 }, None, None)
            .unwrap();

        counter.increment().unwrap();

        let count: CountResponse = counter.get_count().unwrap();
        assert_eq!(count.count, 1);

        counter.reset(5).unwrap();
        let count: CountResponse = counter.get_count().unwrap();
        assert_eq!(count.count, 5);
    }
}
