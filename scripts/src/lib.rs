use cw_orch::daemon::{ChainInfo, ChainKind, NetworkInfo};

pub mod deploy;

pub const NEUTRON: NetworkInfo = NetworkInfo {
    id: "neutron",
    pub_address_prefix: "neutron",
    coin_type: 118,
};

pub const PION_1: ChainInfo = ChainInfo {
    chain_id: "pion-1",
    gas_denom: "untrn",
    gas_price: 0.025,
    grpc_urls: &["http://grpc-palvus.pion-1.ntrn.tech:80"],
    lcd_url: None,
    fcd_url: None,
    network_info: NEUTRON,
    kind: ChainKind::Testnet,
};
