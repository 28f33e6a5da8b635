use ethers::types::Chain;
use serde::Serialize;

/// Local hardhat / anvil node
pub const LOCALHOST_CHAIN_ID: u64 = Chain::AnvilHardhat as u64;
/// Goerli testnet
pub const GOERLI_CHAIN_ID: u64 = Chain::Goerli as u64;

/// Networks known out of the box, keyed by chain id.
pub const DEFAULT_NETWORKS: &[(u64, &str)] = &[
    (LOCALHOST_CHAIN_ID, "localhost"),
    (GOERLI_CHAIN_ID, "goerli"),
];

/// Network names that deploy scripts treat as local, throwaway chains.
/// Matched by name, so "hardhat" counts even though it has no entry above.
pub const DEFAULT_DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkEntry {
    // the chain id is the map key in the serialized shape
    #[serde(skip)]
    pub chain_id: u64,
    pub name: String,
}

impl NetworkEntry {
    pub fn new(chain_id: u64, name: impl Into<String>) -> Self {
        Self {
            chain_id,
            name: name.into(),
        }
    }

    /// The ethers [`Chain`] for this entry, if ethers knows the chain id.
    pub fn chain(&self) -> Option<Chain> {
        Chain::try_from(self.chain_id).ok()
    }
}
