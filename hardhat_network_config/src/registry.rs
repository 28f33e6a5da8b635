use std::{collections::BTreeMap, path::Path, sync::OnceLock};

use serde::Serialize;

use crate::{
    config::RegistryConfig,
    error::{RegistryError, RegistryResult},
    frontend::FrontendPaths,
    networks::{NetworkEntry, DEFAULT_DEVELOPMENT_CHAINS, DEFAULT_NETWORKS},
};

/// Network metadata for deploy tooling: chain id lookups, the development
/// chain names and the frontend constants locations.
///
/// Immutable once built. Share it by reference (or behind an `Arc`) rather
/// than rebuilding it per consumer; [`NetworkRegistry::global`] holds one
/// built from the compiled-in defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRegistry {
    networks: BTreeMap<u64, NetworkEntry>,
    development_chains: Vec<String>,
    #[serde(flatten)]
    frontend: FrontendPaths,
}

static GLOBAL_REGISTRY: OnceLock<NetworkRegistry> = OnceLock::new();

impl NetworkRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Default networks and development chains, frontend paths from `config`.
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        RegistryBuilder::with_defaults()
            .frontend_paths(config.frontend_paths()?)
            .build()
    }

    pub fn global() -> &'static NetworkRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::default)
    }

    /// `None` for chain ids that aren't registered. Never logs or fails.
    pub fn lookup(&self, chain_id: u64) -> Option<&NetworkEntry> {
        self.networks.get(&chain_id)
    }

    pub fn is_development_chain(&self, name: &str) -> bool {
        self.development_chains.iter().any(|c| c == name)
    }

    pub fn frontend_contracts_file(&self) -> &Path {
        self.frontend.contracts_file()
    }

    pub fn frontend_abi_directory(&self) -> &Path {
        self.frontend.abi_directory()
    }

    pub fn frontend_paths(&self) -> &FrontendPaths {
        &self.frontend
    }

    /// Entries in ascending chain id order.
    pub fn networks(&self) -> impl Iterator<Item = &NetworkEntry> {
        self.networks.values()
    }

    pub fn development_chains(&self) -> &[String] {
        &self.development_chains
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        let networks = DEFAULT_NETWORKS
            .iter()
            .map(|(chain_id, name)| (*chain_id, NetworkEntry::new(*chain_id, *name)))
            .collect();

        Self {
            networks,
            development_chains: DEFAULT_DEVELOPMENT_CHAINS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            frontend: FrontendPaths::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    networks: Vec<NetworkEntry>,
    development_chains: Vec<String>,
    frontend: Option<FrontendPaths>,
}

impl RegistryBuilder {
    /// Starts from the compiled-in networks and development chains.
    pub fn with_defaults() -> Self {
        let mut builder = Self::default();
        for (chain_id, name) in DEFAULT_NETWORKS {
            builder = builder.network(*chain_id, *name);
        }
        for name in DEFAULT_DEVELOPMENT_CHAINS {
            builder = builder.development_chain(*name);
        }
        builder
    }

    pub fn network(mut self, chain_id: u64, name: impl Into<String>) -> Self {
        self.networks.push(NetworkEntry::new(chain_id, name));
        self
    }

    pub fn development_chain(mut self, name: impl Into<String>) -> Self {
        self.development_chains.push(name.into());
        self
    }

    pub fn frontend_paths(mut self, paths: FrontendPaths) -> Self {
        self.frontend = Some(paths);
        self
    }

    pub fn build(self) -> RegistryResult<NetworkRegistry> {
        let mut networks = BTreeMap::new();
        for entry in self.networks {
            let chain_id = entry.chain_id;
            if networks.insert(chain_id, entry).is_some() {
                return Err(RegistryError::DuplicateChainId(chain_id));
            }
        }

        Ok(NetworkRegistry {
            networks,
            development_chains: self.development_chains,
            frontend: self.frontend.unwrap_or_default(),
        })
    }
}
