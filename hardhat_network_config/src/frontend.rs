use std::{
    env, io,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::error::{RegistryError, RegistryResult};

pub const DEFAULT_FRONTEND_CONTRACTS_FILE: &str =
    "../portfolio-snake-game-dapp-nextjs/constants/contractAddresses.json";
pub const DEFAULT_FRONTEND_ABI_DIRECTORY: &str = "../portfolio-snake-game-dapp-nextjs/constants/";

/// Where the frontend project expects generated contract addresses and ABIs.
///
/// Both paths are relative to the working directory of whichever process
/// reads or writes them. Nothing here checks that they exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrontendPaths {
    #[serde(rename = "frontendContractsFile")]
    contracts_file: PathBuf,
    #[serde(rename = "frontendAbiDirectory")]
    abi_directory: PathBuf,
}

impl FrontendPaths {
    pub fn new(
        contracts_file: impl Into<PathBuf>,
        abi_directory: impl Into<PathBuf>,
    ) -> RegistryResult<Self> {
        let contracts_file = contracts_file.into();
        let abi_directory = abi_directory.into();

        if contracts_file.as_os_str().is_empty() {
            return Err(RegistryError::EmptyPath {
                field: "contracts_file",
            });
        }
        if abi_directory.as_os_str().is_empty() {
            return Err(RegistryError::EmptyPath {
                field: "abi_directory",
            });
        }

        Ok(Self {
            contracts_file,
            abi_directory,
        })
    }

    pub fn contracts_file(&self) -> &Path {
        &self.contracts_file
    }

    pub fn abi_directory(&self) -> &Path {
        &self.abi_directory
    }

    pub fn contracts_file_in(&self, base: &Path) -> PathBuf {
        base.join(&self.contracts_file)
    }

    pub fn abi_directory_in(&self, base: &Path) -> PathBuf {
        base.join(&self.abi_directory)
    }

    /// Resolve both paths against the current working directory.
    /// Returns `(contracts_file, abi_directory)`.
    pub fn resolve_from_cwd(&self) -> io::Result<(PathBuf, PathBuf)> {
        let cwd = env::current_dir()?;
        Ok((self.contracts_file_in(&cwd), self.abi_directory_in(&cwd)))
    }
}

impl Default for FrontendPaths {
    fn default() -> Self {
        Self {
            contracts_file: PathBuf::from(DEFAULT_FRONTEND_CONTRACTS_FILE),
            abi_directory: PathBuf::from(DEFAULT_FRONTEND_ABI_DIRECTORY),
        }
    }
}
