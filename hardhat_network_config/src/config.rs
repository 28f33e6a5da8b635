use std::{
    env::{self, VarError},
    path::PathBuf,
};

use crate::{
    error::{RegistryError, RegistryResult},
    frontend::{FrontendPaths, DEFAULT_FRONTEND_ABI_DIRECTORY, DEFAULT_FRONTEND_CONTRACTS_FILE},
};

pub const FRONTEND_CONTRACTS_FILE_ENV_VAR: &str = "FRONTEND_CONTRACTS_FILE";
pub const FRONTEND_ABI_LOCATION_ENV_VAR: &str = "FRONTEND_ABI_LOCATION";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    pub frontend_contracts_file: PathBuf,
    pub frontend_abi_directory: PathBuf,
}

impl RegistryConfig {
    /// load from env, else local
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::load_with(|key| env::var(key))
    }

    /// [`Self::load`] over any key -> value source shaped like [`env::var`].
    pub fn load_with<F>(lookup: F) -> Self
    where
        F: FnMut(&'static str) -> Result<String, VarError>,
    {
        match Self::from_lookup(lookup) {
            Ok(c) => {
                log::debug!("Loaded registry config from env");
                c
            }
            Err(e) => {
                log::warn!("Failed to load registry config from env: {e}");
                log::warn!("Loading local registry config");
                Self::local()
            }
        }
    }

    pub fn local() -> Self {
        Self {
            frontend_contracts_file: PathBuf::from(DEFAULT_FRONTEND_CONTRACTS_FILE),
            frontend_abi_directory: PathBuf::from(DEFAULT_FRONTEND_ABI_DIRECTORY),
        }
    }

    /// Reads overrides from the process env (after loading any `.env` file).
    /// Unset vars keep their local default.
    pub fn try_from_env() -> RegistryResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    /// Same as [`Self::try_from_env`] but over any key -> value source.
    pub fn from_lookup<F>(mut lookup: F) -> RegistryResult<Self>
    where
        F: FnMut(&'static str) -> Result<String, VarError>,
    {
        let local = Self::local();

        let frontend_contracts_file = read_path(&mut lookup, FRONTEND_CONTRACTS_FILE_ENV_VAR)?
            .unwrap_or(local.frontend_contracts_file);
        let frontend_abi_directory = read_path(&mut lookup, FRONTEND_ABI_LOCATION_ENV_VAR)?
            .unwrap_or(local.frontend_abi_directory);

        Ok(Self {
            frontend_contracts_file,
            frontend_abi_directory,
        })
    }

    pub fn frontend_paths(&self) -> RegistryResult<FrontendPaths> {
        FrontendPaths::new(
            self.frontend_contracts_file.clone(),
            self.frontend_abi_directory.clone(),
        )
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::local()
    }
}

fn read_path<F>(lookup: &mut F, var: &'static str) -> RegistryResult<Option<PathBuf>>
where
    F: FnMut(&'static str) -> Result<String, VarError>,
{
    let value = match lookup(var) {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(_)) => {
            return Err(RegistryError::InvalidEnvVar {
                var,
                reason: "value is not valid unicode".to_string(),
            })
        }
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(RegistryError::InvalidEnvVar {
            var,
            reason: "value is empty".to_string(),
        });
    }
    log::debug!("{var} overridden to {value}");
    Ok(Some(PathBuf::from(value)))
}
