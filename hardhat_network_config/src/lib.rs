//! Chain id to network name lookups for a hardhat project, the set of
//! networks treated as local development chains, and the locations a
//! frontend project expects its generated contract constants at.

pub mod config;
pub mod error;
pub mod frontend;
pub mod networks;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use frontend::FrontendPaths;
pub use networks::NetworkEntry;
pub use registry::{NetworkRegistry, RegistryBuilder};
