use std::io::{self, Write};

use clap::{Parser, Subcommand};
use hardhat_network_config::{NetworkRegistry, RegistryConfig};

#[derive(Debug, Parser)]
#[command(about = "Query the hardhat network config registry")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the network name registered for a chain id
    Lookup { chain_id: u64 },
    /// Check whether a network name is a local development chain
    IsDev { name: String },
    /// Print where the frontend expects contract addresses and ABIs
    Paths {
        /// resolve against the current directory
        #[arg(long)]
        resolve: bool,
    },
    /// Print the whole registry as JSON
    Dump,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = RegistryConfig::load();
    let registry = NetworkRegistry::from_config(&config)?;
    log::info!(
        "registry loaded with {} networks",
        registry.networks().count()
    );

    run(&registry, cli.command, &mut io::stdout().lock())
}

fn run(registry: &NetworkRegistry, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Lookup { chain_id } => match registry.lookup(chain_id) {
            Some(network) => {
                writeln!(out, "{chain_id}: {}", network.name)?;
                if let Some(chain) = network.chain() {
                    log::info!("ethers knows chain {chain_id} as {chain}");
                }
            }
            None => {
                log::debug!("no network registered for chain id {chain_id}");
                writeln!(out, "{chain_id}: unknown network")?;
            }
        },
        Command::IsDev { name } => {
            writeln!(out, "{name}: {}", registry.is_development_chain(&name))?;
        }
        Command::Paths { resolve } => {
            let (contracts_file, abi_directory) = if resolve {
                registry.frontend_paths().resolve_from_cwd()?
            } else {
                (
                    registry.frontend_contracts_file().to_path_buf(),
                    registry.frontend_abi_directory().to_path_buf(),
                )
            };
            writeln!(out, "contracts file: {}", contracts_file.display())?;
            writeln!(out, "abi directory:  {}", abi_directory.display())?;
        }
        Command::Dump => {
            writeln!(out, "{}", registry.to_json()?)?;
        }
    }

    Ok(())
}
