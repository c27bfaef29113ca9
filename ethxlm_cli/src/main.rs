use clap::Parser;
use ethxlm_cli::config::{CliCommand, Config, GlobalOptions};
use ethxlm_cli::ethereum::init_ethereum;
use ethxlm_cli::htlc_commands::exec_htlc_command;
use ethxlm_cli::network::NetworkClients;
use ethxlm_cli::stellar::init_stellar;
use libethxlm::storage::{JsonFileStore, StateStore};
use log::*;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config: Config = Config::parse();
    let (global_options, command) = config.to_parts();

    let result = match command {
        CliCommand::Init => run_init(&global_options, true, true).await,
        CliCommand::InitStellar => run_init(&global_options, true, false).await,
        CliCommand::InitEthereum => run_init(&global_options, false, true).await,
        CliCommand::Show => show_state(&global_options),
        CliCommand::Htlc(htlc_cmd) => exec_htlc_command(htlc_cmd),
    };

    if let Err(err) = result {
        eprintln!("** Error ** \n {err}");
        std::process::exit(1);
    }
}

async fn run_init(options: &GlobalOptions, stellar: bool, ethereum: bool) -> Result<(), anyhow::Error> {
    info!("Using state file {}", options.state_file.display());
    let mut store = JsonFileStore::new(&options.state_file);
    let clients = NetworkClients::new(&options.endpoints)?;
    if stellar {
        println!("----- init stellar -----");
        init_stellar(&mut store, &clients.horizon, &clients.friendbot).await?;
    }
    if ethereum {
        println!("----- init ethereum -----");
        init_ethereum(&mut store, &clients.ethereum).await?;
    }
    Ok(())
}

fn show_state(options: &GlobalOptions) -> Result<(), anyhow::Error> {
    let store = JsonFileStore::new(&options.state_file);
    let state = store.read()?;
    if state.is_empty() {
        println!("No credentials stored in {}", options.state_file.display());
        return Ok(());
    }
    let or_none = |s: &str| if s.is_empty() { "<none>".to_string() } else { s.to_string() };
    println!("Stellar Public Key: {}", or_none(&state.stellar.keypair.public));
    println!("Ethereum Address:   {}", or_none(&state.ethereum.address));
    Ok(())
}
