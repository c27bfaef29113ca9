use clap::{Args, Parser, Subcommand, ValueEnum};
use libethxlm::storage::DEFAULT_STATE_FILE;
use libethxlm::timelocks::{
    TimelockParams, DEFAULT_DURATION_SECS, DEFAULT_MAKER_TIMEOUT_SECS, DEFAULT_TAKER_TIMEOUT_SECS,
};
use std::path::PathBuf;

pub const DEFAULT_ETH_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";
pub const DEFAULT_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";
pub const DEFAULT_FRIENDBOT_URL: &str = "https://friendbot.stellar.org";

/// Ethereum / Stellar testnet account bootstrapper.
///
/// Generates and funds test accounts on both chains, keeps their credentials in a local JSON state file and provides
/// the hashlock helpers used by atomic swaps between them.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Config {
    /// Path to the JSON state file. Relative paths are resolved against the working directory.
    #[arg(long = "state-file", short = 's', env = "ETHXLM_STATE_FILE", default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,
    #[command(flatten)]
    pub endpoints: Endpoints,
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Args)]
pub struct Endpoints {
    /// Ethereum JSON-RPC endpoint used for balance queries.
    #[arg(long = "eth-rpc-url", env = "ETHXLM_ETH_RPC_URL", default_value = DEFAULT_ETH_RPC_URL)]
    pub eth_rpc_url: String,
    /// Stellar Horizon server.
    #[arg(long = "horizon-url", env = "ETHXLM_HORIZON_URL", default_value = DEFAULT_HORIZON_URL)]
    pub horizon_url: String,
    /// Stellar Friendbot faucet.
    #[arg(long = "friendbot-url", env = "ETHXLM_FRIENDBOT_URL", default_value = DEFAULT_FRIENDBOT_URL)]
    pub friendbot_url: String,
    /// Timeout for each network request, in seconds.
    #[arg(long = "timeout", env = "ETHXLM_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Set up the Stellar account, then the Ethereum account.
    #[command(name = "init")]
    Init,
    /// Load or create the Stellar keypair, fund it from Friendbot and print its balances.
    #[command(name = "init-stellar", alias = "stellar")]
    InitStellar,
    /// Load or create the Ethereum account and print its balance.
    #[command(name = "init-ethereum", alias = "ethereum")]
    InitEthereum,
    /// Print the public addresses held in the state file.
    #[command(name = "show", alias = "ls")]
    Show,
    /// Secrets, hashlocks, identifiers and deadlines for HTLCs.
    #[command(subcommand, name = "htlc")]
    Htlc(HtlcCommand),
}

#[derive(Debug, Subcommand)]
pub enum HtlcCommand {
    /// Generate a random secret and its hashlock.
    #[command(name = "secret", alias = "new")]
    Secret,
    /// Print the SHA-256 hashlock of a 32-byte hex secret.
    #[command(name = "hashlock")]
    Hashlock {
        /// The secret, 64 hex characters with an optional 0x prefix.
        secret: String,
    },
    /// Check a secret against a hashlock. Exits with an error status if they do not match.
    #[command(name = "verify")]
    Verify { secret: String, hashlock: String },
    /// Generate an order or HTLC identifier.
    #[command(name = "id")]
    Id {
        #[arg(value_enum, default_value_t = IdKind::Order)]
        kind: IdKind,
    },
    /// Compute a deadline schedule starting now.
    #[command(name = "timelocks")]
    Timelocks(TimelockArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdKind {
    Order,
    Ethereum,
    Stellar,
}

#[derive(Debug, Clone, Args)]
pub struct TimelockArgs {
    /// Total lifetime of the HTLC, in seconds.
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS, allow_negative_numbers = true)]
    pub duration: i64,
    /// Length of the maker's exclusive window, in seconds.
    #[arg(long = "maker-timeout", default_value_t = DEFAULT_MAKER_TIMEOUT_SECS, allow_negative_numbers = true)]
    pub maker_timeout: i64,
    /// Length of the taker's window before the refund deadline, in seconds.
    #[arg(long = "taker-timeout", default_value_t = DEFAULT_TAKER_TIMEOUT_SECS, allow_negative_numbers = true)]
    pub taker_timeout: i64,
}

impl From<TimelockArgs> for TimelockParams {
    fn from(args: TimelockArgs) -> Self {
        TimelockParams::new(args.duration, args.maker_timeout, args.taker_timeout)
    }
}

pub struct GlobalOptions {
    pub state_file: PathBuf,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn to_parts(self) -> (GlobalOptions, CliCommand) {
        let global = GlobalOptions { state_file: self.state_file, endpoints: self.endpoints };
        (global, self.command)
    }
}
