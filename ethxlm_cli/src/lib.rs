pub mod config;
pub mod error;
pub mod ethereum;
pub mod htlc_commands;
pub mod network;
pub mod stellar;
