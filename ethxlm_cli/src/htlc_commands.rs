use crate::config::{HtlcCommand, IdKind};
use anyhow::anyhow;
use libethxlm::commitment::{create_hashlock, generate_secret_pair, verify_secret};
use libethxlm::ids::{generate_htlc_id, generate_order_id, HtlcKind};
use libethxlm::timelocks::calculate_timelocks;

pub fn exec_htlc_command(cmd: HtlcCommand) -> Result<(), anyhow::Error> {
    match cmd {
        HtlcCommand::Secret => {
            let pair = generate_secret_pair();
            println!("Secret:   {}", pair.secret);
            println!("Hashlock: {}", pair.hashlock);
        }
        HtlcCommand::Hashlock { secret } => {
            println!("{}", create_hashlock(&secret)?);
        }
        HtlcCommand::Verify { secret, hashlock } => {
            if !verify_secret(&secret, &hashlock) {
                println!("invalid");
                return Err(anyhow!("The secret does not match the hashlock"));
            }
            println!("valid");
        }
        HtlcCommand::Id { kind } => println!("{}", new_id(kind)),
        HtlcCommand::Timelocks(args) => {
            let schedule = calculate_timelocks(args.into());
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
    }
    Ok(())
}

pub fn new_id(kind: IdKind) -> String {
    match kind {
        IdKind::Order => generate_order_id(),
        IdKind::Ethereum => generate_htlc_id(HtlcKind::Ethereum),
        IdKind::Stellar => generate_htlc_id(HtlcKind::Stellar),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::TimelockArgs;

    const ZERO_SECRET: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
    const ZERO_SECRET_HASHLOCK: &str = "0x66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925";

    #[test]
    fn ids_by_kind() {
        assert!(new_id(IdKind::Order).starts_with("order_"));
        assert!(new_id(IdKind::Ethereum).starts_with("ethereum_htlc_"));
        assert!(new_id(IdKind::Stellar).starts_with("stellar_htlc_"));
    }

    #[test]
    fn verify_outcome_drives_the_result() {
        let ok = HtlcCommand::Verify { secret: ZERO_SECRET.into(), hashlock: ZERO_SECRET_HASHLOCK.into() };
        assert!(exec_htlc_command(ok).is_ok());
        let bad = HtlcCommand::Verify { secret: ZERO_SECRET.into(), hashlock: ZERO_SECRET.into() };
        assert!(exec_htlc_command(bad).is_err());
    }

    #[test]
    fn malformed_secret_is_an_error() {
        assert!(exec_htlc_command(HtlcCommand::Hashlock { secret: "0x1234".into() }).is_err());
        assert!(exec_htlc_command(HtlcCommand::Hashlock { secret: ZERO_SECRET.into() }).is_ok());
    }

    #[test]
    fn other_commands_succeed() {
        assert!(exec_htlc_command(HtlcCommand::Secret).is_ok());
        let args = TimelockArgs { duration: 60, maker_timeout: 30, taker_timeout: 90 };
        assert!(exec_htlc_command(HtlcCommand::Timelocks(args)).is_ok());
    }
}
