use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::{path::PathBuf, str::FromStr};
use tripsplit_domain::{MemberId, Money, SplitMember, SplitType};

#[derive(Parser)]
#[command(
    name = "tripsplit",
    about = "Shared trip expenses: balances, suggested payments and split previews",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show balances and suggested payments for a group
    Summary(LedgerArgs),
    /// Record the suggested payments of a group
    Settle(SettleArgs),
    /// Preview how an amount splits between members
    Split(SplitArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct LedgerArgs {
    /// Ledger file (overrides TRIPSPLIT_LEDGER)
    #[arg(long)]
    pub ledger: Option<PathBuf>,

    /// Group id (overrides TRIPSPLIT_GROUP)
    #[arg(long)]
    pub group: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct SettleArgs {
    #[command(flatten)]
    pub ledger: LedgerArgs,

    /// Payment log file (overrides TRIPSPLIT_PAYMENT_LOG)
    #[arg(long)]
    pub payment_log: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct SplitArgs {
    #[arg(value_parser = parse_amount)]
    pub amount: Money,

    #[arg(long = "type", default_value = "equal")]
    pub split_type: SplitType,

    /// MEMBER or MEMBER=VALUE, where VALUE is a percentage or a custom amount
    #[arg(required = true, value_name = "MEMBER[=VALUE]", value_parser = parse_member)]
    pub members: Vec<MemberArg>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberArg {
    pub id: MemberId,
    pub value: Option<Decimal>,
}

impl MemberArg {
    pub fn into_split_member(self, split_type: SplitType) -> SplitMember {
        match (split_type, self.value) {
            (SplitType::Percentage, Some(pct)) => SplitMember::with_percentage(self.id, pct),
            (SplitType::Custom, Some(amount)) => {
                SplitMember::with_amount(self.id, Money::from_decimal(amount))
            }
            _ => SplitMember::new(self.id),
        }
    }
}

fn parse_amount(s: &str) -> Result<Money, String> {
    Decimal::from_str(s.trim())
        .map(Money::from_decimal)
        .map_err(|err| format!("invalid amount '{s}': {err}"))
}

fn parse_member(s: &str) -> Result<MemberArg, String> {
    let (id, value) = match s.split_once('=') {
        Some((id, value)) => {
            let value = Decimal::from_str(value.trim())
                .map_err(|err| format!("invalid value '{value}' for member '{id}': {err}"))?;
            (id, Some(value))
        }
        None => (s, None),
    };

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing member id in '{s}'"));
    }

    Ok(MemberArg {
        id: MemberId::from(id),
        value,
    })
}
