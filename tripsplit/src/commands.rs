use crate::{
    bootstrap::AppConfig,
    cli::{Cli, Command, SplitArgs},
};
use std::{
    collections::HashMap,
    io::{self, Write},
};
use thiserror::Error;
use tripsplit_application::{
    ExpenseSummaryService, GroupId, GroupSummary, LedgerError, SummaryError,
};
use tripsplit_domain::{MemberId, SplitCalculator, SplitMember};
use tripsplit_i18n as i18n;
use tripsplit_infrastructure::{GreedySettlementOptimizer, JsonLedger, JsonLinesPaymentLog};
use tripsplit_presentation::{SettlementPresenter, SplitPresenter};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", i18n::MISSING_GROUP)]
    MissingGroup,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub fn run_command(cli: Cli, config: AppConfig, out: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Summary(args) => summary(&config.with_ledger_args(&args), out),
        Command::Settle(args) => settle(
            &config
                .with_ledger_args(&args.ledger)
                .with_payment_log(args.payment_log.as_ref()),
            out,
        ),
        Command::Split(args) => split(args, out),
    }
}

fn summary(config: &AppConfig, out: &mut dyn Write) -> Result<(), CliError> {
    let ledger = JsonLedger::from_path(&config.ledger_path)?;
    let group = resolve_group(config, &ledger)?;
    let optimizer = GreedySettlementOptimizer;

    let summary = ExpenseSummaryService::new(&ledger, &optimizer).summarize(&group)?;
    write_summary(&summary, out)?;
    Ok(())
}

fn settle(config: &AppConfig, out: &mut dyn Write) -> Result<(), CliError> {
    let ledger = JsonLedger::from_path(&config.ledger_path)?;
    let group = resolve_group(config, &ledger)?;
    let optimizer = GreedySettlementOptimizer;
    let service = ExpenseSummaryService::new(&ledger, &optimizer);

    let summary = service.summarize(&group)?;
    write_summary(&summary, out)?;

    if summary.is_settled() {
        return Ok(());
    }

    let payment_log = JsonLinesPaymentLog::new(&config.payment_log_path);
    let recorded = service.record_settlements(&summary, &payment_log)?;
    writeln!(out, "{}", i18n::payments_recorded(recorded))?;
    Ok(())
}

fn split(args: SplitArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let members: Vec<SplitMember> = args
        .members
        .into_iter()
        .map(|member| member.into_split_member(args.split_type))
        .collect();

    let shares = SplitCalculator.calculate(args.amount, args.split_type, &members);
    let directory: HashMap<MemberId, String> = HashMap::new();
    write!(
        out,
        "{}",
        SplitPresenter::render(args.split_type, &shares, &directory)
    )?;
    Ok(())
}

/// Falls back to the ledger's only group when none is configured.
fn resolve_group(config: &AppConfig, ledger: &JsonLedger) -> Result<GroupId, CliError> {
    config
        .group
        .clone()
        .or_else(|| ledger.sole_group())
        .ok_or(CliError::MissingGroup)
}

fn write_summary(summary: &GroupSummary, out: &mut dyn Write) -> io::Result<()> {
    let view = SettlementPresenter::render(summary);

    writeln!(out, "{}", i18n::BALANCES)?;
    write!(out, "{}", view.balance_table)?;
    writeln!(out)?;

    match &view.transfer_table {
        Some(table) => {
            writeln!(out, "{}", i18n::SUGGESTED_PAYMENTS)?;
            write!(out, "{table}")?;
        }
        None => writeln!(out, "{}", i18n::ALL_SETTLED)?,
    }

    if let Some(notice) = &view.notice {
        writeln!(out)?;
        writeln!(out, "{notice}")?;
    }

    Ok(())
}
