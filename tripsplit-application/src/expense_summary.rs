use crate::{
    error::SummaryError,
    model::{GroupId, GroupSummary, PaymentRecord},
    ports::{ExpenseLedger, PaymentRecorder, SettlementOptimizer},
};
use tripsplit_domain::BalanceCalculator;

/// Runs the ledger -> balances -> settlements pipeline for one group.
#[derive(Clone, Copy)]
pub struct ExpenseSummaryService<'a> {
    ledger: &'a dyn ExpenseLedger,
    optimizer: &'a dyn SettlementOptimizer,
}

impl<'a> ExpenseSummaryService<'a> {
    pub fn new(ledger: &'a dyn ExpenseLedger, optimizer: &'a dyn SettlementOptimizer) -> Self {
        Self { ledger, optimizer }
    }

    pub fn summarize(&self, group: &GroupId) -> Result<GroupSummary, SummaryError> {
        let ledger_error = |source| SummaryError::Ledger {
            group: group.clone(),
            source,
        };

        let roster = self.ledger.group_roster(group).map_err(ledger_error)?;
        let expenses = self.ledger.group_expenses(group).map_err(ledger_error)?;

        tracing::debug!(
            group = %group,
            member_count = roster.members.len(),
            expense_count = expenses.len(),
            "Summarizing group expenses"
        );

        let report = BalanceCalculator.calculate_with_report(&expenses, &roster.members);
        if !report.dropped.is_empty() {
            tracing::warn!(
                group = %group,
                dropped_payments = report.dropped.payments,
                dropped_obligations = report.dropped.obligations,
                "Group ledger references members who are no longer in the group"
            );
        }

        let settlements = self.optimizer.optimize(&report.balances);

        Ok(GroupSummary {
            group: group.clone(),
            roster,
            balances: report.balances,
            settlements,
            dropped: report.dropped,
        })
    }

    /// Records every suggested settlement of `summary` as a payment.
    ///
    /// Stops at the first failure; payments recorded before it stay recorded.
    pub fn record_settlements(
        &self,
        summary: &GroupSummary,
        recorder: &dyn PaymentRecorder,
    ) -> Result<usize, SummaryError> {
        for settlement in &summary.settlements {
            let payment = PaymentRecord::from_settlement(&summary.group, settlement);
            recorder
                .record(&payment)
                .map_err(|source| SummaryError::Recording {
                    from: settlement.from.to_string(),
                    to: settlement.to.to_string(),
                    source,
                })?;
            tracing::info!(
                group = %summary.group,
                from = %settlement.from,
                to = %settlement.to,
                amount = %settlement.amount,
                "Recorded settlement payment"
            );
        }

        Ok(summary.settlements.len())
    }
}
