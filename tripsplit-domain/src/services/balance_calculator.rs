use crate::model::{Balance, Expense, MemberBalances, MemberId, Money};

/// Reduces a group's expenses into one net balance per roster member.
pub struct BalanceCalculator;

/// Contributions that referenced members outside the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DroppedContributions {
    /// Expenses whose payer is not in the roster.
    pub payments: usize,
    pub payment_total: Money,
    /// Unsettled splits owed by members not in the roster.
    pub obligations: usize,
    pub obligation_total: Money,
}

impl DroppedContributions {
    pub fn is_empty(&self) -> bool {
        self.payments == 0 && self.obligations == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceReport {
    pub balances: MemberBalances,
    pub dropped: DroppedContributions,
}

impl BalanceCalculator {
    /// Calculate `paid - owed` for every member in `member_ids`.
    ///
    /// Every roster member gets an entry, including members without any
    /// activity. Payers and debtors outside the roster are ignored (with a
    /// warning), and settled splits never count toward `owed`. Totals clamp
    /// at [`Money::MAX`] rather than overflow.
    pub fn calculate(&self, expenses: &[Expense], member_ids: &[MemberId]) -> MemberBalances {
        let BalanceReport { balances, dropped } = self.calculate_with_report(expenses, member_ids);

        if !dropped.is_empty() {
            tracing::warn!(
                dropped_payments = dropped.payments,
                dropped_payment_total = %dropped.payment_total,
                dropped_obligations = dropped.obligations,
                dropped_obligation_total = %dropped.obligation_total,
                member_count = balances.len(),
                "Expenses reference members outside the roster"
            );
        }

        balances
    }

    /// Same as [`BalanceCalculator::calculate`], but hands the dropped
    /// contributions back to the caller instead of logging them.
    pub fn calculate_with_report(
        &self,
        expenses: &[Expense],
        member_ids: &[MemberId],
    ) -> BalanceReport {
        let mut balances: MemberBalances = member_ids
            .iter()
            .map(|id| (id.clone(), Balance::zero(id.clone())))
            .collect();
        let mut dropped = DroppedContributions::default();

        for expense in expenses {
            match balances.get_mut(&expense.paid_by) {
                Some(payer) => payer.paid = payer.paid.saturating_add(expense.amount),
                None => {
                    dropped.payments += 1;
                    dropped.payment_total =
                        dropped.payment_total.saturating_add(expense.amount);
                }
            }

            for split in expense.splits.iter().filter(|split| !split.is_settled) {
                match balances.get_mut(&split.user_id) {
                    Some(debtor) => {
                        debtor.owed = debtor.owed.saturating_add(split.amount_owed);
                    }
                    None => {
                        dropped.obligations += 1;
                        dropped.obligation_total =
                            dropped.obligation_total.saturating_add(split.amount_owed);
                    }
                }
            }
        }

        for entry in balances.values_mut() {
            entry.balance = entry.paid.saturating_sub(entry.owed);
        }

        tracing::debug!(
            expense_count = expenses.len(),
            member_count = balances.len(),
            "Balances calculated"
        );

        BalanceReport { balances, dropped }
    }
}

pub fn calculate_balances(expenses: &[Expense], member_ids: &[MemberId]) -> MemberBalances {
    BalanceCalculator.calculate(expenses, member_ids)
}
