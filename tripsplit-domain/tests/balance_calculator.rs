use proptest::prelude::*;
use tripsplit_domain::{
    BalanceCalculator, Expense, ExpenseId, ExpenseSplit, MemberId, Money, calculate_balances,
};

const OUTSIDER: &str = "outsider";

fn member(idx: usize) -> MemberId {
    MemberId::new(format!("m{idx}"))
}

/// Splits `cents` over the participants selected by `mask`, handing leftover
/// cents to the first participants so the splits add up to the amount.
fn build_splits(
    cents: i64,
    mask: usize,
    member_count: usize,
    settled_mask: usize,
    include_outsider: bool,
) -> Vec<ExpenseSplit> {
    let mut participants: Vec<MemberId> = (0..member_count)
        .filter(|idx| mask & (1 << idx) != 0)
        .map(member)
        .collect();
    if include_outsider {
        participants.push(MemberId::from(OUTSIDER));
    }
    if participants.is_empty() {
        participants.push(member(0));
    }

    let count = participants.len() as i64;
    let base = cents / count;
    let remainder = (cents % count) as usize;

    participants
        .into_iter()
        .enumerate()
        .map(|(idx, user_id)| {
            let share = base + i64::from(idx < remainder);
            ExpenseSplit {
                user_id,
                amount_owed: Money::new(share, 2),
                is_settled: settled_mask & (1 << idx) != 0,
            }
        })
        .collect()
}

prop_compose! {
    fn ledger()(
        member_count in 1usize..=6,
        raw in prop::collection::vec(
            (1i64..=100_000, 0usize..=6, 0usize..=63, 0usize..=127, any::<bool>()),
            0..=20,
        ),
    ) -> (Vec<MemberId>, Vec<Expense>) {
        let members: Vec<MemberId> = (0..member_count).map(member).collect();
        let expenses = raw
            .into_iter()
            .enumerate()
            .map(|(idx, (cents, payer_idx, mask, settled_mask, include_outsider))| {
                // Indexes past the roster stand for a payer outside it.
                let paid_by = if payer_idx >= member_count {
                    MemberId::from(OUTSIDER)
                } else {
                    member(payer_idx)
                };
                Expense {
                    id: ExpenseId::new(format!("e{idx}")),
                    amount: Money::new(cents, 2),
                    paid_by,
                    splits: build_splits(cents, mask, member_count, settled_mask, include_outsider),
                }
            })
            .collect();
        (members, expenses)
    }
}

proptest! {
    #[test]
    fn one_entry_per_roster_member((members, expenses) in ledger()) {
        let balances = calculate_balances(&expenses, &members);

        prop_assert_eq!(balances.len(), members.len());
        for id in &members {
            prop_assert!(balances.contains_key(id));
        }
    }

    #[test]
    fn paid_and_owed_are_conserved((members, expenses) in ledger()) {
        let balances = calculate_balances(&expenses, &members);

        let expected_paid: Money = expenses
            .iter()
            .filter(|expense| members.contains(&expense.paid_by))
            .map(|expense| expense.amount)
            .sum();
        let expected_owed: Money = expenses
            .iter()
            .flat_map(|expense| expense.splits.iter())
            .filter(|split| !split.is_settled && members.contains(&split.user_id))
            .map(|split| split.amount_owed)
            .sum();

        let paid: Money = balances.values().map(|entry| entry.paid).sum();
        let owed: Money = balances.values().map(|entry| entry.owed).sum();
        prop_assert_eq!(paid, expected_paid);
        prop_assert_eq!(owed, expected_owed);

        for entry in balances.values() {
            prop_assert_eq!(entry.balance, entry.paid - entry.owed);
        }
    }

    #[test]
    fn expense_order_does_not_matter((members, expenses) in ledger()) {
        let mut reversed = expenses.clone();
        reversed.reverse();

        prop_assert_eq!(
            calculate_balances(&expenses, &members),
            calculate_balances(&reversed, &members)
        );
    }

    #[test]
    fn settling_a_split_never_increases_owed(
        (members, expenses) in ledger(),
        expense_pick in any::<prop::sample::Index>(),
        split_pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!expenses.is_empty());
        let expense_idx = expense_pick.index(expenses.len());
        let split_count = expenses[expense_idx].splits.len();
        let split_idx = split_pick.index(split_count);

        let mut toggled = expenses.clone();
        toggled[expense_idx].splits[split_idx].is_settled = true;
        let user_id = toggled[expense_idx].splits[split_idx].user_id.clone();

        let before = calculate_balances(&expenses, &members);
        let after = calculate_balances(&toggled, &members);

        if let (Some(before), Some(after)) = (before.get(&user_id), after.get(&user_id)) {
            prop_assert!(after.owed <= before.owed);
        }
    }

    #[test]
    fn report_counts_match_unknown_references((members, expenses) in ledger()) {
        let report = BalanceCalculator.calculate_with_report(&expenses, &members);

        let unknown_payers = expenses
            .iter()
            .filter(|expense| !members.contains(&expense.paid_by))
            .count();
        let unknown_debtors = expenses
            .iter()
            .flat_map(|expense| expense.splits.iter())
            .filter(|split| !split.is_settled && !members.contains(&split.user_id))
            .count();

        prop_assert_eq!(report.dropped.payments, unknown_payers);
        prop_assert_eq!(report.dropped.obligations, unknown_debtors);
    }
}
