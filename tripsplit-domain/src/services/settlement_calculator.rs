use crate::{
    model::{MemberBalances, MemberId, Money, Settlement},
    services::tolerance::{is_credit, is_debt, is_negligible, settlement_epsilon},
};

/// Settlement calculation service
///
/// Greedy largest-first matching of debtors against creditors. It produces at
/// most `debtors + creditors - 1` transfers, which is minimal when only a few
/// distinct balance magnitudes are involved but not in general: the true
/// minimum is a subset-sum style search and is not attempted.
pub struct SettlementCalculator;

struct Outstanding {
    member: MemberId,
    remaining: Money,
}

impl SettlementCalculator {
    /// Calculate the transfers that bring every balance within 0.01 of zero
    ///
    /// Only `user_id` and `balance` are read; the caller's map is left untouched.
    ///
    /// # Arguments
    /// * `balances` - Current balance table, usually from the balance calculator
    ///
    /// # Returns
    /// Transfers ordered by matching step, each above 0.01 and rounded to cents
    pub fn calculate(&self, balances: &MemberBalances) -> Vec<Settlement> {
        let mut debtors: Vec<Outstanding> = Vec::new();
        let mut creditors: Vec<Outstanding> = Vec::new();

        for entry in balances.values() {
            if is_debt(entry.balance) {
                debtors.push(Outstanding {
                    member: entry.user_id.clone(),
                    remaining: entry.balance.abs(),
                });
            } else if is_credit(entry.balance) {
                creditors.push(Outstanding {
                    member: entry.user_id.clone(),
                    remaining: entry.balance,
                });
            }
        }

        // Stable sorts keep roster order among equal amounts.
        debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

        let mut settlements =
            Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while let (Some(debtor), Some(creditor)) =
            (debtors.get_mut(debtor_idx), creditors.get_mut(creditor_idx))
        {
            let amount = debtor.remaining.min(creditor.remaining);
            if amount > settlement_epsilon() {
                settlements.push(Settlement {
                    from: debtor.member.clone(),
                    to: creditor.member.clone(),
                    amount: amount.round_cents(),
                });
            }

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if is_negligible(debtor.remaining) {
                debtor_idx += 1;
            }
            if is_negligible(creditor.remaining) {
                creditor_idx += 1;
            }
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            settlement_count = settlements.len(),
            "Settlements calculated"
        );

        settlements
    }
}

pub fn calculate_settlements(balances: &MemberBalances) -> Vec<Settlement> {
    SettlementCalculator.calculate(balances)
}

/// Returns a copy of `balances` with every settlement paid.
///
/// The payer's balance rises by the amount and the payee's falls by it;
/// `paid` and `owed` keep describing the original expenses.
pub fn apply_settlements(balances: &MemberBalances, settlements: &[Settlement]) -> MemberBalances {
    let mut applied = balances.clone();
    for settlement in settlements {
        if let Some(payer) = applied.get_mut(&settlement.from) {
            payer.balance = payer.balance.saturating_add(settlement.amount);
        }
        if let Some(payee) = applied.get_mut(&settlement.to) {
            payee.balance = payee.balance.saturating_sub(settlement.amount);
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Balance;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> SettlementCalculator {
        SettlementCalculator
    }

    fn balances(entries: &[(&str, Money)]) -> MemberBalances {
        entries
            .iter()
            .map(|(id, amount)| {
                let member = MemberId::from(*id);
                let entry = Balance {
                    balance: *amount,
                    ..Balance::zero(member.clone())
                };
                (member, entry)
            })
            .collect()
    }

    fn whole(entries: &[(&str, i64)]) -> MemberBalances {
        let converted: Vec<(&str, Money)> = entries
            .iter()
            .map(|(id, amount)| (*id, Money::from_i64(*amount)))
            .collect();
        balances(&converted)
    }

    fn transfer(from: &str, to: &str, amount: Money) -> Settlement {
        Settlement {
            from: MemberId::from(from),
            to: MemberId::from(to),
            amount,
        }
    }

    #[rstest]
    #[case::one_creditor_two_debtors(
        whole(&[("user1", 50), ("user2", -30), ("user3", -20)]),
        vec![
            transfer("user2", "user1", Money::from_i64(30)),
            transfer("user3", "user1", Money::from_i64(20)),
        ]
    )]
    #[case::single_pair(
        whole(&[("user1", 100), ("user2", -100)]),
        vec![transfer("user2", "user1", Money::from_i64(100))]
    )]
    #[case::already_balanced(whole(&[("user1", 0), ("user2", 0)]), vec![])]
    #[case::empty(whole(&[]), vec![])]
    #[case::largest_matched_first(
        whole(&[("a", -10), ("b", -40), ("c", 25), ("d", 25)]),
        vec![
            transfer("b", "c", Money::from_i64(25)),
            transfer("b", "d", Money::from_i64(15)),
            transfer("a", "d", Money::from_i64(10)),
        ]
    )]
    #[case::ties_keep_roster_order(
        whole(&[("x", -10), ("y", -10), ("z", 20)]),
        vec![
            transfer("x", "z", Money::from_i64(10)),
            transfer("y", "z", Money::from_i64(10)),
        ]
    )]
    #[case::within_tolerance_ignored(
        balances(&[("user1", Money::new(1, 2)), ("user2", Money::new(-1, 2))]),
        vec![]
    )]
    #[case::uneven_thirds(
        balances(&[
            ("user1", Money::new(3333, 2)),
            ("user2", Money::new(-1666, 2)),
            ("user3", Money::new(-1667, 2)),
        ]),
        vec![
            transfer("user3", "user1", Money::new(1667, 2)),
            transfer("user2", "user1", Money::new(1666, 2)),
        ]
    )]
    #[case::amounts_rounded_to_cents(
        balances(&[("user1", Money::new(100_004, 4)), ("user2", Money::new(-100_004, 4))]),
        vec![transfer("user2", "user1", Money::new(1000, 2))]
    )]
    fn settlement_calculator_cases(
        calculator: SettlementCalculator,
        #[case] input: MemberBalances,
        #[case] expected: Vec<Settlement>,
    ) {
        assert_eq!(calculator.calculate(&input), expected);
    }

    #[rstest]
    fn input_balances_are_not_mutated(calculator: SettlementCalculator) {
        let input = whole(&[("user1", 50), ("user2", -30), ("user3", -20)]);
        let snapshot = input.clone();

        let _ = calculator.calculate(&input);

        assert_eq!(input, snapshot);
    }

    #[rstest]
    fn applying_settlements_converges(calculator: SettlementCalculator) {
        let input = balances(&[
            ("a", Money::new(4550, 2)),
            ("b", Money::new(-1225, 2)),
            ("c", Money::new(-3325, 2)),
            ("d", Money::new(775, 2)),
            ("e", Money::new(-775, 2)),
        ]);

        let settlements = calculator.calculate(&input);
        let applied = apply_settlements(&input, &settlements);

        assert!(settlements.len() <= 4);
        assert!(applied.values().all(|entry| is_negligible(entry.balance)));
    }

    #[test]
    fn apply_settlements_ignores_unknown_members() {
        let input = whole(&[("user1", 10), ("user2", -10)]);
        let applied = apply_settlements(&input, &[transfer("ghost", "user1", Money::from_i64(10))]);

        assert_eq!(applied[&MemberId::from("user1")].balance, Money::ZERO);
        assert_eq!(applied[&MemberId::from("user2")].balance, Money::from_i64(-10));
        assert_eq!(applied.len(), 2);
    }

    #[test]
    fn free_function_matches_service() {
        let input = whole(&[("user1", 100), ("user2", -100)]);
        assert_eq!(
            calculate_settlements(&input),
            SettlementCalculator.calculate(&input)
        );
    }
}
