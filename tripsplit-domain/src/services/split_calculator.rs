use crate::model::{Money, SplitMember, SplitShare, SplitType};
use rust_decimal::Decimal;

/// Turns an expense amount into per-member shares.
pub struct SplitCalculator;

impl SplitCalculator {
    /// Equal shares are each rounded to cents and the leftover cent (if any)
    /// is not handed to anyone, so `100 / 3` yields three shares of `33.33`.
    /// Percentages are not checked to add up to 100.
    pub fn calculate(
        &self,
        amount: Money,
        split_type: SplitType,
        members: &[SplitMember],
    ) -> Vec<SplitShare> {
        match split_type {
            SplitType::Equal => {
                if members.is_empty() {
                    return Vec::new();
                }
                let share = (amount / Decimal::from(members.len())).round_cents();
                members
                    .iter()
                    .map(|member| SplitShare {
                        user_id: member.user_id.clone(),
                        amount_owed: share,
                        percentage: None,
                    })
                    .collect()
            }
            SplitType::Percentage => members
                .iter()
                .map(|member| {
                    let percentage = member.percentage.unwrap_or(Decimal::ZERO);
                    SplitShare {
                        user_id: member.user_id.clone(),
                        amount_owed: (amount.saturating_mul(percentage) / Decimal::ONE_HUNDRED)
                            .round_cents(),
                        percentage: Some(percentage),
                    }
                })
                .collect(),
            SplitType::Custom => members
                .iter()
                .map(|member| SplitShare {
                    user_id: member.user_id.clone(),
                    amount_owed: member.amount_owed.unwrap_or(Money::ZERO),
                    percentage: None,
                })
                .collect(),
        }
    }
}

pub fn calculate_splits(
    amount: Money,
    split_type: SplitType,
    members: &[SplitMember],
) -> Vec<SplitShare> {
    SplitCalculator.calculate(amount, split_type, members)
}
