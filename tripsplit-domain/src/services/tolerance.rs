//! Zero tolerance shared by the balance and settlement services.
//!
//! Balances often arrive from binary floating point, so anything within one
//! cent of zero counts as settled.

use crate::model::Money;

/// Absolute amounts at or below this value are treated as zero.
pub fn settlement_epsilon() -> Money {
    Money::new(1, 2)
}

/// `|amount| <= 0.01`
pub fn is_negligible(amount: Money) -> bool {
    amount.abs() <= settlement_epsilon()
}

/// The group owes this member: `amount > 0.01`.
pub fn is_credit(amount: Money) -> bool {
    amount > settlement_epsilon()
}

/// This member owes the group: `amount < -0.01`.
pub fn is_debt(amount: Money) -> bool {
    amount < -settlement_epsilon()
}
