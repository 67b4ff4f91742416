use arcstr::ArcStr;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

/// Opaque identifier of a group member.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub ArcStr);

impl MemberId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of an expense.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub ArcStr);

impl ExpenseId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency-agnostic decimal amount.
///
/// Accepts JSON numbers as well as strings when deserialized, so ledgers
/// written with binary floating point still load.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const MAX: Self = Self(Decimal::MAX);
    pub const MIN: Self = Self(Decimal::MIN);

    /// Builds `num * 10^-scale`, e.g. `Money::new(1234, 2)` is `12.34`.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn signum(self) -> i64 {
        if self.0.is_zero() {
            0
        } else if self.0.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    /// Rounds to cents, midpoints away from zero. Never yields `-0.00`.
    pub fn round_cents(self) -> Self {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            Self::ZERO
        } else {
            Self(rounded)
        }
    }

    /// Clamps to [`Money::MAX`] / [`Money::MIN`] instead of overflowing.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    pub fn saturating_mul(self, rhs: Decimal) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

/// Always two decimal places, rounded the same way as [`Money::round_cents`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_cents().0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A member's share of one expense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSplit {
    pub user_id: MemberId,
    pub amount_owed: Money,
    /// Already paid out of band; excluded from the member's outstanding debt.
    #[serde(default)]
    pub is_settled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Money,
    pub paid_by: MemberId,
    #[serde(default)]
    pub splits: Vec<ExpenseSplit>,
}

/// Net position of one member. Positive means the group owes this member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub user_id: MemberId,
    pub paid: Money,
    pub owed: Money,
    pub balance: Money,
}

impl Balance {
    pub fn zero(user_id: MemberId) -> Self {
        Self {
            user_id,
            paid: Money::ZERO,
            owed: Money::ZERO,
            balance: Money::ZERO,
        }
    }
}

/// Balances keyed by member, in roster order.
pub type MemberBalances = IndexMap<MemberId, Balance, FxBuildHasher>;

/// Suggested transfer from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    #[default]
    Equal,
    Percentage,
    Custom,
}

impl SplitType {
    pub fn as_str(self) -> &'static str {
        match self {
            SplitType::Equal => "equal",
            SplitType::Percentage => "percentage",
            SplitType::Custom => "custom",
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown split type '{0}' (expected equal, percentage or custom)")]
pub struct SplitTypeParseError(pub String);

impl FromStr for SplitType {
    type Err = SplitTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equal" => Ok(SplitType::Equal),
            "percentage" => Ok(SplitType::Percentage),
            "custom" => Ok(SplitType::Custom),
            _ => Err(SplitTypeParseError(s.to_owned())),
        }
    }
}

/// Input row for the split calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMember {
    pub user_id: MemberId,
    #[serde(default)]
    pub percentage: Option<Decimal>,
    #[serde(default)]
    pub amount_owed: Option<Money>,
}

impl SplitMember {
    pub fn new(user_id: MemberId) -> Self {
        Self {
            user_id,
            percentage: None,
            amount_owed: None,
        }
    }

    pub fn with_percentage(user_id: MemberId, percentage: Decimal) -> Self {
        Self {
            percentage: Some(percentage),
            ..Self::new(user_id)
        }
    }

    pub fn with_amount(user_id: MemberId, amount_owed: Money) -> Self {
        Self {
            amount_owed: Some(amount_owed),
            ..Self::new(user_id)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitShare {
    pub user_id: MemberId,
    pub amount_owed: Money,
    pub percentage: Option<Decimal>,
}

impl SplitShare {
    pub fn into_split(self) -> ExpenseSplit {
        ExpenseSplit {
            user_id: self.user_id,
            amount_owed: self.amount_owed,
            is_settled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::round_down(Money::new(12344, 3), Money::new(1234, 2))]
    #[case::midpoint_up(Money::new(12345, 3), Money::new(1235, 2))]
    #[case::negative_midpoint(Money::new(-12345, 3), Money::new(-1235, 2))]
    #[case::already_rounded(Money::new(5000, 2), Money::from_i64(50))]
    fn round_cents_rounds_midpoints_away_from_zero(#[case] input: Money, #[case] expected: Money) {
        assert_eq!(input.round_cents(), expected);
    }

    #[rstest]
    #[case::whole(Money::from_i64(30), "30.00")]
    #[case::one_decimal(Money::new(-125, 1), "-12.50")]
    #[case::midpoint_up(Money::new(1005, 3), "1.01")]
    #[case::odd_midpoint_up(Money::new(1015, 3), "1.02")]
    #[case::below_midpoint(Money::new(1004, 3), "1.00")]
    #[case::negative_midpoint(Money::new(-1005, 3), "-1.01")]
    #[case::tiny_debt_is_plain_zero(Money::new(-4, 3), "0.00")]
    fn display_matches_rounded_cents(#[case] amount: Money, #[case] expected: &str) {
        assert_eq!(amount.to_string(), expected);
        assert_eq!(amount.round_cents().to_string(), expected);
    }

    #[rstest]
    #[case::tiny_debt(Money::new(-4, 3))]
    #[case::negative_half_cent_below(Money::new(-49, 4))]
    fn rounding_to_zero_drops_the_sign(#[case] amount: Money) {
        let rounded = amount.round_cents();
        assert_eq!(rounded.signum(), 0);
        assert!(!rounded.as_decimal().is_sign_negative());
    }

    #[test]
    fn saturating_arithmetic_clamps_instead_of_panicking() {
        let half = Money::from_decimal(Decimal::MAX / Decimal::TWO + Decimal::ONE);

        assert_eq!(half.saturating_add(half), Money::MAX);
        assert_eq!((-half).saturating_sub(half), Money::MIN);
        assert_eq!(half.saturating_mul(Decimal::from(3)), Money::MAX);
        assert_eq!(
            Money::from_i64(2).saturating_add(Money::from_i64(3)),
            Money::from_i64(5)
        );
    }

    #[test]
    fn deserializes_from_numbers_and_strings() {
        let from_number: Money = serde_json::from_str("33.33").expect("number");
        let from_string: Money = serde_json::from_str("\"33.33\"").expect("string");
        assert_eq!(from_number, Money::new(3333, 2));
        assert_eq!(from_string, Money::new(3333, 2));
    }

    #[test]
    fn split_defaults_to_unsettled() {
        let split: ExpenseSplit =
            serde_json::from_str(r#"{"user_id":"u1","amount_owed":12.5}"#).expect("split");
        assert_eq!(split.user_id, MemberId::from("u1"));
        assert!(!split.is_settled);
    }

    #[rstest]
    #[case::lower("equal", Ok(SplitType::Equal))]
    #[case::mixed_case(" Percentage ", Ok(SplitType::Percentage))]
    #[case::custom("CUSTOM", Ok(SplitType::Custom))]
    #[case::unknown("shares", Err(SplitTypeParseError("shares".to_owned())))]
    fn split_type_parses_case_insensitively(
        #[case] input: &str,
        #[case] expected: Result<SplitType, SplitTypeParseError>,
    ) {
        assert_eq!(input.parse::<SplitType>(), expected);
    }
}
