#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, Expense, ExpenseId, ExpenseSplit, MemberBalances, MemberId, Money, Settlement,
    SplitMember, SplitShare, SplitType, SplitTypeParseError,
};
pub use services::{
    BalanceCalculator, BalanceReport, DroppedContributions, SettlementCalculator, SplitCalculator,
    apply_settlements, calculate_balances, calculate_settlements, calculate_splits,
};
