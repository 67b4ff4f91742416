pub mod balance_calculator;
pub mod settlement_calculator;
pub mod split_calculator;
pub mod tolerance;

pub use balance_calculator::{
    BalanceCalculator, BalanceReport, DroppedContributions, calculate_balances,
};
pub use settlement_calculator::{SettlementCalculator, apply_settlements, calculate_settlements};
pub use split_calculator::{SplitCalculator, calculate_splits};
pub use tolerance::{is_credit, is_debt, is_negligible, settlement_epsilon};
