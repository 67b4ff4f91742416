#![warn(clippy::uninlined_format_args)]

pub mod json_ledger;
pub mod optimizer;
pub mod payment_log;

pub use json_ledger::JsonLedger;
pub use optimizer::GreedySettlementOptimizer;
pub use payment_log::JsonLinesPaymentLog;
