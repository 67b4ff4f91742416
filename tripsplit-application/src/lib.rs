#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod expense_summary;
pub mod model;
pub mod ports;

pub use error::{LedgerError, SummaryError};
pub use expense_summary::ExpenseSummaryService;
pub use model::{GroupId, GroupRoster, GroupSummary, PaymentRecord};
pub use ports::{ExpenseLedger, MemberDirectory, PaymentRecorder, SettlementOptimizer};
