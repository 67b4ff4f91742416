use crate::{
    error::LedgerError,
    model::{GroupId, GroupRoster, PaymentRecord},
};
use std::collections::HashMap;
use tripsplit_domain::{Expense, MemberBalances, MemberId, Settlement};

/// Source of group rosters and expenses.
pub trait ExpenseLedger: Send + Sync {
    fn group_roster(&self, group: &GroupId) -> Result<GroupRoster, LedgerError>;

    /// Non-deleted expenses of the group, splits included.
    fn group_expenses(&self, group: &GroupId) -> Result<Vec<Expense>, LedgerError>;
}

pub trait SettlementOptimizer: Send + Sync {
    fn optimize(&self, balances: &MemberBalances) -> Vec<Settlement>;
}

pub trait PaymentRecorder: Send + Sync {
    fn record(&self, payment: &PaymentRecord) -> Result<(), LedgerError>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: &MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.get(member_id).map(String::as_str)
    }
}

impl MemberDirectory for GroupRoster {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.display_names.display_name(member_id)
    }
}
