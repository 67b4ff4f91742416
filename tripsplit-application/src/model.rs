use arcstr::ArcStr;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use tripsplit_domain::{DroppedContributions, MemberBalances, MemberId, Money, Settlement};

/// Opaque identifier of a travel group.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub ArcStr);

impl GroupId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Members currently in a group, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupRoster {
    pub members: Vec<MemberId>,
    pub display_names: HashMap<MemberId, String>,
}

impl GroupRoster {
    pub fn new(members: Vec<MemberId>) -> Self {
        Self {
            members,
            display_names: HashMap::new(),
        }
    }

    pub fn with_display_name(mut self, member: MemberId, name: impl Into<String>) -> Self {
        self.display_names.insert(member, name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub group: GroupId,
    pub roster: GroupRoster,
    pub balances: MemberBalances,
    pub settlements: Vec<Settlement>,
    pub dropped: DroppedContributions,
}

impl GroupSummary {
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}

/// A settlement written to the payment ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub group: GroupId,
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

impl PaymentRecord {
    pub fn from_settlement(group: &GroupId, settlement: &Settlement) -> Self {
        Self {
            group: group.clone(),
            from: settlement.from.clone(),
            to: settlement.to.clone(),
            amount: settlement.amount,
        }
    }
}
