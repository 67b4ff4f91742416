use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};
use tripsplit_application::{ExpenseLedger, GroupId, GroupRoster, LedgerError};
use tripsplit_domain::{
    Expense, ExpenseId, ExpenseSplit, MemberId, Money, SplitCalculator, SplitMember, SplitShare,
    SplitType,
};

#[derive(Debug, Deserialize)]
struct LedgerDocument {
    #[serde(default)]
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Deserialize)]
struct GroupRecord {
    id: GroupId,
    #[serde(default)]
    members: Vec<MemberRecord>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

/// Either a bare id or `{ "id": ..., "name": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MemberRecord {
    Id(MemberId),
    Profile {
        id: MemberId,
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct ExpenseRecord {
    id: ExpenseId,
    amount: Money,
    paid_by: MemberId,
    #[serde(default)]
    deleted: bool,
    /// Explicit splits win over `split_type` + `participants`.
    #[serde(default)]
    splits: Option<Vec<ExpenseSplit>>,
    #[serde(default)]
    split_type: SplitType,
    #[serde(default)]
    participants: Vec<SplitMember>,
}

impl ExpenseRecord {
    fn to_expense(&self) -> Expense {
        let splits = match &self.splits {
            Some(splits) => splits.clone(),
            None => SplitCalculator
                .calculate(self.amount, self.split_type, &self.participants)
                .into_iter()
                .map(SplitShare::into_split)
                .collect(),
        };

        Expense {
            id: self.id.clone(),
            amount: self.amount,
            paid_by: self.paid_by.clone(),
            splits,
        }
    }
}

/// Read-only ledger loaded from a JSON document.
#[derive(Debug)]
pub struct JsonLedger {
    groups: HashMap<GroupId, GroupRecord>,
}

impl JsonLedger {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ledger = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            group_count = ledger.groups.len(),
            "Loaded JSON ledger"
        );
        Ok(ledger)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LedgerError> {
        let document: LedgerDocument =
            serde_json::from_str(content).map_err(|err| LedgerError::Malformed(err.to_string()))?;

        let mut groups = HashMap::with_capacity(document.groups.len());
        for group in document.groups {
            if groups.contains_key(&group.id) {
                return Err(LedgerError::Malformed(format!(
                    "duplicate group id '{}'",
                    group.id
                )));
            }
            groups.insert(group.id.clone(), group);
        }

        Ok(Self { groups })
    }

    /// The only group in the ledger, if there is exactly one.
    pub fn sole_group(&self) -> Option<GroupId> {
        let mut ids = self.groups.keys();
        match (ids.next(), ids.next()) {
            (Some(id), None) => Some(id.clone()),
            _ => None,
        }
    }

    fn group(&self, group: &GroupId) -> Result<&GroupRecord, LedgerError> {
        self.groups
            .get(group)
            .ok_or_else(|| LedgerError::GroupNotFound(group.clone()))
    }
}

impl ExpenseLedger for JsonLedger {
    fn group_roster(&self, group: &GroupId) -> Result<GroupRoster, LedgerError> {
        let record = self.group(group)?;
        let mut roster = GroupRoster::default();
        for member in &record.members {
            match member {
                MemberRecord::Id(id) => roster.members.push(id.clone()),
                MemberRecord::Profile { id, name } => {
                    roster.members.push(id.clone());
                    if let Some(name) = name {
                        roster.display_names.insert(id.clone(), name.clone());
                    }
                }
            }
        }
        Ok(roster)
    }

    fn group_expenses(&self, group: &GroupId) -> Result<Vec<Expense>, LedgerError> {
        let record = self.group(group)?;
        let expenses: Vec<Expense> = record
            .expenses
            .iter()
            .filter(|expense| !expense.deleted)
            .map(ExpenseRecord::to_expense)
            .collect();

        let deleted = record.expenses.len() - expenses.len();
        if deleted > 0 {
            tracing::debug!(group = %group, deleted, "Skipped deleted expenses");
        }

        Ok(expenses)
    }
}
