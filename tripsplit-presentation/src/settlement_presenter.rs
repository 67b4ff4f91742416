use crate::text_table::{Alignment, TextTableBuilder};
use std::borrow::Cow;
use tripsplit_application::{GroupSummary, MemberDirectory};
use tripsplit_domain::{Balance, MemberId, Money, Settlement};
use tripsplit_i18n as i18n;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub balance_table: String,
    /// `None` when nobody owes anybody.
    pub transfer_table: Option<String>,
    pub notice: Option<String>,
}

impl SettlementPresenter {
    pub fn render(summary: &GroupSummary) -> SettlementView {
        Self::render_with_members(summary, &summary.roster)
    }

    pub fn render_with_members(
        summary: &GroupSummary,
        member_directory: &dyn MemberDirectory,
    ) -> SettlementView {
        let balance_table =
            Self::build_balance_table(summary.balances.values(), member_directory);

        let transfer_table = (!summary.settlements.is_empty())
            .then(|| Self::build_transfer_table(&summary.settlements, member_directory));

        let notice = (!summary.dropped.is_empty()).then(|| {
            i18n::dropped_contributions(summary.dropped.payments, summary.dropped.obligations)
        });

        SettlementView {
            balance_table,
            transfer_table,
            notice,
        }
    }

    pub fn build_balance_table<'b>(
        balances: impl IntoIterator<Item = &'b Balance>,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::OWED),
                Cow::Borrowed(i18n::BALANCE),
            ])
            .rows(balances.into_iter().map(|entry| {
                [
                    format_member_label(&entry.user_id, member_directory),
                    Cow::Owned(entry.paid.to_string()),
                    Cow::Owned(entry.owed.to_string()),
                    Cow::Owned(format_signed(entry.balance)),
                ]
            }))
            .build()
    }

    pub fn build_transfer_table(
        settlements: &[Settlement],
        member_directory: &dyn MemberDirectory,
    ) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ])
            .rows(settlements.iter().map(|settlement| {
                [
                    format_member_label(&settlement.from, member_directory),
                    format_member_label(&settlement.to, member_directory),
                    Cow::Owned(settlement.amount.to_string()),
                ]
            }))
            .build()
    }
}

pub(crate) fn format_member_label<'a>(
    member_id: &MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(member_id.to_string()),
    }
}

fn format_signed(amount: Money) -> String {
    let amount = amount.round_cents();
    if amount.signum() >= 0 {
        format!("+{amount}")
    } else {
        amount.to_string()
    }
}
