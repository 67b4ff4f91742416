use crate::{
    settlement_presenter::format_member_label,
    text_table::{Alignment, TextTableBuilder},
};
use std::borrow::Cow;
use tripsplit_application::MemberDirectory;
use tripsplit_domain::{SplitShare, SplitType};
use tripsplit_i18n as i18n;

pub struct SplitPresenter;

impl SplitPresenter {
    /// Percentage column appears only for percentage splits.
    pub fn render(
        split_type: SplitType,
        shares: &[SplitShare],
        member_directory: &dyn MemberDirectory,
    ) -> String {
        match split_type {
            SplitType::Percentage => TextTableBuilder::new()
                .alignments(&[Alignment::Left, Alignment::Right, Alignment::Right])
                .headers(&[
                    Cow::Borrowed(i18n::MEMBER),
                    Cow::Borrowed(i18n::PERCENTAGE),
                    Cow::Borrowed(i18n::SHARE),
                ])
                .rows(shares.iter().map(|share| {
                    [
                        format_member_label(&share.user_id, member_directory),
                        Cow::Owned(
                            share
                                .percentage
                                .map(|pct| format!("{pct}%"))
                                .unwrap_or_default(),
                        ),
                        Cow::Owned(share.amount_owed.to_string()),
                    ]
                }))
                .build(),
            SplitType::Equal | SplitType::Custom => TextTableBuilder::new()
                .alignments(&[Alignment::Left, Alignment::Right])
                .headers(&[Cow::Borrowed(i18n::MEMBER), Cow::Borrowed(i18n::SHARE)])
                .rows(shares.iter().map(|share| {
                    [
                        format_member_label(&share.user_id, member_directory),
                        Cow::Owned(share.amount_owed.to_string()),
                    ]
                }))
                .build(),
        }
    }
}
