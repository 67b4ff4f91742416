#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const PAID: &str = "支払額";
    pub const OWED: &str = "負担額";
    pub const BALANCE: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const SHARE: &str = "負担";
    pub const PERCENTAGE: &str = "割合";
    pub const ALL_SETTLED: &str = "清算は不要です。";
    pub const SUGGESTED_PAYMENTS: &str = "清算案";
    pub const BALANCES: &str = "メンバー別収支";
    pub const MISSING_GROUP: &str =
        "グループが指定されていません。--group か TRIPSPLIT_GROUP を設定してください。";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const OWED: &str = "Owed";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const SHARE: &str = "Share";
    pub const PERCENTAGE: &str = "Percentage";
    pub const ALL_SETTLED: &str = "Everyone is settled up.";
    pub const SUGGESTED_PAYMENTS: &str = "Suggested payments";
    pub const BALANCES: &str = "Balances";
    pub const MISSING_GROUP: &str = "No group selected. Pass --group or set TRIPSPLIT_GROUP.";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const OWED: &str = "Owed";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const SHARE: &str = "Share";
    pub const PERCENTAGE: &str = "Percentage";
    pub const ALL_SETTLED: &str = "Everyone is settled up.";
    pub const SUGGESTED_PAYMENTS: &str = "Suggested payments";
    pub const BALANCES: &str = "Balances";
    pub const MISSING_GROUP: &str = "No group selected. Pass --group or set TRIPSPLIT_GROUP.";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn dropped_contributions(payments: usize, obligations: usize) -> String {
    format!(
        "注意: グループ外のメンバーを参照する支払い {payments} 件と負担 {obligations} 件を除外しました"
    )
}

#[cfg(feature = "ja")]
pub fn payments_recorded(count: usize) -> String {
    format!("{count} 件の支払いを記録しました")
}

#[cfg(not(feature = "ja"))]
pub fn dropped_contributions(payments: usize, obligations: usize) -> String {
    format!(
        "Note: ignored {payments} payment(s) and {obligations} share(s) belonging to people outside the group"
    )
}

#[cfg(not(feature = "ja"))]
pub fn payments_recorded(count: usize) -> String {
    format!("Recorded {count} payment(s)")
}
