use crate::cli::LedgerArgs;
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;
use tripsplit_application::GroupId;

const LEDGER_VAR: &str = "TRIPSPLIT_LEDGER";
const GROUP_VAR: &str = "TRIPSPLIT_GROUP";
const PAYMENT_LOG_VAR: &str = "TRIPSPLIT_PAYMENT_LOG";

const DEFAULT_LEDGER: &str = "ledger.json";
const DEFAULT_PAYMENT_LOG: &str = "payments.jsonl";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub ledger_path: PathBuf,
    pub group: Option<GroupId>,
    pub payment_log_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value: &String| !value.trim().is_empty());

        Self {
            ledger_path: non_empty(LEDGER_VAR)
                .map_or_else(|| PathBuf::from(DEFAULT_LEDGER), PathBuf::from),
            group: non_empty(GROUP_VAR).map(|id| GroupId::from(id.trim())),
            payment_log_path: non_empty(PAYMENT_LOG_VAR)
                .map_or_else(|| PathBuf::from(DEFAULT_PAYMENT_LOG), PathBuf::from),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_ledger_args(mut self, args: &LedgerArgs) -> Self {
        if let Some(path) = &args.ledger {
            self.ledger_path = path.clone();
        }
        if let Some(group) = &args.group {
            self.group = Some(GroupId::from(group.as_str()));
        }
        self
    }

    pub fn with_payment_log(mut self, path: Option<&PathBuf>) -> Self {
        if let Some(path) = path {
            self.payment_log_path = path.clone();
        }
        self
    }
}

/// Initialize logging and tracing
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::from_lookup(lookup(&[]));

        assert_eq!(config.ledger_path, PathBuf::from("ledger.json"));
        assert_eq!(config.group, None);
        assert_eq!(config.payment_log_path, PathBuf::from("payments.jsonl"));
    }

    #[test]
    fn environment_values_are_read() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TRIPSPLIT_LEDGER", "/data/trips.json"),
            ("TRIPSPLIT_GROUP", " kyoto "),
            ("TRIPSPLIT_PAYMENT_LOG", "/data/paid.jsonl"),
        ]));

        assert_eq!(config.ledger_path, PathBuf::from("/data/trips.json"));
        assert_eq!(config.group, Some(GroupId::from("kyoto")));
        assert_eq!(config.payment_log_path, PathBuf::from("/data/paid.jsonl"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn blank_group_counts_as_unset(#[case] value: &str) {
        let config = AppConfig::from_lookup(lookup(&[("TRIPSPLIT_GROUP", value)]));

        assert_eq!(config.group, None);
    }

    #[test]
    fn flags_override_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TRIPSPLIT_LEDGER", "env.json"),
            ("TRIPSPLIT_GROUP", "env-group"),
        ]))
        .with_ledger_args(&LedgerArgs {
            ledger: Some(PathBuf::from("flag.json")),
            group: None,
        })
        .with_payment_log(Some(&PathBuf::from("flag.jsonl")));

        assert_eq!(config.ledger_path, PathBuf::from("flag.json"));
        assert_eq!(config.group, Some(GroupId::from("env-group")));
        assert_eq!(config.payment_log_path, PathBuf::from("flag.jsonl"));
    }
}
