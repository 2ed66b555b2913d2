//! Console Configuration
//!
//! Where the analysis service lives and how strictly submissions are
//! checked before they leave the client.

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// Behavior when a workflow is submitted while its previous request is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResubmitPolicy {
    /// Drop the new submission until the outstanding one settles
    #[default]
    IgnoreWhilePending,

    /// Issue the new request; completions of earlier ones are discarded
    Supersede,
}

impl ResubmitPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ignore" | "ignore_while_pending" => Some(Self::IgnoreWhilePending),
            "supersede" => Some(Self::Supersede),
            _ => None,
        }
    }
}

/// Client-side checks applied before a request is issued
///
/// Both checks are off by default: malformed input is forwarded to the
/// service, which decides how to answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPolicy {
    /// Refuse to submit while any numeric field holds `NaN`
    #[serde(default)]
    pub block_non_numeric: bool,

    /// Refuse to submit an optimization for an empty portfolio
    #[serde(default)]
    pub block_empty_portfolio: bool,

    #[serde(default)]
    pub resubmit: ResubmitPolicy,
}

/// Service paths, relative to the base URL
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_risk_path")]
    pub risk_assessment: String,

    #[serde(default = "default_trade_path")]
    pub execute_trade: String,

    #[serde(default = "default_optimize_path")]
    pub optimize_portfolio: String,
}

fn default_risk_path() -> String {
    "/risk-assessment".into()
}

fn default_trade_path() -> String {
    "/execute-trade".into()
}

fn default_optimize_path() -> String {
    "/optimize-portfolio".into()
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            risk_assessment: default_risk_path(),
            execute_trade: default_trade_path(),
            optimize_portfolio: default_optimize_path(),
        }
    }
}

/// Full console configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Analysis service origin (e.g., "http://localhost:8000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub endpoints: Endpoints,

    #[serde(default)]
    pub policy: SubmissionPolicy,

    /// Request timeout in seconds; `None` waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: Endpoints::default(),
            policy: SubmissionPolicy::default(),
            timeout_secs: None,
        }
    }
}

impl ConsoleConfig {
    /// Config pointing at `base_url` with everything else defaulted
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load from `BARN_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, query string, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("BARN_API_URL") {
            config.base_url = url;
        }
        if let Some(flag) = lookup("BARN_BLOCK_NON_NUMERIC") {
            config.policy.block_non_numeric = parse_flag("BARN_BLOCK_NON_NUMERIC", &flag)?;
        }
        if let Some(flag) = lookup("BARN_BLOCK_EMPTY_PORTFOLIO") {
            config.policy.block_empty_portfolio =
                parse_flag("BARN_BLOCK_EMPTY_PORTFOLIO", &flag)?;
        }
        if let Some(policy) = lookup("BARN_RESUBMIT") {
            config.policy.resubmit = ResubmitPolicy::parse(&policy).ok_or_else(|| {
                ConsoleError::Config(format!(
                    "BARN_RESUBMIT must be 'ignore' or 'supersede', got '{policy}'"
                ))
            })?;
        }
        if let Some(secs) = lookup("BARN_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse()
                .map_err(|_| {
                    ConsoleError::Config(format!(
                        "BARN_TIMEOUT_SECS must be an integer, got '{secs}'"
                    ))
                })?;
            config.timeout_secs = Some(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConsoleError::Config("base_url is empty".into()));
        }
        for path in [
            &self.endpoints.risk_assessment,
            &self.endpoints.execute_trade,
            &self.endpoints.optimize_portfolio,
        ] {
            if !path.starts_with('/') {
                return Err(ConsoleError::Config(format!("endpoint '{path}' must start with '/'")));
            }
        }
        Ok(())
    }

    /// Join the base URL and an endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConsoleError::Config(format!("{key} must be a boolean, got '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_forward_everything() {
        let config = ConsoleConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.endpoints.risk_assessment, "/risk-assessment");
        assert!(!config.policy.block_non_numeric);
        assert!(!config.policy.block_empty_portfolio);
        assert_eq!(config.policy.resubmit, ResubmitPolicy::IgnoreWhilePending);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_from_lookup() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("BARN_API_URL", "http://analysis:9000/"),
            ("BARN_BLOCK_NON_NUMERIC", "true"),
            ("BARN_RESUBMIT", "supersede"),
            ("BARN_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.url_for("/execute-trade"), "http://analysis:9000/execute-trade");
        assert!(config.policy.block_non_numeric);
        assert_eq!(config.policy.resubmit, ResubmitPolicy::Supersede);
        assert_eq!(config.timeout_secs, Some(30));
    }

    #[test]
    fn test_invalid_values_rejected() {
        for (key, value) in [
            ("BARN_BLOCK_NON_NUMERIC", "maybe"),
            ("BARN_RESUBMIT", "queue"),
            ("BARN_API_URL", " "),
            ("BARN_TIMEOUT_SECS", "soon"),
        ] {
            assert!(ConsoleConfig::from_lookup(lookup(&[(key, value)])).is_err(), "{key}={value}");
        }
    }

    #[test]
    fn test_invalid_value_names_its_variable() {
        let err = ConsoleConfig::from_lookup(lookup(&[("BARN_RESUBMIT", "queue")])).unwrap_err();
        let ConsoleError::Config(msg) = &err else {
            panic!("expected a config error, got {err:?}");
        };
        assert!(msg.contains("BARN_RESUBMIT"));
        assert!(msg.contains("queue"));

        let err =
            ConsoleConfig::from_lookup(lookup(&[("BARN_BLOCK_NON_NUMERIC", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("BARN_BLOCK_NON_NUMERIC"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{"policy": {"block_empty_portfolio": true}}"#).unwrap();
        assert!(config.policy.block_empty_portfolio);
        assert_eq!(config.endpoints, Endpoints::default());
    }
}
