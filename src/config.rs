//! Process configuration.
//!
//! Everything is read once at startup from `AURORA_*` environment
//! variables; unknown or malformed values fall back to defaults with a
//! warning rather than aborting.

use std::net::SocketAddr;

use crate::pipeline::extractor::ExtractionMode;
use crate::pipeline::summarize::SummaryStrategy;

/// Application-level constants
pub const APP_NAME: &str = "Aurora";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "aurora=info,tower_http=warn"
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP shell binds to.
    pub bind_addr: SocketAddr,
    /// Which entity-extraction strategy this deployment runs.
    pub extraction_mode: ExtractionMode,
    /// Which summarization strategy this deployment runs.
    pub summary_strategy: SummaryStrategy,
    /// Base URL of the NLP sidecar (used by model mode and the
    /// sentence/neural summarizers).
    pub nlp_base_url: String,
    /// Per-request timeout for sidecar calls, in seconds.
    pub nlp_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:7700".parse().expect("valid default bind addr"),
            extraction_mode: ExtractionMode::Pattern,
            summary_strategy: SummaryStrategy::Truncate,
            nlp_base_url: "http://localhost:8600".to_string(),
            nlp_timeout_secs: 120,
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: parsed_var("AURORA_BIND", defaults.bind_addr),
            extraction_mode: parsed_var("AURORA_EXTRACTION_MODE", defaults.extraction_mode),
            summary_strategy: parsed_var("AURORA_SUMMARY", defaults.summary_strategy),
            nlp_base_url: std::env::var("AURORA_NLP_URL").unwrap_or(defaults.nlp_base_url),
            nlp_timeout_secs: parsed_var("AURORA_NLP_TIMEOUT_SECS", defaults.nlp_timeout_secs),
        }
    }

    /// Whether any configured component needs the NLP sidecar.
    pub fn needs_nlp_service(&self) -> bool {
        self.extraction_mode == ExtractionMode::Model
            || self.summary_strategy != SummaryStrategy::Truncate
    }
}

fn parsed_var<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Debug,
{
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var = name, value = %raw, default = ?default, "unparsable value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_without_a_sidecar() {
        let config = AppConfig::default();
        assert_eq!(config.extraction_mode, ExtractionMode::Pattern);
        assert_eq!(config.summary_strategy, SummaryStrategy::Truncate);
        assert!(!config.needs_nlp_service());
    }

    #[test]
    fn model_mode_needs_the_sidecar() {
        let config = AppConfig {
            extraction_mode: ExtractionMode::Model,
            ..AppConfig::default()
        };
        assert!(config.needs_nlp_service());
    }

    #[test]
    fn non_truncate_summary_needs_the_sidecar() {
        for strategy in [SummaryStrategy::Sentences, SummaryStrategy::Neural] {
            let config = AppConfig {
                summary_strategy: strategy,
                ..AppConfig::default()
            };
            assert!(config.needs_nlp_service());
        }
    }

    #[test]
    fn app_name_is_aurora() {
        assert_eq!(APP_NAME, "Aurora");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
