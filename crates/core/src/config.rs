use crate::error::CampaignResult;
use crate::types::CampaignStatus;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

/// Root application configuration. Loaded from an optional
/// `campaign-dashboard.toml` file and environment variables with the prefix
/// `CAMPAIGN_DASHBOARD__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Status selected when the session starts.
    #[serde(default)]
    pub default_status: CampaignStatus,
    /// ISO 4217 code used when rendering cost columns.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// JSON file holding the campaign dataset. The built-in seed data is
    /// used when unset.
    #[serde(default)]
    pub dataset_path: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_status: CampaignStatus::default(),
            currency: default_currency(),
            dataset_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional config file and environment variables.
    pub fn load() -> CampaignResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("campaign-dashboard").required(false))
            .add_source(
                config::Environment::with_prefix("CAMPAIGN_DASHBOARD")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> CampaignResult<Self> {
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CampaignError;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.dashboard.default_status, CampaignStatus::Active);
        assert_eq!(config.dashboard.currency, "USD");
        assert!(config.dashboard.dataset_path.is_none());
    }

    fn from_toml(toml: &str) -> CampaignResult<AppConfig> {
        AppConfig::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
        )
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config = from_toml("[dashboard]\ndefault_status = \"Paused\"\n").unwrap();
        assert_eq!(config.dashboard.default_status, CampaignStatus::Paused);
        assert_eq!(config.dashboard.currency, "USD");
    }

    #[test]
    fn test_invalid_config_maps_to_config_error() {
        let err = from_toml("[dashboard]\ndefault_status = \"Archived\"\n").unwrap_err();
        assert!(matches!(err, CampaignError::Config(_)));

        let err = from_toml("[dashboard\n").unwrap_err();
        assert!(matches!(err, CampaignError::Config(_)));
    }
}
