use crate::error::CampaignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single marketing campaign with its performance counters.
///
/// Records are loaded once at start-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub status: CampaignStatus,
    pub clicks: u64,
    pub cost: f64,
    pub impressions: u64,
}

impl Campaign {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        status: CampaignStatus,
        clicks: u64,
        cost: f64,
        impressions: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            clicks,
            cost,
            impressions,
        }
    }
}

/// Delivery status of a campaign. The set is closed: a campaign is either
/// running or paused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 2] = [CampaignStatus::Active, CampaignStatus::Paused];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CampaignStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CampaignError::UnknownStatus(s.to_string()))
    }
}
