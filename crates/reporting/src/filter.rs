//! Status and free-text filtering over the campaign dataset.

use campaign_core::{Campaign, CampaignStatus};
use serde::{Deserialize, Serialize};

/// Current status selection and search text.
///
/// `query` is stored exactly as typed; trimming and case folding happen only
/// when the predicate is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: CampaignStatus,
    pub query: String,
}

impl FilterCriteria {
    pub fn new(status: CampaignStatus, query: impl Into<String>) -> Self {
        Self {
            status,
            query: query.into(),
        }
    }

    /// Trimmed, lowercased form of the search text.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn matches(&self, campaign: &Campaign) -> bool {
        campaign_matches(campaign, self.status, &self.normalized_query())
    }
}

fn campaign_matches(campaign: &Campaign, status: CampaignStatus, needle: &str) -> bool {
    campaign.status == status && campaign.name.to_lowercase().contains(needle)
}

/// Campaigns matching `criteria`, in dataset order. An empty query matches
/// every name.
pub fn visible<'a>(campaigns: &'a [Campaign], criteria: &FilterCriteria) -> Vec<&'a Campaign> {
    let needle = criteria.normalized_query();
    campaigns
        .iter()
        .filter(|c| campaign_matches(c, criteria.status, &needle))
        .collect()
}
