//! Immutable campaign dataset supplied at process start.

use campaign_core::{Campaign, CampaignError, CampaignResult, CampaignStatus};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Read-only collection of campaigns. Construction validates the record
/// invariants; afterwards the collection is never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    campaigns: Vec<Campaign>,
}

impl Dataset {
    pub fn new(campaigns: Vec<Campaign>) -> CampaignResult<Self> {
        let mut seen = HashSet::with_capacity(campaigns.len());
        for campaign in &campaigns {
            if !seen.insert(campaign.id) {
                return Err(CampaignError::DuplicateId(campaign.id));
            }
            if !campaign.cost.is_finite() || campaign.cost < 0.0 {
                return Err(CampaignError::InvalidCost {
                    id: campaign.id,
                    cost: campaign.cost,
                });
            }
        }
        check_summable(&campaigns)?;
        Ok(Self { campaigns })
    }

    /// The six demo campaigns shown on the dashboard out of the box.
    pub fn seed() -> Self {
        use CampaignStatus::{Active, Paused};

        let dataset = Self {
            campaigns: vec![
                Campaign::new(1, "Spring Sale 2025", Active, 12_456, 3421.75, 512_345),
                Campaign::new(2, "Brand Awareness Q1", Paused, 842, 512.0, 45_000),
                Campaign::new(3, "Holiday Push", Active, 9_800, 2740.2, 301_234),
                Campaign::new(4, "New Product Launch", Paused, 230, 120.5, 12_000),
                Campaign::new(5, "Referral Promo", Active, 4_321, 900.0, 98_000),
                Campaign::new(6, "Retargeting - Web", Active, 7_650, 1500.99, 210_000),
            ],
        };
        info!(campaigns = dataset.len(), "Seed campaign dataset loaded");
        dataset
    }

    /// Parse a JSON array of campaign records.
    pub fn from_json_str(json: &str) -> CampaignResult<Self> {
        let campaigns: Vec<Campaign> = serde_json::from_str(json)?;
        Self::new(campaigns)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CampaignResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&raw)?;
        info!(path = %path.display(), campaigns = dataset.len(), "Campaign dataset loaded");
        Ok(dataset)
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

/// Totals over the whole dataset must fit, so that every subset the
/// dashboard aggregates fits as well.
fn check_summable(campaigns: &[Campaign]) -> CampaignResult<()> {
    let mut clicks: u64 = 0;
    let mut impressions: u64 = 0;
    let mut cost: f64 = 0.0;
    for campaign in campaigns {
        clicks = clicks
            .checked_add(campaign.clicks)
            .ok_or_else(|| unsummable("clicks", campaign.id))?;
        impressions = impressions
            .checked_add(campaign.impressions)
            .ok_or_else(|| unsummable("impressions", campaign.id))?;
        cost += campaign.cost;
        if !cost.is_finite() {
            return Err(unsummable("cost", campaign.id));
        }
    }
    Ok(())
}

fn unsummable(field: &str, id: u32) -> CampaignError {
    CampaignError::Validation(format!("total {field} out of range at campaign {id}"))
}
