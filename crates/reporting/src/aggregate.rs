//! Totals over a campaign subset.

use campaign_core::Campaign;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Summed performance counters for a set of campaigns. Always derived from
/// its source subset; never stored on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub clicks: u64,
    pub cost: f64,
    pub impressions: u64,
}

impl Totals {
    fn accumulate(mut self, campaign: &Campaign) -> Self {
        self.clicks += campaign.clicks;
        self.cost += campaign.cost;
        self.impressions += campaign.impressions;
        self
    }
}

/// Sum clicks, cost and impressions. Cost is accumulated unrounded; an empty
/// input yields all zeros.
pub fn aggregate<I>(campaigns: I) -> Totals
where
    I: IntoIterator,
    I::Item: Borrow<Campaign>,
{
    campaigns
        .into_iter()
        .fold(Totals::default(), |acc, c| acc.accumulate(c.borrow()))
}
