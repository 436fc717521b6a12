//! Campaign dashboard view model — owns the dataset and the filter criteria
//! and keeps the visible subset and its totals in step with them.

use crate::aggregate::{aggregate, Totals};
use crate::dataset::Dataset;
use crate::filter::{visible, FilterCriteria};
use crate::listener::ViewListener;
use campaign_core::{Campaign, CampaignStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const EMPTY_FILTER_MESSAGE: &str = "No campaigns match the selected filter.";
const EMPTY_SEARCH_MESSAGE: &str = "No campaigns match the selected filter or search.";

/// A user input that changes the filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DashboardEvent {
    StatusSelected(CampaignStatus),
    QueryChanged(String),
}

/// Everything the presentation layer renders for one set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub criteria: FilterCriteria,
    pub campaigns: Vec<Campaign>,
    pub totals: Totals,
    pub campaign_count: usize,
}

impl DashboardView {
    fn compute(dataset: &Dataset, criteria: &FilterCriteria) -> Self {
        let matched = visible(dataset.campaigns(), criteria);
        let totals = aggregate(matched.iter().copied());
        let campaigns: Vec<Campaign> = matched.into_iter().cloned().collect();
        Self {
            criteria: criteria.clone(),
            campaign_count: campaigns.len(),
            campaigns,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Message shown in place of the table when nothing matches. Mentions
    /// the search box whenever any text has been typed into it.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.is_empty() {
            return None;
        }
        if self.criteria.query.is_empty() {
            Some(EMPTY_FILTER_MESSAGE)
        } else {
            Some(EMPTY_SEARCH_MESSAGE)
        }
    }
}

pub struct CampaignDashboard {
    dataset: Dataset,
    view: DashboardView,
    listeners: Vec<Arc<dyn ViewListener>>,
}

/// Short alias used throughout the workspace.
pub type Dashboard = CampaignDashboard;

impl CampaignDashboard {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_criteria(dataset, FilterCriteria::default())
    }

    pub fn with_criteria(dataset: Dataset, criteria: FilterCriteria) -> Self {
        let view = DashboardView::compute(&dataset, &criteria);
        Self {
            dataset,
            view,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. It is first called on the next criteria change.
    pub fn subscribe(&mut self, listener: Arc<dyn ViewListener>) {
        self.listeners.push(listener);
    }

    pub fn set_status(&mut self, status: CampaignStatus) {
        let mut criteria = self.view.criteria.clone();
        criteria.status = status;
        self.recompute(criteria);
    }

    /// Store the search text as typed and recompute.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let mut criteria = self.view.criteria.clone();
        criteria.query = query.into();
        self.recompute(criteria);
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::StatusSelected(status) => self.set_status(status),
            DashboardEvent::QueryChanged(query) => self.set_query(query),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.view.criteria
    }

    pub fn visible(&self) -> &[Campaign] {
        &self.view.campaigns
    }

    pub fn totals(&self) -> Totals {
        self.view.totals
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn snapshot(&self) -> DashboardView {
        self.view.clone()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn recompute(&mut self, criteria: FilterCriteria) {
        self.view = DashboardView::compute(&self.dataset, &criteria);
        debug!(
            status = %self.view.criteria.status,
            query = %self.view.criteria.query,
            visible = self.view.campaign_count,
            clicks = self.view.totals.clicks,
            "Dashboard recomputed"
        );
        for listener in &self.listeners {
            listener.on_change(&self.view);
        }
    }
}
