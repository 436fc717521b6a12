//! Campaign dashboard view model: dataset loading, status/search filtering,
//! totals aggregation and display formatting.

pub mod aggregate;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod format;
pub mod listener;

pub use aggregate::{aggregate, Totals};
pub use dashboard::{CampaignDashboard, Dashboard, DashboardEvent, DashboardView};
pub use dataset::Dataset;
pub use filter::{visible, FilterCriteria};
pub use listener::{CaptureListener, ViewListener};
