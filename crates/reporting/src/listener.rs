//! Change notification for the dashboard view model.
//!
//! The dashboard holds `Arc<dyn ViewListener>` handles and calls each one
//! after every recompute, so a presentation layer can redraw without polling.

use crate::dashboard::DashboardView;
use std::sync::Mutex;

pub trait ViewListener: Send + Sync {
    fn on_change(&self, view: &DashboardView);
}

/// In-memory listener that records every view it is handed. Used in tests.
#[derive(Default)]
pub struct CaptureListener {
    views: Mutex<Vec<DashboardView>>,
}

impl CaptureListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<DashboardView> {
        self.views.lock().expect("listener mutex poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.views.lock().expect("listener mutex poisoned").len()
    }

    pub fn last(&self) -> Option<DashboardView> {
        self.views
            .lock()
            .expect("listener mutex poisoned")
            .last()
            .cloned()
    }
}

impl ViewListener for CaptureListener {
    fn on_change(&self, view: &DashboardView) {
        self.views
            .lock()
            .expect("listener mutex poisoned")
            .push(view.clone());
    }
}
