//! Top-level view state machine.

use crate::catalog::{FranchiseRecord, LeadRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The screen currently rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum View {
    /// Marketing landing page.
    #[default]
    Landing,
    /// Advisor chat.
    Chat,
    /// CRM dashboard.
    Dashboard,
    /// Detail page of a single lead.
    LeadDetail {
        /// The lead being inspected.
        lead: Arc<LeadRecord>,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Chat => "chat",
            View::Dashboard => "dashboard",
            View::LeadDetail { .. } => "lead-detail",
        }
    }
}

/// Named navigation actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewAction {
    GoToChat,
    GoToDashboard,
    GoToHome,
    ViewLead { lead: Arc<LeadRecord> },
    ViewFranchise { franchise: Arc<FranchiseRecord> },
    CloseFranchiseModal,
    BackFromLead,
}

/// Current view plus the orthogonal franchise overlay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewRouter {
    view: View,
    franchise_overlay: Option<Arc<FranchiseRecord>>,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Franchise open in the detail overlay, independent of the view.
    pub fn franchise_overlay(&self) -> Option<&Arc<FranchiseRecord>> {
        self.franchise_overlay.as_ref()
    }

    pub fn selected_lead(&self) -> Option<&Arc<LeadRecord>> {
        match &self.view {
            View::LeadDetail { lead } => Some(lead),
            _ => None,
        }
    }

    /// Applies an action. Never fails.
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::GoToChat => self.view = View::Chat,
            ViewAction::GoToDashboard => self.view = View::Dashboard,
            ViewAction::GoToHome => self.view = View::Landing,
            ViewAction::ViewLead { lead } => self.view = View::LeadDetail { lead },
            ViewAction::ViewFranchise { franchise } => self.franchise_overlay = Some(franchise),
            ViewAction::CloseFranchiseModal => self.franchise_overlay = None,
            ViewAction::BackFromLead => self.view = View::Dashboard,
        }
    }

    pub fn go_to_chat(&mut self) {
        self.apply(ViewAction::GoToChat);
    }

    pub fn go_to_dashboard(&mut self) {
        self.apply(ViewAction::GoToDashboard);
    }

    pub fn go_to_home(&mut self) {
        self.apply(ViewAction::GoToHome);
    }

    pub fn view_lead(&mut self, lead: Arc<LeadRecord>) {
        self.apply(ViewAction::ViewLead { lead });
    }

    pub fn view_franchise(&mut self, franchise: Arc<FranchiseRecord>) {
        self.apply(ViewAction::ViewFranchise { franchise });
    }

    pub fn close_franchise_modal(&mut self) {
        self.apply(ViewAction::CloseFranchiseModal);
    }

    pub fn back_from_lead(&mut self) {
        self.apply(ViewAction::BackFromLead);
    }
}
