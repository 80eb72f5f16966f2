//! Which page region is on screen.
//!
//! DESIGN
//! ======
//! The error banner, loader, and dashboard are one enum derived from the
//! submission state rather than three visibility flags, so at most one of them
//! can ever be shown. Components match on `ViewRegion` and nothing else.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::input::InputState;
use super::submission::{SubmissionState, SubmissionTracker};
use crate::net::types::AnalysisReport;

/// The single visible region below the upload panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewRegion {
    /// Nothing below the upload panel.
    #[default]
    Idle,
    Loading {
        message: String,
    },
    Error {
        message: String,
    },
    Dashboard(AnalysisReport),
}

impl From<&SubmissionTracker> for ViewRegion {
    fn from(tracker: &SubmissionTracker) -> Self {
        match &tracker.state {
            SubmissionState::Idle => Self::Idle,
            SubmissionState::AwaitingUpload | SubmissionState::Analyzing => Self::Loading {
                message: tracker.status_message().unwrap_or_default().to_owned(),
            },
            SubmissionState::Succeeded(report) => Self::Dashboard(report.clone()),
            SubmissionState::Failed(message) => Self::Error { message: message.clone() },
        }
    }
}

impl ViewRegion {
    #[must_use]
    pub fn loader_message(&self) -> Option<&str> {
        match self {
            Self::Loading { message } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Dashboard(report) => Some(report),
            _ => None,
        }
    }
}

/// Return to the upload step after viewing a dashboard.
///
/// Hides the dashboard and clears the selected document, which also disables
/// the submit trigger. A pending error banner is left as is. Returns whether
/// the dashboard was showing; the caller scrolls the page back to the top.
pub fn reset(input: &mut InputState, submission: &mut SubmissionTracker) -> bool {
    input.clear();
    submission.dismiss_report()
}
